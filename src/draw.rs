use log::error;
use tui::backend::Backend;
use tui::layout::{Alignment, Constraint, Layout, Rect};
use tui::style::{Color, Modifier, Style};
use tui::text::{Line, Span};
use tui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Tabs, Wrap};
use tui::{Frame, Terminal};
use tui_logger::TuiLoggerWidget;

use crate::app::{App, MenuItem};
use crate::components::details::DetailsView;
use crate::components::game_list::{GAME_LIST_WIDTH, GameList};
use crate::components::palette::{Tone, style};
use crate::route::Route;
use crate::state::network::{ERROR_CHAR, LoadingState};
use crate::ui::layout::LayoutAreas;
use scoreboard_api::{League, ScoreContext};

const TABS: [(&str, MenuItem); 6] = [
    ("Home", MenuItem::Home),
    ("MLB", MenuItem::League(League::Mlb)),
    ("NBA", MenuItem::League(League::Nba)),
    ("NFL", MenuItem::League(League::Nfl)),
    ("NHL", MenuItem::League(League::Nhl)),
    ("About", MenuItem::About),
];

const HELP: &[(&str, &str)] = &[
    ("q", "quit"),
    ("0", "home"),
    ("1-4", "mlb / nba / nfl / nhl"),
    ("a", "about"),
    (":", "go to a route, e.g. /nba/scores/2021-04-10"),
    ("j/k", "next / previous game"),
    ("h/l", "previous / next day (week for nfl)"),
    ("t", "today"),
    ("Tab", "next panel"),
    ("r", "refresh"),
    ("f", "full screen"),
    ("\"", "logs"),
    ("?", "help"),
];

pub fn draw<B>(terminal: &mut Terminal<B>, app: &mut App, loading: LoadingState)
where
    B: Backend,
{
    let current_size = terminal.size().unwrap_or_default();
    if current_size.width <= 10 || current_size.height <= 10 {
        return;
    }

    if let Err(e) = terminal.draw(|f| render(f, app, loading)) {
        error!("draw failed: {e}");
    }
}

/// Draw one full frame from the current app state.
pub fn render(f: &mut Frame, app: &App, loading: LoadingState) {
    let mut layout = LayoutAreas::new(f.area().as_size());
    layout.update(f.area(), app.settings.full_screen);

    if !app.settings.full_screen {
        draw_tabs(f, layout.tab_bar, app);
    }

    let main = if app.state.show_logs {
        let [main, logs] =
            Layout::vertical([Constraint::Percentage(70), Constraint::Percentage(30)]).areas(layout.main);
        draw_logs(f, logs);
        main
    } else {
        layout.main
    };

    match &app.state.route {
        Route::Home => draw_home(f, main),
        Route::Scores(ctx) => draw_scores(f, main, app, ctx.league()),
        Route::About => draw_about(f, main, app),
        Route::Test => draw_test(f, main, app),
        Route::NotFound(path) => draw_not_found(f, main, path),
    }

    draw_status_line(f, layout.status, app);
    draw_loading_spinner(f, f.area(), app, loading);

    if app.state.show_help {
        draw_help(f, main);
    }
}

pub fn default_border<'a>(color: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
}

fn draw_tabs(f: &mut Frame, tab_bar: [Rect; 2], app: &App) {
    let active = app.active_menu();
    let titles: Vec<Line> = TABS.iter().map(|(title, _)| Line::from(*title)).collect();
    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::BOTTOM | Borders::TOP)
                .border_type(BorderType::Rounded),
        )
        .highlight_style(Style::default().add_modifier(Modifier::UNDERLINED))
        .style(Style::default().fg(Color::White))
        .select(TABS.iter().position(|(_, item)| *item == active));
    f.render_widget(tabs, tab_bar[0]);

    let updated = app
        .state
        .scores
        .as_ref()
        .and_then(|s| s.last_updated.clone())
        .unwrap_or_default();
    let corner = Paragraph::new(updated)
        .alignment(Alignment::Right)
        .style(style(Tone::Dim))
        .block(
            Block::default()
                .borders(Borders::RIGHT | Borders::BOTTOM | Borders::TOP)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(corner, tab_bar[1]);
}

fn draw_home(f: &mut Frame, area: Rect) {
    let block = default_border(Color::DarkGray).title(" scoreboard ");
    let mut lines = vec![
        Line::styled("Pick a league", style(Tone::Accent)),
        Line::raw(""),
    ];
    for (idx, league) in League::ALL.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("  {}  ", idx + 1), style(Tone::Accent)),
            Span::styled(league.label(), style(Tone::Primary)),
        ]));
    }
    lines.push(Line::raw(""));
    lines.push(Line::styled(": to type a route, ? for help", style(Tone::Dim)));
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_scores(f: &mut Frame, area: Rect, app: &App, league: League) {
    let Some(scores) = &app.state.scores else {
        return;
    };
    let title = format!(" {} | {} ", league.label(), scores.date_label(app.today()));

    let [list_area, details_area] =
        Layout::horizontal([Constraint::Length(GAME_LIST_WIDTH + 2), Constraint::Fill(1)]).areas(area);

    let list_block = default_border(Color::DarkGray).title(title);
    let list_inner = list_block.inner(list_area);
    f.render_widget(list_block, list_area);
    let rows = scores.rows();
    f.render_widget(GameList { games: &rows, selected: scores.selected_game }, list_inner);

    let details_block = default_border(Color::DarkGray).title(" game ");
    let details_inner = details_block.inner(details_area);
    f.render_widget(details_block, details_area);

    let sections = app.details_sections();
    if sections.is_empty() {
        let msg = Paragraph::new("No games scheduled.").style(style(Tone::Dim));
        f.render_widget(msg, details_inner);
    } else {
        f.render_widget(DetailsView { sections: &sections }, details_inner);
    }
}

fn draw_about(f: &mut Frame, area: Rect, app: &App) {
    let block = default_border(Color::DarkGray).title(" about ");
    let endpoints = &app.settings.endpoints;
    let lines = vec![
        Line::styled(format!("scoreboard {}", env!("CARGO_PKG_VERSION")), style(Tone::Accent)),
        Line::raw(env!("CARGO_PKG_DESCRIPTION")),
        Line::raw(""),
        Line::styled("Data sources", style(Tone::Accent)),
        Line::raw(format!("  mlb, nba, nfl  {}", endpoints.proxy_base)),
        Line::raw(format!("  nhl            {}", endpoints.nhl_base)),
        Line::raw(format!("  nba box scores {}{}", endpoints.cors_proxy, endpoints.nba_data_base)),
        Line::raw(""),
        Line::styled(
            format!("Scores refresh every {}s.", app.settings.refresh_interval.as_secs()),
            style(Tone::Dim),
        ),
    ];
    f.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: false }), area);
}

/// Resolved endpoints and the URL each league would fetch right now.
fn draw_test(f: &mut Frame, area: Rect, app: &App) {
    let block = default_border(Color::DarkGray).title(" test ");
    let today = app.today();
    let endpoints = &app.settings.endpoints;
    let mut lines = vec![
        Line::styled(format!("today {}", today.format("%Y-%m-%d")), style(Tone::Accent)),
        Line::raw(""),
    ];
    for league in League::ALL {
        let ctx = ScoreContext::current(league);
        lines.push(Line::from(vec![
            Span::styled(format!("{:<5}", league.slug()), style(Tone::Accent)),
            Span::raw(format!("{:<10} ", ctx.describe(today))),
            Span::styled(endpoints.scores_url(&ctx, today), style(Tone::Primary)),
        ]));
    }
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_not_found(f: &mut Frame, area: Rect, path: &str) {
    let block = default_border(Color::DarkGray).title(" not found ");
    let lines = vec![
        Line::styled(format!("Nothing lives at {path}"), style(Tone::Error)),
        Line::raw(""),
        Line::styled("Try /mlb, /nba/scores/2021-04-10 or /nfl/scores/week/5", style(Tone::Dim)),
    ];
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_status_line(f: &mut Frame, area: Rect, app: &App) {
    if area.height == 0 {
        return;
    }
    let line = if let Some(input) = &app.state.prompt {
        Line::from(vec![
            Span::styled(":", style(Tone::Accent)),
            Span::raw(input.clone()),
        ])
    } else if let Some(err) = app.state.scores.as_ref().and_then(|s| s.last_error.as_ref()) {
        Line::styled(err.clone(), style(Tone::Error))
    } else {
        Line::styled(" ? help  : route  q quit", style(Tone::Dim))
    };
    f.render_widget(Paragraph::new(line), area);
}

fn draw_logs(f: &mut Frame, area: Rect) {
    let logs = TuiLoggerWidget::default()
        .block(default_border(Color::DarkGray).title(" logs "))
        .style_error(Style::default().fg(Color::Red))
        .style_warn(Style::default().fg(Color::Yellow))
        .style_info(Style::default().fg(Color::Cyan));
    f.render_widget(logs, area);
}

fn draw_help(f: &mut Frame, area: Rect) {
    let height = (HELP.len() as u16 + 2).min(area.height);
    let width = 60.min(area.width);
    let popup = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    );
    let lines: Vec<Line> = HELP
        .iter()
        .map(|(key, what)| {
            Line::from(vec![
                Span::styled(format!("{key:>5}  "), style(Tone::Accent)),
                Span::raw(*what),
            ])
        })
        .collect();
    f.render_widget(Clear, popup);
    f.render_widget(
        Paragraph::new(lines).block(default_border(Color::White).title(" help (Esc to close) ")),
        popup,
    );
}

fn draw_loading_spinner(f: &mut Frame, area: Rect, app: &App, loading: LoadingState) {
    if !loading.is_loading && loading.spinner_char != ERROR_CHAR {
        return;
    }
    let style = match loading.spinner_char {
        ERROR_CHAR => Style::default().fg(Color::Red),
        _ => Style::default().fg(Color::White),
    };
    let spinner = Paragraph::new(loading.spinner_char.to_string())
        .alignment(Alignment::Right)
        .style(style);
    let area = if app.settings.full_screen {
        Rect::new(area.width.saturating_sub(3), area.height.saturating_sub(2), 1, 1)
    } else {
        Rect::new(area.width.saturating_sub(3), 1, 1, 1)
    };
    f.render_widget(spinner, area);
}
