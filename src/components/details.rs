use crate::components::box_score::{BoxScoreTable, box_score_height};
use crate::components::palette::{Tone, fit, fit_right, style};
use crate::views::{MatchupProps, MatchupSide, PanelMenuProps, Section, StatsProps, UpdateTimeProps};
use tui::buffer::Buffer;
use tui::layout::{Constraint, Layout, Rect};
use tui::text::{Line, Span};
use tui::widgets::{Paragraph, Widget};

pub const PLACEHOLDER_TEXT: &str = "Game details are not available for this league yet.";

/// Draws a composed section list top to bottom, one blank row between sections.
pub struct DetailsView<'a> {
    pub sections: &'a [Section],
}

impl Widget for DetailsView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut constraints = Vec::with_capacity(self.sections.len() * 2);
        for section in self.sections {
            constraints.push(Constraint::Length(section_height(section)));
            constraints.push(Constraint::Length(1));
        }
        let areas = Layout::vertical(constraints).split(area);

        for (section, area) in self.sections.iter().zip(areas.iter().step_by(2)) {
            if area.height == 0 {
                continue;
            }
            match section {
                Section::Matchup(props) => render_matchup(props, *area, buf),
                Section::PanelMenu(props) => render_panel_menu(props, *area, buf),
                Section::BoxScore(props) => BoxScoreTable { props }.render(*area, buf),
                Section::Stats(props) => render_stats(props, *area, buf),
                Section::Placeholder => {
                    Paragraph::new(Line::styled(PLACEHOLDER_TEXT, style(Tone::Dim))).render(*area, buf)
                }
                Section::UpdateTime(props) => render_update_time(props, *area, buf),
            }
        }
    }
}

pub fn section_height(section: &Section) -> u16 {
    match section {
        Section::Matchup(_) => 4,
        Section::PanelMenu(_) | Section::UpdateTime(_) | Section::Placeholder => 1,
        Section::BoxScore(props) => box_score_height(props),
        Section::Stats(props) => (props.rows.len() + props.leaders.len() + 3) as u16,
    }
}

fn render_matchup(props: &MatchupProps, area: Rect, buf: &mut Buffer) {
    let side = |team: &MatchupSide| {
        let tone = if team.winner { Tone::Winner } else { Tone::Primary };
        let name = if team.name.is_empty() { &team.abbreviation } else { &team.name };
        Line::from(vec![
            Span::styled(fit(name, 24), style(tone)),
            Span::styled(fit(&team.record, 9), style(Tone::Dim)),
            Span::styled(fit_right(&team.score, 4), style(tone)),
        ])
    };
    let lines = vec![
        Line::from(vec![
            Span::styled(props.date.clone(), style(Tone::Accent)),
            Span::raw("  "),
            Span::styled(props.status.clone(), style(Tone::Live)),
        ]),
        side(&props.away),
        side(&props.home),
        Line::styled(props.detail.clone(), style(Tone::Dim)),
    ];
    Paragraph::new(lines).render(area, buf);
}

fn render_panel_menu(props: &PanelMenuProps, area: Rect, buf: &mut Buffer) {
    let mut spans = Vec::with_capacity(props.panels.len() * 2);
    for (idx, panel) in props.panels.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled(" | ", style(Tone::Dim)));
        }
        let tone = if *panel == props.active { Tone::Accent } else { Tone::Dim };
        spans.push(Span::styled(panel.label(), style(tone)));
    }
    Paragraph::new(Line::from(spans)).render(area, buf);
}

fn render_stats(props: &StatsProps, area: Rect, buf: &mut Buffer) {
    let row = |label: &str, away: &str, home: &str, tone: Tone| {
        Line::styled(
            format!("{}{}{}", fit(label, 6), fit_right(away, 16), fit_right(home, 16)),
            style(tone),
        )
    };
    let mut lines = vec![row("", &props.away, &props.home, Tone::Accent)];
    lines.extend(props.rows.iter().map(|r| row(r.label, &r.away, &r.home, Tone::Primary)));
    lines.push(Line::raw(""));
    lines.push(Line::styled("Leaders", style(Tone::Accent)));
    lines.extend(props.leaders.iter().map(|r| row(r.label, &r.away, &r.home, Tone::Primary)));
    Paragraph::new(lines).render(area, buf);
}

fn render_update_time(props: &UpdateTimeProps, area: Rect, buf: &mut Buffer) {
    let text = match &props.last_updated {
        Some(at) => format!("Last updated {at}"),
        None => "Not updated yet".to_owned(),
    };
    Paragraph::new(Line::styled(text, style(Tone::Dim))).render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::{Panel, StatRow};

    fn text(buf: &Buffer) -> String {
        let area = buf.area;
        (0..area.height)
            .map(|y| (0..area.width).map(|x| buf[(x, y)].symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn sections_stack_in_order() {
        let sections = vec![
            Section::Matchup(MatchupProps {
                date: "Sat, Apr 10, 2021".into(),
                status: "Final".into(),
                ..Default::default()
            }),
            Section::PanelMenu(PanelMenuProps {
                panels: vec![Panel::BoxScore, Panel::Summary],
                active: Panel::Summary,
            }),
            Section::UpdateTime(UpdateTimeProps { last_updated: Some("7:42:10 PM".into()) }),
        ];
        let area = Rect::new(0, 0, 60, 10);
        let mut buf = Buffer::empty(area);
        DetailsView { sections: &sections }.render(area, &mut buf);

        let text = text(&buf);
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("Sat, Apr 10, 2021  Final"));
        assert!(lines[5].starts_with("box score | summary"));
        assert!(lines[7].starts_with("Last updated 7:42:10 PM"));
    }

    #[test]
    fn stats_rows_and_leaders() {
        let props = StatsProps {
            away: "LAL".into(),
            home: "NYK".into(),
            rows: vec![StatRow { label: "FG", away: "45-90".into(), home: "-".into() }],
            leaders: vec![StatRow { label: "PTS", away: "L. James 31".into(), home: "-".into() }],
        };
        let section = Section::Stats(props);
        let area = Rect::new(0, 0, 40, section_height(&section));
        let mut buf = Buffer::empty(area);
        DetailsView { sections: std::slice::from_ref(&section) }.render(area, &mut buf);

        let text = text(&buf);
        assert!(text.contains("45-90"));
        assert!(text.contains("Leaders"));
        assert!(text.contains("L. James 31"));
    }

    #[test]
    fn placeholder_is_drawn() {
        let sections = [Section::Placeholder];
        let area = Rect::new(0, 0, 60, 2);
        let mut buf = Buffer::empty(area);
        DetailsView { sections: &sections }.render(area, &mut buf);
        assert!(text(&buf).contains(PLACEHOLDER_TEXT));
    }
}
