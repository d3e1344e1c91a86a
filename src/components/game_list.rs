use crate::components::palette::{Tone, fit, fit_right, style};
use crate::views::GameSummary;
use tui::buffer::Buffer;
use tui::layout::Rect;
use tui::style::Modifier;
use tui::widgets::Widget;

pub const GAME_LIST_WIDTH: u16 = 30;

/// One line per game: `away score  home score  status`. The selected game is
/// marked and kept in view when the list is taller than the area.
pub struct GameList<'a> {
    pub games: &'a [GameSummary],
    pub selected: usize,
}

impl Widget for GameList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        let visible = area.height as usize;
        let first = self.selected.saturating_sub(visible.saturating_sub(1));

        for (row, (idx, game)) in self.games.iter().enumerate().skip(first).take(visible).enumerate() {
            let selected = idx == self.selected;
            let marker = if selected { '>' } else { ' ' };
            let line = format!(
                "{marker}{}{} {}{} {}",
                fit(&game.away, 4),
                fit_right(&game.away_score, 3),
                fit(&game.home, 4),
                fit_right(&game.home_score, 3),
                game.status,
            );
            let mut line_style = style(if game.live { Tone::Live } else { Tone::Primary });
            if selected {
                line_style = line_style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
            }
            buf.set_string(area.x, area.y + row as u16, fit(&line, area.width as usize), line_style);
        }
    }
}
