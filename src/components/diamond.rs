use crate::components::palette::{Tone, fit, style};
use crate::views::DiamondProps;
use tui::buffer::Buffer;
use tui::layout::Rect;
use tui::widgets::Widget;

pub const DIAMOND_WIDTH: u16 = 20;
pub const DIAMOND_HEIGHT: u16 = 6;

const OCCUPIED: char = '◆';
const EMPTY: char = '◇';
const HOME: char = '⌂';
const FILLED: char = '●';
const OPEN: char = '○';

/// Bases, count and the current matchup:
///
/// ```text
///     ◇     Bot 4
///  ◆     ◆
///     ⌂
/// B ●●○ S ●○ O ●○
/// P  Wheeler
/// AB Freeman
/// ```
pub struct Diamond<'a> {
    pub props: &'a DiamondProps,
}

impl Widget for Diamond<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 8 || area.height < 3 {
            return;
        }
        let p = self.props;
        let base = |occupied: bool| if occupied { OCCUPIED } else { EMPTY };
        let base_style = |occupied: bool| style(if occupied { Tone::Accent } else { Tone::Dim });

        put(buf, area, 4, 0, base(p.second), base_style(p.second));
        put(buf, area, 1, 1, base(p.third), base_style(p.third));
        put(buf, area, 7, 1, base(p.first), base_style(p.first));
        put(buf, area, 4, 2, HOME, style(Tone::Dim));

        if !p.inning.is_empty() && area.width > 10 {
            let width = (area.width - 10) as usize;
            buf.set_string(area.x + 10, area.y, fit(&p.inning, width), style(Tone::Live));
        }

        let lines = [
            count_line(p.balls, p.strikes, p.outs),
            labelled("P", &p.pitcher),
            labelled("AB", &p.batter),
        ];
        for (offset, line) in lines.iter().enumerate() {
            let y = 3 + offset as u16;
            if y >= area.height {
                break;
            }
            buf.set_string(area.x, area.y + y, fit(line, area.width as usize), style(Tone::Primary));
        }
    }
}

fn count_line(balls: u8, strikes: u8, outs: u8) -> String {
    format!("B {} S {} O {}", dots(balls, 3), dots(strikes, 2), dots(outs, 2))
}

fn dots(filled: u8, slots: u8) -> String {
    (0..slots).map(|i| if i < filled { FILLED } else { OPEN }).collect()
}

fn labelled(label: &str, name: &str) -> String {
    if name.is_empty() {
        String::new()
    } else {
        format!("{label:<2} {name}")
    }
}

fn put(buf: &mut Buffer, area: Rect, dx: u16, dy: u16, ch: char, style: tui::style::Style) {
    if dx >= area.width || dy >= area.height {
        return;
    }
    if let Some(cell) = buf.cell_mut((area.x + dx, area.y + dy)) {
        cell.set_char(ch);
        cell.set_style(style);
    }
}
