use crate::components::diamond::{DIAMOND_HEIGHT, DIAMOND_WIDTH, Diamond};
use crate::components::palette::{Tone, fit, fit_right, style};
use crate::views::{BoxScoreLine, BoxScoreProps};
use tui::buffer::Buffer;
use tui::layout::{Constraint, Layout, Rect};
use tui::widgets::Widget;

const TEAM_WIDTH: usize = 5;
const PERIOD_WIDTH: usize = 4;
const TOTAL_WIDTH: usize = 5;

/// Rows needed to draw a box score, including the diamond when one is embedded.
pub fn box_score_height(props: &BoxScoreProps) -> u16 {
    if props.diamond.is_some() { DIAMOND_HEIGHT.max(3) } else { 3 }
}

/// Line score table: header, away, home. The mlb diamond sits to the right.
///
/// ```text
///        1   2   3   4   5   6   7   8   9 |    R    H    E
/// PHI    0   1   0   0   1   0   0   0   0 |    2    6    1
/// ATL    1   0   0   0   0   2   0   0   x |    3    8    0
/// ```
pub struct BoxScoreTable<'a> {
    pub props: &'a BoxScoreProps,
}

impl Widget for BoxScoreTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 3 || area.width < TEAM_WIDTH as u16 {
            return;
        }

        let table_area = match &self.props.diamond {
            Some(diamond) if area.width >= table_width(self.props) + DIAMOND_WIDTH + 2 => {
                let [table, _, side] = Layout::horizontal([
                    Constraint::Length(table_width(self.props)),
                    Constraint::Length(2),
                    Constraint::Length(DIAMOND_WIDTH),
                ])
                .areas(area);
                Diamond { props: diamond }.render(side, buf);
                table
            }
            _ => area,
        };

        let width = table_area.width as usize;
        let rows = [
            (header(self.props), style(Tone::Dim)),
            (team_row(&self.props.away, self.props.totals.len()), style(Tone::Primary)),
            (team_row(&self.props.home, self.props.totals.len()), style(Tone::Primary)),
        ];
        for (y, (text, row_style)) in rows.iter().enumerate() {
            buf.set_string(table_area.x, table_area.y + y as u16, fit(text, width), *row_style);
        }
    }
}

fn table_width(props: &BoxScoreProps) -> u16 {
    (TEAM_WIDTH + props.periods.len() * PERIOD_WIDTH + 2 + props.totals.len() * TOTAL_WIDTH) as u16
}

fn header(props: &BoxScoreProps) -> String {
    let mut line = " ".repeat(TEAM_WIDTH);
    for period in &props.periods {
        line.push_str(&fit_right(period, PERIOD_WIDTH));
    }
    line.push_str(" |");
    for total in &props.totals {
        line.push_str(&fit_right(total, TOTAL_WIDTH));
    }
    line
}

fn team_row(team: &BoxScoreLine, total_count: usize) -> String {
    let mut line = fit(&team.team, TEAM_WIDTH);
    for value in &team.periods {
        line.push_str(&fit_right(value, PERIOD_WIDTH));
    }
    line.push_str(" |");
    for idx in 0..total_count {
        let value = team.totals.get(idx).map(String::as_str).unwrap_or_default();
        line.push_str(&fit_right(value, TOTAL_WIDTH));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::DiamondProps;
    use scoreboard_api::League;

    fn props(diamond: Option<DiamondProps>) -> BoxScoreProps {
        BoxScoreProps {
            league: League::Mlb,
            periods: (1..=9).map(|n| n.to_string()).collect(),
            totals: vec!["R", "H", "E"],
            away: BoxScoreLine {
                team: "PHI".into(),
                periods: ["0", "1", "0", "0", "1", "0", "0", "0", "0"].map(String::from).to_vec(),
                totals: vec!["2".into(), "6".into(), "1".into()],
            },
            home: BoxScoreLine {
                team: "ATL".into(),
                periods: ["1", "0", "0", "0", "0", "2", "0", "0", "x"].map(String::from).to_vec(),
                totals: vec!["3".into(), "8".into(), "0".into()],
            },
            diamond,
        }
    }

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }

    #[test]
    fn rows_line_up_under_the_header() {
        let props = props(None);
        let area = Rect::new(0, 0, table_width(&props), 3);
        let mut buf = Buffer::empty(area);
        BoxScoreTable { props: &props }.render(area, &mut buf);

        assert_eq!(row(&buf, 0).trim_end(), "        1   2   3   4   5   6   7   8   9 |    R    H    E");
        assert_eq!(row(&buf, 1).trim_end(), "PHI     0   1   0   0   1   0   0   0   0 |    2    6    1");
        assert_eq!(row(&buf, 2).trim_end(), "ATL     1   0   0   0   0   2   0   0   x |    3    8    0");
    }

    #[test]
    fn diamond_is_drawn_beside_the_table() {
        let props = props(Some(DiamondProps { second: true, ..Default::default() }));
        let width = table_width(&props) + 2 + DIAMOND_WIDTH;
        let area = Rect::new(0, 0, width, box_score_height(&props));
        let mut buf = Buffer::empty(area);
        BoxScoreTable { props: &props }.render(area, &mut buf);

        let diamond_x = table_width(&props) + 2;
        assert_eq!(buf[(diamond_x + 4, 0)].symbol(), "◆");
        assert!(row(&buf, 1).starts_with("PHI"));
    }

    #[test]
    fn narrow_area_drops_the_diamond() {
        let props = props(Some(DiamondProps::default()));
        let area = Rect::new(0, 0, 30, 6);
        let mut buf = Buffer::empty(area);
        BoxScoreTable { props: &props }.render(area, &mut buf);
        assert!(!row(&buf, 2).contains('⌂'));
        assert!(row(&buf, 1).starts_with("PHI"));
    }
}
