use tui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tone {
    Primary,
    Accent,
    Dim,
    Winner,
    Live,
    Error,
}

pub fn style(tone: Tone) -> Style {
    match tone {
        Tone::Primary => Style::default().fg(Color::Rgb(0, 122, 195)),
        Tone::Accent => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        Tone::Dim => Style::default().fg(Color::Indexed(240)),
        Tone::Winner => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        Tone::Live => Style::default().fg(Color::Rgb(255, 103, 31)),
        Tone::Error => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    }
}

/// Left-align `text` in exactly `width` columns, truncating if needed.
pub fn fit(text: &str, width: usize) -> String {
    let clipped: String = text.chars().take(width).collect();
    format!("{clipped:<width$}")
}

/// Right-align `text` in exactly `width` columns, truncating if needed.
pub fn fit_right(text: &str, width: usize) -> String {
    let clipped: String = text.chars().take(width).collect();
    format!("{clipped:>width$}")
}
