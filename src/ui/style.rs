use lipgloss::{rounded_border, Color, Style};
use once_cell::sync::Lazy;

// Cosmetic panel only; nothing in the state machine depends on it.
// Geometry mirrors the classic look: bold green text, padding top 2 /
// left 4, fixed width, rounded border.
pub static STYLE_PANEL: Lazy<Style> = Lazy::new(|| {
    Style::new()
        .bold(true)
        .foreground(Color::from_rgb(0, 175, 95))
        .padding(2, 0, 0, 4)
        .width(22)
        .border(rounded_border())
});

pub fn panel(view: &str) -> String {
    STYLE_PANEL.render(view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    fn strip_ansi(s: &str) -> String {
        let re = Regex::new(r"\x1b\[[0-9;?]*[ -/]*[@-~]").unwrap();
        re.replace_all(s, "").to_string()
    }

    #[test]
    fn panel_adds_a_border_around_the_content() {
        let out = strip_ansi(&panel("hello"));
        assert!(out.contains("hello"));
        assert!(out.lines().count() > 1);
    }
}
