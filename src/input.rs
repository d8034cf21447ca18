// Minimal line-editing buffer used for the file-path and manual-name
// prompts. Only ever mutates its own state.

/// Glyph appended after the value while the buffer is focused.
pub const CURSOR_GLYPH: char = '_';

#[derive(Clone, Debug, Default)]
pub struct CaptureBuffer {
    value: String,
    placeholder: String,
    focused: bool,
    char_limit: usize,
}

impl CaptureBuffer {
    pub fn new(placeholder: &str) -> Self {
        CaptureBuffer {
            value: String::new(),
            placeholder: placeholder.to_string(),
            focused: false,
            // same limit the original prompts used
            char_limit: 156,
        }
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, s: &str) {
        self.value = s.to_string();
    }

    /// Appends a printable character, honoring the char limit. Control
    /// characters are ignored; key chords are handled by the runtime layer.
    pub fn append_char(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        if self.char_limit > 0 && self.value.chars().count() >= self.char_limit {
            return;
        }
        self.value.push(c);
    }

    pub fn delete_back(&mut self) {
        self.value.pop();
    }

    /// Placeholder when empty and unfocused; value plus cursor glyph while
    /// focused.
    pub fn render(&self) -> String {
        if self.focused {
            return format!("{}{}", self.value, CURSOR_GLYPH);
        }
        if self.value.is_empty() {
            return self.placeholder.clone();
        }
        self.value.clone()
    }
}
