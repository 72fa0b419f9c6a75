/// Text typed for the next row label.
///
/// Editing only ever happens at the end of the buffer, the way a single-line
/// name box behaves, so no cursor is tracked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBuffer {
    text: String,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn push(&mut self, c: char) {
        self.text.push(c);
    }

    pub fn pop(&mut self) -> Option<char> {
        self.text.pop()
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }

    /// True when nothing but whitespace has been typed.
    pub fn is_blank(&self) -> bool {
        self.trimmed().is_empty()
    }

    /// Takes the trimmed label out of the buffer, leaving it empty.
    /// Blank input is left untouched and yields `None`.
    pub fn take_label(&mut self) -> Option<String> {
        if self.is_blank() {
            return None;
        }
        let label = self.trimmed().to_string();
        self.text.clear();
        Some(label)
    }
}
