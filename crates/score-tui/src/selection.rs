/// Highlighted row index. `None` only while the list is empty or nothing
/// has been picked yet.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    index: Option<usize>,
}

impl SelectionState {
    /// Starts on the first row when there is one.
    pub fn for_rows(len: usize) -> Self {
        Self {
            index: (len > 0).then_some(0),
        }
    }

    pub fn get(&self) -> Option<usize> {
        self.index
    }

    pub fn set(&mut self, index: Option<usize>) {
        self.index = index;
    }

    pub fn move_down(&mut self, len: usize) {
        let target = self.index.map_or(0, |idx| idx + 1);
        self.index = Some(target);
        self.clamp(len);
    }

    pub fn move_up(&mut self, len: usize) {
        let target = self.index.map_or(0, |idx| idx.saturating_sub(1));
        self.index = Some(target);
        self.clamp(len);
    }

    /// Pull the selection back inside a list that shrank to `len`.
    pub fn clamp(&mut self, len: usize) {
        self.index = match len.checked_sub(1) {
            Some(last) => self.index.map(|idx| idx.min(last)),
            None => None,
        };
    }
}
