/// Knobs for [`expand`](crate::expand).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExpandOptions {
    /// Extract into a hidden sibling directory and rename it into place only
    /// once the whole expansion succeeded.
    pub staged: bool,
}

impl ExpandOptions {
    pub fn staged(mut self, staged: bool) -> Self {
        self.staged = staged;
        self
    }
}
