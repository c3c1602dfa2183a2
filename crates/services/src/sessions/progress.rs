/// Aggregated view of session progress, useful for headers like "Question 2 of 5".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionProgress {
    pub total: usize,
    pub answered: usize,
    pub is_complete: bool,
}

impl SessionProgress {
    /// Units not yet answered. Early termination leaves some unanswered.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.total.saturating_sub(self.answered)
    }

    /// 1-based position of the pending unit, if any.
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        (!self.is_complete && self.answered < self.total).then_some(self.answered + 1)
    }
}
