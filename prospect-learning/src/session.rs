//! Per-session state for the feedback loop.

use prospect_core::patch::PatchId;

/// Explicit session state owned by the engine: the completed-round
/// counter plus the working sets from the most recent selection, kept for
/// inspection by the caller. Selection routines receive the values they
/// need as arguments rather than reading hidden state.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    iteration: usize,
    last_uncertain: Vec<PatchId>,
    last_diverse: Vec<PatchId>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Completed feedback rounds (successful retrains).
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// Uncertain candidates from the most recent selection.
    pub fn last_uncertain(&self) -> &[PatchId] {
        &self.last_uncertain
    }

    /// Diversity representatives from the most recent selection.
    pub fn last_diverse(&self) -> &[PatchId] {
        &self.last_diverse
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn advance(&mut self) {
        self.iteration += 1;
    }

    pub(crate) fn record_selection(&mut self, uncertain: Vec<PatchId>, diverse: Vec<PatchId>) {
        self.last_uncertain = uncertain;
        self.last_diverse = diverse;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_counts_rounds_and_reset_clears_everything() {
        let mut state = SessionState::new();
        state.advance();
        state.advance();
        state.record_selection(vec![PatchId(1), PatchId(2)], vec![PatchId(1)]);
        assert_eq!(state.iteration(), 2);
        assert_eq!(state.last_uncertain().len(), 2);
        assert_eq!(state.last_diverse(), &[PatchId(1)]);

        state.reset();
        assert_eq!(state.iteration(), 0);
        assert!(state.last_uncertain().is_empty());
        assert!(state.last_diverse().is_empty());
    }
}
