/// What one behavior did on one poll.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FlowOutcome {
    /// Nothing applicable or the chain aborted; the reason is a short
    /// static label for logs and tests.
    Skipped(&'static str),
    /// The anchors matched but dry-run suppressed the mutation.
    DryRun,
    /// The external mutation (or notification) was applied.
    Fired,
}

impl FlowOutcome {
    pub fn fired(&self) -> bool {
        matches!(self, FlowOutcome::Fired)
    }
}
