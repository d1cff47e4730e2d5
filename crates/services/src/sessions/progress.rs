/// Snapshot of how far a quiz session has progressed, useful for UI.
///
/// `position` counts questions already advanced past; `answered` also counts
/// the current question once it has been submitted, so the two differ by one
/// during the reveal step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionProgress {
    pub position: usize,
    pub total: usize,
    pub answered: usize,
    pub is_complete: bool,
}
