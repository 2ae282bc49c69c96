//! Toggle status types.

/// Outcome of a successful toggle on one repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleStatus {
    /// The checkbox was already ticked; nothing was clicked.
    AlreadyEnabled,

    /// The checkbox was ticked by this run.
    Enabled,

    /// Dry run: the checkbox is unticked and would have been clicked.
    WouldEnable,
}
