use crate::provider::ProviderError;

/// Messages posted by background tasks back to the controller
///
/// Tasks never touch controller state directly; the host hands these to
/// [`super::Autocomplete::handle_event`] on the UI thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControllerEvent {
    /// A provider lookup finished
    FetchResolved {
        /// Sequence number the fetch was issued with
        sequence: u64,
        result: Result<Vec<String>, ProviderError>,
    },
    /// A focus-loss delay elapsed without being cancelled
    ClearElapsed {
        /// Identity of the pending clear that fired
        clear_id: u64,
    },
}

/// Fetch side of the controller state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchState {
    Idle,
    /// Waiting on the fetch issued with this sequence number
    Fetching(u64),
}

/// What the host must do with the focus change a press would cause
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusDirective {
    /// Suppress the focus change; the press belongs to the dropdown
    KeepFocus,
    /// Apply the focus change as usual
    Default,
}
