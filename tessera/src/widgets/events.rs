//! Event result type shared by the components.

// =============================================================================
// Event Result
// =============================================================================

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    /// Check if the event was handled.
    pub fn is_consumed(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}
