use super::types::{FieldId, ModalId};

// Represents errors that can occur within the platform abstraction layer.
//
// Measurement failures are deliberately absent: a measurement that returns no
// rectangle is an accepted race and is dropped, not reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformError {
    /// A field with this id is already registered.
    DuplicateField(FieldId),
    /// No field with this id is registered.
    UnknownField(FieldId),
    /// No modal with this id has any registered field.
    UnknownModal(ModalId),
    /// The run loop kept producing work past its iteration guard.
    EventLoopStalled(usize),
    /// The event handler's lock was poisoned by an earlier panic.
    HandlerUnavailable,
}

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlatformError::DuplicateField(id) => write!(f, "Duplicate field: {id}"),
            PlatformError::UnknownField(id) => write!(f, "Unknown field: {id}"),
            PlatformError::UnknownModal(id) => write!(f, "Unknown modal: {}", id.0),
            PlatformError::EventLoopStalled(n) => {
                write!(f, "Event loop did not settle after {n} iterations")
            }
            PlatformError::HandlerUnavailable => write!(f, "Event handler is unavailable"),
        }
    }
}

impl std::error::Error for PlatformError {}

/// A specialized `Result` type for platform layer operations.
pub type Result<T> = std::result::Result<T, PlatformError>;
