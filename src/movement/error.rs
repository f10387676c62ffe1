//! Movement domain: controller failure conditions.

/// Failure raised by a [`MovementController`](super::MovementController).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementError {
    /// The controller has no velocity sink to write to.
    MissingDependency,
}

impl std::fmt::Display for MovementError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MovementError::MissingDependency => {
                write!(f, "movement controller has no velocity sink")
            }
        }
    }
}

impl std::error::Error for MovementError {}
