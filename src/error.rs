//! Error types for rover pose transitions.

use thiserror::Error;

/// Errors reported by pose parsing and command interpretation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoverError {
    /// The initial pose string did not match `"<x> <y> <heading>"`.
    #[error("invalid pose {input:?}: {reason}")]
    InvalidPose {
        /// The offending input string.
        input: String,
        /// Which part of the format was violated.
        reason: String,
    },

    /// A command character outside `{M, L, R}`, under
    /// [`UnknownCommandPolicy::Reject`](crate::UnknownCommandPolicy::Reject).
    /// The default policy never raises this.
    #[error("unknown command character {0:?}")]
    UnknownCommand(char),
}
