//! Error types for timer operations

use thiserror::Error;

/// Errors raised by timer operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimerError {
    #[error("timer is still running ({operand})")]
    InvalidState { operand: &'static str },
}
