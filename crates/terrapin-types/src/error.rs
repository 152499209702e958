//! Error types shared across the Terrapin workspace.

use thiserror::Error;

/// Errors reported by a drawing canvas.
///
/// `InvalidColor` and `InvalidAppearance` are recoverable: callers substitute
/// a default and continue. `WindowClosed` is terminal for the session.
#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("'{0}' is not a recognized color")]
    InvalidColor(String),

    #[error("'{0}' is not a recognized appearance")]
    InvalidAppearance(String),

    #[error("the drawing window is no longer available")]
    WindowClosed,

    #[error("failed to write drawing: {0}")]
    Io(String),
}

/// Failure to resolve a color name or hex literal.
#[derive(Debug, Error)]
#[error("unrecognized color '{0}'")]
pub struct ColorParseError(pub String);
