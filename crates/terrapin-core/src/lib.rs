//! Business logic for Terrapin.
//!
//! Defines the two seams the session is driven through -- [`prompt::Prompter`]
//! for line-based user I/O and [`canvas::TurtleCanvas`] for the drawing
//! surface -- plus the shape dispatch translator, the random composition
//! generator, and the interactive session state machine. Terminal and
//! filesystem concerns live in `terrapin-cli` and `terrapin-canvas`.

pub mod canvas;
pub mod dispatch;
pub mod prompt;
pub mod random_art;
pub mod session;

#[cfg(test)]
pub(crate) mod testing;
