//! Interactive session state machine.
//!
//! Drives the launch -> customize -> draw -> draw-again loop over the prompt
//! and canvas seams. The canvas is opened only after the user confirms
//! launch, and is released exactly once on every terminal path: decline,
//! goodbye, exit sentinel, or a lost window.

use std::io;

use rand::Rng;
use terrapin_types::config::SessionConfig;
use terrapin_types::error::CanvasError;
use terrapin_types::prefs::{DEFAULT_COLOR, DrawingPreferences};
use terrapin_types::shape::{Appearance, DrawShape};
use thiserror::Error;
use tracing::debug;

use crate::canvas::TurtleCanvas;
use crate::dispatch;
use crate::prompt::{self, Answer, Prompter};
use crate::random_art;

const TIP: &str = "Tip: type Stop! at any prompt to exit immediately.";
const NOT_LAUNCHED: &str = "Turtle mode not launched.";
const GOODBYE: &str = "Thank you for drawing with Terrapin. Goodbye!";
const STOPPED: &str = "Stop! detected. Exiting. Start Terrapin again when you want to draw.";
const WINDOW_LOST: &str = "The drawing window was closed. Please start Terrapin again.";

/// How a session ended. Every variant maps to exit code 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The user declined to launch; no canvas was opened.
    Declined,
    /// The user finished normally after one or more drawings.
    Completed,
    /// The exit sentinel was typed at a prompt.
    Stopped,
    /// The canvas reported the window gone mid-session.
    WindowLost,
}

/// Failures the session cannot absorb.
///
/// Recoverable canvas errors (invalid color/appearance, a lost window) are
/// handled inside the loop; only prompt I/O failures and unexpected canvas
/// errors surface here.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("prompt I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Canvas(#[from] CanvasError),
}

/// Run one full interactive session.
///
/// `open_canvas` is called at most once, after the user confirms launch.
pub fn run<P, C, R, F>(
    prompter: &mut P,
    open_canvas: F,
    config: &SessionConfig,
    rng: &mut R,
) -> Result<SessionOutcome, SessionError>
where
    P: Prompter,
    C: TurtleCanvas,
    R: Rng,
    F: FnOnce() -> Result<C, CanvasError>,
{
    prompter.say(TIP)?;

    match prompt::yes_no(prompter, "Would you like to launch turtle mode?")? {
        Answer::Exit => {
            prompter.say(STOPPED)?;
            return Ok(SessionOutcome::Stopped);
        }
        Answer::Value(false) | Answer::Default => {
            prompter.say(NOT_LAUNCHED)?;
            return Ok(SessionOutcome::Declined);
        }
        Answer::Value(true) => {}
    }

    let mut canvas = open_canvas()?;
    let outcome = drive(prompter, &mut canvas, config, rng);

    // Release the window exactly once, whatever path ended the loop. A
    // window that already vanished out-of-band is not an error here.
    match canvas.close() {
        Ok(()) | Err(CanvasError::WindowClosed) => {}
        Err(err) => return Err(err.into()),
    }

    outcome
}

/// The customize/draw/again loop. Does not close the canvas; `run` does.
fn drive<P, C, R>(
    prompter: &mut P,
    canvas: &mut C,
    config: &SessionConfig,
    rng: &mut R,
) -> Result<SessionOutcome, SessionError>
where
    P: Prompter,
    C: TurtleCanvas,
    R: Rng,
{
    loop {
        let Some(prefs) = gather_preferences(prompter, config)? else {
            prompter.say(STOPPED)?;
            return Ok(SessionOutcome::Stopped);
        };

        match draw_once(prompter, canvas, &prefs, rng) {
            Ok(()) => {}
            Err(SessionError::Canvas(CanvasError::WindowClosed)) => {
                prompter.say(WINDOW_LOST)?;
                return Ok(SessionOutcome::WindowLost);
            }
            Err(err) => return Err(err),
        }

        match prompt::yes_no(prompter, "Would you like to draw again?")? {
            Answer::Exit => {
                prompter.say(STOPPED)?;
                return Ok(SessionOutcome::Stopped);
            }
            Answer::Value(true) => {}
            Answer::Value(false) | Answer::Default => {
                prompter.say(GOODBYE)?;
                return Ok(SessionOutcome::Completed);
            }
        }
    }
}

/// Ask whether to customize; `None` means the exit sentinel was typed.
fn gather_preferences<P: Prompter>(
    prompter: &mut P,
    config: &SessionConfig,
) -> io::Result<Option<DrawingPreferences>> {
    match prompt::yes_no(prompter, "Would you like to customize the turtle?")? {
        Answer::Exit => Ok(None),
        Answer::Value(false) | Answer::Default => Ok(Some(config.preferences())),
        Answer::Value(true) => customize(prompter, config),
    }
}

/// The customization wizard: speed, appearance, color, shape, size.
fn customize<P: Prompter>(
    prompter: &mut P,
    config: &SessionConfig,
) -> io::Result<Option<DrawingPreferences>> {
    let defaults = config.preferences();
    prompter.say("--- Turtle customization ---")?;

    let speed = match prompt::int_in(
        prompter,
        "Choose turtle speed (0-10, 0 is fastest)",
        i64::from(defaults.speed),
        0..=10,
    )? {
        Answer::Exit => return Ok(None),
        Answer::Value(value) => DrawingPreferences::clamp_speed(value),
        Answer::Default => {
            prompter.warn(&format!(
                "Invalid input. Using default speed {}.",
                defaults.speed
            ))?;
            defaults.speed
        }
    };

    let appearance = match prompt::text(
        prompter,
        "Choose turtle appearance (turtle, arrow, circle, square, triangle, classic)",
        &defaults.appearance.to_string(),
    )? {
        Answer::Exit => return Ok(None),
        Answer::Default => defaults.appearance,
        Answer::Value(raw) => match raw.parse::<Appearance>() {
            Ok(appearance) => appearance,
            Err(_) => {
                prompter.warn(&format!(
                    "Warning: '{raw}' is not a valid appearance. Using default '{}'.",
                    defaults.appearance
                ))?;
                defaults.appearance
            }
        },
    };

    let color = match prompt::text(
        prompter,
        "Choose drawing color (e.g. red, blue, green, purple, orange)",
        &defaults.color,
    )? {
        Answer::Exit => return Ok(None),
        Answer::Default => defaults.color.clone(),
        Answer::Value(color) => color,
    };

    prompter.say("Available shapes to draw:")?;
    for shape in DrawShape::ALL {
        prompter.say(&format!("  - {shape}"))?;
    }
    let shape = match prompt::text(prompter, "Choose a shape to draw", &defaults.shape.to_string())?
    {
        Answer::Exit => return Ok(None),
        Answer::Default => defaults.shape,
        Answer::Value(raw) => match raw.parse::<DrawShape>() {
            Ok(shape) => shape,
            Err(_) => {
                prompter.warn(&format!(
                    "Warning: '{raw}' is not a recognized shape. Drawing a square instead."
                ))?;
                DrawShape::Square
            }
        },
    };

    let size = match prompt::int_in(
        prompter,
        "Shape size in pixels",
        i64::from(defaults.size),
        1..=i64::from(u32::MAX),
    )? {
        Answer::Exit => return Ok(None),
        Answer::Value(value) => DrawingPreferences::clamp_size(value),
        Answer::Default => {
            prompter.warn(&format!(
                "Invalid input. Using default size {}.",
                defaults.size
            ))?;
            defaults.size
        }
    };

    Ok(Some(DrawingPreferences {
        speed,
        appearance,
        color,
        shape,
        size,
    }))
}

/// Reset the cursor, apply the preferences, and dispatch the drawing.
fn draw_once<P, C, R>(
    prompter: &mut P,
    canvas: &mut C,
    prefs: &DrawingPreferences,
    rng: &mut R,
) -> Result<(), SessionError>
where
    P: Prompter,
    C: TurtleCanvas,
    R: Rng,
{
    debug!(?prefs, "drawing");

    canvas.clear()?;
    canvas.pen_up()?;
    canvas.home()?;
    canvas.set_heading(0.0)?;
    canvas.pen_down()?;

    canvas.set_speed(prefs.speed)?;

    let color = prefs.effective_color();
    match canvas.set_color(color) {
        Ok(()) => {}
        Err(CanvasError::InvalidColor(name)) => {
            prompter.warn(&format!(
                "Warning: '{name}' is not a valid color. Using default color '{DEFAULT_COLOR}'."
            ))?;
            canvas.set_color(DEFAULT_COLOR)?;
        }
        Err(err) => return Err(err.into()),
    }

    match canvas.set_appearance(&prefs.appearance.to_string()) {
        Ok(()) => {}
        Err(CanvasError::InvalidAppearance(name)) => {
            prompter.warn(&format!(
                "Warning: '{name}' is not a valid appearance. Using default '{}'.",
                Appearance::Turtle
            ))?;
            canvas.set_appearance(&Appearance::Turtle.to_string())?;
        }
        Err(err) => return Err(err.into()),
    }

    if prefs.shape == DrawShape::Random {
        random_art::draw(canvas, rng)?;
    } else {
        dispatch::draw_shape(canvas, prefs.shape, prefs.size)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{CanvasOp, RecordingCanvas, ScriptedPrompter};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn run_scripted(
        replies: &[&str],
        canvas: RecordingCanvas,
    ) -> (SessionOutcome, RecordingCanvas, ScriptedPrompter) {
        let mut prompter = ScriptedPrompter::new(replies);
        let mut rng = StdRng::seed_from_u64(0);
        let handle = canvas.clone();
        let outcome = run(
            &mut prompter,
            move || Ok(canvas),
            &SessionConfig::default(),
            &mut rng,
        )
        .unwrap();
        (outcome, handle, prompter)
    }

    #[test]
    fn test_declined_launch_opens_nothing() {
        let mut prompter = ScriptedPrompter::new(&["no"]);
        let mut rng = StdRng::seed_from_u64(0);
        let mut opened = false;
        let outcome = run(
            &mut prompter,
            || -> Result<RecordingCanvas, CanvasError> {
                opened = true;
                Ok(RecordingCanvas::new())
            },
            &SessionConfig::default(),
            &mut rng,
        )
        .unwrap();

        assert_eq!(outcome, SessionOutcome::Declined);
        assert!(!opened);
        assert!(prompter.notices.iter().any(|n| n == NOT_LAUNCHED));
    }

    #[test]
    fn test_default_run_draws_one_square_then_goodbye() {
        let (outcome, canvas, prompter) =
            run_scripted(&["yes", "no", "no"], RecordingCanvas::new());

        assert_eq!(outcome, SessionOutcome::Completed);
        assert!(prompter.notices.iter().any(|n| n == GOODBYE));

        let ops = canvas.ops();
        // Reset, then preference application.
        assert_eq!(
            &ops[..5],
            &[
                CanvasOp::Clear,
                CanvasOp::PenUp,
                CanvasOp::Home,
                CanvasOp::SetHeading(0.0),
                CanvasOp::PenDown,
            ]
        );
        assert!(ops.contains(&CanvasOp::SetSpeed(5)));
        assert!(ops.contains(&CanvasOp::SetColor("blue".to_string())));
        assert!(ops.contains(&CanvasOp::SetAppearance("turtle".to_string())));

        // Exactly one square of side 100.
        let forwards = ops
            .iter()
            .filter(|op| **op == CanvasOp::Forward(100.0))
            .count();
        let turns = ops.iter().filter(|op| **op == CanvasOp::Turn(90.0)).count();
        assert_eq!((forwards, turns), (4, 4));

        // Window released exactly once, at the end.
        assert_eq!(ops.last(), Some(&CanvasOp::Close));
        assert!(canvas.is_closed());
    }

    #[test]
    fn test_customized_star_emits_its_walk() {
        let (outcome, canvas, _) = run_scripted(
            &["yes", "yes", "5", "classic", "red", "star", "200", "no"],
            RecordingCanvas::new(),
        );

        assert_eq!(outcome, SessionOutcome::Completed);
        let ops = canvas.ops();
        assert!(ops.contains(&CanvasOp::SetColor("red".to_string())));
        assert!(ops.contains(&CanvasOp::SetAppearance("classic".to_string())));

        let star_pairs = ops
            .windows(2)
            .filter(|pair| pair == &[CanvasOp::Forward(200.0), CanvasOp::Turn(144.0)])
            .count();
        assert_eq!(star_pairs, 5);
    }

    #[test]
    fn test_sentinel_at_color_prompt_skips_drawing() {
        let (outcome, canvas, prompter) = run_scripted(
            &["yes", "yes", "7", "turtle", "Stop!"],
            RecordingCanvas::new(),
        );

        assert_eq!(outcome, SessionOutcome::Stopped);
        assert!(prompter.notices.iter().any(|n| n == STOPPED));

        // No shape or size prompt ever appeared.
        assert!(!prompter.prompts.iter().any(|p| p.contains("shape to draw")));
        assert!(!prompter.prompts.iter().any(|p| p.contains("size")));

        // Nothing was drawn, but the window was still released.
        let ops = canvas.ops();
        assert!(!ops.iter().any(|op| matches!(op, CanvasOp::Forward(_))));
        assert_eq!(ops, vec![CanvasOp::Close]);
    }

    #[test]
    fn test_unrecognized_shape_falls_back_to_square() {
        let (outcome, canvas, prompter) = run_scripted(
            &["yes", "yes", "5", "turtle", "blue", "blob", "100", "no"],
            RecordingCanvas::new(),
        );

        assert_eq!(outcome, SessionOutcome::Completed);
        assert!(prompter.warnings.iter().any(|w| w.contains("'blob'")));

        let ops = canvas.ops();
        let square_pairs = ops
            .windows(2)
            .filter(|pair| pair == &[CanvasOp::Forward(100.0), CanvasOp::Turn(90.0)])
            .count();
        assert_eq!(square_pairs, 4);
    }

    #[test]
    fn test_default_blue_potato_is_promoted_to_saddlebrown() {
        let (outcome, canvas, _) = run_scripted(
            &["yes", "yes", "5", "turtle", "", "potato", "150", "no"],
            RecordingCanvas::new(),
        );

        assert_eq!(outcome, SessionOutcome::Completed);
        let ops = canvas.ops();
        assert!(ops.contains(&CanvasOp::SetColor("saddlebrown".to_string())));
        assert!(ops.contains(&CanvasOp::SetPenColor("peru".to_string())));
    }

    #[test]
    fn test_invalid_color_falls_back_to_blue() {
        let (outcome, canvas, prompter) = run_scripted(
            &["yes", "yes", "5", "turtle", "blurple", "square", "100", "no"],
            RecordingCanvas::rejecting_colors(&["blurple"]),
        );

        assert_eq!(outcome, SessionOutcome::Completed);
        assert!(prompter.warnings.iter().any(|w| w.contains("'blurple'")));
        assert!(canvas.ops().contains(&CanvasOp::SetColor("blue".to_string())));
    }

    #[test]
    fn test_lost_window_terminates_the_session() {
        // The window vanishes at the very first canvas call (the clear).
        let (outcome, canvas, prompter) =
            run_scripted(&["yes", "no"], RecordingCanvas::failing_at(0));

        assert_eq!(outcome, SessionOutcome::WindowLost);
        assert!(prompter.notices.iter().any(|n| n == WINDOW_LOST));
        assert!(canvas.ops().is_empty());
    }

    #[test]
    fn test_drawing_twice_loops_back_through_customize() {
        let (outcome, canvas, prompter) = run_scripted(
            &["yes", "no", "yes", "no", "no"],
            RecordingCanvas::new(),
        );

        assert_eq!(outcome, SessionOutcome::Completed);
        let clears = canvas
            .ops()
            .iter()
            .filter(|op| **op == CanvasOp::Clear)
            .count();
        assert_eq!(clears, 2);
        let customize_prompts = prompter
            .prompts
            .iter()
            .filter(|p| p.contains("customize"))
            .count();
        assert_eq!(customize_prompts, 2);
    }

    #[test]
    fn test_random_shape_draws_twelve_placements() {
        let (outcome, canvas, _) = run_scripted(
            &["yes", "yes", "0", "arrow", "green", "random", "50", "no"],
            RecordingCanvas::new(),
        );

        assert_eq!(outcome, SessionOutcome::Completed);
        let pen_downs = canvas
            .ops()
            .iter()
            .filter(|op| **op == CanvasOp::PenDown)
            .count();
        // One from the reset, twelve from the composition.
        assert_eq!(pen_downs, 13);
    }
}
