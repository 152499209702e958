//! Interactive drawing session command.

use std::path::{Path, PathBuf};

use anyhow::Result;
use console::style;

use terrapin_canvas::{SvgCanvas, config};
use terrapin_core::session::{self, SessionOutcome};

use super::prompter::ConsolePrompter;

/// Load configuration, run the session, and report where the drawing went.
pub fn run(config_path: &Path, out: Option<PathBuf>) -> Result<()> {
    let mut cfg = config::load_config(config_path);
    if let Some(out) = out {
        cfg.output = out;
    }

    let mut prompter = ConsolePrompter;
    let mut rng = rand::thread_rng();

    let outcome = session::run(
        &mut prompter,
        || Ok(SvgCanvas::from_config(&cfg)),
        &cfg,
        &mut rng,
    )?;

    // The window is only opened (and the file only written) once the user
    // confirms launch; don't point at a file that doesn't exist.
    match outcome {
        SessionOutcome::Completed | SessionOutcome::Stopped => {
            println!();
            println!(
                "  {} Drawing saved to {}",
                style("✓").green().bold(),
                style(cfg.output.display()).cyan()
            );
            println!();
        }
        SessionOutcome::Declined | SessionOutcome::WindowLost => {}
    }

    Ok(())
}
