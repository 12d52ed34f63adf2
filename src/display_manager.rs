//! Picks a display implementation for the current environment.
//!
//! Interactive terminals get the ratatui shell; pipes and CI fall back to
//! the plain terminal display; headless swallows everything.

use crate::display_ratatui::RatatuiDisplay;
use crate::display_headless::HeadlessDisplay;
use crate::display_terminal::TerminalDisplay;
use crate::display_trait::{DisplayError, GameDisplay};

use log::debug;

/// Display mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Ratatui when interactive, terminal otherwise
    #[default]
    Auto,
    /// Force the ratatui shell (fail if the terminal can't)
    Ratatui,
    /// Plain stdout display
    Terminal,
    /// No output at all (testing/CI)
    Headless,
}

impl DisplayMode {
    /// Parse a mode name as given on the command line or in DISPLAY_MODE
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "auto" => Some(DisplayMode::Auto),
            "ratatui" => Some(DisplayMode::Ratatui),
            "terminal" => Some(DisplayMode::Terminal),
            "headless" => Some(DisplayMode::Headless),
            _ => None,
        }
    }

    /// Mode from the DISPLAY_MODE environment variable, default Auto
    pub fn from_env() -> Self {
        std::env::var("DISPLAY_MODE")
            .ok()
            .and_then(|v| Self::parse(&v))
            .unwrap_or(DisplayMode::Auto)
    }
}

/// Whether stdin and stdout are both a real terminal
pub fn is_interactive() -> bool {
    atty::is(atty::Stream::Stdin) && atty::is(atty::Stream::Stdout)
}

/// Create a display implementation for the requested mode.
///
/// Returns the display together with the mode that actually took effect,
/// so the caller knows whether raw-mode key input is active (Auto resolves
/// to ratatui or terminal, and a failed ratatui init falls back).
pub fn create_display(
    mode: DisplayMode,
) -> Result<(Box<dyn GameDisplay>, DisplayMode), DisplayError> {
    debug!(
        "creating display, mode {:?}, interactive {}",
        mode,
        is_interactive()
    );

    let wanted = match mode {
        DisplayMode::Auto => {
            if is_interactive() {
                DisplayMode::Ratatui
            } else {
                DisplayMode::Terminal
            }
        }
        m => m,
    };

    let created: (Box<dyn GameDisplay>, DisplayMode) = if wanted == DisplayMode::Ratatui {
        match RatatuiDisplay::new() {
            Ok(d) => (Box::new(d), DisplayMode::Ratatui),
            // a forced ratatui failure is an error; Auto degrades quietly
            Err(e) if mode == DisplayMode::Ratatui => return Err(e),
            Err(e) => {
                debug!("ratatui failed ({}), falling back to terminal", e);
                (Box::new(TerminalDisplay::new()), DisplayMode::Terminal)
            }
        }
    } else if wanted == DisplayMode::Headless {
        (Box::new(HeadlessDisplay::new()), DisplayMode::Headless)
    } else {
        (Box::new(TerminalDisplay::new()), DisplayMode::Terminal)
    };

    Ok(created)
}
