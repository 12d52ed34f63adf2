//! Plain stdout display for piped input and dumb terminals.
//!
//! Status text goes straight to stdout, the image is reduced to a one-line
//! marker, and cues are only logged. This is what `echo "go north" |
//! dontlook` talks to.

use crate::cues::Cue;
use crate::display_trait::{DisplayError, GameDisplay};
use log::debug;
use std::io::{self, Write};

pub struct TerminalDisplay {
    out: io::Stdout,
}

impl TerminalDisplay {
    pub fn new() -> Self {
        TerminalDisplay { out: io::stdout() }
    }
}

impl Default for TerminalDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl GameDisplay for TerminalDisplay {
    fn render_status(&mut self, text: &str) -> Result<(), DisplayError> {
        writeln!(self.out, "{}", text)?;
        self.out.flush()?;
        Ok(())
    }

    fn render_room_image(&mut self, image_key: &str) -> Result<(), DisplayError> {
        writeln!(self.out, "[scene: {}]", image_key)?;
        Ok(())
    }

    fn play_cue(&mut self, cue: Cue) {
        debug!("cue: {:?} ({})", cue, cue.asset());
    }
}
