//! The boundary between the game core and whatever renders it.
//!
//! The interpreter pushes three things through this trait: the composed
//! status text, the current room's image key, and named audio cues. What
//! a display does with them is its own business; the core never waits on
//! one and a cue can never fail a turn.

use crate::cues::Cue;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

pub trait GameDisplay {
    /// Replace the status pane with the given text
    fn render_status(&mut self, text: &str) -> Result<(), DisplayError>;

    /// Show the image for `image_key` (an opaque asset key)
    fn render_room_image(&mut self, image_key: &str) -> Result<(), DisplayError>;

    /// Fire-and-forget audio cue. Implementations swallow their own
    /// errors; the game never learns whether a cue was heard.
    fn play_cue(&mut self, cue: Cue);

    /// Live echo of the line being edited. Only interactive displays
    /// care; the default does nothing.
    fn echo_input(&mut self, _line: &str) {}

    /// Handle terminal resize
    fn handle_resize(&mut self, _width: u16, _height: u16) {}
}

/// A shared handle is itself a display. Lets a caller hand the
/// interpreter a display while keeping a handle to inspect it (the
/// headless recorder in tests relies on this).
impl<D: GameDisplay> GameDisplay for Rc<RefCell<D>> {
    fn render_status(&mut self, text: &str) -> Result<(), DisplayError> {
        self.borrow_mut().render_status(text)
    }

    fn render_room_image(&mut self, image_key: &str) -> Result<(), DisplayError> {
        self.borrow_mut().render_room_image(image_key)
    }

    fn play_cue(&mut self, cue: Cue) {
        self.borrow_mut().play_cue(cue);
    }

    fn echo_input(&mut self, line: &str) {
        self.borrow_mut().echo_input(line);
    }

    fn handle_resize(&mut self, width: u16, height: u16) {
        self.borrow_mut().handle_resize(width, height);
    }
}

/// Display error type
#[derive(Debug, Clone)]
pub struct DisplayError {
    pub message: String,
}

impl DisplayError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Display error: {}", self.message)
    }
}

impl std::error::Error for DisplayError {}

impl From<std::io::Error> for DisplayError {
    fn from(error: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", error))
    }
}
