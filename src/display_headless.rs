//! Headless display for tests and CI: records everything, shows nothing.

use crate::cues::Cue;
use crate::display_trait::{DisplayError, GameDisplay};
use log::debug;

#[derive(Debug, Default)]
pub struct HeadlessDisplay {
    statuses: Vec<String>,
    images: Vec<String>,
    cues: Vec<Cue>,
}

impl HeadlessDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every status text rendered so far, oldest first
    pub fn statuses(&self) -> &[String] {
        &self.statuses
    }

    /// The most recent status text
    pub fn last_status(&self) -> Option<&str> {
        self.statuses.last().map(|s| s.as_str())
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn cues(&self) -> &[Cue] {
        &self.cues
    }
}

impl GameDisplay for HeadlessDisplay {
    fn render_status(&mut self, text: &str) -> Result<(), DisplayError> {
        debug!("headless: status ({} chars)", text.len());
        self.statuses.push(text.to_string());
        Ok(())
    }

    fn render_room_image(&mut self, image_key: &str) -> Result<(), DisplayError> {
        debug!("headless: image {}", image_key);
        self.images.push(image_key.to_string());
        Ok(())
    }

    fn play_cue(&mut self, cue: Cue) {
        debug!("headless: cue {:?}", cue);
        self.cues.push(cue);
    }
}
