//! Audio cue identifiers and the narrative trigger table.
//!
//! Cues are fire-and-forget notifications to the display layer; they never
//! affect control flow. Which (room, verb, noun) combinations trigger a
//! narrative cue is data, not code, so the content can be tested without
//! touching the interpreter.

use std::collections::HashMap;

/// Named audio cues the interpreter can emit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    /// Any "go" command
    Move,
    /// Locked door without the required key
    Error,
    /// Any "take" command
    Pickup,
    /// Looking at the cat in the mage's room
    CatMeow,
    /// Looking at the crow on the dim pathway
    CrowCall,
    /// Looking at the crumpled note on the lit pathway
    NoteRustle,
    /// Listening at the weeping door in the main hall
    Weeping,
    /// The mage accepting the polaroid picture
    MageNote,
}

impl Cue {
    /// Asset key the display layer may resolve to an actual sound file
    pub fn asset(&self) -> &'static str {
        match self {
            Cue::Move => "click.mp3",
            Cue::Error => "error.mp3",
            Cue::Pickup => "item.mp3",
            Cue::CatMeow => "cat_meow.mp3",
            Cue::CrowCall => "crow.mp3",
            Cue::NoteRustle => "walkway_note.mp3",
            Cue::Weeping => "weeping_door.mp3",
            Cue::MageNote => "mage_note.mp3",
        }
    }
}

lazy_static! {
    /// (room name, verb, noun) -> narrative cue
    pub static ref NARRATIVE_CUES: HashMap<(&'static str, &'static str, &'static str), Cue> = {
        let mut m = HashMap::new();
        m.insert(("An_unsettling_room", "look", "cat"), Cue::CatMeow);
        m.insert(("A dimly lit pathway", "look", "crow"), Cue::CrowCall);
        m.insert(("An illuminated pathway", "look", "crumpled_note"), Cue::NoteRustle);
        m.insert(("Main hall", "look", "weeping_door"), Cue::Weeping);
        m.insert(("An_unsettling_room", "give", "polaroid_picture"), Cue::MageNote);
        m
    };
}

/// Narrative cue for a (room, verb, noun) combination, if one exists
pub fn narrative_cue(room: &str, verb: &str, noun: &str) -> Option<Cue> {
    NARRATIVE_CUES.get(&(room, verb, noun)).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn look_triggers_are_room_specific() {
        assert_eq!(
            narrative_cue("An_unsettling_room", "look", "cat"),
            Some(Cue::CatMeow)
        );
        // same noun elsewhere stays silent
        assert_eq!(narrative_cue("Main hall", "look", "cat"), None);
        // same room, different verb
        assert_eq!(narrative_cue("An_unsettling_room", "take", "cat"), None);
    }

    #[test]
    fn give_trigger_only_matches_the_mage_exchange() {
        assert_eq!(
            narrative_cue("An_unsettling_room", "give", "polaroid_picture"),
            Some(Cue::MageNote)
        );
        assert_eq!(narrative_cue("An_unsettling_room", "give", "note"), None);
    }

    #[test]
    fn every_cue_has_an_asset_key() {
        for cue in [
            Cue::Move,
            Cue::Error,
            Cue::Pickup,
            Cue::CatMeow,
            Cue::CrowCall,
            Cue::NoteRustle,
            Cue::Weeping,
            Cue::MageNote,
        ] {
            assert!(cue.asset().ends_with(".mp3"));
        }
    }
}
