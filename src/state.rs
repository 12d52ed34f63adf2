//! Mutable per-session game state: where the player is, what they carry,
//! and the live completion vocabulary.

use crate::interpreter::{QUIT_COMMANDS, VERBS};
use crate::room::{Ending, RoomId, World};
use indexmap::IndexSet;

/// Where the player currently is. Once a game ends, there is no current
/// room any more and all input except quitting is inert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    InRoom(RoomId),
    Ended(Ending),
}

pub struct GameState {
    pub location: Location,
    /// Order-preserving, duplicate-free. Membership here is what stops a
    /// grabbable from being taken twice; keys are never consumed.
    pub inventory: IndexSet<String>,
    vocabulary: IndexSet<String>,
}

impl GameState {
    pub fn new(start: RoomId) -> Self {
        GameState {
            location: Location::InRoom(start),
            inventory: IndexSet::new(),
            vocabulary: IndexSet::new(),
        }
    }

    /// The current room id, unless the game has ended
    pub fn room_id(&self) -> Option<RoomId> {
        match self.location {
            Location::InRoom(id) => Some(id),
            Location::Ended(_) => None,
        }
    }

    pub fn ended(&self) -> bool {
        matches!(self.location, Location::Ended(_))
    }

    /// Rebuild the completion vocabulary: verbs, quit words, inventory,
    /// then the current room's exits, items and grabbables. Runs on every
    /// status refresh; this is a derived set, not persisted state.
    pub fn refresh_vocabulary(&mut self, world: &World) {
        self.vocabulary.clear();
        for verb in VERBS {
            self.vocabulary.insert(verb.to_string());
        }
        for quit in QUIT_COMMANDS {
            self.vocabulary.insert(quit.to_string());
        }
        for item in &self.inventory {
            self.vocabulary.insert(item.clone());
        }
        if let Some(id) = self.room_id() {
            let room = world.room(id);
            for exit in room.exits() {
                self.vocabulary.insert(exit.direction.clone());
            }
            for item in room.items() {
                self.vocabulary.insert(item.name.clone());
            }
            for grabbable in room.grabbables() {
                self.vocabulary.insert(grabbable.clone());
            }
        }
    }

    pub fn vocabulary(&self) -> &IndexSet<String> {
        &self.vocabulary
    }
}
