//! The two-word command interpreter.
//!
//! `execute` takes one raw input line and resolves it completely: every
//! branch ends in a response string, a quit request, or (once the game
//! has ended) silence. Nothing in here can fail a turn; invalid input is
//! answered, not raised.

use crate::completion::{complete, Completion};
use crate::cues::{narrative_cue, Cue};
use crate::display_trait::GameDisplay;
use crate::room::{Ending, ExitTarget, RoomId, World};
use crate::state::{GameState, Location};
use crate::world::{
    MAGE_ROOM, RESCUED_IMAGE, RESCUED_TEXT, TRAPPED_IMAGE, TRAPPED_TEXT, WELCOME_TEXT,
};
use log::debug;

/// The supported vocabulary verbs
pub const VERBS: [&str; 4] = ["go", "look", "take", "give"];
/// The supported quit commands
pub const QUIT_COMMANDS: [&str; 3] = ["exit", "quit", "bye"];

/// What a single executed command amounts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A normal turn with its player-facing response
    Response(String),
    /// The game is over; input is inert
    Ignored,
    /// Player asked to leave. The caller exits the process with status 0;
    /// the interpreter itself never calls exit.
    Terminate,
}

fn help_text() -> String {
    format!(
        "I don't understand. Try verb noun. Valid verbs\nare {}.",
        VERBS.join(", ")
    )
}

/// The game session: room graph, player state and the display it reports
/// to. Constructed explicitly and passed around; there are no globals.
pub struct Interpreter {
    pub world: World,
    pub state: GameState,
    display: Option<Box<dyn GameDisplay>>,
}

impl Interpreter {
    pub fn new(world: World, start: RoomId) -> Self {
        let mut state = GameState::new(start);
        state.refresh_vocabulary(&world);
        Interpreter {
            world,
            state,
            display: None,
        }
    }

    pub fn with_display(world: World, start: RoomId, display: Box<dyn GameDisplay>) -> Self {
        let mut interpreter = Self::new(world, start);
        interpreter.display = Some(display);
        interpreter
    }

    /// Present the opening status and scene
    pub fn start(&mut self) {
        self.present(WELCOME_TEXT);
    }

    /// Execute one raw input line
    pub fn execute(&mut self, raw: &str) -> Outcome {
        let action = raw.trim().to_lowercase();
        debug!("execute: '{}'", action);

        // quitting works in every state, including after an ending
        if QUIT_COMMANDS.contains(&action.as_str()) {
            return Outcome::Terminate;
        }

        let room_id = match self.state.room_id() {
            Some(id) => id,
            None => return Outcome::Ignored,
        };

        let words: Vec<&str> = action.split_whitespace().collect();
        let response = match words.as_slice() {
            [verb, noun] => self.dispatch(room_id, verb, noun),
            _ => help_text(),
        };

        self.present(&response);
        Outcome::Response(response)
    }

    fn dispatch(&mut self, room_id: RoomId, verb: &str, noun: &str) -> String {
        match verb {
            "go" => self.do_go(room_id, noun),
            "look" => self.do_look(room_id, noun),
            "take" => self.do_take(room_id, noun),
            "give" => self.do_give(room_id, noun),
            _ => help_text(),
        }
    }

    fn do_go(&mut self, room_id: RoomId, noun: &str) -> String {
        // the move cue belongs to the verb, valid exit or not
        self.play_cue(Cue::Move);

        let target = match self.world.room(room_id).exit(noun) {
            Some(exit) => exit.target,
            None => return "You can't go in that direction.".to_string(),
        };

        match target {
            ExitTarget::End(ending) => {
                debug!("ending reached: {:?}", ending);
                self.state.location = Location::Ended(ending);
                "You continue through the walkway.".to_string()
            }
            ExitTarget::Room(next) => {
                // the gate only exists while the room is locked AND names a key
                let gate = {
                    let room = self.world.room(next);
                    if room.is_locked {
                        room.key_required.clone()
                    } else {
                        None
                    }
                };
                match gate {
                    Some(key) if self.state.inventory.contains(key.as_str()) => {
                        // unlocking is permanent; the key stays in inventory
                        self.world.unlock(next);
                        self.state.location = Location::InRoom(next);
                        "Nice! You've unlocked this area.".to_string()
                    }
                    Some(key) => {
                        self.play_cue(Cue::Error);
                        format!(
                            "You can't enter this area yet.\nYou need {} to progress.",
                            key
                        )
                    }
                    None => {
                        self.state.location = Location::InRoom(next);
                        "You continue through the walkway.".to_string()
                    }
                }
            }
        }
    }

    fn do_look(&mut self, room_id: RoomId, noun: &str) -> String {
        let room = self.world.room(room_id);
        let response = match room.item(noun) {
            Some(item) => item.description.clone(),
            None => return "You don't see that item.".to_string(),
        };
        let cue = narrative_cue(&room.name, "look", noun);
        if let Some(cue) = cue {
            self.play_cue(cue);
        }
        response
    }

    fn do_take(&mut self, room_id: RoomId, noun: &str) -> String {
        // the pickup cue belongs to the verb, success or not
        self.play_cue(Cue::Pickup);

        // the room's grabbable list is never pruned; inventory membership
        // is the only guard against a second pickup
        if self.world.room(room_id).has_grabbable(noun) && !self.state.inventory.contains(noun) {
            self.state.inventory.insert(noun.to_string());
            format!("You take {}.", noun)
        } else {
            "You don't see that item.".to_string()
        }
    }

    /// The one give rule in the game: the mage trades the polaroid
    /// picture for a note. Deliberately not a general give system.
    fn do_give(&mut self, room_id: RoomId, noun: &str) -> String {
        if self.world.room(room_id).name != MAGE_ROOM {
            return "There's no one here who wants that.".to_string();
        }
        if noun != "polaroid_picture" {
            return "She doesn't want that.".to_string();
        }
        if !self.state.inventory.shift_remove("polaroid_picture") {
            return "You don't have what she is looking for".to_string();
        }

        self.state.inventory.insert("note".to_string());
        if let Some(cue) = narrative_cue(MAGE_ROOM, "give", "polaroid_picture") {
            self.play_cue(cue);
        }
        "You give the mage the polaroid_picture.\n\nThe mage hands you back a note.\n\nIt reads:\n\n'Save Lumi'\n---------"
            .to_string()
    }

    /// Complete the last token of a partial input line against the
    /// current vocabulary
    pub fn complete_input(&self, partial: &str) -> Completion {
        complete(partial, self.state.vocabulary())
    }

    /// Forward the in-progress input line to the display
    pub fn echo_input(&mut self, line: &str) {
        if let Some(display) = &mut self.display {
            display.echo_input(line);
        }
    }

    /// Forward a terminal resize to the display
    pub fn handle_resize(&mut self, width: u16, height: u16) {
        if let Some(display) = &mut self.display {
            display.handle_resize(width, height);
        }
    }

    /// Refresh the vocabulary and push status text and scene image to the
    /// display. Runs after every executed command.
    fn present(&mut self, response: &str) {
        self.state.refresh_vocabulary(&self.world);
        let status = self.status_text(response);
        let image = self.image_key().to_string();
        if let Some(display) = &mut self.display {
            if let Err(e) = display.render_status(&status) {
                debug!("status render failed: {}", e);
            }
            if let Err(e) = display.render_room_image(&image) {
                debug!("image render failed: {}", e);
            }
        }
    }

    /// The full status pane text for a given response
    pub fn status_text(&self, response: &str) -> String {
        match self.state.location {
            Location::Ended(Ending::Rescued) => format!("{}\n", RESCUED_TEXT),
            Location::Ended(Ending::Trapped) => TRAPPED_TEXT.to_string(),
            Location::InRoom(id) => {
                let held: Vec<&String> = self.state.inventory.iter().collect();
                format!(
                    "{}\n\n{}\nYou are carrying: {:?}\n\n",
                    response,
                    self.world.room(id),
                    held
                )
            }
        }
    }

    /// Asset key for the current scene
    pub fn image_key(&self) -> &str {
        match self.state.location {
            Location::Ended(Ending::Trapped) => TRAPPED_IMAGE,
            Location::Ended(Ending::Rescued) => RESCUED_IMAGE,
            Location::InRoom(id) => &self.world.room(id).image,
        }
    }

    fn play_cue(&mut self, cue: Cue) {
        debug!("cue: {:?}", cue);
        if let Some(display) = &mut self.display {
            display.play_cue(cue);
        }
    }
}
