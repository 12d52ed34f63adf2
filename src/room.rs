use std::fmt;

/// Identifies a room within the world's room table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoomId(pub usize);

/// How the game ends when the player walks through a terminal exit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    /// Walked through the red door; stuck in this world
    Trapped,
    /// Made it back home with the girl
    Rescued,
}

/// Where an exit leads: another room, or straight out of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitTarget {
    Room(RoomId),
    End(Ending),
}

/// A named directed edge out of a room. Directions are arbitrary tokens
/// ("north_east", "red_door"), not restricted to compass points.
#[derive(Debug, Clone)]
pub struct Exit {
    pub direction: String,
    pub target: ExitTarget,
}

/// An examinable item and its long-form description
#[derive(Debug, Clone)]
pub struct Item {
    pub name: String,
    pub description: String,
}

/// A single room: static text and connectivity, plus a one-way lock.
///
/// The only mutation a room ever sees after world construction is its
/// locked flag flipping from locked to unlocked.
pub struct Room {
    pub name: String,
    /// Opaque asset key handed to the display layer, never interpreted here
    pub image: String,
    pub description: String,
    pub is_locked: bool,
    /// Item token the player must hold before a locked room lets them in.
    /// A locked room with no required key is always enterable.
    pub key_required: Option<String>,
    exits: Vec<Exit>,
    items: Vec<Item>,
    grabbables: Vec<String>,
}

impl Room {
    pub fn new(name: &str, image: &str) -> Self {
        Room {
            name: name.to_string(),
            image: image.to_string(),
            description: String::new(),
            is_locked: false,
            key_required: None,
            exits: Vec::new(),
            items: Vec::new(),
            grabbables: Vec::new(),
        }
    }

    /// Add an exit leading to `target`
    pub fn add_exit(&mut self, direction: &str, target: ExitTarget) {
        self.exits.push(Exit {
            direction: direction.to_string(),
            target,
        });
    }

    /// Add an examinable item with its description
    pub fn add_item(&mut self, name: &str, description: &str) {
        self.items.push(Item {
            name: name.to_string(),
            description: description.to_string(),
        });
    }

    /// Add an item the player can take into inventory
    pub fn add_grabbable(&mut self, name: &str) {
        self.grabbables.push(name.to_string());
    }

    /// Look up an exit by its direction token
    pub fn exit(&self, direction: &str) -> Option<&Exit> {
        self.exits.iter().find(|e| e.direction == direction)
    }

    /// Look up an examinable item by name
    pub fn item(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.name == name)
    }

    pub fn has_grabbable(&self, name: &str) -> bool {
        self.grabbables.iter().any(|g| g == name)
    }

    pub fn exits(&self) -> &[Exit] {
        &self.exits
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn grabbables(&self) -> &[String] {
        &self.grabbables
    }
}

impl fmt::Display for Room {
    /// Status-pane rendering of a room:
    ///   <name>
    ///   <description>
    ///   You see: <items>
    ///   Exits: <directions>
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "{}", self.description)?;

        write!(f, "You see: ")?;
        for item in &self.items {
            write!(f, "{} ", item.name)?;
        }
        writeln!(f)?;

        write!(f, "Exits: ")?;
        for exit in &self.exits {
            write!(f, "{} ", exit.direction)?;
        }

        Ok(())
    }
}

/// The room graph: built once at startup, immutable afterwards except for
/// one-way unlocking.
pub struct World {
    rooms: Vec<Room>,
}

impl World {
    pub fn new() -> Self {
        World { rooms: Vec::new() }
    }

    /// Add a room and return its id
    pub fn add_room(&mut self, room: Room) -> RoomId {
        self.rooms.push(room);
        RoomId(self.rooms.len() - 1)
    }

    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.0]
    }

    pub fn room_mut(&mut self, id: RoomId) -> &mut Room {
        &mut self.rooms[id.0]
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Clear a room's locked flag. Called exactly when a gated transition
    /// succeeds; idempotent, and never reversed.
    pub fn unlock(&mut self, id: RoomId) {
        self.rooms[id.0].is_locked = false;
    }

    /// Sanity-check the graph after construction: every exit target must
    /// exist, and exit directions must be non-empty and unique per room.
    pub fn validate(&self) -> Result<(), String> {
        for room in &self.rooms {
            let mut seen = Vec::new();
            for exit in room.exits() {
                if exit.direction.is_empty() {
                    return Err(format!("room '{}' has an unnamed exit", room.name));
                }
                if seen.contains(&exit.direction.as_str()) {
                    return Err(format!(
                        "room '{}' has duplicate exit '{}'",
                        room.name, exit.direction
                    ));
                }
                seen.push(exit.direction.as_str());

                if let ExitTarget::Room(RoomId(idx)) = exit.target {
                    if idx >= self.rooms.len() {
                        return Err(format!(
                            "room '{}' exit '{}' leads to missing room {}",
                            room.name, exit.direction, idx
                        ));
                    }
                }
            }
        }
        Ok(())
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
