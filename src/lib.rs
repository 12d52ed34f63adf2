//! Don't Look Behind You: a text-command room adventure.
//!
//! The core is the room graph (`room`, `world`), the player state
//! (`state`), the two-word command interpreter (`interpreter`) and the
//! tab-completion engine (`completion`). Everything a player sees or
//! hears goes out through the `display_trait` boundary, with ratatui,
//! plain-terminal and headless implementations behind it.

#[macro_use]
extern crate lazy_static;

pub mod completion;
pub mod cues;
pub mod display_headless;
pub mod display_manager;
pub mod display_ratatui;
pub mod display_terminal;
pub mod display_trait;
pub mod input;
pub mod interpreter;
pub mod room;
pub mod state;
pub mod world;
