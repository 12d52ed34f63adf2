//! Scripted full-game runs through the public API: the intended path to
//! the good ending (with the mage detour) and the red-door trap.

use dontlook::cues::Cue;
use dontlook::display_headless::HeadlessDisplay;
use dontlook::interpreter::{Interpreter, Outcome};
use dontlook::room::Ending;
use dontlook::state::Location;
use dontlook::world::{build_world, RESCUED_IMAGE, TRAPPED_IMAGE};
use std::cell::RefCell;
use std::rc::Rc;

fn new_game() -> (Interpreter, Rc<RefCell<HeadlessDisplay>>) {
    let (world, start) = build_world();
    world.validate().expect("world should validate");
    let recorder = Rc::new(RefCell::new(HeadlessDisplay::new()));
    let mut interpreter = Interpreter::with_display(world, start, Box::new(recorder.clone()));
    interpreter.start();
    (interpreter, recorder)
}

fn run(interpreter: &mut Interpreter, command: &str) -> String {
    match interpreter.execute(command) {
        Outcome::Response(text) => text,
        other => panic!("'{}' should produce a response, got {:?}", command, other),
    }
}

fn run_all(interpreter: &mut Interpreter, commands: &[&str]) {
    for command in commands {
        run(interpreter, command);
    }
}

fn current_room(interpreter: &Interpreter) -> &str {
    let id = interpreter.state.room_id().expect("game should be live");
    &interpreter.world.room(id).name
}

#[test]
fn full_walkthrough_to_the_good_ending() {
    let (mut game, recorder) = new_game();

    // the shears sit on the shrine four rooms in
    run_all(
        &mut game,
        &["go north_east", "go north_east", "go north", "go north"],
    );
    assert_eq!(current_room(&game), "An axiety inducing space");
    assert_eq!(run(&mut game, "take shears"), "You take shears.");

    // cut into the tall grass for the key_of_light
    run_all(&mut game, &["go south", "go south", "go south_west"]);
    assert_eq!(
        run(&mut game, "go south_east"),
        "Nice! You've unlocked this area."
    );
    assert_eq!(run(&mut game, "take key_of_light"), "You take key_of_light.");

    // visit the mage's room for the cat's key_shaped_tag
    run_all(
        &mut game,
        &["go north_west", "go north_east", "go north", "go north", "go north"],
    );
    assert_eq!(current_room(&game), "An_unsettling_room");
    assert_eq!(
        run(&mut game, "take key_shaped_tag"),
        "You take key_shaped_tag."
    );

    // into the castle
    run_all(&mut game, &["go south", "go west"]);
    assert_eq!(
        run(&mut game, "go west"),
        "Nice! You've unlocked this area."
    );
    assert_eq!(current_room(&game), "Main hall");

    // grab the polaroid from the quiet room
    run_all(&mut game, &["go west"]);
    assert_eq!(
        run(&mut game, "take polaroid_picture"),
        "You take polaroid_picture."
    );

    // trade it with the mage for the note
    run_all(&mut game, &["go east", "go east", "go east", "go north"]);
    let reveal = run(&mut game, "give polaroid_picture");
    assert!(reveal.contains("'Save Lumi'"));
    assert!(game.state.inventory.contains("note"));
    assert!(!game.state.inventory.contains("polaroid_picture"));
    assert!(recorder.borrow().cues().contains(&Cue::MageNote));

    // down to the vault for the heartwarming_photo
    run_all(&mut game, &["go south", "go west", "go west", "go south"]);
    assert_eq!(
        run(&mut game, "go south"),
        "Nice! You've unlocked this area."
    );
    assert_eq!(current_room(&game), "The vault");
    assert_eq!(
        run(&mut game, "take heartwarming_photo"),
        "You take heartwarming_photo."
    );

    // up to the girl and back home
    run_all(&mut game, &["go north", "go north"]);
    assert_eq!(
        run(&mut game, "go north"),
        "Nice! You've unlocked this area."
    );
    assert_eq!(current_room(&game), "A brightly lit room");
    let girl = run(&mut game, "look the_girl");
    assert!(girl.contains("lunges herself into your arms"));

    run(&mut game, "go back_home");
    assert_eq!(game.state.location, Location::Ended(Ending::Rescued));
    assert_eq!(game.image_key(), RESCUED_IMAGE);
    assert_eq!(
        game.status_text(""),
        "Nice! You saved your friend and returned home!\n"
    );

    // the ended game ignores everything except quitting
    assert_eq!(game.execute("go south"), Outcome::Ignored);
    assert_eq!(game.execute("quit"), Outcome::Terminate);
}

#[test]
fn the_red_door_is_a_trap() {
    let (mut game, _recorder) = new_game();

    // shears, key_of_light, then straight to the quiet room
    run_all(
        &mut game,
        &[
            "go north_east",
            "go north_east",
            "go north",
            "go north",
            "take shears",
            "go south",
            "go south",
            "go south_west",
            "go south_east",
            "take key_of_light",
            "go north_west",
            "go north_east",
            "go north",
            "go north",
            "go west",
            "go west",
            "go west",
        ],
    );
    assert_eq!(current_room(&game), "A quiet room");

    run(&mut game, "go red_door");
    assert_eq!(game.state.location, Location::Ended(Ending::Trapped));
    assert_eq!(game.image_key(), TRAPPED_IMAGE);
    assert!(game.status_text("").contains("trapped here forever!"));

    assert_eq!(game.execute("go east"), Outcome::Ignored);
    assert_eq!(game.execute("look wall"), Outcome::Ignored);
    assert_eq!(game.execute("exit"), Outcome::Terminate);
}

#[test]
fn completion_tracks_the_room_vocabulary() {
    let (mut game, _recorder) = new_game();

    // in the first room, "ca" can only be the candle
    let done = game.complete_input("look ca");
    assert_eq!(done.line, "look candle ");
    assert!(done.replaced);

    // one room on, candle is gone from the vocabulary
    run(&mut game, "go north_east");
    let done = game.complete_input("look ca");
    assert_eq!(done.line, "look ca");
    assert!(!done.replaced);

    // and the exits here share a south prefix
    let done = game.complete_input("go south");
    assert_eq!(done.line, "go south_");
}

#[test]
fn locked_doors_refuse_until_the_key_is_held() {
    let (mut game, recorder) = new_game();

    run(&mut game, "go north_east");
    assert_eq!(
        run(&mut game, "go south_east"),
        "You can't enter this area yet.\nYou need shears to progress."
    );
    assert_eq!(current_room(&game), "A sufficating pathway");
    assert!(recorder.borrow().cues().contains(&Cue::Error));
}
