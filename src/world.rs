//! Static game content for "Don't Look Behind You".
//!
//! Thirteen playable rooms plus two sentinel endings (the red-door trap
//! and the way back home). Built once at startup; nothing here is
//! algorithmically interesting, it is the game's data.

use crate::room::{Ending, ExitTarget, Room, RoomId, World};

/// Room where the mage waits for the polaroid picture
pub const MAGE_ROOM: &str = "An_unsettling_room";

pub const WELCOME_TEXT: &str = "Welcome To: Don't Look Behind You!";

pub const TRAPPED_TEXT: &str =
    "Oh no! You walked through the red_door and are now \ntrapped here forever!";
pub const RESCUED_TEXT: &str = "Nice! You saved your friend and returned home!";

pub const TRAPPED_IMAGE: &str = "bad_ending.png";
pub const RESCUED_IMAGE: &str = "good_ending.png";

/// Build the full room graph. Returns the world and the starting room.
pub fn build_world() -> (World, RoomId) {
    let mut w = World::new();

    let r1 = w.add_room(Room::new("An unfamiliar world ", "room1.png"));
    let r2 = w.add_room(Room::new("A sufficating pathway", "room2.png"));
    let r2b = w.add_room(Room::new("Tall dark grass", "room2b.png"));
    let r3 = w.add_room(Room::new("An uncomfortbale space", "room3.png"));
    let r4 = w.add_room(Room::new("A dimly lit pathway", "room4.png"));
    let r5 = w.add_room(Room::new("An axiety inducing space", "room5.png"));
    let r6 = w.add_room(Room::new(MAGE_ROOM, "room6.png"));
    let r7 = w.add_room(Room::new("An illuminated pathway", "room7.png"));
    let r8 = w.add_room(Room::new("Main hall", "room8.png"));
    let r9 = w.add_room(Room::new("A quiet room", "room9.png"));
    let r10 = w.add_room(Room::new("A chaotic Room", "room10.png"));
    let r10b = w.add_room(Room::new("The vault", "room10b.png"));
    let r11 = w.add_room(Room::new("A brightly lit room", "room11.png"));

    // Room 1: where the player wakes up
    {
        let room = w.room_mut(r1);
        room.description = "\nYou analyze your surroundings and see that you are in a small room where both the walls and floors are made of \nold, smelly wood.\n".to_string();
        room.add_exit("north_east", ExitTarget::Room(r2));
        room.add_item("candle", "You see a small wooden table on it, rests a candle.\n\nIt is a long wick candle that appears to have been \nburning for some time. You hold the candle by its metal stand and remember the warm feeling it brings to your \nhand. \n\nYou close your eyes to savor the warm feeling when \nsuddenly you are teleported to another room.\n\nYou feel the strong urge to keep your eyes closed and \nattempt to analyze the room with your eyes shut.\n\nYou're sitting with your legs crossed on a hard floor \ncovered by a rug; the room feels frigid.\n\nAs you listen closer to the sounds around you, you \nnotice the sound of someone breathing right next to you.\n\n'Remember to keep your eyes closed.' The voice says.\n\nThe abrupt sound startles you, and against all warnings, \nyou reflexively open your eyes to find yourself \nback in the room you had woken up in.\n--------------");
    }

    // Room 2
    {
        let room = w.room_mut(r2);
        room.description =
            "\nYou're outside and surrounded by tall grass.\nUnderneath your feet lies a dirt path.\n"
                .to_string();
        room.add_exit("south_west", ExitTarget::Room(r1));
        room.add_exit("north_east", ExitTarget::Room(r3));
        room.add_exit("south_east", ExitTarget::Room(r2b));
        room.add_item("tall_grass", "You look closely into the grass and see something shiny,\nbut it's too far out to reach...\n\nMaybe if you got something to cut down the grass a bit you could reach it...\n-----------------");
    }

    // Room 2b: the tall grass, needs the shears
    {
        let room = w.room_mut(r2b);
        room.description = "\nYou step into the tall grass.\n".to_string();
        room.is_locked = true;
        room.key_required = Some("shears".to_string());
        room.add_exit("north_west", ExitTarget::Room(r2));
        room.add_item("ground", "You look at the ground beneath your feet and realize \nthat the *key_of_light* is within reach!\n----------------");
        room.add_grabbable("key_of_light");
    }

    // Room 3
    {
        let room = w.room_mut(r3);
        room.description = "\nThe room is similar in both exterior and interior to \nthe room you began in.\n".to_string();
        room.add_exit("north", ExitTarget::Room(r4));
        room.add_exit("south_west", ExitTarget::Room(r2));
        room.add_item("rug", "You look down to get a closer look at the rug.\nIt looks familiar but appears to be overdue for a wash.\n---------------");
        room.add_item("hairclip", "The large wooden table appears to have a pair of \nscissors and a hairclip resting on it.\n\nThe hairclip seems familiar, and as you look at it,\na flash of memory comes to mind.\n\nIn the memory, you appear next to a girl who's fairly \nsmaller than yourself.\n\nYou can't get a good look at her face but can clearly \nsee the butterfly-shaped hair clip that is holding \nher light brown hair back.\n\nYou can sense that the hairclip is special not only to \nthe girl but you as well.\n----------------");
    }

    // Room 4
    {
        let room = w.room_mut(r4);
        room.description = "\nYou find yourself on a path outside that's surrounded \nby tall stocks of grass.\n".to_string();
        room.add_exit("north", ExitTarget::Room(r5));
        room.add_exit("south", ExitTarget::Room(r3));
        room.add_item("crow", "You look up to see a crow perched up on a tall \nnearby tree.\n---------");
        room.add_item(
            "grass",
            "Large stocks of grass overwhelm you from all directions.\n----------------",
        );
    }

    // Room 5: the shears rest here
    {
        let room = w.room_mut(r5);
        room.description = "\nThis room appears to be the same as the first.\nThe only difference between the two being a \nstrong smell of tuna that fills the room.\n".to_string();
        room.add_exit("north", ExitTarget::Room(r6));
        room.add_exit("west", ExitTarget::Room(r7));
        room.add_exit("south", ExitTarget::Room(r4));
        room.add_grabbable("shears");
        room.add_item("shrine", "An empty shrine sits to the right of the room.\nOn it rests some *shears*...perfect for cutting grass.\n----------");
    }

    // Room 6: the mage and the cat
    {
        let room = w.room_mut(r6);
        room.description = "\nYou're not alone in the room you have just entered.\nThere is a mage and black cat accompying this space \nas well.\n".to_string();
        room.add_exit("south", ExitTarget::Room(r5));
        room.add_grabbable("key_shaped_tag");
        room.add_item("cat", "A black cat sits to the right of you wearing a \ncolar with a *key_shaped_tag*.\n\nFor a moment, you wonder if the cat belongs to the mage but you remember it belongs to her, the girl with the \nbutterfly-shaped hairclip.\n\nYou can recall several memories of the girl calling out for the missing kitty.\n\nIt's as if her voice is in the same room as you as she \ncalls out for her cat, Ame.\n-----------");
        room.add_item("mage", "The mage that sits in front of you appears to be \nholding a note.\n\nHer face is covered along with the rest of her body \nwith a plum-colored cloak.\n\nYou can see her long dark hair spilling out the sides \nof the hooded cloth.\n\nShe doesn't appear to be willing to communicate.\n---------");
    }

    // Room 7
    {
        let room = w.room_mut(r7);
        room.description = "\nYou step outside and are surrounded by tall stocks \nof grass.To the west of you appears to be a large \ncastle made of stone.\n".to_string();
        room.add_exit("west", ExitTarget::Room(r8));
        room.add_exit("east", ExitTarget::Room(r5));
        room.add_item("crumpled_note", "You pick up a crumpled note and look at what it \nhas to say.\n\nYou take note to the snake that is carefully drawn in \nthe top right hand side of the paper.\n\nThe note reads: \n\n'If this world is to much, seek the red_door. There you will be able to leave this world without consequence.'\n--------");
        room.add_item("moon", "Though your situation is less than ideal, the \nmoon continues to shine beautifully.\n-------------");
        room.add_item(
            "grass",
            "Large stocks of grass overwhelm you from all directions.\n------------",
        );
    }

    // Room 8: the castle hallway, needs the key_of_light
    {
        let room = w.room_mut(r8);
        room.description = "\nYou enter a castle hallway with multiple exits \nsurrounding you from all different directions.\n\nThe interior of the hallway is similar to the \npreviously visited rooms; however, a strange sound \nemits from one of the doors.\n".to_string();
        room.is_locked = true;
        room.key_required = Some("key_of_light".to_string());
        room.add_exit("north", ExitTarget::Room(r11));
        room.add_exit("east", ExitTarget::Room(r7));
        room.add_exit("south", ExitTarget::Room(r10));
        room.add_exit("west", ExitTarget::Room(r9));
        room.add_item("skull", "You notice a skull sitting in the corner of the room.\nYou watch a spider crawl out of one of the eye sockets.\n--------------");
        room.add_item("weeping_door", "You put your ear up to the door the \nsound is coming from.\n\nYou can hear a girl crying, and when you call out to \nher, the crying seems to come to a stop.\n------------");
    }

    // Room 9: the quiet room and the red door
    {
        let room = w.room_mut(r9);
        room.description = "\nThis room is different than the ones you had visited \nbefore.\n\nThe interior appears to be more up-to-date with \ngrey wallpaper encasing the walls and a modern wood \nfloor that lies underneath your feet.\n".to_string();
        room.add_exit("east", ExitTarget::Room(r8));
        room.add_exit("red_door", ExitTarget::End(Ending::Trapped));
        room.add_item("wall", "A *polaroid_picture* is pinned onto one of the walls,\nand you decide to take a closer look.\n\nIt's a picture of you and the butterfly girl.\n-----------------");
        room.add_grabbable("polaroid_picture");
    }

    // Room 10
    {
        let room = w.room_mut(r10);
        room.description = "\nThe room is filled with stones all around, both its \nfloor and walls.\n\nPhotographs featuring the items you had previously \nseen are spread out across the floor.\n".to_string();
        room.add_item("cat_photo", "You examine the photo of the Ame, this is her cat.\n\nYou can recall the day in which the two of you had \nsaved the cat.\n\nIt was a rainy afternoon and the two of you had heard a faint cry coming from a nearby ally.\n\nYou went to investigate the sound and found a \nblack kitten tangled up in some trash.\n\nYou removed the trash and the butterfly girl took \nthe small cat into her arms as the two of \nyou walked home.\n----------");
        room.add_item("hair_clip_photo", "You pick up a photo of the girl facing away from \nthe camera.\n\nThe butterfly_clip is visable in the photo and you \nremember the day you gave it to her.\n\nYou spent many hours crafting the clip to be perfect \nfor her.\n--------------");
        room.add_item("candle_photo", "It's a photo of the candle you had seen when you first \narrived in this world.\n\nThe candle is sitting in the middle of a room you had \nspent most of your time in.\n\nIt reminds you how you got here.\n\nSuddenly a rush of memories comes flooding back, and \nyou are reminded of why you are here.\n\nYou and your friend had decided to partake in a silly \nritual the two of you found online.\n\nYou remember that during your turn to participate,\nyou had been startled and accidentally opened your eyes,\nwhich led you to where you are now.\n----------");
        room.add_exit("north", ExitTarget::Room(r8));
        room.add_exit("south", ExitTarget::Room(r10b));
    }

    // Room 10b: the vault, needs the key_shaped_tag
    {
        let room = w.room_mut(r10b);
        room.description = "\nYou step into a room that seems to be made of crystals.\nIn the middle of the room lays a photo_book\n".to_string();
        room.add_item("photo_book", "You briefly pick up a large photo album, it's full of \npictures featuring you and the girl.\n\nA *heartwarming_photo* falls out of the book.\n-----------");
        room.add_exit("north", ExitTarget::Room(r10));
        room.is_locked = true;
        room.key_required = Some("key_shaped_tag".to_string());
        room.add_grabbable("heartwarming_photo");
    }

    // Room 11: the girl, and the way back home
    {
        let room = w.room_mut(r11);
        room.description = "\nYou enter a room that seems to be brighter than all the spaces you have previously encountered.\nIn the center of the room is a girl who is on her knees sobbing into her hands.\n".to_string();
        room.is_locked = true;
        room.key_required = Some("heartwarming_photo".to_string());
        room.add_item("the_girl", "The girl looks up and lunges herself into your arms \nfrom off the floor.\n\nShe immediately wraps her arms around your neck \nfor a hug.\n\nShe reaches out for your hand ready to return back to \nyour original world.\n-----------");
        room.add_exit("back_home", ExitTarget::End(Ending::Rescued));
    }

    (w, r1)
}
