// Win, loss, quit and end-of-input handling in the controller.

mod common;

use common::{game_at, hunter_with, town_of};
use treasure_hunter::game::controller::{LOSS_TEXT, WIN_TEXT};
use treasure_hunter::game::{
    Command, Ending, GameStatus, Palette, RandomSource, ScriptedInput, ScriptedRolls, Treasure,
};

fn two_treasures() -> treasure_hunter::game::Hunter {
    let mut hunter = hunter_with("bo", &["shovel"], 20);
    hunter.add_treasure(Treasure::Trophy);
    hunter.add_treasure(Treasure::Crown);
    hunter
}

#[test]
fn third_treasure_wins_before_next_command() {
    let mut game = game_at(town_of("Plains", false), two_treasures(), &[ScriptedRolls::roll_of(3, 4)]);
    let found = game.apply(Command::Hunt);
    assert_eq!(found.message, "You found a Gem!");
    assert!(found.ended);
    assert_eq!(game.status(), GameStatus::Won);

    let gold = game.hunter().gold();
    let draws = game.rng().draws();
    let next = game.apply(Command::Dig);
    assert_eq!(next.message, WIN_TEXT);
    assert!(next.ended);
    assert_eq!(game.hunter().gold(), gold);
    assert_eq!(game.town().digs(), 0);
    assert_eq!(game.rng().draws(), draws);
    assert_eq!(game.ending(), Some(Ending::Won));
}

#[test]
fn run_stops_on_victory_with_commands_left() {
    let mut game = game_at(town_of("Plains", false), two_treasures(), &[ScriptedRolls::roll_of(3, 4)]);
    let mut input = ScriptedInput::new(["h", "d", "l"]);
    let mut out = Vec::new();
    let ending = game.run(&mut input, &mut out, Palette::plain()).unwrap();
    assert_eq!(ending, Ending::Won);
    assert_eq!(input.remaining(), 2);
    let text = String::from_utf8(out).unwrap();
    assert!(text.trim_end().ends_with(WIN_TEXT), "transcript: {}", text);
}

#[test]
fn losing_brawl_ends_the_hunt() {
    let rolls = [0.9, ScriptedRolls::roll_of(5, 10), 0.1];
    let mut game = game_at(town_of("Ocean", true), hunter_with("bo", &["shovel"], 2), &rolls);
    let brawl = game.submit("l");
    assert!(brawl.message.contains("pay 5 gold"), "{}", brawl.message);
    assert!(brawl.ended);
    assert_eq!(game.hunter().gold(), -3);

    for raw in ["d", "h", "b rope", "x"] {
        let turn = game.submit(raw);
        assert_eq!(turn.message, LOSS_TEXT, "after {:?}", raw);
    }
    assert_eq!(game.ending(), Some(Ending::Lost));
    assert_eq!(game.hunter().gold(), -3);
    assert_eq!(game.stats().brawls_lost, 1);
}

#[test]
fn run_reports_loss_immediately() {
    let rolls = [0.9, ScriptedRolls::roll_of(10, 10), 0.0];
    let mut game = game_at(town_of("Desert", true), hunter_with("bo", &[], 1), &rolls);
    let mut input = ScriptedInput::new(["l", "e"]);
    let mut out = Vec::new();
    let ending = game.run(&mut input, &mut out, Palette::plain()).unwrap();
    assert_eq!(ending, Ending::Lost);
    assert_eq!(input.remaining(), 1);
    assert!(String::from_utf8(out).unwrap().contains(LOSS_TEXT));
}

#[test]
fn zero_gold_is_still_playable() {
    let rolls = [0.9, ScriptedRolls::roll_of(4, 10), 0.1];
    let mut game = game_at(town_of("Desert", true), hunter_with("bo", &[], 4), &rolls);
    let turn = game.submit("l");
    assert_eq!(game.hunter().gold(), 0);
    assert!(!turn.ended);
    assert_eq!(game.status(), GameStatus::AtTown);
}

#[test]
fn loss_outranks_win() {
    let mut hunter = hunter_with("bo", &[], -1);
    for t in Treasure::ALL {
        hunter.add_treasure(t);
    }
    let mut game = game_at(town_of("Plains", false), hunter, &[]);
    let turn = game.apply(Command::Explore);
    assert_eq!(turn.message, LOSS_TEXT);
    assert_eq!(game.ending(), Some(Ending::Lost));
}

#[test]
fn closed_input_says_goodbye() {
    let mut game = game_at(town_of("Plains", false), hunter_with("Bo", &[], 20), &[]);
    let mut input = ScriptedInput::new(["e"]);
    let mut out = Vec::new();
    let ending = game.run(&mut input, &mut out, Palette::plain()).unwrap();
    assert_eq!(ending, Ending::InputClosed);
    assert!(String::from_utf8(out).unwrap().contains("Fare thee well, bo!"));
}

#[test]
fn summary_serializes_the_ending() {
    let mut game = game_at(town_of("Plains", false), two_treasures(), &[ScriptedRolls::roll_of(3, 4)]);
    game.apply(Command::Hunt);
    game.check_terminal();
    let json = serde_json::to_value(game.summary()).unwrap();
    assert_eq!(json["ending"], "won");
    assert_eq!(json["name"], "bo");
    assert_eq!(json["mode"], "normal");
    assert_eq!(json["treasures"].as_array().unwrap().len(), 3);
    assert_eq!(json["stats"]["turns"], 1);
}
