use mlr_player::{
    decode_input, decode_output, encode_output, frame, strip_sentinel, ActionType, Coord,
    Direction, PlayerAction, PlayerId, PlayerInput, PlayerOutput, ProtocolError, TileType, UnitId,
    SENTINEL,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

const SCENARIO: &str = r#"{"player_id":1,"turn":0,"world":{"units":[{"id":5,"player":1,"location":[0,0]}],"tiles":[{"type":"floor","coord":[0,0]}]},"memory":null}"#;

fn input_with_tiles(tiles: serde_json::Value) -> String {
    json!({
        "player_id": 1,
        "turn": 3,
        "world": { "units": [], "tiles": tiles },
        "memory": null,
    })
    .to_string()
}

#[test]
fn decodes_scenario_line() {
    let input: PlayerInput = decode_input(SCENARIO).unwrap();
    assert_eq!(input.player_id, PlayerId(1));
    assert_eq!(input.turn, 0);
    assert_eq!(input.world.units.len(), 1);
    let unit = &input.world.units[0];
    assert_eq!(unit.id, UnitId(5));
    assert_eq!(unit.player, PlayerId(1));
    assert_eq!(unit.location, Coord::new(0, 0));
    assert_eq!(input.world.tiles[0].tile_type, TileType::Floor);
    assert!(input.memory.is_null());
}

#[test]
fn trailing_newline_is_ignored() {
    let line = format!("{}\r\n", SCENARIO);
    assert!(decode_input::<serde_json::Value>(&line).is_ok());
}

#[test]
fn coord_is_positional_pair() {
    let coord: Coord = serde_json::from_str("[3, 4]").unwrap();
    assert_eq!(coord, Coord::new(3, 4));
    assert_eq!(serde_json::to_string(&coord).unwrap(), "[3,4]");
}

#[test]
fn coord_rejects_keyed_object() {
    let line = SCENARIO.replace(r#""location":[0,0]"#, r#""location":{"x":0,"y":0}"#);
    let err = decode_input::<serde_json::Value>(&line).unwrap_err();
    assert!(matches!(err, ProtocolError::MalformedInput(_)));
}

#[test]
fn coord_rejects_wrong_arity() {
    for bad in ["[1]", "[1, 2, 3]"] {
        let line = SCENARIO.replace("[0,0]}]}", &format!("{}}}]}}", bad));
        let err = decode_input::<serde_json::Value>(&line).unwrap_err();
        assert!(err.is_malformed_input(), "{} should be rejected", bad);
    }
}

#[test]
fn unknown_tile_type_is_wall() {
    let line = input_with_tiles(json!([
        { "type": "lava", "coord": [1, 1] },
        { "type": 7, "coord": [2, 1] },
        { "type": null, "coord": [3, 1] },
        { "type": "exit", "coord": [4, 1] },
    ]));
    let input: PlayerInput = decode_input(&line).unwrap();
    let types: Vec<TileType> = input.world.tiles.iter().map(|t| t.tile_type).collect();
    assert_eq!(
        types,
        vec![TileType::Wall, TileType::Wall, TileType::Wall, TileType::Exit]
    );
}

#[test]
fn tile_without_type_is_malformed() {
    let line = input_with_tiles(json!([{ "coord": [1, 1] }]));
    assert!(decode_input::<serde_json::Value>(&line).is_err());
}

#[test]
fn missing_required_fields_are_malformed() {
    let cases = [
        json!({"turn": 1, "world": {"units": [], "tiles": []}, "memory": null}),
        json!({"player_id": 1, "world": {"units": [], "tiles": []}, "memory": null}),
        json!({"player_id": 1, "turn": 1, "memory": null}),
        json!({"player_id": 1, "turn": 1, "world": {"tiles": []}, "memory": null}),
        json!({"player_id": 1, "turn": 1, "world": {"units": []}, "memory": null}),
        json!({"player_id": 1, "turn": 1, "world": {"units": [{"id": 1, "player": 1}], "tiles": []}}),
    ];
    for case in cases {
        let err = decode_input::<serde_json::Value>(&case.to_string()).unwrap_err();
        assert!(matches!(err, ProtocolError::MalformedInput(_)), "{}", case);
    }
}

#[test]
fn not_json_is_malformed() {
    for line in ["", "   ", "hello", "{\"player_id\":", "[]"] {
        let err = decode_input::<serde_json::Value>(line).unwrap_err();
        assert!(err.is_malformed_input(), "{:?}", line);
    }
}

#[test]
fn memory_passes_through_untouched() {
    let memory = json!({"seen": [[1, 2], [3, 4]], "count": 9, "nested": {"a": null}});
    let line = json!({
        "player_id": 2,
        "turn": 10,
        "world": {"units": [], "tiles": []},
        "memory": memory,
    })
    .to_string();
    let input: PlayerInput = decode_input(&line).unwrap();
    assert_eq!(input.memory, memory);
}

#[test]
fn absent_memory_decodes_as_null() {
    let line = json!({"player_id": 2, "turn": 10, "world": {"units": [], "tiles": []}}).to_string();
    let input: PlayerInput = decode_input(&line).unwrap();
    assert!(input.memory.is_null());
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
struct Counter {
    #[serde(default)]
    turns: u64,
}

#[test]
fn typed_memory_defaults_on_null() {
    let input: PlayerInput<Counter> = decode_input(SCENARIO).unwrap();
    assert_eq!(input.memory, Counter::default());

    let line = SCENARIO.replace(r#""memory":null"#, r#""memory":{"turns":4}"#);
    let input: PlayerInput<Counter> = decode_input(&line).unwrap();
    assert_eq!(input.memory, Counter { turns: 4 });
}

#[test]
fn typed_memory_of_wrong_shape_is_malformed() {
    let line = SCENARIO.replace(r#""memory":null"#, r#""memory":"oops""#);
    let err = decode_input::<Counter>(&line).unwrap_err();
    assert!(err.is_malformed_input());
}

#[test]
fn unknown_fields_are_ignored() {
    let line = SCENARIO
        .replace(r#""turn":0"#, r#""turn":0,"version":3"#)
        .replace(r#""location":[0,0]"#, r#""location":[0,0],"hp":10"#);
    assert!(decode_input::<serde_json::Value>(&line).is_ok());
}

#[test]
fn encodes_actions_in_wire_shape() {
    let output = PlayerOutput::new(vec![
        PlayerAction::move_unit(UnitId(5), Direction::Left),
        PlayerAction::move_unit(UnitId(6), Direction::Down),
    ]);
    assert_eq!(
        encode_output(&output).unwrap(),
        r#"{"actions":[{"action":"move","unit":5,"direction":"left"},{"action":"move","unit":6,"direction":"down"}],"memory":{}}"#
    );
}

#[test]
fn every_direction_tag_is_lowercase() {
    for (dir, tag) in [
        (Direction::Left, "\"left\""),
        (Direction::Right, "\"right\""),
        (Direction::Up, "\"up\""),
        (Direction::Down, "\"down\""),
    ] {
        assert_eq!(serde_json::to_string(&dir).unwrap(), tag);
    }
    assert_eq!(serde_json::to_string(&TileType::Exit).unwrap(), "\"exit\"");
}

#[test]
fn frame_and_strip_sentinel() {
    let framed = frame("{}");
    assert_eq!(framed, "__mlr_output:{}");
    assert!(framed.starts_with(SENTINEL));
    assert_eq!(strip_sentinel(&framed), Some("{}"));
    assert_eq!(strip_sentinel("debug: {}"), None);
}

#[test]
fn decode_output_with_and_without_sentinel() {
    let json = r#"{"actions":[{"unit":5,"direction":"up"}],"memory":[1,2]}"#;
    for line in [json.to_string(), frame(json)] {
        let output: PlayerOutput = decode_output(&line).unwrap();
        assert_eq!(output.actions.len(), 1);
        assert_eq!(output.actions[0].action_type, ActionType::Move);
        assert_eq!(output.actions[0].direction, Direction::Up);
        assert_eq!(output.memory, json!([1, 2]));
    }
}

#[test]
fn unencodable_memory_is_reported() {
    use std::collections::HashMap;

    let mut memory = HashMap::new();
    memory.insert(vec![1u8, 2], "value");
    let output = PlayerOutput::with_memory(Vec::new(), memory);
    let err = encode_output(&output).unwrap_err();
    assert!(matches!(err, ProtocolError::UnencodableOutput(_)));
}

#[test]
fn decode_output_defaults_missing_memory() {
    let output: PlayerOutput = decode_output(r#"{"actions":[]}"#).unwrap();
    assert!(output.actions.is_empty());
    assert_eq!(output.memory, json!({}));

    let typed: PlayerOutput<Counter> = decode_output(r#"{"actions":[]}"#).unwrap();
    assert_eq!(typed.memory, Counter::default());

    let listed: PlayerOutput<Vec<u64>> = decode_output(r#"{"actions":[]}"#).unwrap();
    assert!(listed.memory.is_empty());
}

#[test]
fn bad_output_is_malformed_output() {
    for line in ["__mlr_output:not json", r#"{"memory":{}}"#] {
        let err = decode_output::<serde_json::Value>(line).unwrap_err();
        assert!(matches!(err, ProtocolError::MalformedOutput(_)), "{:?}", line);
        assert!(!err.is_malformed_input());
    }
}
