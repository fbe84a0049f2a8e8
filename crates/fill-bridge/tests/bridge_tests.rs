use serde_json::{json, Value};

use fill_bridge::messages::*;
use fill_bridge::*;
use gem_types::{LayoutParams, Placement, ShapePolicy, StoneShape};
use stone_layout::LayoutConfig;

// ── Helper functions ─────────────────────────────────────────────────────

fn square_mesh() -> Vec<[f64; 3]> {
    vec![[0.0, 0.0, 0.0], [10.0, 0.0, 0.0], [10.0, 10.0, 0.0], [0.0, 10.0, 0.0]]
}

fn process(request: Value) -> Value {
    let out = process_json(&LayoutConfig::default(), &request.to_string());
    serde_json::from_str(&out).unwrap()
}

fn fill_request(stone_shape: &str) -> Value {
    json!({
        "type": "AutoDiamondFill",
        "region_mesh": square_mesh(),
        "stone_size": 2.0,
        "grid_type": "pave",
        "spacing": 1.0,
        "padding": 0.0,
        "stone_shape": stone_shape,
    })
}

// ── Auto diamond fill ────────────────────────────────────────────────────

#[test]
fn fill_response_has_wire_shape() {
    let response = process(fill_request("round"));

    assert_eq!(response["type"], "DiamondFilled");
    assert_eq!(response["modified_mesh"], json!(square_mesh()));

    let report = &response["diamond_report"];
    assert_eq!(report["total_diamonds"], 16);
    assert_eq!(report["stone_size"], 2.0);
    assert_eq!(report["grid_type"], "pave");
    assert_eq!(report["spacing"], 1.0);
    assert_eq!(report["padding"], 0.0);
    assert_eq!(report["stone_shape"], "round");

    let preview = report["shapes_used"].as_array().unwrap();
    assert_eq!(preview.len(), 10);
    assert_eq!(preview[0], json!([0.0, 0.0, 0.0, "round"]));
    assert_eq!(preview[4], json!([3.0, 0.0, 0.0, "round"]));
}

#[test]
fn mixed_fill_previews_rotation() {
    let response = process(fill_request("mixed"));
    let report = &response["diamond_report"];
    assert_eq!(report["stone_shape"], "mixed");

    let shapes: Vec<&str> = report["shapes_used"]
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry[3].as_str().unwrap())
        .collect();
    assert_eq!(
        shapes,
        vec![
            "princess", "oval", "emerald", "round", "princess", "oval", "emerald", "round",
            "princess", "oval"
        ]
    );
}

#[test]
fn omitted_optional_fields_use_defaults() {
    let response = process(json!({
        "type": "AutoDiamondFill",
        "region_mesh": [[0.0, 0.0, 1.0], [4.0, 4.0, 1.0]],
        "stone_size": 1.0,
    }));
    let report = &response["diamond_report"];
    assert_eq!(report["total_diamonds"], 16);
    assert_eq!(report["grid_type"], "square");
    assert_eq!(report["stone_shape"], "round");
}

#[test]
fn typed_request_round_trips_through_dispatch() {
    let params = LayoutParams::new(2.0)
        .with_spacing(1.0)
        .with_shape(ShapePolicy::Mixed);
    let response = dispatch(
        &LayoutConfig::default(),
        Request::auto_diamond_fill(square_mesh(), params),
    );
    match response {
        Response::DiamondFilled {
            modified_mesh,
            diamond_report,
        } => {
            assert_eq!(modified_mesh, square_mesh());
            assert_eq!(diamond_report.total_diamonds, 16);
            assert_eq!(
                diamond_report.shapes_used[0],
                Placement::new(0.0, 0.0, 0.0, StoneShape::Princess)
            );
        }
        other => panic!("unexpected response: {:?}", other),
    }
}

// ── Rejections ───────────────────────────────────────────────────────────

#[test]
fn empty_region_is_client_error_without_report() {
    let mut request = fill_request("round");
    request["region_mesh"] = json!([]);
    let response = process(request);

    assert_eq!(response["type"], "Error");
    assert_eq!(response["kind"], "invalid_input");
    assert_eq!(response["message"], "invalid input: region mesh is empty");
    assert!(response.get("diamond_report").is_none());
}

#[test]
fn zero_step_is_client_error() {
    let mut request = fill_request("round");
    request["stone_size"] = json!(0.0);
    request["spacing"] = json!(0.0);
    let response = process(request);

    assert_eq!(response["kind"], "invalid_input");
    assert!(response["message"]
        .as_str()
        .unwrap()
        .contains("stone_size must be positive"));
}

#[test]
fn unknown_shape_is_malformed_request() {
    let response = process(fill_request("hexagon"));
    assert_eq!(response["type"], "Error");
    assert_eq!(response["kind"], "malformed_request");
    assert!(response["message"].as_str().unwrap().contains("hexagon"));
}

#[test]
fn missing_stone_size_is_malformed_request() {
    let response = process(json!({
        "type": "AutoDiamondFill",
        "region_mesh": square_mesh(),
    }));
    assert_eq!(response["kind"], "malformed_request");
}

#[test]
fn oversized_grid_is_rejected_by_config() {
    let config = LayoutConfig::default().with_max_placements(10);
    let out = process_json(&config, &fill_request("round").to_string());
    let response: Response = serde_json::from_str(&out).unwrap();
    match response {
        Response::Error { kind, message } => {
            assert_eq!(kind, ErrorKind::InvalidInput);
            assert!(message.contains("limit is 10"));
        }
        other => panic!("unexpected response: {:?}", other),
    }
}

// ── Other requests ───────────────────────────────────────────────────────

#[test]
fn ping_answers_ok() {
    assert_eq!(process(json!({"type": "Ping"})), json!({"type": "Pong", "ok": true}));
}

#[test]
fn list_shapes_includes_mixed_rotation() {
    let response = process(json!({"type": "ListShapes"}));
    assert_eq!(
        response["mixed_rotation"],
        json!(["round", "princess", "oval", "emerald"])
    );
    assert!(response["shapes"]
        .as_array()
        .unwrap()
        .contains(&json!("marquise")));
}

#[test]
fn unknown_request_type_is_malformed() {
    let response = process(json!({"type": "ChargeStripe", "amount": 100}));
    assert_eq!(response["kind"], "malformed_request");
}
