use tracing::{debug, warn};

use gem_types::{StoneShape, MIXED_ROTATION};
use stone_layout::{generate_layout_with, LayoutConfig, Point3d};

use crate::error::BridgeError;
use crate::messages::{FillRequest, Request, Response};

/// Dispatch a request to the layout generator and return a response.
///
/// Failures are folded into [`Response::Error`]; this never panics on bad
/// input.
pub fn dispatch(config: &LayoutConfig, request: Request) -> Response {
    match handle_request(config, request) {
        Ok(response) => response,
        Err(e) => error_response(&e),
    }
}

/// Parse a JSON request and dispatch it.
pub fn respond_json(config: &LayoutConfig, json_input: &str) -> Response {
    match serde_json::from_str::<Request>(json_input) {
        Ok(request) => dispatch(config, request),
        Err(e) => error_response(&BridgeError::Parse {
            reason: e.to_string(),
        }),
    }
}

/// Parse a JSON request, dispatch it, and serialize the response.
///
/// A response that fails to serialize is replaced by an `internal` error.
pub fn process_json(config: &LayoutConfig, json_input: &str) -> String {
    let response = respond_json(config, json_input);
    encode_response(&response).unwrap_or_else(|e| encode_failure(&e))
}

/// Serialize a response to JSON.
pub fn encode_response(response: &Response) -> Result<String, BridgeError> {
    serde_json::to_string(response).map_err(|e| BridgeError::Serialization {
        reason: e.to_string(),
    })
}

fn encode_failure(e: &BridgeError) -> String {
    let response = error_response(e);
    encode_response(&response).unwrap_or_else(|_| {
        r#"{"type":"Error","kind":"internal","message":"serialization error"}"#.to_string()
    })
}

fn handle_request(config: &LayoutConfig, request: Request) -> Result<Response, BridgeError> {
    match request {
        Request::AutoDiamondFill(FillRequest {
            region_mesh,
            params,
        }) => {
            let mesh: Vec<Point3d> = region_mesh.iter().copied().map(Point3d::from).collect();
            let output = generate_layout_with(&mesh, &params, config)?;
            debug!(
                total_diamonds = output.report.total_diamonds,
                "auto diamond fill complete"
            );
            Ok(Response::DiamondFilled {
                modified_mesh: output
                    .modified_mesh
                    .iter()
                    .map(Point3d::to_array)
                    .collect(),
                diamond_report: output.report,
            })
        }

        Request::ListShapes => Ok(Response::Shapes {
            shapes: StoneShape::ALL.to_vec(),
            mixed_rotation: MIXED_ROTATION.to_vec(),
        }),

        Request::Ping => Ok(Response::Pong { ok: true }),
    }
}

fn error_response(e: &BridgeError) -> Response {
    let kind = e.kind();
    if e.is_client_error() {
        warn!(error = %e, ?kind, "request rejected");
    } else {
        warn!(error = %e, "request failed");
    }
    Response::Error {
        kind,
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use gem_types::LayoutParams;

    #[test]
    fn test_ping() {
        let response = dispatch(&LayoutConfig::default(), Request::Ping);
        assert_eq!(response, Response::Pong { ok: true });
    }

    #[test]
    fn test_list_shapes_reports_rotation() {
        let response = dispatch(&LayoutConfig::default(), Request::ListShapes);
        match response {
            Response::Shapes {
                shapes,
                mixed_rotation,
            } => {
                assert_eq!(shapes.len(), StoneShape::ALL.len());
                assert_eq!(
                    mixed_rotation,
                    vec![
                        StoneShape::Round,
                        StoneShape::Princess,
                        StoneShape::Oval,
                        StoneShape::Emerald
                    ]
                );
            }
            other => panic!("unexpected response: {:?}", other),
        }
    }

    #[test]
    fn test_layout_error_is_invalid_input() {
        let request = Request::auto_diamond_fill(Vec::new(), LayoutParams::new(1.0));
        let response = dispatch(&LayoutConfig::default(), request);
        assert_eq!(
            response,
            Response::Error {
                kind: ErrorKind::InvalidInput,
                message: "invalid input: region mesh is empty".to_string(),
            }
        );
    }

    #[test]
    fn test_garbage_json_is_malformed_request() {
        let out = process_json(&LayoutConfig::default(), "{not json");
        let response: Response = serde_json::from_str(&out).unwrap();
        match response {
            Response::Error { kind, .. } => assert_eq!(kind, ErrorKind::MalformedRequest),
            other => panic!("unexpected response: {:?}", other),
        }
    }

    #[test]
    fn test_encode_response_matches_wire_form() {
        let json = encode_response(&Response::Pong { ok: true }).unwrap();
        assert_eq!(json, r#"{"type":"Pong","ok":true}"#);
    }

    #[test]
    fn test_serialization_failure_becomes_internal_error() {
        let out = encode_failure(&BridgeError::Serialization {
            reason: "number out of range".to_string(),
        });
        let response: Response = serde_json::from_str(&out).unwrap();
        assert_eq!(
            response,
            Response::Error {
                kind: ErrorKind::Internal,
                message: "serialization error: number out of range".to_string(),
            }
        );
    }

    #[test]
    fn test_serialization_error_is_not_client_error() {
        let e = BridgeError::Serialization {
            reason: "x".to_string(),
        };
        assert_eq!(e.kind(), ErrorKind::Internal);
        assert!(!e.is_client_error());
    }
}
