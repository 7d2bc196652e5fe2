use private_api_core::contract::{acknowledgment_response, ApiGatewayResponse};
use serde_json::{json, Value};

// The inbound event is opaque to this handler; the response never depends on it.
pub fn handle_invocation(_event: Value, request_id: &str) -> ApiGatewayResponse {
    let response = acknowledgment_response();

    log_handler_info(
        "invocation_acknowledged",
        json!({
            "request_id": request_id,
            "status_code": response.status_code.clone(),
        }),
    );

    response
}

fn log_handler_info(event: &str, details: Value) {
    eprintln!(
        "{}",
        json!({
            "component": "acknowledge_handler",
            "event": event,
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "details": details,
        })
    );
}
