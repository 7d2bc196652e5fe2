use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const ACKNOWLEDGMENT_MESSAGE: &str = "Private API executed!!";
pub const STATUS_OK: &str = "200";
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";
pub const MEDIA_TYPE_JSON: &str = "application/json";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AcknowledgmentBody {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiGatewayResponse {
    // The deployed integration passes the status through as text, not a number.
    #[serde(rename = "statusCode")]
    pub status_code: String,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

pub fn acknowledgment_body() -> AcknowledgmentBody {
    AcknowledgmentBody {
        message: ACKNOWLEDGMENT_MESSAGE.to_string(),
    }
}

pub fn acknowledgment_response() -> ApiGatewayResponse {
    ApiGatewayResponse {
        status_code: STATUS_OK.to_string(),
        headers: BTreeMap::from([(
            HEADER_CONTENT_TYPE.to_string(),
            MEDIA_TYPE_JSON.to_string(),
        )]),
        body: stable_contract_json(acknowledgment_body()),
    }
}

pub fn stable_contract_json(value: impl Serialize) -> String {
    serde_json::to_string(&value).expect("serialization of contract value should not fail")
}
