use serde::Serialize;

use crate::users::store::User;

/// The closed set of payload shapes the API produces. Serialized untagged so
/// the wire shape is the bare record or array.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Payload {
    User(User),
    Users(Vec<User>),
}

/// Uniform wrapper for every response body.
#[derive(Debug, Serialize)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Payload>,
}

impl ApiResponse {
    pub fn ok(message: impl Into<String>, data: Payload) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: Some(data),
        }
    }

    pub fn ok_empty(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: None,
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
        }
    }
}
