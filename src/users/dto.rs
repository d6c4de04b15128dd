use serde::Deserialize;

/// Create payload. Any caller-supplied `id` is ignored; absent fields
/// deserialize to empty strings and are rejected by handler validation.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct ListUsersQuery {
    pub name: Option<String>,
}
