use serde::{Deserialize, Serialize};

/// Login form fields. Both start empty.
#[derive(Clone, Default, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Response body for the validity check.
#[derive(Debug, Serialize)]
pub struct ValidityResponse {
    pub invalid: bool,
}
