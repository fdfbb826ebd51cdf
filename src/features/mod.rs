pub mod health;
pub mod students;
pub mod submarks;

use serde::{Deserialize, Serialize};

// flat success payload shared by the write endpoints
#[derive(Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn success() -> Self {
        Self {
            message: "Success".to_string(),
        }
    }
}

// trim surrounding whitespace from a client-supplied field; empty after
// trimming counts as absent
pub(crate) fn trimmed_field(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|trimmed| !trimmed.is_empty())
        .map(str::to_string)
}
