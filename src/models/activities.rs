use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Activities keyed by name, in seed order.
pub type ActivityMap = IndexMap<String, ActivityRow>;

/// One extracurricular activity as listed by `GET /activities`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRow {
    pub description: String,
    pub schedule: String,
    // Informational only, signups are not capped.
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

impl ActivityRow {
    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }
}
