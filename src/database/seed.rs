use std::collections::HashSet;
use std::path::Path;

use tracing::info;

use crate::error::{AppError, Result};
use crate::models::ActivityMap;

const DEFAULT_SEED_JSON: &str = include_str!("../../data/activities.json");

/// The built-in activity table the service starts with.
pub fn default_activities() -> Result<ActivityMap> {
    parse_seed(DEFAULT_SEED_JSON)
}

/// Loads the startup table, from `path` when given, else the built-in set.
pub fn load_activities(path: Option<&Path>) -> Result<ActivityMap> {
    let Some(path) = path else {
        return default_activities();
    };

    let raw = std::fs::read_to_string(path).map_err(|source| AppError::SeedIo {
        path: path.to_path_buf(),
        source,
    })?;
    let activities = parse_seed(&raw)?;
    info!(path = %path.display(), count = activities.len(), "loaded activity seed file");
    Ok(activities)
}

fn parse_seed(raw: &str) -> Result<ActivityMap> {
    let activities: ActivityMap = serde_json::from_str(raw)?;

    for (name, activity) in &activities {
        if activity.max_participants == 0 {
            return Err(AppError::InvalidSeed {
                activity: name.clone(),
                reason: "max_participants must be positive",
            });
        }
        let mut seen = HashSet::new();
        if !activity.participants.iter().all(|p| seen.insert(p.as_str())) {
            return Err(AppError::InvalidSeed {
                activity: name.clone(),
                reason: "participant listed more than once",
            });
        }
    }

    Ok(activities)
}
