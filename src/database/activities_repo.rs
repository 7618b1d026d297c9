use std::sync::Arc;

use parking_lot::RwLock;

use crate::models::{ActivityMap, ActivityRow};

/// In-memory activity registry shared by all request handlers.
///
/// Clones share the same table. The write lock is held across each
/// check-then-modify on a participant list, so concurrent signups and
/// unregistrations on one activity never lose updates.
#[derive(Clone, Default)]
pub struct ActivityStore {
    inner: Arc<RwLock<ActivityMap>>,
}

impl ActivityStore {
    pub fn new(activities: ActivityMap) -> Self {
        Self {
            inner: Arc::new(RwLock::new(activities)),
        }
    }
}

/// Result of a participant list write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticipantWrite {
    Applied,
    /// The email was already in the list (insert) or absent from it (remove).
    Unchanged,
    ActivityMissing,
}

pub fn list_activities(store: &ActivityStore) -> ActivityMap {
    store.inner.read().clone()
}

pub fn load_activity(store: &ActivityStore, activity_name: &str) -> Option<ActivityRow> {
    store.inner.read().get(activity_name).cloned()
}

pub fn insert_participant(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> ParticipantWrite {
    let mut activities = store.inner.write();
    let Some(activity) = activities.get_mut(activity_name) else {
        return ParticipantWrite::ActivityMissing;
    };
    if activity.has_participant(email) {
        return ParticipantWrite::Unchanged;
    }
    activity.participants.push(email.to_string());
    ParticipantWrite::Applied
}

pub fn remove_participant(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> ParticipantWrite {
    let mut activities = store.inner.write();
    let Some(activity) = activities.get_mut(activity_name) else {
        return ParticipantWrite::ActivityMissing;
    };
    let Some(pos) = activity.participants.iter().position(|p| p == email) else {
        return ParticipantWrite::Unchanged;
    };
    // Vec::remove keeps the remaining roster in signup order.
    activity.participants.remove(pos);
    ParticipantWrite::Applied
}
