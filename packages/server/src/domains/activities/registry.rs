use indexmap::IndexMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

use super::errors::RegistryError;
use super::models::Activity;

/// Activity name -> activity, in seed order.
pub type Roster = IndexMap<String, Activity>;

/// Which way an enrollment changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrollmentChange {
    Added,
    Removed,
}

/// Confirmation returned by a successful signup or removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrollment {
    pub email: String,
    pub activity: String,
    pub change: EnrollmentChange,
}

impl Enrollment {
    /// Human-readable confirmation embedding both the email and the activity.
    pub fn message(&self) -> String {
        match self.change {
            EnrollmentChange::Added => format!("{} added to {}", self.email, self.activity),
            EnrollmentChange::Removed => format!("{} removed from {}", self.email, self.activity),
        }
    }
}

/// In-memory activity registry
///
/// Constructed once at startup and shared with handlers through router
/// state. Signup and remove hold the write lock across the whole
/// read-check-write so the duplicate and membership checks cannot race.
#[derive(Clone, Default)]
pub struct ActivityRegistry {
    activities: Arc<RwLock<Roster>>,
}

impl ActivityRegistry {
    pub fn new(seed: Roster) -> Self {
        Self {
            activities: Arc::new(RwLock::new(seed)),
        }
    }

    /// Snapshot of every activity with its current roster.
    pub async fn list_activities(&self) -> Roster {
        self.activities.read().await.clone()
    }

    /// Snapshot of a single activity
    pub async fn get(&self, name: &str) -> Option<Activity> {
        self.activities.read().await.get(name).cloned()
    }

    pub async fn len(&self) -> usize {
        self.activities.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.activities.read().await.is_empty()
    }

    /// Sign `email` up for `activity_name`.
    ///
    /// Capacity is not checked: the roster may grow past `max_participants`.
    pub async fn signup(
        &self,
        activity_name: &str,
        email: &str,
    ) -> Result<Enrollment, RegistryError> {
        let mut activities = self.activities.write().await;
        let activity = lookup(&mut activities, activity_name)?;

        if activity.is_signed_up(email) {
            debug!(activity = %activity_name, email = %email, "Duplicate signup rejected");
            return Err(RegistryError::AlreadySignedUp);
        }

        activity.enroll(email.to_string());
        info!(
            activity = %activity_name,
            email = %email,
            spots_left = activity.spots_left(),
            "Student signed up"
        );

        Ok(Enrollment {
            email: email.to_string(),
            activity: activity_name.to_string(),
            change: EnrollmentChange::Added,
        })
    }

    /// Remove `email` from `activity_name`.
    pub async fn remove(
        &self,
        activity_name: &str,
        email: &str,
    ) -> Result<Enrollment, RegistryError> {
        let mut activities = self.activities.write().await;
        let activity = lookup(&mut activities, activity_name)?;

        if !activity.withdraw(email) {
            debug!(activity = %activity_name, email = %email, "Removal of unknown participant rejected");
            return Err(RegistryError::NotSignedUp);
        }

        info!(activity = %activity_name, email = %email, "Student removed");

        Ok(Enrollment {
            email: email.to_string(),
            activity: activity_name.to_string(),
            change: EnrollmentChange::Removed,
        })
    }
}

/// Exact-match lookup. Blank names never match.
fn lookup<'a>(roster: &'a mut Roster, name: &str) -> Result<&'a mut Activity, RegistryError> {
    if name.trim().is_empty() {
        return Err(RegistryError::ActivityNotFound);
    }
    roster.get_mut(name).ok_or_else(|| {
        debug!(activity = %name, "Unknown activity");
        RegistryError::ActivityNotFound
    })
}
