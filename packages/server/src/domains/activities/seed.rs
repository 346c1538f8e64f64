//! Seed roster loading.
//!
//! The default roster is embedded at compile time. `ACTIVITIES_SEED_PATH`
//! can point at a JSON file of the same shape to replace it.

use anyhow::{bail, Context, Result};
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

use super::registry::Roster;

const DEFAULT_SEED: &str = include_str!("../../../seed/activities.json");

/// The roster shipped with the binary.
pub fn default_roster() -> Result<Roster> {
    parse_roster(DEFAULT_SEED).context("Embedded seed roster is invalid")
}

/// Load a roster from a JSON file on disk.
pub fn load_roster(path: &Path) -> Result<Roster> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file {}", path.display()))?;
    let roster = parse_roster(&raw)
        .with_context(|| format!("Invalid seed file {}", path.display()))?;
    info!(path = %path.display(), activities = roster.len(), "Loaded seed roster");
    Ok(roster)
}

/// Seed file if configured, embedded roster otherwise.
pub fn initial_roster(seed_path: Option<&Path>) -> Result<Roster> {
    match seed_path {
        Some(path) => load_roster(path),
        None => default_roster(),
    }
}

/// Parse and validate a roster document.
pub fn parse_roster(raw: &str) -> Result<Roster> {
    let roster: Roster = serde_json::from_str(raw).context("Seed roster is not valid JSON")?;
    validate_roster(&roster)?;
    Ok(roster)
}

fn validate_roster(roster: &Roster) -> Result<()> {
    for (name, activity) in roster {
        if name.trim().is_empty() {
            bail!("Activity names must not be blank");
        }
        if activity.max_participants == 0 {
            bail!("Activity '{}' must allow at least one participant", name);
        }
        if activity.participants.len() > activity.max_participants as usize {
            bail!(
                "Activity '{}' is seeded with {} participants but allows {}",
                name,
                activity.participants.len(),
                activity.max_participants
            );
        }

        let mut seen = HashSet::new();
        for email in &activity.participants {
            if !seen.insert(email.as_str()) {
                bail!("Activity '{}' lists {} more than once", name, email);
            }
        }
    }
    Ok(())
}
