//! Seed data for the collection
//!
//! Either generated (`{prefix} {id}` for ids `1..=count`) or read from a
//! JSON array of projects.

use super::collection::Collection;
use crate::config::SeedConfig;
use crate::error::{Error, Result, ResultExt};
use crate::types::Project;
use std::fs;
use std::path::Path;

/// Generate `count` projects with sequential ids starting at 1
///
/// Relay ids, when given, are assigned round-robin.
pub fn seed_projects(count: usize, name_prefix: &str, relay_ids: &[String]) -> Vec<Project> {
    (1..=count)
        .map(|n| {
            let project = Project::new(n as i64, format!("{name_prefix} {n}"));
            if relay_ids.is_empty() {
                project
            } else {
                project.with_relay_id(relay_ids[(n - 1) % relay_ids.len()].clone())
            }
        })
        .collect()
}

/// Load projects from a JSON file
pub fn load_seed_file(path: impl AsRef<Path>) -> Result<Vec<Project>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            Error::Io(e)
        }
    })?;

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse seed file '{}'", path.display()))
}

impl SeedConfig {
    /// Build the collection this seed configuration describes
    pub fn build(&self) -> Result<Collection> {
        let records = match &self.file {
            Some(path) => load_seed_file(path)?,
            None => seed_projects(self.count, &self.name_prefix, &self.relay_ids),
        };
        tracing::debug!(records = records.len(), "Seeded collection");
        Collection::new(records)
    }
}
