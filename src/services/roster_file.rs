use crate::models::Roster;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading a roster file
#[derive(Debug, Error)]
pub enum RosterFileError {
    #[error("Failed to read roster {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid roster {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Load a signup roster from a JSON file
///
/// Expected layout:
/// ```json
/// {
///   "topics": ["Rust", "Python"],
///   "participants": [
///     { "name": "Ann", "proficiency": { "Rust": "preferred", "Python": "ok" } }
///   ]
/// }
/// ```
/// Unset or unrecognized cells load as `none`.
pub fn load_roster<P: AsRef<Path>>(path: P) -> Result<Roster, RosterFileError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| RosterFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let roster = parse_roster(&raw).map_err(|source| RosterFileError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(
        "Loaded roster from {} ({} participants, {} topics)",
        path.display(),
        roster.participants.len(),
        roster.topics.len()
    );

    Ok(roster)
}

/// Parse roster JSON, dropping rows without a name
pub fn parse_roster(raw: &str) -> Result<Roster, serde_json::Error> {
    let mut roster: Roster = serde_json::from_str(raw)?;
    roster.participants.retain(|p| !p.name.trim().is_empty());
    Ok(roster)
}
