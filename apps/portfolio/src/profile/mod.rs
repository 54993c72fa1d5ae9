// Profile loading: the compiled-in seed, or a JSON document named by PROFILE_PATH.
// Loaded and validated exactly once at startup; the result is never mutated.

pub mod handlers;
pub mod seed;
pub mod validation;

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::models::Profile;
use validation::{validate_profile, ValidationIssue};

pub use seed::default_profile;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Failed to read profile {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse profile {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid profile: {}", join_issues(.0))]
    Invalid(Vec<ValidationIssue>),
}

fn join_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Returns the profile to serve: the file at `path` if given, the seed otherwise.
pub fn load_profile(path: Option<&Path>) -> Result<Profile, ProfileError> {
    let profile = match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path).map_err(|source| ProfileError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            let profile: Profile =
                serde_json::from_str(&raw).map_err(|source| ProfileError::Parse {
                    path: path.to_path_buf(),
                    source,
                })?;
            info!("Loaded profile from {}", path.display());
            profile
        }
        None => {
            info!("Using compiled-in profile");
            default_profile()
        }
    };

    validate_profile(&profile).map_err(ProfileError::Invalid)?;
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_without_path_returns_seed() {
        let profile = load_profile(None).unwrap();
        assert_eq!(profile, default_profile());
    }

    #[test]
    fn test_load_from_json_file() {
        let mut expected = default_profile();
        expected.personal.name = "Ada Lovelace".to_string();
        expected.personal.avatar = None;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", serde_json::to_string(&expected).unwrap()).unwrap();

        let loaded = load_profile(Some(file.path())).unwrap();
        assert_eq!(loaded, expected);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_profile(Some(&dir.path().join("nope.json"))).unwrap_err();
        assert!(matches!(err, ProfileError::Io { .. }));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let err = load_profile(Some(file.path())).unwrap_err();
        assert!(matches!(err, ProfileError::Parse { .. }));
    }

    #[test]
    fn test_invalid_profile_is_rejected() {
        let mut bad = default_profile();
        bad.experience[1].id = bad.experience[0].id;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", serde_json::to_string(&bad).unwrap()).unwrap();

        let err = load_profile(Some(file.path())).unwrap_err();
        assert!(matches!(err, ProfileError::Invalid(_)));
        assert!(err.to_string().contains("duplicate job id"));
    }
}
