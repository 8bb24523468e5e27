//! Opt-in validation of project directories.
//!
//! [`ProjectConfiguration`](crate::ProjectConfiguration) accepts any project directory and
//! leaves failures to the first filesystem access. Callers that prefer to reject bad input
//! up front run [`validate_project_dir`] before constructing one.

use crate::{ProjectError, ProjectResult};
use std::path::Path;

/// Validates that a project directory is usable as the root of a project layout.
///
/// Rejects:
/// - empty or whitespace-only strings
/// - strings containing NUL bytes, which no host filesystem accepts
/// - relative paths
///
/// Performs no I/O; the directory does not need to exist.
///
/// # Errors
///
/// Returns a `ProjectError::InvalidProjectDir` describing the first failed check.
pub fn validate_project_dir(project_dir: &str) -> ProjectResult<()> {
    if project_dir.trim().is_empty() {
        return Err(ProjectError::InvalidProjectDir(
            "project directory cannot be empty".into(),
        ));
    }

    if project_dir.contains('\0') {
        return Err(ProjectError::InvalidProjectDir(
            "project directory must not contain NUL bytes".into(),
        ));
    }

    if !Path::new(project_dir).is_absolute() {
        return Err(ProjectError::InvalidProjectDir(format!(
            "project directory must be an absolute path: {project_dir}"
        )));
    }

    Ok(())
}
