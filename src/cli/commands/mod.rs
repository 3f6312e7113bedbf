//! Command handlers.
//!
//! Each handler is a single request/response cycle: build the request,
//! call the API, interpret status and body, render or print a fixed
//! confirmation. Argument-count validation is clap's job.

pub mod bind;
pub mod create;
pub mod delete;
pub mod info;
pub mod list;
pub mod plan;
pub mod update;

use crate::error::{Result, VolumectlError};

/// Resolves the target application for bind/unbind: the `-a/--app` flag, or
/// the `VOLUMECTL_APP` environment fallback clap wires into it.
pub(crate) fn resolve_app_name(app: Option<String>) -> Result<String> {
    match app {
        Some(name) if !name.is_empty() => Ok(name),
        _ => Err(VolumectlError::MissingAppName),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_app_name_requires_a_name() {
        assert_eq!(resolve_app_name(Some("api".to_string())).unwrap(), "api");
        assert!(matches!(
            resolve_app_name(None),
            Err(VolumectlError::MissingAppName)
        ));
        assert!(matches!(
            resolve_app_name(Some(String::new())),
            Err(VolumectlError::MissingAppName)
        ));
    }
}
