//! TypeScript and JSON Schema renditions of the profile types, for consumers
//! outside Rust.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde_json::Value as JsonValue;
use thiserror::Error;
use ts_rs::TS;

use crate::{
    account::ProfileAccount,
    address::ProfileAddress,
    date::ProfileDate,
    item::ProfileItem,
    name::ProfileName,
    organization::{OrganizationLocation, ProfileOrganization},
    profile::Profile,
};

pub const TYPESCRIPT_FILE: &str = "profile.ts";
pub const JSON_SCHEMA_FILE: &str = "profile.schema.json";

const HEADER: &str = "// This file was generated by `crates/profile-types/src/bin/generate_types.rs`.\n\n// Do not edit this file manually.";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// All profile types as one TypeScript module.
pub fn typescript_declarations() -> String {
    let decls = [
        JsonValue::decl(),
        ProfileItem::decl(),
        ProfileName::decl(),
        ProfileAddress::decl(),
        OrganizationLocation::decl(),
        ProfileOrganization::decl(),
        ProfileAccount::decl(),
        ProfileDate::decl(),
        Profile::<JsonValue>::decl(),
    ];

    let body = decls
        .iter()
        .map(|decl| {
            let trimmed = decl.trim_start();
            if trimmed.starts_with("export") {
                trimmed.to_string()
            } else {
                format!("export {trimmed}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    format!("{HEADER}\n\n{body}\n")
}

/// JSON Schema for an untyped [`Profile`].
pub fn json_schema() -> Result<JsonValue, ExportError> {
    let schema = schemars::schema_for!(Profile);
    Ok(serde_json::to_value(&schema)?)
}

fn rendered_files() -> Result<Vec<(&'static str, String)>, ExportError> {
    let schema = serde_json::to_string_pretty(&json_schema()?)? + "\n";
    Ok(vec![
        (TYPESCRIPT_FILE, typescript_declarations()),
        (JSON_SCHEMA_FILE, schema),
    ])
}

/// Writes the TypeScript module and the JSON Schema into `dir`.
pub fn write_bindings(dir: &Path) -> Result<Vec<PathBuf>, ExportError> {
    fs::create_dir_all(dir)?;

    let mut written = Vec::new();
    for (file_name, content) in rendered_files()? {
        let path = dir.join(file_name);
        fs::write(&path, content)?;
        tracing::info!(path = %path.display(), "wrote bindings");
        written.push(path);
    }
    Ok(written)
}

/// Paths under `dir` that are missing or differ from freshly generated output.
pub fn check_bindings(dir: &Path) -> Result<Vec<PathBuf>, ExportError> {
    let mut stale = Vec::new();
    for (file_name, expected) in rendered_files()? {
        let path = dir.join(file_name);
        let current = match fs::read_to_string(&path) {
            Ok(current) => Some(current),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => return Err(e.into()),
        };

        if current.as_deref() != Some(expected.as_str()) {
            tracing::debug!(path = %path.display(), "bindings are stale");
            stale.push(path);
        }
    }
    Ok(stale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typescript_covers_every_type() {
        let ts = typescript_declarations();

        assert!(ts.starts_with("// This file was generated"));
        for name in [
            "JsonValue",
            "ProfileItem",
            "ProfileName",
            "ProfileAddress",
            "OrganizationLocation",
            "ProfileOrganization",
            "ProfileAccount",
            "ProfileDate",
            "Profile",
        ] {
            assert!(
                ts.contains(&format!("export type {name}")),
                "missing declaration for {name}"
            );
        }
    }

    #[test]
    fn optional_fields_are_optional_in_typescript() {
        let ts = typescript_declarations();

        assert!(ts.contains("value: string"));
        assert!(ts.contains("primary?: boolean"));
        assert!(ts.contains("givenName?: string"));
        assert!(ts.contains("domain: string"));
    }

    #[test]
    fn field_docs_reach_typescript() {
        let ts = typescript_declarations();

        assert!(ts.contains("the \"Antonio\" in \"Dr. Timothy Antonio Smith, Jr.\""));
        assert!(ts.contains("The zip or postal code."));
        assert!(ts.contains("The user id of the account."));
        assert!(ts.contains("The month, starting at 1 for January."));
        assert!(ts.contains("Email addresses associated with the user."));
        assert!(ts.contains("The parsed form of `_raw`."));
    }

    #[test]
    fn schema_requires_only_the_required_fields() {
        let schema = json_schema().unwrap();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|v| v.as_str())
            .collect();

        for field in ["provider", "id", "_raw"] {
            assert!(required.contains(&field), "{field} should be required");
        }
        for field in ["username", "emails", "birthday", "organizations"] {
            assert!(!required.contains(&field), "{field} should be optional");
        }
    }

    #[test]
    fn check_after_write_is_clean() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("shared");

        assert_eq!(check_bindings(&out).unwrap().len(), 2);

        let written = write_bindings(&out).unwrap();
        assert_eq!(written.len(), 2);
        assert!(check_bindings(&out).unwrap().is_empty());

        fs::write(out.join(TYPESCRIPT_FILE), "// edited\n").unwrap();
        assert_eq!(check_bindings(&out).unwrap(), vec![out.join(TYPESCRIPT_FILE)]);
    }
}
