//! Registry and project types

use super::lenient;
use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Registry schema version written by this CLI
pub const REGISTRY_VERSION: u64 = 1;

/// Where a registry lives, and therefore how its projects are scoped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistryType {
    /// `.phaseswarm-registry.json` in the project directory
    Local,
    /// `.phaseswarm-registry.json` in the user's home directory
    Global,
}

impl RegistryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RegistryType::Local => "local",
            RegistryType::Global => "global",
        }
    }
}

impl fmt::Display for RegistryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RegistryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(RegistryType::Local),
            "global" => Ok(RegistryType::Global),
            other => Err(format!(
                "unknown registry type '{}', expected 'local' or 'global'",
                other
            )),
        }
    }
}

/// The registry document (`.phaseswarm-registry.json`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Registry {
    /// Schema version marker
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::opt_u64"
    )]
    pub registry_version: Option<u64>,

    /// Declared registry type; the file location decides when absent
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::opt_registry_type"
    )]
    pub registry_type: Option<RegistryType>,

    /// Creation timestamp (RFC 3339)
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::opt_string"
    )]
    pub created: Option<String>,

    /// Tracked projects
    #[serde(default, deserialize_with = "lenient::projects")]
    pub projects: Vec<Project>,

    /// Fields written by other tools, kept on write-back
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Registry {
    /// Create an empty registry stamped with the current time
    pub fn new(registry_type: RegistryType) -> Self {
        Self {
            registry_version: Some(REGISTRY_VERSION),
            registry_type: Some(registry_type),
            created: Some(format_timestamp(Utc::now())),
            projects: Vec::new(),
            extra: Map::new(),
        }
    }

    /// Parse a registry document.
    ///
    /// Fails only when the content is not valid JSON or the root is not an
    /// object. Everything below the root is read leniently.
    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        let value: Value = serde_json::from_str(content)?;
        if !value.is_object() {
            return Err(<serde_json::Error as serde::de::Error>::custom(
                "registry root must be a JSON object",
            ));
        }
        serde_json::from_value(value)
    }

    /// Serialize as pretty JSON with a trailing newline
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }

    /// Whether the declared schema version is newer than this CLI understands
    pub fn is_newer_schema(&self) -> bool {
        self.registry_version
            .is_some_and(|version| version > REGISTRY_VERSION)
    }

    /// Insert a project, replacing any existing record with the same `path`
    pub fn upsert_project(&mut self, project: Project) {
        let existing = project.path.as_ref().and_then(|path| {
            self.projects
                .iter()
                .position(|p| p.path.as_deref() == Some(path.as_str()))
        });

        match existing {
            Some(index) => self.projects[index] = project,
            None => self.projects.push(project),
        }
    }

    /// Set `last_accessed` on the project with the given `path`.
    ///
    /// Returns false when no such project is registered.
    pub fn touch(&mut self, path: &str, at: DateTime<Utc>) -> bool {
        match self
            .projects
            .iter_mut()
            .find(|p| p.path.as_deref() == Some(path))
        {
            Some(project) => {
                project.last_accessed = Some(format_timestamp(at));
                true
            }
            None => false,
        }
    }
}

/// A single tracked PhaseSwarm project
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Display name
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::opt_string"
    )]
    pub name: Option<String>,

    /// Location of the PhaseSwarm working artifact
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::opt_string"
    )]
    pub path: Option<String>,

    /// Absolute path of the directory the project belongs to
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::opt_string"
    )]
    pub project_root: Option<String>,

    /// `complete`, `active`, or anything else
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::opt_string"
    )]
    pub status: Option<String>,

    /// Current phase, kept verbatim
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::raw_value"
    )]
    pub current_phase: Option<Value>,

    /// Total phases, kept verbatim
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::raw_value"
    )]
    pub total_phases: Option<Value>,

    /// Last access timestamp
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::opt_string"
    )]
    pub last_accessed: Option<String>,

    /// Originating requirements document
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::opt_string"
    )]
    pub prd_source: Option<String>,

    /// Fields written by other tools, kept on write-back
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Project {
    /// Create a project record with a name and artifact path
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            path: Some(path.into()),
            ..Default::default()
        }
    }

    /// Set the owning directory
    pub fn with_project_root(mut self, root: impl Into<String>) -> Self {
        self.project_root = Some(root.into());
        self
    }

    /// Set the status string
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Set the last access timestamp
    pub fn with_last_accessed(mut self, timestamp: impl Into<String>) -> Self {
        self.last_accessed = Some(timestamp.into());
        self
    }

    /// Name for display, falling back to a placeholder
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("(unnamed)")
    }

    /// Parsed `last_accessed`; `None` when missing or unparseable
    pub fn last_accessed_at(&self) -> Option<DateTime<Utc>> {
        self.last_accessed.as_deref().and_then(parse_timestamp)
    }
}

/// Format a timestamp the way the registry stores them
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse a registry timestamp.
///
/// Accepts RFC 3339, a naive `YYYY-MM-DDTHH:MM:SS[.fff]` (read as UTC), and a
/// bare `YYYY-MM-DD` (midnight UTC).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
