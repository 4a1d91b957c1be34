//! Project selection for `phaseswarm list`
//!
//! A global registry collects projects from many repositories, so unless
//! `show_all` is set it is scoped to projects rooted at or above the working
//! directory. A local registry is already scoped and is never filtered.
//!
//! Directory containment is a plain string comparison against the path
//! separator. Paths are not canonicalised, so a `project_root` that reaches
//! the working directory through a symlink does not match.

use camino::Utf8Path;
use phaseswarm_core::{Project, Registry, RegistryType};
use serde_json::Value;
use std::cmp::Reverse;
use std::fmt;
use std::path::MAIN_SEPARATOR;

/// Outcome of selecting projects from a registry
#[derive(Debug, PartialEq)]
pub enum ProjectListing<'a> {
    /// The registry has no projects at all
    Empty,

    /// Projects exist, but none are scoped to the working directory
    NoneInScope { total: usize },

    /// Projects to display, most recently accessed first
    Projects {
        total: usize,
        projects: Vec<&'a Project>,
    },
}

impl<'a> ProjectListing<'a> {
    /// Projects to display (empty for the non-`Projects` variants)
    pub fn shown(&self) -> &[&'a Project] {
        match self {
            ProjectListing::Projects { projects, .. } => projects,
            _ => &[],
        }
    }

    /// Number of projects in the registry before scoping
    pub fn total(&self) -> usize {
        match self {
            ProjectListing::Empty => 0,
            ProjectListing::NoneInScope { total } | ProjectListing::Projects { total, .. } => {
                *total
            }
        }
    }
}

/// Filter and order a registry's projects for display
pub fn select_projects<'a>(
    registry: &'a Registry,
    registry_type: RegistryType,
    cwd: &Utf8Path,
    show_all: bool,
) -> ProjectListing<'a> {
    let total = registry.projects.len();
    if total == 0 {
        return ProjectListing::Empty;
    }

    let mut projects = filter_projects(&registry.projects, registry_type, cwd, show_all);
    tracing::debug!(
        "{} of {} project(s) in scope for {} (type: {}, all: {})",
        projects.len(),
        total,
        cwd,
        registry_type,
        show_all
    );
    if projects.is_empty() {
        return ProjectListing::NoneInScope { total };
    }

    sort_by_last_accessed(&mut projects);
    ProjectListing::Projects { total, projects }
}

/// Scope projects to the working directory.
///
/// Returns every project when `show_all` is set or the registry is local;
/// otherwise only projects whose `project_root` contains `cwd`.
pub fn filter_projects<'a>(
    projects: &'a [Project],
    registry_type: RegistryType,
    cwd: &Utf8Path,
    show_all: bool,
) -> Vec<&'a Project> {
    if show_all || registry_type == RegistryType::Local {
        return projects.iter().collect();
    }

    projects
        .iter()
        .filter(|p| {
            p.project_root
                .as_deref()
                .is_some_and(|root| is_within_root(root, cwd.as_str()))
        })
        .collect()
}

/// Whether `cwd` equals `root` or lies strictly below it
pub fn is_within_root(root: &str, cwd: &str) -> bool {
    if cwd == root {
        return true;
    }
    cwd.strip_prefix(root)
        .is_some_and(|rest| rest.starts_with(MAIN_SEPARATOR))
}

/// Stable sort, most recently accessed first; missing timestamps sort last
pub fn sort_by_last_accessed(projects: &mut [&Project]) {
    projects.sort_by_key(|p| Reverse(p.last_accessed_at()));
}

/// Short status tag shown next to a project name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusTag {
    /// `status == "complete"`
    Done,

    /// `status == "active"`, phase counters echoed as-is
    Phase { current: String, total: String },

    /// Any other status string
    Other(String),

    /// No status recorded
    Unknown,
}

impl StatusTag {
    pub fn of(project: &Project) -> Self {
        match project.status.as_deref() {
            Some("complete") => StatusTag::Done,
            Some("active") => StatusTag::Phase {
                current: phase_value(project.current_phase.as_ref()),
                total: phase_value(project.total_phases.as_ref()),
            },
            Some("") | None => StatusTag::Unknown,
            Some(other) => StatusTag::Other(other.to_string()),
        }
    }
}

impl fmt::Display for StatusTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusTag::Done => f.write_str("[DONE]"),
            StatusTag::Phase { current, total } => write!(f, "[Phase {}/{}]", current, total),
            StatusTag::Other(status) => write!(f, "[{}]", status),
            StatusTag::Unknown => f.write_str("[unknown]"),
        }
    }
}

fn phase_value(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => "?".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rooted(name: &str, root: &str) -> Project {
        Project::new(name, format!("{root}/.phaseswarm/{name}.md")).with_project_root(root)
    }

    fn names<'a>(projects: &[&'a Project]) -> Vec<&'a str> {
        projects.iter().map(|p| p.display_name()).collect()
    }

    #[test]
    fn test_is_within_root_prefix_rules() {
        assert!(is_within_root("/a/b", "/a/b"));
        assert!(is_within_root("/a/b", "/a/b/c"));
        assert!(is_within_root("/a/b", "/a/b/c/d"));
        assert!(!is_within_root("/a/b", "/a/bc"));
        assert!(!is_within_root("/a/b", "/a"));
    }

    #[test]
    fn test_is_within_root_is_literal() {
        // no normalisation of trailing separators or case
        assert!(!is_within_root("/a/b/", "/a/b"));
        assert!(!is_within_root("/A/B", "/a/b"));
    }

    #[test]
    fn test_global_registry_scoped_to_cwd() {
        let projects = vec![
            rooted("here", "/a/b"),
            rooted("sibling", "/a/bc"),
            rooted("child", "/a/b/c"),
            Project::new("legacy", "/old/plan.md"),
        ];

        let scoped = filter_projects(&projects, RegistryType::Global, Utf8Path::new("/a/b/src"), false);
        assert_eq!(names(&scoped), vec!["here"]);
    }

    #[test]
    fn test_show_all_is_unfiltered_superset() {
        let projects = vec![
            rooted("here", "/a/b"),
            rooted("elsewhere", "/x/y"),
            Project::new("legacy", "/old/plan.md"),
        ];
        let cwd = Utf8Path::new("/a/b");

        let all = filter_projects(&projects, RegistryType::Global, cwd, true);
        let scoped = filter_projects(&projects, RegistryType::Global, cwd, false);

        assert_eq!(all.len(), projects.len());
        assert!(scoped.iter().all(|p| all.contains(p)));
        assert!(scoped.len() < all.len());
    }

    #[test]
    fn test_local_registry_never_filtered() {
        let projects = vec![
            Project::new("legacy-one", "/old/1.md"),
            Project::new("legacy-two", "/old/2.md"),
            rooted("elsewhere", "/x/y"),
        ];

        let shown = filter_projects(&projects, RegistryType::Local, Utf8Path::new("/a/b"), false);
        assert_eq!(shown.len(), 3);

        let scoped = filter_projects(&projects, RegistryType::Global, Utf8Path::new("/a/b"), false);
        assert!(scoped.is_empty());
    }

    #[test]
    fn test_sort_descending_nulls_last_stable() {
        let projects = vec![
            Project::new("null-1", "/p/1"),
            Project::new("jan", "/p/2").with_last_accessed("2024-01-01"),
            Project::new("jun", "/p/3").with_last_accessed("2024-06-01"),
            Project::new("null-2", "/p/4"),
        ];
        let mut refs: Vec<&Project> = projects.iter().collect();

        sort_by_last_accessed(&mut refs);
        assert_eq!(names(&refs), vec!["jun", "jan", "null-1", "null-2"]);
    }

    #[test]
    fn test_sort_unparseable_timestamp_sorts_as_missing() {
        let projects = vec![
            Project::new("garbage", "/p/1").with_last_accessed("last tuesday"),
            Project::new("real", "/p/2").with_last_accessed("2023-03-04T05:06:07Z"),
        ];
        let mut refs: Vec<&Project> = projects.iter().collect();

        sort_by_last_accessed(&mut refs);
        assert_eq!(names(&refs), vec!["real", "garbage"]);
    }

    #[test]
    fn test_select_empty_registry() {
        let registry = Registry::from_json(r#"{"projects": []}"#).unwrap();
        let listing = select_projects(&registry, RegistryType::Global, Utf8Path::new("/a"), false);
        assert_eq!(listing, ProjectListing::Empty);
        assert_eq!(listing.total(), 0);
    }

    #[test]
    fn test_select_none_in_scope() {
        let mut registry = Registry::new(RegistryType::Global);
        registry.projects.push(rooted("elsewhere", "/x/y"));

        let listing = select_projects(&registry, RegistryType::Global, Utf8Path::new("/a"), false);
        assert_eq!(listing, ProjectListing::NoneInScope { total: 1 });
        assert!(listing.shown().is_empty());

        let listing = select_projects(&registry, RegistryType::Global, Utf8Path::new("/a"), true);
        assert_eq!(listing.shown().len(), 1);
    }

    #[test]
    fn test_select_sorts_scoped_projects() {
        let mut registry = Registry::new(RegistryType::Global);
        registry
            .projects
            .push(rooted("old", "/a").with_last_accessed("2024-01-01T00:00:00Z"));
        registry
            .projects
            .push(rooted("new", "/a").with_last_accessed("2024-02-01T00:00:00Z"));
        registry.projects.push(rooted("other", "/z"));

        let listing = select_projects(&registry, RegistryType::Global, Utf8Path::new("/a/src"), false);
        assert_eq!(names(listing.shown()), vec!["new", "old"]);
        assert_eq!(listing.total(), 3);
    }

    #[test]
    fn test_status_tags() {
        let done = Project::new("a", "/a").with_status("complete");
        assert_eq!(StatusTag::of(&done).to_string(), "[DONE]");

        let mut active = Project::new("b", "/b").with_status("active");
        active.current_phase = Some(json!(2));
        active.total_phases = Some(json!(5));
        assert_eq!(StatusTag::of(&active).to_string(), "[Phase 2/5]");

        let paused = Project::new("c", "/c").with_status("paused");
        assert_eq!(StatusTag::of(&paused).to_string(), "[paused]");

        let bare = Project::new("d", "/d");
        assert_eq!(StatusTag::of(&bare), StatusTag::Unknown);
        assert_eq!(StatusTag::of(&bare).to_string(), "[unknown]");
    }

    #[test]
    fn test_active_status_passes_values_through() {
        let mut project = Project::new("e", "/e").with_status("active");
        project.current_phase = Some(json!(9));
        project.total_phases = Some(json!("three"));
        assert_eq!(StatusTag::of(&project).to_string(), "[Phase 9/three]");

        project.current_phase = None;
        project.total_phases = Some(json!([1]));
        assert_eq!(StatusTag::of(&project).to_string(), "[Phase ?/[1]]");

        project.current_phase = Some(Value::Null);
        project.total_phases = Some(json!(3));
        assert_eq!(StatusTag::of(&project).to_string(), "[Phase null/3]");
    }

    #[test]
    fn test_empty_status_is_unknown() {
        let project = Project::new("f", "/f").with_status("");
        assert_eq!(StatusTag::of(&project), StatusTag::Unknown);
        assert_eq!(StatusTag::of(&project).to_string(), "[unknown]");
    }
}
