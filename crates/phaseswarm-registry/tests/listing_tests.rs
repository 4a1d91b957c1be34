//! Integration tests for registry resolution and project listing
//!
//! Drives resolve -> load -> select against real files in temporary
//! working and home directories.

use camino::Utf8PathBuf;
use phaseswarm_core::{Error, PhaseSwarmPaths, RegistryType};
use phaseswarm_registry::{resolve, select_projects, ProjectListing, RegistryStore};
use std::fs;
use tempfile::TempDir;

// ─── Helpers ───────────────────────────────────────────────────────────────

struct Env {
    _cwd: TempDir,
    _home: TempDir,
    paths: PhaseSwarmPaths,
}

fn env() -> Env {
    let cwd = TempDir::new().unwrap();
    let home = TempDir::new().unwrap();
    let paths = PhaseSwarmPaths::new(
        Utf8PathBuf::from_path_buf(cwd.path().to_path_buf()).unwrap(),
        Utf8PathBuf::from_path_buf(home.path().to_path_buf()).unwrap(),
    );
    Env {
        _cwd: cwd,
        _home: home,
        paths,
    }
}

fn global_registry(cwd: &str) -> String {
    serde_json::json!({
        "registry_version": 1,
        "registry_type": "global",
        "created": "2024-01-01T00:00:00.000Z",
        "projects": [
            {
                "name": "checkout-flow",
                "path": format!("{cwd}/.phaseswarm/checkout.md"),
                "project_root": cwd,
                "status": "active",
                "current_phase": 2,
                "total_phases": 4,
                "last_accessed": "2024-05-01T10:00:00.000Z"
            },
            {
                "name": "unrelated",
                "path": "/elsewhere/.phaseswarm/x.md",
                "project_root": "/elsewhere",
                "status": "complete",
                "last_accessed": "2024-06-01T10:00:00.000Z"
            },
            {
                "name": "legacy",
                "path": "/legacy/plan.md"
            }
        ]
    })
    .to_string()
}

// ─── Tests ─────────────────────────────────────────────────────────────────

#[test]
fn test_global_registry_scoped_listing() {
    let env = env();
    fs::write(&env.paths.global_registry, global_registry(env.paths.cwd.as_str())).unwrap();

    let resolved = resolve(&env.paths).expect("global registry should resolve");
    assert_eq!(resolved.registry_type, RegistryType::Global);

    let registry = RegistryStore::new(&resolved.path).load().unwrap();
    let listing = select_projects(&registry, resolved.registry_type, &env.paths.cwd, false);

    let names: Vec<_> = listing.shown().iter().map(|p| p.display_name()).collect();
    assert_eq!(names, vec!["checkout-flow"]);
    assert_eq!(listing.total(), 3);
}

#[test]
fn test_global_registry_show_all_sorted() {
    let env = env();
    fs::write(&env.paths.global_registry, global_registry(env.paths.cwd.as_str())).unwrap();

    let resolved = resolve(&env.paths).unwrap();
    let registry = RegistryStore::new(&resolved.path).load().unwrap();
    let listing = select_projects(&registry, resolved.registry_type, &env.paths.cwd, true);

    let names: Vec<_> = listing.shown().iter().map(|p| p.display_name()).collect();
    assert_eq!(names, vec!["unrelated", "checkout-flow", "legacy"]);
}

#[test]
fn test_subdirectory_sees_parent_project() {
    let env = env();
    fs::write(&env.paths.global_registry, global_registry(env.paths.cwd.as_str())).unwrap();
    let nested = PhaseSwarmPaths::new(env.paths.cwd.join("src/components"), env.paths.home.clone());

    let resolved = resolve(&nested).unwrap();
    let registry = RegistryStore::new(&resolved.path).load().unwrap();
    let listing = select_projects(&registry, resolved.registry_type, &nested.cwd, false);
    assert_eq!(listing.shown().len(), 1);
}

#[test]
fn test_sibling_directory_sees_nothing() {
    let env = env();
    fs::write(&env.paths.global_registry, global_registry(env.paths.cwd.as_str())).unwrap();
    let sibling = PhaseSwarmPaths::new(
        format!("{}-sibling", env.paths.cwd),
        env.paths.home.clone(),
    );

    let resolved = resolve(&sibling).unwrap();
    let registry = RegistryStore::new(&resolved.path).load().unwrap();
    let listing = select_projects(&registry, resolved.registry_type, &sibling.cwd, false);
    assert_eq!(listing, ProjectListing::NoneInScope { total: 3 });
}

#[test]
fn test_local_registry_lists_everything() {
    let env = env();
    fs::write(
        &env.paths.local_registry,
        r#"{"registry_type":"local","projects":[{"name":"a","path":"/a"},{"name":"b","path":"/b"}]}"#,
    )
    .unwrap();
    fs::write(&env.paths.global_registry, global_registry("/somewhere")).unwrap();

    let resolved = resolve(&env.paths).unwrap();
    assert_eq!(resolved.path, env.paths.local_registry);

    let registry = RegistryStore::new(&resolved.path).load().unwrap();
    let listing = select_projects(&registry, resolved.registry_type, &env.paths.cwd, false);
    assert_eq!(listing.shown().len(), 2);
}

#[test]
fn test_empty_projects_vs_no_registry() {
    let env = env();
    assert!(resolve(&env.paths).is_none());

    fs::write(&env.paths.local_registry, r#"{"projects": []}"#).unwrap();
    let resolved = resolve(&env.paths).unwrap();
    let registry = RegistryStore::new(&resolved.path).load().unwrap();
    assert_eq!(
        select_projects(&registry, resolved.registry_type, &env.paths.cwd, false),
        ProjectListing::Empty
    );
}

#[test]
fn test_corrupt_registry_fails_on_read_only() {
    let env = env();
    fs::write(&env.paths.global_registry, "{not json").unwrap();

    let resolved = resolve(&env.paths).expect("corrupt file still resolves");
    assert_eq!(resolved.registry_type, RegistryType::Global);

    let err = RegistryStore::new(&resolved.path).load().unwrap_err();
    assert!(matches!(err, Error::CorruptRegistry { .. }));
}
