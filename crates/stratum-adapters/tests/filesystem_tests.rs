//! End-to-end tests of the built-in manifest against a real directory.

use std::fs;
use std::path::{Path, PathBuf};

use stratum_adapters::{LocalFilesystem, MemoryFilesystem, default_manifest};
use stratum_core::prelude::*;
use tempfile::TempDir;
use walkdir::WalkDir;

fn local_service() -> ScaffoldService {
    ScaffoldService::new(default_manifest(), Box::new(LocalFilesystem::new())).unwrap()
}

fn demo() -> ProjectName {
    ProjectName::parse("demo").unwrap()
}

fn files_under(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path().strip_prefix(root).unwrap().to_path_buf())
        .collect();
    files.sort();
    files
}

fn contents_under(root: &Path) -> Vec<(PathBuf, String)> {
    files_under(root)
        .into_iter()
        .map(|rel| {
            let body = fs::read_to_string(root.join(&rel)).unwrap();
            (rel, body)
        })
        .collect()
}

#[test]
fn fresh_scaffold_matches_manifest() {
    let temp = TempDir::new().unwrap();
    let report = local_service().scaffold(&demo(), temp.path()).unwrap();

    let manifest = default_manifest();
    assert_eq!(report.created_count(), manifest.len());
    assert_eq!(report.skipped_count(), 0);

    let root = temp.path().join("demo");
    let mut expected: Vec<PathBuf> = manifest.paths().map(|p| p.as_path().to_path_buf()).collect();
    expected.sort();
    assert_eq!(files_under(&root), expected);

    assert_eq!(report.resolved_root, fs::canonicalize(&root).unwrap());
}

#[test]
fn every_file_holds_its_rendered_body() {
    let temp = TempDir::new().unwrap();
    local_service().scaffold(&demo(), temp.path()).unwrap();

    let root = temp.path().join("demo");
    let ctx = RenderContext::new("demo");
    for entry in default_manifest().entries() {
        let written = fs::read_to_string(root.join(entry.path().as_path())).unwrap();
        assert_eq!(written, entry.render(&ctx), "content mismatch for {}", entry.path());
    }
}

#[test]
fn readme_carries_project_name() {
    let temp = TempDir::new().unwrap();
    local_service().scaffold(&demo(), temp.path()).unwrap();

    let readme = fs::read_to_string(temp.path().join("demo/README.md")).unwrap();
    assert!(readme.starts_with("# demo\n"));
    assert!(readme.ends_with('\n'));
    assert!(!readme.contains("{{PROJECT_NAME}}"));
}

#[test]
fn second_run_is_a_noop() {
    let temp = TempDir::new().unwrap();
    let svc = local_service();
    svc.scaffold(&demo(), temp.path()).unwrap();

    let root = temp.path().join("demo");
    let before = contents_under(&root);

    let report = svc.scaffold(&demo(), temp.path()).unwrap();
    assert!(report.is_noop());
    assert_eq!(report.skipped_count(), default_manifest().len());
    assert_eq!(contents_under(&root), before);
}

#[test]
fn second_run_keeps_hand_edits() {
    let temp = TempDir::new().unwrap();
    let svc = local_service();
    svc.scaffold(&demo(), temp.path()).unwrap();

    let readme = temp.path().join("demo/README.md");
    fs::write(&readme, "edited by hand\n").unwrap();

    let report = svc.scaffold(&demo(), temp.path()).unwrap();
    assert!(report.is_noop());
    assert_eq!(fs::read_to_string(&readme).unwrap(), "edited by hand\n");
}

#[test]
fn pre_existing_gitignore_is_preserved() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("demo");
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join(".gitignore"), "custom\n").unwrap();

    let report = local_service().scaffold(&demo(), temp.path()).unwrap();

    let skipped: Vec<String> = report.skipped().map(|r| r.entry.to_string()).collect();
    assert_eq!(skipped, [".gitignore"]);
    assert_eq!(report.created_count(), default_manifest().len() - 1);
    assert_eq!(fs::read_to_string(root.join(".gitignore")).unwrap(), "custom\n");
}

#[test]
fn deep_directories_are_created() {
    let temp = TempDir::new().unwrap();
    local_service().scaffold(&demo(), temp.path()).unwrap();

    let deep = temp.path().join("demo/app/infrastructure/db");
    assert!(deep.is_dir());
    assert!(deep.join("repositories_impl.py").is_file());
    assert_eq!(
        fs::read_to_string(temp.path().join("demo/tests/__init__.py")).unwrap(),
        ""
    );
}

#[test]
fn existing_directory_at_file_path_is_skipped() {
    let temp = TempDir::new().unwrap();
    let blocked = temp.path().join("demo/app/core/events.py");
    fs::create_dir_all(&blocked).unwrap();

    let report = local_service().scaffold(&demo(), temp.path()).unwrap();

    assert_eq!(report.skipped_count(), 1);
    assert!(blocked.is_dir());
}

#[test]
fn file_blocking_a_directory_aborts() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("demo");
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join("app"), "not a directory").unwrap();

    let mut seen = Vec::new();
    let result = local_service().scaffold_with(&demo(), temp.path(), |r| {
        seen.push(r.entry.to_string());
    });

    assert!(result.is_err());
    // Root-level entries ahead of the first `app/` entry were still written.
    assert_eq!(seen, ["README.md", "requirements.txt", ".env.example", ".gitignore"]);
    assert!(root.join("README.md").is_file());
}

#[test]
fn plan_touches_nothing_on_disk() {
    let temp = TempDir::new().unwrap();
    let report = local_service().plan(&demo(), temp.path()).unwrap();

    assert!(report.dry_run);
    assert_eq!(report.created_count(), default_manifest().len());
    assert!(!temp.path().join("demo").exists());
}

#[test]
fn memory_filesystem_runs_the_full_manifest() {
    let fs = MemoryFilesystem::new();
    let svc = ScaffoldService::new(default_manifest(), Box::new(fs.clone())).unwrap();

    let report = svc.scaffold(&demo(), "").unwrap();
    assert_eq!(report.created_count(), default_manifest().len());
    assert_eq!(fs.write_count(), default_manifest().len());
    assert_eq!(report.resolved_root, PathBuf::from("/memory/demo"));
    assert!(fs.list_files().contains(&PathBuf::from("demo/app/presentation/cli/main.py")));

    let again = svc.scaffold(&demo(), "").unwrap();
    assert!(again.is_noop());
    assert_eq!(fs.write_count(), default_manifest().len());
}
