//! Integration tests for appforge-cli.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn appforge() -> Command {
    Command::cargo_bin("appforge").unwrap()
}

const SEED: &str = r#"
[[templates]]
name        = "greeting"
description = "Test greeting"

[[templates.versions]]
version    = "1"
created_at = "2026-01-01T00:00:00Z"

[[templates.versions.variants]]
id      = "only"
content = "Hello {{who}}, tone {{tone}}."

[[templates.environment_overrides]]
env = "production"

[templates.environment_overrides.merge]
tone = "formal"
"#;

// ── basics ────────────────────────────────────────────────────────────────────

#[test]
fn help_flag_shows_subcommands() {
    appforge()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("render"))
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("templates"));
}

#[test]
fn version_flag_matches_cargo() {
    appforge()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// ── render ────────────────────────────────────────────────────────────────────

#[test]
fn render_builtin_template_succeeds() {
    appforge()
        .args(["render", "app-brief", "--rng-seed", "1", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("You are building"));
}

#[test]
fn render_unknown_template_exits_not_found() {
    appforge()
        .args(["render", "ghost", "--quiet"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("No template registered"));
}

#[test]
fn render_applies_vars_and_env_merge() {
    let dir = TempDir::new().unwrap();
    let seed = dir.path().join("seed.toml");
    std::fs::write(&seed, SEED).unwrap();

    appforge()
        .args([
            "render",
            "greeting",
            "--seed-file",
            seed.to_str().unwrap(),
            "--env",
            "production",
            "--var",
            "who=world",
            "--quiet",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello world, tone formal."));
}

#[test]
fn explicit_var_beats_environment_merge() {
    let dir = TempDir::new().unwrap();
    let seed = dir.path().join("seed.toml");
    std::fs::write(&seed, SEED).unwrap();

    appforge()
        .args([
            "render",
            "greeting",
            "--seed-file",
            seed.to_str().unwrap(),
            "--env",
            "production",
            "--var",
            "who=world",
            "--var",
            "tone=playful",
            "--quiet",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello world, tone playful."));
}

#[test]
fn same_rng_seed_renders_identically() {
    let run = || {
        let out = appforge()
            .args(["render", "app-brief", "--rng-seed", "7", "--quiet"])
            .output()
            .unwrap();
        assert!(out.status.success());
        out.stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn render_json_output_carries_provenance() {
    let out = appforge()
        .args([
            "render",
            "app-brief",
            "--rng-seed",
            "1",
            "--output-format",
            "json",
            "--quiet",
        ])
        .output()
        .unwrap();
    assert!(out.status.success());

    let rendered: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(rendered["name"], "app-brief");
    assert_eq!(rendered["version"], "1");
    assert!(rendered["content"].as_str().unwrap().contains("You are building"));
}

// ── templates ─────────────────────────────────────────────────────────────────

#[test]
fn templates_lists_builtins() {
    appforge()
        .args(["templates", "--format", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("app-brief"))
        .stdout(predicate::str::contains("release-notes"));
}

#[test]
fn templates_json_is_parsable() {
    let out = appforge()
        .args(["templates", "--format", "json", "--quiet"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let templates: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert!(templates.as_array().unwrap().len() >= 2);
}

#[test]
fn seeded_template_shadows_builtin_by_name() {
    let dir = TempDir::new().unwrap();
    let seed = dir.path().join("seed.toml");
    std::fs::write(
        &seed,
        r#"
[[templates]]
name        = "app-brief"
description = "Shadowed"

[[templates.versions]]
version    = "override"
created_at = "2026-03-01T00:00:00Z"

[[templates.versions.variants]]
id      = "only"
content = "shadowed content"
"#,
    )
    .unwrap();

    appforge()
        .args([
            "render",
            "app-brief",
            "--seed-file",
            seed.to_str().unwrap(),
            "--quiet",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("shadowed content"));
}

// ── generate ──────────────────────────────────────────────────────────────────

#[test]
fn generate_json_emits_typescript_bundle() {
    let out = appforge()
        .args([
            "generate",
            "My App",
            "--description",
            "demo",
            "--lang",
            "TypeScript",
            "--json",
            "--quiet",
        ])
        .output()
        .unwrap();
    assert!(out.status.success());

    let bundle: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(bundle["code"]["name"], "my-app");

    let paths: Vec<&str> = bundle["code"]["files"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["path"].as_str().unwrap())
        .collect();
    assert!(paths.contains(&"src/App.tsx"));

    let main_tf = bundle["infra"]["terraform"]
        .as_array()
        .unwrap()
        .iter()
        .find(|f| f["path"] == "terraform/main.tf")
        .unwrap();
    assert!(main_tf["content"].as_str().unwrap().contains("my-app-artifacts"));

    assert!(bundle["docs"]["readme"].as_str().unwrap().contains("My App"));
}

#[test]
fn generate_javascript_emits_jsx() {
    let out = appforge()
        .args(["generate", "My App", "--lang", "JavaScript", "--json", "--quiet"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("src/App.jsx"));
    assert!(!stdout.contains("src/App.tsx"));
}

#[test]
fn unexpected_language_falls_through_to_javascript() {
    let out = appforge()
        .args(["generate", "My App", "--lang", "COBOL", "--json", "--quiet"])
        .output()
        .unwrap();
    assert!(out.status.success());
    assert!(String::from_utf8(out.stdout).unwrap().contains("src/App.jsx"));
}

#[test]
fn generate_is_byte_deterministic() {
    let run = || {
        let out = appforge()
            .args(["generate", "My App", "--description", "demo", "--json", "--quiet"])
            .output()
            .unwrap();
        assert!(out.status.success());
        out.stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn generate_writes_the_full_tree() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("my-app");

    appforge()
        .args([
            "generate",
            "My App",
            "--description",
            "demo",
            "--lang",
            "TypeScript",
            "--output",
            root.to_str().unwrap(),
            "--yes",
            "--quiet",
        ])
        .assert()
        .success();

    for rel in [
        "package.json",
        "src/App.tsx",
        "src/components/PricingGrid.tsx",
        "src/App.test.tsx",
        "server/index.ts",
        "prisma/schema.prisma",
        "migrations/0001_init.sql",
        "Dockerfile",
        ".github/workflows/ci.yml",
        "terraform/main.tf",
        "README.md",
        "docs/API.md",
        "docs/ARCHITECTURE.md",
    ] {
        assert!(root.join(rel).exists(), "missing {rel}");
    }

    let readme = std::fs::read_to_string(root.join("README.md")).unwrap();
    assert!(readme.contains("My App"));
}

#[test]
fn generate_refuses_existing_output() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("existing");
    std::fs::create_dir(&root).unwrap();

    appforge()
        .args([
            "generate",
            "Existing",
            "--output",
            root.to_str().unwrap(),
            "--yes",
            "--quiet",
        ])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn generate_force_overwrites() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("target");
    std::fs::create_dir(&root).unwrap();
    std::fs::write(root.join("stale.txt"), "old").unwrap();

    appforge()
        .args([
            "generate",
            "Target",
            "--output",
            root.to_str().unwrap(),
            "--yes",
            "--force",
            "--quiet",
        ])
        .assert()
        .success();

    assert!(!root.join("stale.txt").exists());
    assert!(root.join("package.json").exists());
}

#[test]
fn generate_dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("preview");

    appforge()
        .args([
            "generate",
            "Preview",
            "--output",
            root.to_str().unwrap(),
            "--dry-run",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"));

    assert!(!root.exists());
}
