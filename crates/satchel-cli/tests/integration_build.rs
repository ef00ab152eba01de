//! End-to-end tests for the build command, run against a scratch project
//! tree through the real binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn write_project(root: &Path) {
    let components = root.join("assets/js/components");
    fs::create_dir_all(&components).unwrap();
    fs::write(
        root.join("assets/js/index.js"),
        "import { mountApp } from './components/widget.js';\n\n\
         window.onload = function () {\n  mountApp(document.getElementById('container'));\n};\n",
    )
    .unwrap();
    fs::write(
        components.join("widget.js"),
        "// click widget\nexport function mountApp(container) {\n  container.textContent = 'ready';\n}\n",
    )
    .unwrap();
}

fn satchel() -> Command {
    Command::cargo_bin("satchel").unwrap()
}

#[test]
fn build_produces_a_development_bundle() {
    let dir = tempfile::tempdir().unwrap();
    write_project(dir.path());

    satchel()
        .current_dir(dir.path())
        .arg("build")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bundling complete"))
        .stdout(predicate::str::contains("0 errors, 0 warnings"));

    let bundle = fs::read_to_string(dir.path().join("public/js/app.js")).unwrap();
    assert!(bundle.contains("NODE_ENV: \"development\""));
    assert!(bundle.contains("function mountApp"));
    assert!(bundle.contains("//# sourceMappingURL=app.js.map"));
    assert!(dir.path().join("public/js/app.js.map").exists());
}

#[test]
fn minify_token_produces_a_production_bundle_without_map() {
    let dir = tempfile::tempdir().unwrap();
    write_project(dir.path());

    satchel()
        .current_dir(dir.path())
        .args(["build", "m"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bundling complete"));

    let bundle = fs::read_to_string(dir.path().join("public/js/app.js")).unwrap();
    assert!(bundle.contains("NODE_ENV: \"production\""));
    assert!(!bundle.contains("// click widget"));
    assert!(!dir.path().join("public/js/app.js.map").exists());
}

#[test]
fn unrecognized_tokens_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    write_project(dir.path());

    satchel()
        .current_dir(dir.path())
        .args(["build", "foo", "bar"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bundling complete"));

    // still a development build
    let bundle = fs::read_to_string(dir.path().join("public/js/app.js")).unwrap();
    assert!(bundle.contains("NODE_ENV: \"development\""));
}

#[test]
fn build_without_sources_fails_without_retry() {
    let dir = tempfile::tempdir().unwrap();

    satchel()
        .current_dir(dir.path())
        .arg("build")
        .assert()
        .failure()
        .stdout(predicate::str::contains("source scope not found"));
}

#[test]
fn root_flag_builds_a_tree_elsewhere() {
    let dir = tempfile::tempdir().unwrap();
    let project = dir.path().join("site");
    write_project(&project);

    satchel()
        .args(["build", "--root"])
        .arg(&project)
        .assert()
        .success();

    assert!(project.join("public/js/app.js").exists());
}
