//! Integration tests for the stencil binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use flate2::write::GzEncoder;
use flate2::Compression;
use httpmock::prelude::*;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn stencil() -> Command {
    let mut cmd = Command::new(cargo_bin("stencil"));
    cmd.env_remove("STENCIL_REGISTRY")
        .env_remove("STENCIL_TIMEOUT")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

/// Build a gzipped tarball with every file under a single top-level directory.
fn tarball(files: &[(&str, &str)]) -> Vec<u8> {
    let encoder = GzEncoder::new(Vec::new(), Compression::default());
    let mut builder = tar::Builder::new(encoder);
    for (path, contents) in files {
        let mut header = tar::Header::new_gnu();
        header.set_size(contents.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        builder
            .append_data(&mut header, format!("template-main/{}", path), contents.as_bytes())
            .unwrap();
    }
    builder.into_inner().unwrap().finish().unwrap()
}

#[test]
fn cli_help_flag() -> Result<(), Box<dyn std::error::Error>> {
    stencil()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("create"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains(
            "You can run `stencil <command> -h` to check out command detail.",
        ));
    Ok(())
}

#[test]
fn cli_version_flag() -> Result<(), Box<dyn std::error::Error>> {
    stencil()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_no_args_matches_help() -> Result<(), Box<dyn std::error::Error>> {
    let help = stencil().arg("--help").output()?;
    let bare = stencil().output()?;

    assert!(help.status.success());
    assert!(bare.status.success());
    assert_eq!(
        String::from_utf8(bare.stdout)?,
        String::from_utf8(help.stdout)?
    );
    Ok(())
}

#[test]
fn cli_create_help_lists_template_forms() -> Result<(), Box<dyn std::error::Error>> {
    stencil()
        .args(["create", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gitlab:custom.com:owner/name"))
        .stdout(predicate::str::contains("direct:url"))
        .stdout(predicate::str::contains("owner/name#my-branch"))
        .stdout(predicate::str::contains("--clone"));
    Ok(())
}

#[test]
fn cli_list_shows_builtin_templates() -> Result<(), Box<dyn std::error::Error>> {
    stencil()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("webpack-vue - "))
        .stdout(predicate::str::contains("electron-vue - "))
        .stdout(predicate::str::contains("repository:").not());
    Ok(())
}

#[test]
fn cli_list_verbose_shows_details() -> Result<(), Box<dyn std::error::Error>> {
    stencil()
        .args(["list", "-v"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "  repository: vuejs-templates/webpack",
        ))
        .stdout(predicate::str::contains("  relations: "));
    Ok(())
}

#[test]
fn cli_list_preserves_registry_order() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let registry = temp.path().join("registry.yml");
    fs::write(
        &registry,
        r#"
templates:
  - name: zeta
    repository: me/zeta
    description: Last alphabetically
    relations: [a, b]
  - name: alpha
    repository: me/alpha
    description: First alphabetically
"#,
    )?;

    let output = stencil()
        .args(["list", "--verbose", "--registry"])
        .arg(&registry)
        .output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let expected = "\n\
zeta - Last alphabetically\n  repository: me/zeta\n  relations: a, b\n\n\
alpha - First alphabetically\n  repository: me/alpha\n  relations: \n\n\n";
    assert_eq!(stdout, expected);
    Ok(())
}

#[test]
fn cli_list_reads_registry_from_env() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let registry = temp.path().join("registry.yml");
    fs::write(
        &registry,
        "templates:\n  - name: house\n    repository: me/house\n    description: House style\n",
    )?;

    stencil()
        .arg("list")
        .env("STENCIL_REGISTRY", &registry)
        .assert()
        .success()
        .stdout(predicate::str::contains("house - House style"))
        .stdout(predicate::str::contains("webpack-vue").not());
    Ok(())
}

#[test]
fn cli_missing_registry_file_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;

    stencil()
        .args(["list", "--registry"])
        .arg(temp.path().join("missing.yml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Registry not found"));
    Ok(())
}

#[test]
fn cli_duplicate_registry_names_fail() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let registry = temp.path().join("registry.yml");
    fs::write(
        &registry,
        "templates:\n  - name: twin\n    repository: a/one\n  - name: twin\n    repository: a/two\n",
    )?;

    stencil()
        .args(["list", "--registry"])
        .arg(&registry)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Duplicate template name"));
    Ok(())
}

#[test]
fn cli_unknown_command_prints_help_and_notice() -> Result<(), Box<dyn std::error::Error>> {
    stencil()
        .arg("frobnicate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Unknown command frobnicate."));
    Ok(())
}

#[test]
fn cli_create_downloads_archive() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    let archive = server.mock(|when, then| {
        when.method(GET).path("/template.tar.gz");
        then.status(200)
            .header("content-type", "application/gzip")
            .body(tarball(&[
                ("README.md", "# Template\n"),
                ("src/main.js", "console.log('hi');\n"),
            ]));
    });

    let temp = TempDir::new()?;
    let dest = temp.path().join("my-app");
    let reference = format!("direct:{}", server.url("/template.tar.gz"));

    stencil()
        .arg("create")
        .arg(&reference)
        .arg(&dest)
        .assert()
        .success()
        .stdout(predicate::str::contains("Downloading..."))
        .stdout(predicate::str::contains("Download finished."))
        .stdout(predicate::str::contains(format!("1. cd {}", dest.display())))
        .stdout(predicate::str::contains("2. Run `npm i` or `yarn`"))
        .stdout(predicate::str::contains("3. Read 'README.md' to get started"))
        .stderr(predicate::str::contains("Unable to connect to").not());

    archive.assert();
    assert_eq!(fs::read_to_string(dest.join("README.md"))?, "# Template\n");
    assert!(dest.join("src/main.js").exists());
    Ok(())
}

#[test]
fn cli_create_resolves_registry_name() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    let archive = server.mock(|when, then| {
        when.method(GET).path("/house.tar.gz");
        then.status(200).body(tarball(&[("README.md", "house\n")]));
    });

    let temp = TempDir::new()?;
    let registry = temp.path().join("registry.yml");
    fs::write(
        &registry,
        format!(
            "templates:\n  - name: house\n    repository: direct:{}\n",
            server.url("/house.tar.gz")
        ),
    )?;
    let dest = temp.path().join("project");

    stencil()
        .args(["create", "house"])
        .arg(&dest)
        .arg("--registry")
        .arg(&registry)
        .assert()
        .success()
        .stdout(predicate::str::contains("Download finished."));

    archive.assert();
    assert!(dest.join("README.md").exists());
    Ok(())
}

#[test]
fn cli_create_failure_reports_reference() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/missing.tar.gz");
        then.status(404);
    });

    let temp = TempDir::new()?;
    let reference = format!("direct:{}", server.url("/missing.tar.gz"));

    stencil()
        .arg("create")
        .arg(&reference)
        .arg(temp.path().join("out"))
        .assert()
        .success()
        .stderr(predicate::str::contains(format!(
            "Unable to connect to: {}",
            reference
        )))
        .stdout(predicate::str::contains("1. cd").not())
        .stdout(predicate::str::contains("Download finished.").not());
    Ok(())
}

#[test]
fn cli_create_invalid_reference_is_a_fetch_failure() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;

    stencil()
        .args(["create", "not-a-template"])
        .arg(temp.path().join("out"))
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Unable to connect to: not-a-template",
        ))
        .stdout(predicate::str::contains("1. cd").not());
    Ok(())
}

#[test]
fn cli_create_quiet_suppresses_progress() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/t.tar.gz");
        then.status(200).body(tarball(&[("README.md", "x\n")]));
    });

    let temp = TempDir::new()?;
    let dest = temp.path().join("quiet");

    stencil()
        .args(["--quiet", "create"])
        .arg(format!("direct:{}", server.url("/t.tar.gz")))
        .arg(&dest)
        .assert()
        .success()
        .stdout(predicate::str::contains("Downloading...").not())
        .stdout(predicate::str::contains("1. cd"));
    Ok(())
}
