//! End-to-End CLI Tests for vseprostavby

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

fn vseprostavby() -> Command {
    cargo_bin_cmd!("vseprostavby")
}

// ============================================
// Basic CLI Tests
// ============================================

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        vseprostavby()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("render"))
            .stdout(predicate::str::contains("content"));
    }

    #[test]
    fn shows_version() {
        vseprostavby()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn rejects_unknown_log_level() {
        vseprostavby()
            .args(["--log-level", "loud", "content"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("--log-level"));
    }

    #[test]
    fn accepts_debug_log_level() {
        vseprostavby()
            .env_remove("RUST_LOG")
            .args(["--log-level", "debug", "content"])
            .assert()
            .success()
            .stderr(predicate::str::contains("configuration loaded"));
    }

    #[test]
    fn requires_subcommand() {
        vseprostavby().assert().failure();
    }
}

// ============================================
// Render Tests
// ============================================

mod render {
    use super::*;

    #[test]
    fn writes_document_to_out() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("site/index.html");

        vseprostavby()
            .current_dir(dir.path())
            .args(["render", "--year", "2025", "--out"])
            .arg(&out)
            .assert()
            .success();

        let html = std::fs::read_to_string(&out).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("VŠE PRO STAVBY.CZ - Stavební práce, Rekonstrukce, Výstavba RD"));
        assert!(html.contains("href=\"tel:+420737383621\""));
        assert!(html.contains("© 2025 VŠE PRO STAVBY.CZ."));
        assert!(html.contains("panel.dataset.menuState"));
    }

    #[test]
    fn stdout_without_script() {
        let dir = TempDir::new().unwrap();

        vseprostavby()
            .current_dir(dir.path())
            .args(["render", "--no-script", "--out", "-"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
            .stdout(predicate::str::contains("panel.dataset.menuState").not());
    }

    #[test]
    fn config_file_supplies_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("vseprostavby.toml"),
            "output = \"public/page.html\"\nyear = 2031\n",
        )
        .unwrap();

        vseprostavby()
            .current_dir(dir.path())
            .arg("render")
            .assert()
            .success();

        let html = std::fs::read_to_string(dir.path().join("public/page.html")).unwrap();
        assert!(html.contains("© 2031 VŠE PRO STAVBY.CZ."));
    }

    #[test]
    fn flags_override_config() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("custom.toml");
        std::fs::write(&config, "year = 2031\n").unwrap();

        vseprostavby()
            .current_dir(dir.path())
            .arg("--config")
            .arg(&config)
            .args(["render", "--year", "2040", "--out", "-"])
            .assert()
            .success()
            .stdout(predicate::str::contains("© 2040 VŠE PRO STAVBY.CZ."));
    }

    #[test]
    fn invalid_config_warns_and_renders() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("vseprostavby.toml"), "year = [\n").unwrap();

        vseprostavby()
            .current_dir(dir.path())
            .args(["render", "--out", "-"])
            .assert()
            .success()
            .stderr(predicate::str::contains("Failed to parse"))
            .stdout(predicate::str::contains("<!DOCTYPE html>"));
    }
}

// ============================================
// Content / CSS Tests
// ============================================

mod export {
    use super::*;

    #[test]
    fn content_is_valid_json() {
        let output = vseprostavby().args(["content", "--pretty"]).output().unwrap();
        assert!(output.status.success());

        let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(value["nav_links"].as_array().unwrap().len(), 4);
        assert_eq!(value["services"].as_array().unwrap().len(), 9);
        assert_eq!(value["references"].as_array().unwrap().len(), 4);
        assert_eq!(value["contact"]["phone_uri"], "tel:+420737383621");
    }

    #[test]
    fn css_to_file() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("site.css");

        vseprostavby()
            .args(["css", "--out"])
            .arg(&out)
            .assert()
            .success();

        let css = std::fs::read_to_string(&out).unwrap();
        assert!(css.starts_with(":root"));
        assert!(css.contains(".mobile-panel"));
    }
}
