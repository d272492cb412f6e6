/// End-to-end tests for the CLI
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

const FLEET: &str = r#"[
  {
    "id": 1,
    "asset_tag": "PAT-0001",
    "name": "Reception Laser",
    "ip_address": "10.20.0.11",
    "unit": "HQ",
    "location": "Ground floor",
    "status": "Online",
    "detailed_status": "Ready",
    "toner_black": 64,
    "page_count": 18234
  },
  {
    "id": 2,
    "asset_tag": "PAT-0002",
    "name": "Warehouse Inkjet",
    "ip_address": "10.20.0.12",
    "unit": "Annex",
    "status": "Offline",
    "detailed_status": "No response (ping)"
  }
]"#;

fn workspace(inventory: &str) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("printers.json"), inventory).unwrap();
    dir
}

fn read_inventory(dir: &Path) -> serde_json::Value {
    let content = std::fs::read_to_string(dir.join("printers.json")).unwrap();
    serde_json::from_str(&content).unwrap()
}

// Exit code tests for CLI
mod exit_code_tests {
    use super::*;

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("printwatch").arg("--help").assert().code(0);
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("printwatch").arg("--version").assert().code(0);
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("printwatch")
            .arg("--invalid-option")
            .assert()
            .code(2);
    }

    /// Exit code 2: Missing subcommand
    #[test]
    fn test_exit_code_missing_subcommand() {
        cargo_bin_cmd!("printwatch").assert().code(2);
    }

    /// Exit code 2: Invalid status filter value
    #[test]
    fn test_exit_code_invalid_status_filter() {
        cargo_bin_cmd!("printwatch")
            .args(["status", "--status", "sleeping"])
            .assert()
            .code(2);
    }

    /// Exit code 3: Application error - inventory file does not exist
    #[test]
    fn test_exit_code_missing_inventory() {
        let dir = tempfile::tempdir().unwrap();
        cargo_bin_cmd!("printwatch")
            .current_dir(dir.path())
            .args(["status", "-i", "missing.json"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Inventory file not found"));
    }

    /// Exit code 3: Application error - inventory is not valid JSON
    #[test]
    fn test_exit_code_malformed_inventory() {
        let dir = workspace("{ not json");
        cargo_bin_cmd!("printwatch")
            .current_dir(dir.path())
            .arg("sweep")
            .assert()
            .code(3);
    }

    /// Exit code 3: Application error - invalid configuration file
    #[test]
    fn test_exit_code_invalid_config() {
        let dir = workspace("[]");
        std::fs::write(dir.path().join("printwatch.config.yml"), "worker_cap: 0\n").unwrap();
        cargo_bin_cmd!("printwatch")
            .current_dir(dir.path())
            .arg("sweep")
            .assert()
            .code(3);
    }

    /// Exit code 1: at least one printer is offline with --fail-on-offline
    #[test]
    fn test_exit_code_printers_offline() {
        let dir = workspace(
            r#"[{"id": 9, "asset_tag": "PAT-0009", "name": "Broken", "ip_address": "not an address!"}]"#,
        );
        cargo_bin_cmd!("printwatch")
            .current_dir(dir.path())
            .args(["sweep", "--fail-on-offline"])
            .assert()
            .code(1);
    }
}

mod sweep_tests {
    use super::*;

    #[test]
    fn test_sweep_empty_inventory() {
        let dir = workspace("[]");
        cargo_bin_cmd!("printwatch")
            .current_dir(dir.path())
            .arg("sweep")
            .assert()
            .code(0)
            .stderr(predicate::str::contains("0 of 0 printers are online"));
    }

    #[test]
    fn test_sweep_quiet_prints_summary_line() {
        let dir = workspace("[]");
        cargo_bin_cmd!("printwatch")
            .current_dir(dir.path())
            .args(["sweep", "--quiet"])
            .assert()
            .code(0)
            .stdout(predicate::str::contains("0 of 0 printers online"));
    }

    #[test]
    fn test_sweep_unprobeable_address_is_written_offline() {
        let dir = workspace(
            r#"[{"id": 9, "asset_tag": "PAT-0009", "name": "Broken", "ip_address": "not an address!", "toner_black": 55}]"#,
        );
        cargo_bin_cmd!("printwatch")
            .current_dir(dir.path())
            .args(["sweep", "--quiet"])
            .assert()
            .code(0)
            .stdout(predicate::str::contains("0 of 1 printers online"));

        let inventory = read_inventory(dir.path());
        let device = &inventory[0];
        assert_eq!(device["status"], "Offline");
        assert_eq!(device["detailed_status"], "No response (ping)");
        assert_eq!(device["toner_black"], -1);
        assert_eq!(device["page_count"], -1);
        assert_eq!(device["name"], "Broken");
        assert!(device["last_checked"].is_string());
    }

    #[test]
    fn test_sweep_writes_audit_log_from_config() {
        let dir = workspace("[]");
        std::fs::write(
            dir.path().join("printwatch.config.yml"),
            "audit_log: audit.jsonl\n",
        )
        .unwrap();
        cargo_bin_cmd!("printwatch")
            .current_dir(dir.path())
            .args(["sweep", "--quiet"])
            .assert()
            .code(0);

        let audit = std::fs::read_to_string(dir.path().join("audit.jsonl")).unwrap();
        assert!(audit.contains("PRINTER_SWEEP"));
    }
}

mod status_tests {
    use super::*;

    #[test]
    fn test_status_shows_dashboard() {
        let dir = workspace(FLEET);
        cargo_bin_cmd!("printwatch")
            .current_dir(dir.path())
            .arg("status")
            .assert()
            .code(0)
            .stdout(predicate::str::contains("Reception Laser"))
            .stdout(predicate::str::contains("Warehouse Inkjet"))
            .stdout(predicate::str::contains("64%"))
            .stdout(predicate::str::contains("1 of 2 printers online"));
    }

    #[test]
    fn test_status_filter_by_unit() {
        let dir = workspace(FLEET);
        cargo_bin_cmd!("printwatch")
            .current_dir(dir.path())
            .args(["status", "--unit", "Annex"])
            .assert()
            .code(0)
            .stdout(predicate::str::contains("Warehouse Inkjet"))
            .stdout(predicate::str::contains("Reception Laser").not());
    }

    #[test]
    fn test_status_does_not_modify_inventory() {
        let dir = workspace(FLEET);
        let before = read_inventory(dir.path());
        cargo_bin_cmd!("printwatch")
            .current_dir(dir.path())
            .arg("status")
            .assert()
            .code(0);
        assert_eq!(read_inventory(dir.path()), before);
    }
}
