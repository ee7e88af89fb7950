use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("oci-connector-policies").expect("binary builds");
    // Keep the test hermetic: no ambient OCI configuration or env overrides.
    cmd.env_remove("CONNECTOR_COMPARTMENT_ID")
        .env_remove("OCI_CLI_PROFILE")
        .env_remove("OCI_CLI_CONFIG_FILE");
    cmd
}

#[test]
fn help_names_the_required_flag() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--connector-compartment-id"))
        .stdout(predicate::str::contains("--profile"))
        .stdout(predicate::str::contains("--config-file"));
}

#[test]
fn missing_connector_compartment_id_is_a_usage_error() {
    cmd()
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--connector-compartment-id"));
}

#[test]
fn missing_config_file_is_fatal() {
    cmd()
        .args([
            "--connector-compartment-id",
            "ocid1.compartment.oc1..connectors",
            "--config-file",
            "/nonexistent/oci/config",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("/nonexistent/oci/config"));
}

#[test]
fn unknown_profile_is_fatal() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config_path = dir.path().join("config");
    std::fs::write(
        &config_path,
        "[DEFAULT]\nuser=u\nfingerprint=f\nkey_file=/missing.pem\ntenancy=t\nregion=us-ashburn-1\n",
    )
    .expect("write config");

    cmd()
        .args([
            "--connector-compartment-id",
            "ocid1.compartment.oc1..connectors",
            "--config-file",
        ])
        .arg(&config_path)
        .args(["--profile", "NOPE"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("NOPE"));
}
