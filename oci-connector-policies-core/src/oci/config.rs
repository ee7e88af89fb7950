//! OCI config file loading (`~/.oci/config`, INI profiles).
//!
//! Read once at startup; every field consumed by the tool is required except
//! the pass phrase (encrypted keys are not supported).

use crate::oci::{OciError, OciResult};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub const DEFAULT_PROFILE: &str = "DEFAULT";

/// Credentials and tenancy coordinates loaded from an OCI config profile.
#[derive(Debug, Clone)]
pub struct OciConfig {
    pub tenancy: String,
    pub user: String,
    pub fingerprint: String,
    pub key_file: PathBuf,
    pub region: String,
}

impl OciConfig {
    /// Load a profile from an OCI config file.
    pub fn from_file(path: &Path, profile: &str) -> OciResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            OciError::ConfigError(format!("failed to read {}: {e}", path.display()))
        })?;
        let sections = parse_ini(&contents);
        let section = sections.get(profile).ok_or_else(|| {
            OciError::ConfigError(format!(
                "profile [{profile}] not found in {}",
                path.display()
            ))
        })?;

        let get = |key: &str| -> OciResult<String> {
            section.get(key).cloned().ok_or_else(|| {
                OciError::ConfigError(format!("profile [{profile}] is missing '{key}'"))
            })
        };

        Ok(Self {
            tenancy: get("tenancy")?,
            user: get("user")?,
            fingerprint: get("fingerprint")?,
            key_file: expand_home(&get("key_file")?),
            region: get("region")?,
        })
    }

    /// Default config file location (`~/.oci/config`).
    pub fn default_path() -> PathBuf {
        std::env::var_os("HOME")
            .map(PathBuf::from)
            .unwrap_or_default()
            .join(".oci")
            .join("config")
    }

    /// The signing key id: `tenancy/user/fingerprint`.
    pub fn key_id(&self) -> String {
        format!("{}/{}/{}", self.tenancy, self.user, self.fingerprint)
    }
}

/// Minimal INI parser covering the subset the OCI config format uses:
/// `[section]` headers, `key=value` lines, `#` or `;` comments.
fn parse_ini(contents: &str) -> HashMap<String, HashMap<String, String>> {
    let mut sections: HashMap<String, HashMap<String, String>> = HashMap::new();
    let mut current = String::new();
    for raw in contents.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }
        if let Some(name) = line.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
            current = name.trim().to_string();
            sections.entry(current.clone()).or_default();
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            sections
                .entry(current.clone())
                .or_default()
                .insert(key.trim().to_string(), value.trim().to_string());
        }
    }
    sections
}

fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(rest);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r"
# comment
[DEFAULT]
user=ocid1.user.oc1..aaaa
fingerprint=20:3b:97:13:55:1c:5b:0d:d3:37:d8:50:4e:c5:3a:34
key_file=/home/opc/.oci/oci_api_key.pem
tenancy=ocid1.tenancy.oc1..bbbb
region=us-ashburn-1

[SANDBOX]
user=ocid1.user.oc1..cccc
fingerprint=aa:bb
key_file=/keys/sandbox.pem
tenancy=ocid1.tenancy.oc1..dddd
region=eu-frankfurt-1
";

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        file.write_all(contents.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn loads_default_profile() {
        let file = write_config(SAMPLE);
        let config = OciConfig::from_file(file.path(), DEFAULT_PROFILE).expect("load config");
        assert_eq!(config.tenancy, "ocid1.tenancy.oc1..bbbb");
        assert_eq!(config.region, "us-ashburn-1");
        assert_eq!(
            config.key_id(),
            "ocid1.tenancy.oc1..bbbb/ocid1.user.oc1..aaaa/20:3b:97:13:55:1c:5b:0d:d3:37:d8:50:4e:c5:3a:34"
        );
    }

    #[test]
    fn loads_named_profile() {
        let file = write_config(SAMPLE);
        let config = OciConfig::from_file(file.path(), "SANDBOX").expect("load config");
        assert_eq!(config.region, "eu-frankfurt-1");
        assert_eq!(config.key_file, PathBuf::from("/keys/sandbox.pem"));
    }

    #[test]
    fn missing_profile_is_an_error() {
        let file = write_config(SAMPLE);
        let err = OciConfig::from_file(file.path(), "NOPE").expect_err("should fail");
        assert!(err.to_string().contains("profile [NOPE] not found"));
    }

    #[test]
    fn missing_key_is_an_error() {
        let file = write_config("[DEFAULT]\nuser=u\n");
        let err = OciConfig::from_file(file.path(), DEFAULT_PROFILE).expect_err("should fail");
        assert!(err.to_string().contains("missing 'fingerprint'"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = OciConfig::from_file(Path::new("/nonexistent/oci/config"), DEFAULT_PROFILE)
            .expect_err("should fail");
        assert!(matches!(err, OciError::ConfigError(_)));
    }
}
