//! Reading and writing the JSON config file.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tracing::{debug, info};

use super::{ConfigError, Credentials, Result};

/// Load credentials from a config file.
///
/// Returns `Ok(None)` when the file does not exist.
pub fn load_file(path: &Path) -> Result<Option<Credentials>> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(ConfigError::ReadError(e)),
    };

    let credentials: Credentials = serde_json::from_str(&data).map_err(ConfigError::ParseError)?;
    debug!(path = %path.display(), "Loaded config file");
    Ok(Some(credentials))
}

/// Save credentials to a config file.
///
/// Creates the parent directory if needed. On Unix the file is readable and
/// writable by its owner only.
///
/// # Errors
///
/// Returns an error if the credentials are invalid or the file cannot be
/// written.
pub fn save(path: &Path, credentials: &Credentials) -> Result<()> {
    credentials.validate()?;

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(ConfigError::CreateDirError)?;
    }

    let data = serde_json::to_string_pretty(credentials).map_err(ConfigError::SerializeError)?;
    write_private(path, data.as_bytes()).map_err(ConfigError::WriteError)?;

    info!(path = %path.display(), "Saved config file");
    Ok(())
}

#[cfg(unix)]
fn write_private(path: &Path, data: &[u8]) -> io::Result<()> {
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    // mode() only applies on creation
    file.set_permissions(fs::Permissions::from_mode(0o600))?;
    file.write_all(data)
}

#[cfg(not(unix))]
fn write_private(path: &Path, data: &[u8]) -> io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample() -> Credentials {
        Credentials::new(
            "user@company.com",
            "token",
            Some("https://company.atlassian.net/rest/api/3"),
        )
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let loaded = load_file(&dir.path().join("config.json")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        save(&path, &sample()).unwrap();
        let loaded = load_file(&path).unwrap().unwrap();

        assert_eq!(loaded, sample());
    }

    #[test]
    fn test_saved_file_uses_expected_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        save(&path, &sample()).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["email"], "user@company.com");
        assert_eq!(value["token"], "token");
        assert_eq!(value["base_url"], "https://company.atlassian.net/rest/api/3");
    }

    #[test]
    fn test_save_rejects_missing_token() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        let creds = Credentials::new("user@company.com", "", None);

        let err = save(&path, &creds).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
        assert!(!path.exists());
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"base_url": "https://mine.atlassian.net"}"#).unwrap();

        let loaded = load_file(&path).unwrap().unwrap();
        assert_eq!(loaded.email, "");
        assert_eq!(loaded.token, "");
        assert_eq!(loaded.base_url, "https://mine.atlassian.net");
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let err = load_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_saved_file_is_private() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{}").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

        save(&path, &sample()).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
