//! Auth token persisted in a plain file so the next console run starts signed in.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use lib_core::{AppError, Result, TokenStore};

#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn storage_error(action: &str, path: &Path, e: std::io::Error) -> AppError {
    AppError::Storage(format!("Failed to {action} {}: {e}", path.display()))
}

impl TokenStore for FileTokenStore {
    /// Missing file means signed out; surrounding whitespace is ignored.
    fn load(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => {
                let token = content.trim();
                Ok((!token.is_empty()).then(|| token.to_string()))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(storage_error("read", &self.path, e)),
        }
    }

    fn save(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| storage_error("create", parent, e))?;
        }
        fs::write(&self.path, token).map_err(|e| storage_error("write", &self.path, e))?;
        restrict_permissions(&self.path)
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(storage_error("remove", &self.path, e)),
        }
    }
}

/// Owner read/write only.
#[cfg(unix)]
fn restrict_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o600))
        .map_err(|e| storage_error("set permissions on", path, e))
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib_core::AuthSession;
    use std::sync::Arc;

    #[test]
    fn test_missing_file_is_signed_out() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("token"));
        assert_eq!(store.load().unwrap(), None);
        store.clear().unwrap();
    }

    #[test]
    fn test_save_load_clear() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("nested/dir/token"));

        store.save("abc.def").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("abc.def"));

        store.clear().unwrap();
        assert!(!store.path().exists());
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_blank_file_is_signed_out() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token");
        fs::write(&path, "  \n").unwrap();
        assert_eq!(FileTokenStore::new(path).load().unwrap(), None);
    }

    #[test]
    fn test_session_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token");

        let first = AuthSession::new(Arc::new(FileTokenStore::new(&path)));
        first.login("persisted-token");
        drop(first);

        let second = AuthSession::new(Arc::new(FileTokenStore::new(&path)));
        assert!(second.is_authenticated());
        assert_eq!(second.token().as_deref(), Some("persisted-token"));

        second.logout();
        let third = AuthSession::new(Arc::new(FileTokenStore::new(&path)));
        assert!(!third.is_authenticated());
    }

    #[cfg(unix)]
    #[test]
    fn test_token_file_is_private() {
        use std::os::unix::fs::PermissionsExt;
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("token"));
        store.save("secret").unwrap();
        let mode = fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
