//! Admin session as an explicit value.
//!
//! `login`/`logout` are pure transitions returning a new session value;
//! persisting the flag between runs happens behind [`SessionPort`], so
//! the storage (a local file here, browser storage elsewhere) stays at
//! the boundary instead of being ambient global state.
use std::{fs, io::ErrorKind, path::PathBuf};

/// Storage key for the flag; doubles as the default file name.
pub const SESSION_KEY: &str = "adminAuthenticated";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdminSession {
    pub authenticated: bool,
}

impl AdminSession {
    pub fn login(self) -> Self {
        Self {
            authenticated: true,
        }
    }

    pub fn logout(self) -> Self {
        Self {
            authenticated: false,
        }
    }
}

/// Boundary for persisting the flag between runs.
pub trait SessionPort {
    fn read(&self) -> AdminSession;
    fn write(&self, session: AdminSession);
}

/// File-backed flag: the file holds `"true"` while authenticated and is
/// absent otherwise. No expiry.
pub struct FileSessionPort {
    path: PathBuf,
}

impl FileSessionPort {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for FileSessionPort {
    fn default() -> Self {
        Self::new(format!(".{SESSION_KEY}"))
    }
}

impl SessionPort for FileSessionPort {
    fn read(&self) -> AdminSession {
        AdminSession {
            authenticated: fs::read_to_string(&self.path)
                .map(|s| s.trim() == "true")
                .unwrap_or(false),
        }
    }

    fn write(&self, session: AdminSession) {
        if session.authenticated {
            fs::write(&self.path, "true").expect("No se pudo guardar la sesión");
        } else if let Err(e) = fs::remove_file(&self.path) {
            if e.kind() != ErrorKind::NotFound {
                panic!("No se pudo cerrar la sesión: {e}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_port(name: &str) -> FileSessionPort {
        let path = std::env::temp_dir().join(format!("{name}-{}", std::process::id()));
        let _ = fs::remove_file(&path);
        FileSessionPort::new(path)
    }

    #[test]
    fn test_absent_file_reads_logged_out() {
        let port = scratch_port("session-absent");
        assert!(!port.read().authenticated);
    }

    #[test]
    fn test_login_roundtrips_through_the_file() {
        let port = scratch_port("session-login");

        port.write(AdminSession::default().login());
        assert!(port.read().authenticated);
    }

    #[test]
    fn test_logout_removes_the_flag() {
        let port = scratch_port("session-logout");

        port.write(AdminSession::default().login());
        port.write(port.read().logout());

        assert!(!port.read().authenticated);
        // Logging out twice is fine; there is just nothing to remove.
        port.write(port.read().logout());
    }

    #[test]
    fn test_garbage_content_reads_logged_out() {
        let port = scratch_port("session-garbage");
        fs::write(
            std::env::temp_dir().join(format!("session-garbage-{}", std::process::id())),
            "yes",
        )
        .unwrap();

        assert!(!port.read().authenticated);
    }
}
