//! File-backed session store: one serialized record under ~/.notefrais.

use anyhow::{Context, Result};
use notefrais_core::{Session, SessionProvider, UserKind};
use std::fs;
use std::path::{Path, PathBuf};

pub fn notefrais_home() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".notefrais"))
}

pub fn ensure_notefrais_home() -> Result<PathBuf> {
    let dir = notefrais_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

pub fn session_path() -> Result<PathBuf> {
    Ok(ensure_notefrais_home()?.join("session.json"))
}

fn read_session_file(path: &Path) -> Option<Session> {
    let raw = fs::read_to_string(path).ok()?;
    match serde_json::from_str(&raw) {
        Ok(session) => Some(session),
        Err(err) => {
            tracing::warn!("ignoring unreadable session file: {err}");
            None
        }
    }
}

fn write_session_file(path: &Path, session: &Session) -> Result<()> {
    let json = serde_json::to_string_pretty(session)?;
    fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

/// Reads the stored session on demand. Writes happen only in the login and
/// logout commands, never during navigation.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn open() -> Result<Self> {
        Ok(Self {
            path: session_path()?,
        })
    }
}

impl SessionProvider for FileSessionStore {
    /// A missing or unreadable file means no session; the router then
    /// redirects to login rather than failing.
    fn current(&self) -> Option<Session> {
        read_session_file(&self.path)
    }
}

pub fn login(email: &str, kind: UserKind) -> Result<()> {
    let path = session_path()?;
    let session = Session {
        kind,
        email: email.to_string(),
    };
    write_session_file(&path, &session)?;
    println!("Session stored for {email} in {}", path.display());
    Ok(())
}

pub fn logout() -> Result<()> {
    let path = session_path()?;
    if path.exists() {
        fs::remove_file(&path).with_context(|| format!("remove {}", path.display()))?;
        println!("Session cleared.");
    } else {
        println!("No stored session.");
    }
    Ok(())
}
