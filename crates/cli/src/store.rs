//! Session handle persistence between CLI invocations.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use icws::SessionHandle;

/// File-backed store holding the handle produced by the last connect.
#[derive(Debug, Clone)]
pub struct SessionStore {
	path: PathBuf,
}

impl SessionStore {
	/// Creates a store at `path`, falling back to the default location under
	/// the user config directory.
	pub fn new(path: Option<PathBuf>) -> Result<Self> {
		let path = match path {
			Some(path) => path,
			None => default_path()?,
		};
		Ok(Self { path })
	}

	/// Returns the backing file path.
	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Loads the stored handle, if any.
	pub fn load(&self) -> Result<Option<SessionHandle>> {
		let raw = match std::fs::read_to_string(&self.path) {
			Ok(raw) => raw,
			Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
			Err(err) => {
				return Err(err).with_context(|| format!("failed to read session file {}", self.path.display()));
			}
		};
		let session = serde_json::from_str(&raw)
			.with_context(|| format!("malformed session file {}", self.path.display()))?;
		Ok(Some(session))
	}

	/// Persists a handle, creating parent directories as needed.
	pub fn save(&self, session: &SessionHandle) -> Result<()> {
		if let Some(parent) = self.path.parent() {
			std::fs::create_dir_all(parent)
				.with_context(|| format!("failed to create session directory {}", parent.display()))?;
		}
		let raw = serde_json::to_string_pretty(session)?;
		std::fs::write(&self.path, raw)
			.with_context(|| format!("failed to write session file {}", self.path.display()))
	}

	/// Removes the stored handle; returns false when none existed.
	pub fn clear(&self) -> Result<bool> {
		match std::fs::remove_file(&self.path) {
			Ok(()) => Ok(true),
			Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(false),
			Err(err) => Err(err.into()),
		}
	}
}

fn default_path() -> Result<PathBuf> {
	let base = dirs::config_dir().context("could not resolve a config directory for the session file")?;
	Ok(base.join("icws").join("session.json"))
}
