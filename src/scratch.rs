//! Per-request scratch files for downloaded voice payloads.
//!
//! Each request derives a unique file name from its (chat, user, message)
//! triple, so concurrent requests never collide on disk. The [`ScratchFile`]
//! guard removes the file when the request finishes, on every exit path.

use crate::defaults::VOICE_EXTENSION;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Local path for one voice message download.
///
/// Deterministic and injective over distinct (chat_id, user_id, message_id)
/// triples within a single work directory.
pub fn voice_path(work_dir: &Path, chat_id: i64, user_id: u64, message_id: i32) -> PathBuf {
    work_dir.join(format!(
        "{}_{}_{}.{}",
        chat_id, user_id, message_id, VOICE_EXTENSION
    ))
}

/// Remove a file if it exists. An already-absent path is not an error.
pub fn delete_if_exists(path: &Path) {
    match fs::remove_file(path) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => warn!(path = %path.display(), error = %e, "failed to remove scratch file"),
    }
}

/// Owns a scratch file path and removes the file on drop.
///
/// Created before the download starts, so the file is cleaned up whether
/// the request completes, is rejected, or fails partway through.
#[derive(Debug)]
pub struct ScratchFile {
    path: PathBuf,
}

impl ScratchFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ScratchFile {
    fn drop(&mut self) {
        delete_if_exists(&self.path);
    }
}
