//! Transient audio files
//!
//! Every synthesis writes into its own uniquely named file which is deleted
//! exactly once: explicitly on failure, or when the response body reading it
//! is finished or dropped.

use async_stream::try_stream;
use bytes::Bytes;
use futures::Stream;
use std::io;
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;
use tracing::{debug, warn};

use crate::config::ScratchConfig;
use crate::error::Result;
use crate::provider::AudioFormat;

pub const SCRATCH_PREFIX: &str = "playtts-";

const READ_CHUNK: usize = 64 * 1024;

/// Directory in which scratch audio files are allocated
#[derive(Debug, Clone)]
pub struct ScratchDir {
    root: PathBuf,
}

impl ScratchDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn from_config(config: &ScratchConfig) -> Self {
        Self::new(config.dir.clone().unwrap_or_else(std::env::temp_dir))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create an empty, uniquely named WAV file and hand back its guard.
    /// No handle stays open, so the synthesizer can reopen the path freely.
    pub fn allocate(&self) -> Result<ScopedAudioFile> {
        self.allocate_for(AudioFormat::Wav)
    }

    /// Same as [`ScratchDir::allocate`], with the file extension of `format`
    pub fn allocate_for(&self, format: AudioFormat) -> Result<ScopedAudioFile> {
        let suffix = format!(".{}", format.extension());
        let file = tempfile::Builder::new()
            .prefix(SCRATCH_PREFIX)
            .suffix(&suffix)
            .tempfile_in(&self.root)?;
        let path = file.into_temp_path().keep().map_err(io::Error::from)?;

        debug!("Allocated scratch file {}", path.display());
        Ok(ScopedAudioFile {
            path,
            released: false,
        })
    }
}

impl Default for ScratchDir {
    fn default() -> Self {
        Self::from_config(&ScratchConfig::default())
    }
}

/// Owns one scratch file and deletes it on release or drop
#[derive(Debug)]
pub struct ScopedAudioFile {
    path: PathBuf,
    released: bool,
}

impl ScopedAudioFile {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Delete the file now. Later calls, including the one from `Drop`, do nothing.
    pub fn release(&mut self) {
        if !self.released {
            self.released = true;
            release(&self.path);
        }
    }

    /// Size of the file as it is on disk
    pub async fn size(&self) -> Result<u64> {
        Ok(tokio::fs::metadata(&self.path).await?.len())
    }

    /// Stream the file contents in chunks. The stream owns the guard, so the
    /// file is deleted after the last chunk, or when the stream is dropped early.
    pub fn into_body_stream(self) -> impl Stream<Item = io::Result<Bytes>> + Send + 'static {
        let guard = self;
        try_stream! {
            let mut file = tokio::fs::File::open(guard.path()).await?;
            let mut buf = vec![0u8; READ_CHUNK];
            loop {
                let n = file.read(&mut buf).await?;
                if n == 0 {
                    break;
                }
                yield Bytes::copy_from_slice(&buf[..n]);
            }
            drop(file);
            drop(guard);
        }
    }
}

impl Drop for ScopedAudioFile {
    fn drop(&mut self) {
        self.release();
    }
}

/// Delete a scratch file, absorbing any failure
pub fn release(path: &Path) {
    match std::fs::remove_file(path) {
        Ok(()) => debug!("Released scratch file {}", path.display()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("Scratch file {} already gone", path.display())
        }
        Err(e) => warn!("Failed to remove scratch file {}: {}", path.display(), e),
    }
}
