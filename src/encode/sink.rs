use crate::foundation::error::{SidleError, SidleResult};
use crate::render::backend::FrameRGBA;
use sha2::Digest as _;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// What a sink persisted for one frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WriteReceipt {
    pub bytes: u64,
    /// Lowercase hex SHA-256 of the persisted bytes.
    pub sha256: String,
}

impl WriteReceipt {
    pub fn for_bytes(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.len() as u64,
            sha256: sha256_hex(bytes),
        }
    }
}

/// Destination for rendered frames.
///
/// Sinks are shared across worker threads when a batch renders in parallel, so writes
/// take `&self`.
pub trait ImageSink: Send + Sync {
    fn write_image(&self, path: &Path, frame: &FrameRGBA) -> SidleResult<WriteReceipt>;
}

/// In-memory sink for tests and dry runs. Stores raw frames keyed by their target path.
#[derive(Debug, Default)]
pub struct InMemorySink {
    frames: Mutex<Vec<(PathBuf, FrameRGBA)>>,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames in the order they were written.
    pub fn frames(&self) -> Vec<(PathBuf, FrameRGBA)> {
        match self.frames.lock() {
            Ok(g) => g.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn get(&self, path: &Path) -> Option<FrameRGBA> {
        self.frames()
            .into_iter()
            .find_map(|(p, f)| (p == path).then_some(f))
    }
}

impl ImageSink for InMemorySink {
    fn write_image(&self, path: &Path, frame: &FrameRGBA) -> SidleResult<WriteReceipt> {
        let receipt = WriteReceipt::for_bytes(&frame.data);
        self.frames
            .lock()
            .map_err(|_| SidleError::encode("in-memory sink lock poisoned"))?
            .push((path.to_path_buf(), frame.clone()));
        Ok(receipt)
    }
}

pub(crate) fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{:02x}", b));
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
