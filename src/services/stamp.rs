use crate::domain::errors::OpsError;
use crate::domain::models::SetupStamp;
use crate::services::fs::Filesystem;
use sha2::{Digest, Sha256};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

pub fn manifest_digest(contents: &[u8]) -> String {
    let mut h = Sha256::new();
    h.update(contents);
    hex::encode(h.finalize())
}

pub fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

pub fn write_stamp(fs: &dyn Filesystem, path: &Path, stamp: &SetupStamp) -> Result<(), OpsError> {
    let body = serde_json::to_vec_pretty(stamp)
        .map_err(|e| OpsError::Io(std::io::Error::other(e)))?;
    fs.write(path, &body)?;
    Ok(())
}
