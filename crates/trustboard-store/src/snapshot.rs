// crates/trustboard-store/src/snapshot.rs
//
// JSON snapshot persistence for the in-memory repository.
//
// A snapshot is written to `<path>.tmp` and renamed over `<path>`, so a
// crash mid-write leaves the previous snapshot intact.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use trustboard_core::{Claim, Influencer, TrustboardError};

/// Current on-disk format version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serialized repository contents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u32,
    pub saved_at: DateTime<Utc>,
    pub influencers: Vec<Influencer>,
    pub claims: Vec<Claim>,
}

impl Snapshot {
    pub fn new(influencers: Vec<Influencer>, claims: Vec<Claim>) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            saved_at: Utc::now(),
            influencers,
            claims,
        }
    }

    /// Read a snapshot file. Returns `Ok(None)` if the file does not exist.
    pub async fn load(path: &Path) -> Result<Option<Snapshot>, TrustboardError> {
        let bytes = match tokio::fs::read(path).await {
            Ok(b) => b,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(TrustboardError::Storage(format!(
                    "Failed to read snapshot {}: {}",
                    path.display(),
                    e
                )))
            }
        };
        let snapshot: Snapshot = serde_json::from_slice(&bytes)?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(TrustboardError::Storage(format!(
                "Unsupported snapshot version {} in {}",
                snapshot.version,
                path.display()
            )));
        }
        tracing::debug!(
            path = %path.display(),
            influencers = snapshot.influencers.len(),
            claims = snapshot.claims.len(),
            "Snapshot loaded"
        );
        Ok(Some(snapshot))
    }

    /// Write the snapshot to `path`, creating parent directories.
    pub async fn save(&self, path: &Path) -> Result<(), TrustboardError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let json = serde_json::to_vec_pretty(self)?;
        let tmp = tmp_path(path);
        tokio::fs::write(&tmp, &json).await?;
        tokio::fs::rename(&tmp, path).await?;
        tracing::debug!(
            path = %path.display(),
            bytes = json.len(),
            "Snapshot written"
        );
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}
