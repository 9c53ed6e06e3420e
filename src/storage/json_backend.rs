use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{domain::TrackerState, utils};

use super::{Result, StateStore};

/// File name of the single managed snapshot, mirroring the storage key the
/// snapshot was historically kept under.
pub const STATE_FILE_NAME: &str = "tracker_state_v1.json";

const TMP_SUFFIX: &str = "tmp";

/// JSON-file implementation of [`StateStore`].
///
/// One snapshot file under the data directory. Saves stage to a `.tmp`
/// sibling and rename into place, so a failed write never corrupts the
/// previous snapshot.
#[derive(Debug, Clone)]
pub struct JsonStateStore {
    path: PathBuf,
}

impl JsonStateStore {
    /// Store rooted at the given base directory, or the default data
    /// directory when `None`.
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let root = base_dir.unwrap_or_else(utils::app_data_dir);
        utils::ensure_dir(&root)?;
        Ok(Self {
            path: root.join(STATE_FILE_NAME),
        })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    /// Path of the managed snapshot file.
    pub fn state_path(&self) -> &Path {
        &self.path
    }
}

impl StateStore for JsonStateStore {
    fn load(&self) -> Result<Option<TrackerState>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(&self.path)?;
        let state: TrackerState = serde_json::from_str(&data)?;
        Ok(Some(state))
    }

    fn save(&self, state: &TrackerState) -> Result<()> {
        let json = serde_json::to_string_pretty(state)?;
        let tmp = tmp_path(&self.path);
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}
