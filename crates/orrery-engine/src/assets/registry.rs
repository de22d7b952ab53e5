use std::collections::BTreeSet;

/// How one asset request ended. Both outcomes count as settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    Failed,
}

/// Tracks in-flight asset requests and which textures are usable.
///
/// The runner holds simulation back until every requested asset has
/// settled; a failed texture is simply never reported by `has_texture`,
/// so draw code falls back to flat colors.
#[derive(Debug, Clone, Default)]
pub struct AssetGate {
    pending: BTreeSet<String>,
    loaded: BTreeSet<String>,
    failed: BTreeSet<String>,
}

impl AssetGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `key` as requested. Re-requesting a settled key re-arms it.
    pub fn request(&mut self, key: &str) {
        self.loaded.remove(key);
        self.failed.remove(key);
        self.pending.insert(key.to_string());
    }

    /// Record the outcome of a request. Unknown keys are ignored.
    pub fn settle(&mut self, key: &str, outcome: LoadOutcome) {
        if !self.pending.remove(key) {
            log::debug!("ignoring outcome for unrequested asset {key}");
            return;
        }
        match outcome {
            LoadOutcome::Loaded => {
                self.loaded.insert(key.to_string());
            }
            LoadOutcome::Failed => {
                self.failed.insert(key.to_string());
            }
        }
    }

    /// True once no request is outstanding.
    pub fn is_settled(&self) -> bool {
        self.pending.is_empty()
    }

    /// Whether a texture finished loading and can be drawn.
    pub fn has_texture(&self, key: &str) -> bool {
        self.loaded.contains(key)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn failed_count(&self) -> usize {
        self.failed.len()
    }
}
