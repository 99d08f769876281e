//! Autosave record wire format and the adapter that validates it.
//!
//! The record layout is fixed by the external contract (camelCase JSON):
//! `{textLayers, history, currentStep, imageUrl, imageWidth, imageHeight,
//! timestamp, version}`. A stored record is only restored when its schema
//! version matches exactly and its image identity equals the session's
//! image; anything else is discarded silently (logged at warn) and the
//! session starts empty.

use serde::{Deserialize, Serialize};

use overtype_core::{ImageIdentity, TextLayer};

use crate::store::BlobStore;

/// Fixed namespace key in the storage collaborator.
pub const AUTOSAVE_KEY: &str = "overtype.autosave";

/// Schema version written into every record. Compatibility is an exact
/// string match; any other value discards the record on load.
pub const SCHEMA_VERSION: &str = "1.0";

/// The persisted wire record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutosaveRecord {
    pub text_layers: Vec<TextLayer>,
    pub history: Vec<Vec<TextLayer>>,
    pub current_step: usize,
    pub image_url: String,
    pub image_width: u32,
    pub image_height: u32,
    /// ISO-8601 wall-clock time the record was written.
    pub timestamp: String,
    pub version: String,
}

/// The engine state that survives a session: live layers, the history
/// sequence, and the cursor into it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SavedState {
    pub layers: Vec<TextLayer>,
    pub history: Vec<Vec<TextLayer>>,
    pub current_step: usize,
}

/// Serializes engine state to the storage collaborator and validates it
/// back on session start.
pub struct AutosaveAdapter<S: BlobStore> {
    store: S,
}

impl<S: BlobStore> AutosaveAdapter<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Write the state under the fixed namespace key, wrapped with the
    /// image identity, timestamp, and schema version. A storage failure
    /// is transient: logged, not propagated.
    pub fn save(&mut self, state: &SavedState, image: &ImageIdentity, timestamp: &str) {
        let record = AutosaveRecord {
            text_layers: state.layers.clone(),
            history: state.history.clone(),
            current_step: state.current_step,
            image_url: image.url.clone(),
            image_width: image.width,
            image_height: image.height,
            timestamp: timestamp.to_string(),
            version: SCHEMA_VERSION.to_string(),
        };

        let json = match serde_json::to_string(&record) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("autosave: failed to serialize record: {e}");
                return;
            }
        };
        if let Err(e) = self.store.put(AUTOSAVE_KEY, &json) {
            log::warn!("autosave: write failed: {e}");
        }
    }

    /// Read and validate the stored record. Any mismatch or failure
    /// yields an empty state. The restored cursor is clamped into the
    /// restored history's bounds.
    pub fn load(&self, expected: &ImageIdentity) -> SavedState {
        let json = match self.store.get(AUTOSAVE_KEY) {
            Ok(Some(json)) => json,
            Ok(None) => return SavedState::default(),
            Err(e) => {
                log::warn!("autosave: read failed: {e}");
                return SavedState::default();
            }
        };

        let record: AutosaveRecord = match serde_json::from_str(&json) {
            Ok(record) => record,
            Err(e) => {
                log::warn!("autosave: discarding unparsable record: {e}");
                return SavedState::default();
            }
        };

        if record.version != SCHEMA_VERSION {
            log::warn!(
                "autosave: discarding record with schema version '{}' (expected '{SCHEMA_VERSION}')",
                record.version
            );
            return SavedState::default();
        }

        let stored = ImageIdentity {
            url: record.image_url,
            width: record.image_width,
            height: record.image_height,
        };
        if stored != *expected {
            log::debug!("autosave: record belongs to a different image, starting empty");
            return SavedState::default();
        }

        let current_step = if record.history.is_empty() {
            0
        } else {
            record.current_step.min(record.history.len() - 1)
        };

        SavedState {
            layers: record.text_layers,
            history: record.history,
            current_step,
        }
    }

    /// Delete the stored record.
    pub fn clear(&mut self) {
        if let Err(e) = self.store.remove(AUTOSAVE_KEY) {
            log::warn!("autosave: clear failed: {e}");
        }
    }

    /// Access the underlying store (tests, host inspection).
    pub fn store(&self) -> &S {
        &self.store
    }
}
