//! Editor session: one engine bound to one image identity.
//!
//! The session wires the engine's dirty flag to the debounced autosave
//! adapter over a host-supplied logical clock, restores state once at
//! start, and guarantees that switching images cancels any pending save
//! and discards all in-memory state — nothing bleeds between sessions
//! keyed by different images.

use overtype_core::ImageIdentity;
use overtype_persist::{AutosaveAdapter, BlobStore, Debounce};

use crate::engine::EditorEngine;

/// Host-supplied wall-clock source for record timestamps (ISO-8601).
/// The engine itself never reads a clock.
pub type TimestampFn = Box<dyn Fn() -> String + Send>;

pub struct EditorSession<S: BlobStore> {
    engine: EditorEngine,
    image: ImageIdentity,
    adapter: AutosaveAdapter<S>,
    debounce: Debounce,
    timestamp: TimestampFn,
}

impl<S: BlobStore> EditorSession<S> {
    /// Open a session for `image`, restoring the autosaved state when
    /// its record matches this image; otherwise the session starts
    /// empty.
    pub fn open(image: ImageIdentity, store: S, timestamp: TimestampFn) -> Self {
        let adapter = AutosaveAdapter::new(store);
        let saved = adapter.load(&image);
        let engine = if saved.layers.is_empty() && saved.history.is_empty() {
            EditorEngine::new()
        } else {
            log::debug!(
                "session: restored {} layers, {} history entries",
                saved.layers.len(),
                saved.history.len()
            );
            EditorEngine::from_saved(saved)
        };

        Self {
            engine,
            image,
            adapter,
            debounce: Debounce::new(),
            timestamp,
        }
    }

    pub fn engine(&self) -> &EditorEngine {
        &self.engine
    }

    /// Mutable engine access. Call [`tick`](Self::tick) afterwards so
    /// mutations schedule their debounced save.
    pub fn engine_mut(&mut self) -> &mut EditorEngine {
        &mut self.engine
    }

    pub fn image(&self) -> &ImageIdentity {
        &self.image
    }

    pub fn save_pending(&self) -> bool {
        self.debounce.is_pending()
    }

    /// Advance the logical clock: restart the debounce window when the
    /// engine mutated since the last tick, and flush the save once the
    /// window elapses. Returns `true` when a write was flushed.
    pub fn tick(&mut self, now: u64) -> bool {
        if self.engine.take_dirty() {
            self.debounce.schedule(now);
        }
        if self.debounce.fire(now) {
            self.flush();
            return true;
        }
        false
    }

    /// Write immediately, bypassing the debounce (host shutdown).
    pub fn save_now(&mut self) {
        self.debounce.cancel();
        self.engine.take_dirty();
        self.flush();
    }

    /// Abandon this image: cancel any pending save and discard every
    /// piece of in-memory state, then restore whatever the store holds
    /// for the new image.
    pub fn switch_image(&mut self, image: ImageIdentity) {
        self.debounce.cancel();
        self.engine = EditorEngine::new();
        self.image = image;

        let saved = self.adapter.load(&self.image);
        if !(saved.layers.is_empty() && saved.history.is_empty()) {
            self.engine = EditorEngine::from_saved(saved);
        }
    }

    fn flush(&mut self) {
        let state = self.engine.saved_state();
        let timestamp = (self.timestamp)();
        self.adapter.save(&state, &self.image, &timestamp);
    }
}
