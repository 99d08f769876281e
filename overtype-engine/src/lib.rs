//! Layer & history engine.
//!
//! The explicit, dependency-injected state container behind the editor:
//! [`LayerStore`] (canonical ordered collection), [`HistoryManager`]
//! (bounded snapshot undo/redo), [`SelectionController`] (single/multi
//! select), composed by [`EditorEngine`] so every persisted-content
//! mutation records exactly one history snapshot. [`EditorSession`] ties
//! an engine to one image identity and the debounced autosave adapter.
//!
//! Data flow:
//! ```text
//! gesture ─▸ EditorEngine mutation ─▸ HistoryManager snapshot
//!                    │
//!                    ▸ EditorSession debounce ─▸ AutosaveAdapter
//! ```

use thiserror::Error;
use uuid::Uuid;

pub mod engine;
pub mod history;
pub mod selection;
pub mod session;
pub mod store;
pub mod upload;

pub use engine::{EditorEngine, Gesture};
pub use history::{HistoryManager, HISTORY_CAP};
pub use selection::SelectionController;
pub use session::EditorSession;
pub use store::{Direction, LayerStore};
pub use upload::{validate_upload, ImageInfo, UploadError};

/// Errors surfaced by engine operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("layer not found: {0}")]
    LayerNotFound(Uuid),

    #[error("layer is locked: {0}")]
    LayerLocked(Uuid),

    #[error("reorder requires exactly one selected layer")]
    ReorderRequiresSingle,

    #[error("operation requires at least {required} selected layers, got {got}")]
    NotEnoughSelected { required: usize, got: usize },
}
