//! Autosave persistence for the Overtype engine.
//!
//! Architecture:
//! ```text
//! ┌──────────────┐  schedule   ┌───────────┐  fire   ┌────────────────┐
//! │ EditorSession│ ──────────► │ Debounce  │ ──────► │ AutosaveAdapter│
//! │ (mutations)  │             │ (2 ticks) │         │                │
//! └──────────────┘             └───────────┘         └───────┬────────┘
//!                                                            │ JSON record
//!                                                            ▼
//!                                                    ┌────────────────┐
//!                                                    │ BlobStore      │
//!                                                    │ (collaborator) │
//!                                                    └────────────────┘
//! ```
//!
//! The storage collaborator is an external key-value blob store; all
//! failures on it are transient I/O errors — logged, never fatal. A load
//! that fails validation (schema version, image identity, parse) yields
//! an empty starting state.

pub mod debounce;
pub mod record;
pub mod store;

pub use debounce::{Debounce, DEBOUNCE_TICKS};
pub use record::{AutosaveAdapter, AutosaveRecord, SavedState, AUTOSAVE_KEY, SCHEMA_VERSION};
pub use store::{BlobStore, MemoryStore, StoreError};
