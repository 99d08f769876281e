//! Font registry — de-duplicated, fire-and-forget font loading.
//!
//! The actual font-face loading mechanism (fetching bytes, registering
//! the family with the rendering surface) is an external collaborator.
//! This registry tracks which family names have been requested and with
//! what outcome, so that:
//!
//! * a family already pending or ready is never requested twice, and
//! * completions may arrive in any order, including duplicates for the
//!   same name, without double-registering.
//!
//! Font failures are reported but non-fatal to the editor.

pub mod fonts;

pub use fonts::{FontKind, FontRegistry, FontSource, FontStatus};
