//! Font request tracking with idempotent de-duplication.

use std::collections::HashMap;

// ── Font source ─────────────────────────────────────────────────────

/// Container format of a font source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontKind {
    Ttf,
    Otf,
    Woff,
    Woff2,
}

/// A loadable font face: family name plus where its bytes come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FontSource {
    /// Family name used for measurement and rendering.
    pub name: String,
    pub source_url: String,
    pub kind: FontKind,
}

/// Lifecycle state of a requested family.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontStatus {
    /// Never requested.
    Unrequested,
    /// Requested, completion not yet observed.
    Pending,
    /// Usable for measurement and rendering.
    Ready,
    /// Load reported a failure. Non-fatal; rendering falls back.
    Failed,
}

// ── Registry ────────────────────────────────────────────────────────

#[derive(Debug)]
struct Entry {
    source: FontSource,
    status: FontStatus,
}

/// Tracks font-load requests and completions per family name.
#[derive(Debug, Default)]
pub struct FontRegistry {
    entries: HashMap<String, Entry>,
}

impl FontRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a load request. Returns `true` when the caller should
    /// actually start a load; a family already pending or ready is
    /// de-duplicated and returns `false`. A previously failed family
    /// may be retried.
    pub fn request(&mut self, source: FontSource) -> bool {
        match self.entries.get(&source.name) {
            Some(entry) if entry.status != FontStatus::Failed => {
                log::debug!("font '{}' already {:?}, not reloading", source.name, entry.status);
                false
            }
            _ => {
                log::debug!("font '{}' load started from {}", source.name, source.source_url);
                self.entries.insert(
                    source.name.clone(),
                    Entry {
                        source,
                        status: FontStatus::Pending,
                    },
                );
                true
            }
        }
    }

    /// Record a completion. Idempotent and order-tolerant: completions
    /// for unknown names or for families that already resolved are
    /// ignored, so a font requested twice before the first completion
    /// cannot double-register.
    pub fn complete(&mut self, name: &str, result: Result<(), String>) {
        let Some(entry) = self.entries.get_mut(name) else {
            log::debug!("font '{name}': completion for unknown family, ignored");
            return;
        };
        if entry.status != FontStatus::Pending {
            log::debug!("font '{name}': late completion ignored ({:?})", entry.status);
            return;
        }
        entry.status = match result {
            Ok(()) => FontStatus::Ready,
            Err(reason) => {
                log::warn!("font '{name}' failed to load: {reason}");
                FontStatus::Failed
            }
        };
    }

    pub fn status(&self, name: &str) -> FontStatus {
        self.entries
            .get(name)
            .map(|entry| entry.status)
            .unwrap_or(FontStatus::Unrequested)
    }

    /// Source of a tracked family, if any.
    pub fn source(&self, name: &str) -> Option<&FontSource> {
        self.entries.get(name).map(|entry| &entry.source)
    }

    /// Names of every family currently usable.
    pub fn ready_families(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, entry)| entry.status == FontStatus::Ready)
            .map(|(name, _)| name.as_str())
            .collect()
    }
}
