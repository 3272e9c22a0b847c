//! Config document export/import and blob storage
//!
//! The export document wraps calibration and palette selection:
//! `{ "calibration": {...}, "skyPalettes": {...}, "exportedAt": RFC3339 }`.
//! Import accepts that shape and the legacy wrapper-less one (calibration
//! sections at top level). Persisted storage is the same document minus
//! `exportedAt`, behind a blob get/set seam.

use chrono::Utc;
use cirrus_core::{CirrusError, CirrusResult};
use serde_json::{json, Value};

use crate::{Calibration, PaletteSelection};

/// Complete in-memory visualizer configuration
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VisualizerConfig {
    pub calibration: Calibration,
    pub palettes: PaletteSelection,
}

impl VisualizerConfig {
    /// Import from a parsed document; partial and legacy shapes merge over
    /// defaults, anything non-object is a discrete failure
    pub fn import_document(doc: &Value) -> CirrusResult<Self> {
        if !doc.is_object() {
            return Err(CirrusError::ConfigParse(
                "config document is not a JSON object".to_string(),
            ));
        }

        // Legacy documents have no "calibration" wrapper
        let calibration_doc = doc.get("calibration").unwrap_or(doc);

        Ok(VisualizerConfig {
            calibration: Calibration::merge(calibration_doc),
            palettes: PaletteSelection::merge(doc.get("skyPalettes")),
        })
    }

    /// Import from raw JSON text
    pub fn import_str(text: &str) -> CirrusResult<Self> {
        let doc: Value = serde_json::from_str(text)
            .map_err(|err| CirrusError::ConfigParse(err.to_string()))?;
        Self::import_document(&doc)
    }

    /// Export document for download, stamped with the export time
    pub fn export_document(&self) -> Value {
        let mut doc = self.storage_document();
        doc["exportedAt"] = Value::String(Utc::now().to_rfc3339());
        doc
    }

    /// Storage shape: the export document minus `exportedAt`
    pub fn storage_document(&self) -> Value {
        json!({
            "calibration": self.calibration,
            "skyPalettes": self.palettes,
        })
    }
}

/// Blob storage seam for the persisted config
///
/// The host decides where the blob lives (browser storage, a file, a test
/// buffer); this crate only defines the round-trip.
pub trait ConfigStore {
    /// Load the stored blob, `None` when nothing was ever saved
    fn load(&self) -> CirrusResult<Option<String>>;

    /// Replace the stored blob
    fn save(&mut self, blob: &str) -> CirrusResult<()>;
}

/// In-memory store for tests and headless runs
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    blob: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConfigStore for MemoryStore {
    fn load(&self) -> CirrusResult<Option<String>> {
        Ok(self.blob.clone())
    }

    fn save(&mut self, blob: &str) -> CirrusResult<()> {
        self.blob = Some(blob.to_string());
        Ok(())
    }
}

/// Load the stored config, falling back to defaults
///
/// A missing blob or an unreadable document never fails startup; the
/// problem is logged and the defaults win.
pub fn load_or_default(store: &dyn ConfigStore) -> VisualizerConfig {
    match store.load() {
        Ok(Some(blob)) => match VisualizerConfig::import_str(&blob) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(%err, "stored config unreadable, using defaults");
                VisualizerConfig::default()
            }
        },
        Ok(None) => VisualizerConfig::default(),
        Err(err) => {
            tracing::warn!(%err, "config store unavailable, using defaults");
            VisualizerConfig::default()
        }
    }
}

/// Persist the config in storage shape
pub fn persist(store: &mut dyn ConfigStore, config: &VisualizerConfig) -> CirrusResult<()> {
    let blob = serde_json::to_string(&config.storage_document())
        .map_err(|err| CirrusError::ConfigStore(err.to_string()))?;
    store.save(&blob)
}
