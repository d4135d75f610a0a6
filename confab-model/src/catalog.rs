//! Model catalog: the ordered display-name to provider-model-id mapping.
//!
//! The catalog is the configuration collaborator of the factory. It is built
//! once at startup (from the built-in defaults or a TOML document) and is
//! immutable afterwards. Lookup is first-match over the ordered entry list,
//! so adding a model is a catalog entry, not a code branch.

use confab_core::{ConfabError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Generation-time settings attached to a catalog entry.
///
/// No validation beyond presence: values pass through to the provider as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InferenceParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<i32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stop_sequences: Vec<String>,
}

impl InferenceParams {
    /// Temperature pinned at 0.01, favoring deterministic output. Every
    /// built-in entry carries at least this.
    pub fn deterministic() -> Self {
        Self { temperature: Some(0.01), ..Default::default() }
    }

    /// The full parameter set the built-in Anthropic entries use:
    /// deterministic temperature plus sampling and length limits.
    pub fn anthropic_defaults() -> Self {
        Self {
            temperature: Some(0.01),
            top_k: Some(250),
            top_p: Some(1.0),
            max_tokens: Some(4096),
            stop_sequences: vec!["\n\nHuman".to_string()],
        }
    }
}

/// One supported model: the display name shown in a selection control, the
/// exact id the provider expects, and the parameters attached to every
/// handle created for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelEntry {
    /// Human-readable label (e.g., `"Claude 3.7 Sonnet"`).
    pub display_name: String,
    /// Provider model id (e.g., `"anthropic.claude-3-7-sonnet-20250219-v1:0"`).
    pub model_id: String,
    /// Inference parameters merged into every request for this model.
    #[serde(default)]
    pub params: InferenceParams,
}

impl ModelEntry {
    pub fn new(
        display_name: impl Into<String>,
        model_id: impl Into<String>,
        params: InferenceParams,
    ) -> Self {
        Self { display_name: display_name.into(), model_id: model_id.into(), params }
    }
}

/// On-disk catalog document shape.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    supported_ids: Option<Vec<String>>,
    #[serde(default)]
    models: Vec<ModelEntry>,
}

/// Ordered list of supported models plus the allow-list of provider ids the
/// factory may hand out.
///
/// # Example
///
/// ```rust
/// use confab_model::ModelCatalog;
///
/// let catalog = ModelCatalog::builtin();
/// let entry = catalog.entry("Amazon Nova Pro").unwrap();
/// assert_eq!(entry.model_id, "amazon.nova-pro-v1:0");
/// assert!(catalog.is_supported(&entry.model_id));
/// ```
#[derive(Debug, Clone)]
pub struct ModelCatalog {
    entries: Vec<ModelEntry>,
    supported_ids: HashSet<String>,
}

impl ModelCatalog {
    /// Build a catalog from entries. The supported-id set defaults to the
    /// ids of the listed entries.
    ///
    /// # Errors
    ///
    /// Returns `ConfabError::Config` if `entries` is empty.
    pub fn new(entries: Vec<ModelEntry>) -> Result<Self> {
        let supported_ids = entries.iter().map(|e| e.model_id.clone()).collect();
        Self::with_supported_ids(entries, supported_ids)
    }

    /// Build a catalog with an explicit allow-list of provider ids.
    ///
    /// Entries whose id is absent from `supported_ids` stay listed (a UI may
    /// still show them) but `create` refuses to hand out a client for them.
    ///
    /// # Errors
    ///
    /// Returns `ConfabError::Config` if `entries` is empty.
    pub fn with_supported_ids(
        entries: Vec<ModelEntry>,
        supported_ids: HashSet<String>,
    ) -> Result<Self> {
        if entries.is_empty() {
            return Err(ConfabError::Config("catalog has no model entries".to_string()));
        }
        Ok(Self { entries, supported_ids })
    }

    /// The default catalog: the Bedrock-hosted Claude and Nova variants,
    /// all pinned to deterministic output.
    pub fn builtin() -> Self {
        let entries = vec![
            ModelEntry::new(
                "Claude 3.7 Sonnet",
                "anthropic.claude-3-7-sonnet-20250219-v1:0",
                InferenceParams::anthropic_defaults(),
            ),
            ModelEntry::new(
                "Claude 3.5 Sonnet",
                "anthropic.claude-3-5-sonnet-20241022-v2:0",
                InferenceParams::anthropic_defaults(),
            ),
            ModelEntry::new(
                "Claude 3 Sonnet",
                "anthropic.claude-3-sonnet-20240229-v1:0",
                InferenceParams::anthropic_defaults(),
            ),
            ModelEntry::new("Claude V2", "anthropic.claude-v2", InferenceParams::anthropic_defaults()),
            ModelEntry::new(
                "Amazon Nova Pro",
                "amazon.nova-pro-v1:0",
                InferenceParams::deterministic(),
            ),
            ModelEntry::new(
                "Amazon Nova Lite",
                "amazon.nova-lite-v1:0",
                InferenceParams::deterministic(),
            ),
        ];

        // Built-in entries are never out of step with their own id set.
        Self::new(entries).expect("built-in catalog is non-empty")
    }

    /// Parse a catalog from a TOML document.
    ///
    /// ```toml
    /// # supported_ids is optional; it defaults to the ids of the listed models.
    /// [[models]]
    /// display_name = "Claude 3.7 Sonnet"
    /// model_id = "anthropic.claude-3-7-sonnet-20250219-v1:0"
    ///
    /// [models.params]
    /// temperature = 0.01
    /// max_tokens = 4096
    /// ```
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let doc: CatalogDocument = toml::from_str(raw)?;
        match doc.supported_ids {
            Some(ids) => Self::with_supported_ids(doc.models, ids.into_iter().collect()),
            None => Self::new(doc.models),
        }
    }

    /// Load a catalog from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    /// Look up an entry by display name. First match wins.
    pub fn entry(&self, display_name: &str) -> Option<&ModelEntry> {
        self.entries.iter().find(|e| e.display_name == display_name)
    }

    /// Display names in catalog order, for a UI selection control.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.display_name.as_str()).collect()
    }

    /// The allow-list of provider ids the factory may hand out.
    pub fn supported_ids(&self) -> &HashSet<String> {
        &self.supported_ids
    }

    /// Whether a provider id is in the allow-list.
    pub fn is_supported(&self, model_id: &str) -> bool {
        self.supported_ids.contains(model_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
