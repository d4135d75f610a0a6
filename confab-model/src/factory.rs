//! The model client factory.
//!
//! `ModelFactory` owns the shared Bedrock transport handle and the model
//! catalog. Building the factory is the only async step (the AWS credential
//! chain is loaded once); `create` itself is a pure lookup plus handle
//! construction and performs no I/O.

use crate::bedrock::BedrockChatModel;
use crate::catalog::ModelCatalog;
use confab_core::{ConfabError, Result};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Connection settings for the shared Bedrock transport handle.
///
/// # Example
///
/// ```rust
/// use confab_model::BedrockSettings;
///
/// // Default: us-east-1
/// let settings = BedrockSettings::default();
///
/// // Custom region with a VPC endpoint
/// let settings = BedrockSettings::new("us-west-2")
///     .with_endpoint_url("https://vpce-xxx.bedrock-runtime.us-west-2.vpce.amazonaws.com");
/// ```
#[derive(Debug, Clone)]
pub struct BedrockSettings {
    /// AWS region for the Bedrock endpoint (e.g., `"us-east-1"`).
    pub region: String,
    /// Optional custom endpoint URL (e.g., a VPC endpoint).
    pub endpoint_url: Option<String>,
}

impl Default for BedrockSettings {
    fn default() -> Self {
        Self { region: "us-east-1".to_string(), endpoint_url: None }
    }
}

impl BedrockSettings {
    /// Create settings for the given region.
    pub fn new(region: impl Into<String>) -> Self {
        Self { region: region.into(), ..Default::default() }
    }

    /// Set a custom endpoint URL, consuming and returning `self`.
    pub fn with_endpoint_url(mut self, url: impl Into<String>) -> Self {
        self.endpoint_url = Some(url.into());
        self
    }
}

/// Selects and configures a Bedrock model client from a display name.
///
/// The factory holds the catalog and a single `aws_sdk_bedrockruntime::Client`
/// built at construction; every handle returned by [`create`](Self::create)
/// shares that transport.
///
/// # Example
///
/// ```rust,ignore
/// use confab_model::{ModelCatalog, ModelFactory};
///
/// let factory = ModelFactory::new(ModelCatalog::builtin()).await?;
/// let model = factory.create("Claude 3.7 Sonnet")?;
/// let response = model.complete(request).await?;
/// ```
pub struct ModelFactory {
    client: aws_sdk_bedrockruntime::Client,
    catalog: ModelCatalog,
    region: String,
}

impl ModelFactory {
    /// Create a factory over the default settings (region `us-east-1`).
    ///
    /// Loads AWS credentials from the standard credential chain
    /// (environment variables, shared config, IMDS, etc.) and constructs
    /// the shared `aws_sdk_bedrockruntime::Client`.
    pub async fn new(catalog: ModelCatalog) -> Result<Self> {
        Self::with_settings(catalog, BedrockSettings::default()).await
    }

    /// Create a factory with custom connection settings.
    pub async fn with_settings(catalog: ModelCatalog, settings: BedrockSettings) -> Result<Self> {
        let mut sdk_config_loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(settings.region.clone()));

        if let Some(endpoint_url) = &settings.endpoint_url {
            sdk_config_loader = sdk_config_loader.endpoint_url(endpoint_url);
        }

        let sdk_config = sdk_config_loader.load().await;
        let client = aws_sdk_bedrockruntime::Client::new(&sdk_config);

        info!("model factory created for region={}, {} catalog entries", settings.region, catalog.len());

        Ok(Self { client, catalog, region: settings.region })
    }

    /// Create a factory around a pre-built SDK client.
    ///
    /// For embedders that manage their own AWS configuration, and for tests.
    /// `region` is only used to annotate errors and log lines; the client's
    /// own configuration decides where requests go.
    pub fn from_client(
        catalog: ModelCatalog,
        client: aws_sdk_bedrockruntime::Client,
        region: impl Into<String>,
    ) -> Self {
        Self { client, catalog, region: region.into() }
    }

    /// The catalog this factory resolves display names against. A UI can
    /// feed its selection control from `catalog().names()`.
    pub fn catalog(&self) -> &ModelCatalog {
        &self.catalog
    }

    /// Resolve a display name to a ready-to-invoke model handle.
    ///
    /// Pure lookup plus handle construction; no I/O. The returned handle
    /// shares the factory's transport and carries the catalog entry's
    /// inference parameters.
    ///
    /// # Errors
    ///
    /// Returns `ConfabError::UnsupportedModel` when the display name is not
    /// in the catalog, or when its provider id is outside the catalog's
    /// known-supported set. Not retried and not recovered here: the caller
    /// surfaces the error and stops the current request.
    #[instrument(skip(self))]
    pub fn create(&self, display_name: &str) -> Result<Arc<BedrockChatModel>> {
        let entry = self.catalog.entry(display_name).ok_or_else(|| {
            warn!("requested model {display_name:?} is not in the catalog");
            ConfabError::UnsupportedModel(format!("model {display_name:?} is not in the catalog"))
        })?;

        if !self.catalog.is_supported(&entry.model_id) {
            warn!("model id {} resolved from {display_name:?} is not in the supported set", entry.model_id);
            return Err(ConfabError::UnsupportedModel(format!(
                "model id {} is not in the supported set",
                entry.model_id
            )));
        }

        debug!("resolved {display_name:?} to model id {}", entry.model_id);

        Ok(Arc::new(BedrockChatModel::from_parts(
            self.client.clone(),
            entry.model_id.clone(),
            entry.params.clone(),
            self.region.clone(),
        )))
    }
}
