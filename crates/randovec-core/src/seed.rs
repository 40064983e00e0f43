//! The end-to-end seeding run: settings, connect, schema, import.
//!
//! Config and connection failures abort the run. Schema failures are logged
//! and the import is still attempted. Batch failures end up in the report.
use figment::Figment;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use crate::config::{ConnectionSettings, Settings};
use crate::error::{Error, Result};
use crate::import::{import, ImportOptions, ImportReport};
use crate::traits::VectorStore;
use crate::types::ClassDefinition;

/// Validate settings from `figment`, then [`run`]. `connect` is never
/// called when validation fails.
pub async fn run_from<S, F>(figment: &Figment, connect: F, cancel: &CancellationToken, options: ImportOptions) -> Result<ImportReport>
where
    S: VectorStore,
    F: FnOnce(&ConnectionSettings) -> Result<S>,
{
    info!("validating env");
    let settings = Settings::from_figment(figment)?;
    run(&settings, connect, cancel, options).await
}

pub async fn run<S, F>(settings: &Settings, connect: F, cancel: &CancellationToken, options: ImportOptions) -> Result<ImportReport>
where
    S: VectorStore,
    F: FnOnce(&ConnectionSettings) -> Result<S>,
{
    info!(endpoint = %settings.connection.http_host, "attempting connection to weaviate instance");
    let store = connect(&settings.connection).map_err(|e| {
        error!(error = %e, "failed to create weaviate client");
        e
    })?;

    info!("creating schema");
    ensure_schema(&store).await;

    info!(
        num_objects = settings.run.num_objects,
        batch_size = settings.run.batch_size,
        vector_size = settings.run.vector_size,
        "starting import"
    );
    import(&store, &settings.run, cancel, options).await
}

/// Create `RandClass` and log the resulting schema. Never fails.
pub async fn ensure_schema<S>(store: &S)
where
    S: VectorStore + ?Sized,
{
    let class = ClassDefinition::rand_class();
    match store.create_class(&class).await {
        Ok(()) => info!(class = %class.class, "created class"),
        Err(Error::ClassExists(name)) => info!(class = %name, "class already exists"),
        Err(e) => error!(class = %class.class, error = %e, "error creating class"),
    }

    match store.describe_schema().await {
        Ok(schema) => info!(classes = ?schema.class_names(), "schema"),
        Err(e) => error!(error = %e, "failed to get schema"),
    }
}
