use async_trait::async_trait;

use crate::error::Result;
use crate::types::{ClassDefinition, InsertObject, SchemaDescription};

/// The remote vector database the seeder writes into.
#[async_trait]
pub trait VectorStore: Send + Sync {
    /// Create a class. Stores report an existing class as `Error::ClassExists`.
    async fn create_class(&self, class: &ClassDefinition) -> Result<()>;

    async fn describe_schema(&self) -> Result<SchemaDescription>;

    /// Write one batch of objects. Any rejected object fails the whole call.
    async fn batch_write(&self, objects: &[InsertObject]) -> Result<()>;
}

#[async_trait]
impl<T: VectorStore + ?Sized> VectorStore for std::sync::Arc<T> {
    async fn create_class(&self, class: &ClassDefinition) -> Result<()> {
        (**self).create_class(class).await
    }

    async fn describe_schema(&self) -> Result<SchemaDescription> {
        (**self).describe_schema().await
    }

    async fn batch_write(&self, objects: &[InsertObject]) -> Result<()> {
        (**self).batch_write(objects).await
    }
}
