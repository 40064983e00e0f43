//! Weaviate REST implementation of [`VectorStore`].
use async_trait::async_trait;

use randovec_core::error::Result;
use randovec_core::types::{ClassDefinition, InsertObject, SchemaDescription};
use randovec_core::VectorStore;

pub mod batch;
pub mod client;
pub mod schema;

pub use client::WeaviateClient;

#[async_trait]
impl VectorStore for WeaviateClient {
    async fn create_class(&self, class: &ClassDefinition) -> Result<()> {
        WeaviateClient::create_class(self, class).await
    }

    async fn describe_schema(&self) -> Result<SchemaDescription> {
        WeaviateClient::describe_schema(self).await
    }

    async fn batch_write(&self, objects: &[InsertObject]) -> Result<()> {
        WeaviateClient::batch_write(self, objects).await
    }
}
