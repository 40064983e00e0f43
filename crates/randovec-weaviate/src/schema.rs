use reqwest::StatusCode;

use randovec_core::error::{Error, Result};
use randovec_core::types::{ClassDefinition, SchemaDescription};

use crate::client::{describe_failure, WeaviateClient};

const SCHEMA_PATH: &str = "/v1/schema";

impl WeaviateClient {
    /// `POST /v1/schema`. Weaviate answers 422 for a duplicate class.
    pub async fn create_class(&self, class: &ClassDefinition) -> Result<()> {
        let resp = self
            .http
            .post(self.url(SCHEMA_PATH))
            .json(class)
            .send()
            .await
            .map_err(|e| Error::Schema(format!("create class {}: {e}", class.class)))?;
        if resp.status().is_success() {
            return Ok(());
        }
        let status = resp.status();
        let detail = describe_failure(resp).await;
        if status == StatusCode::UNPROCESSABLE_ENTITY && detail.contains("already exists") {
            return Err(Error::ClassExists(class.class.clone()));
        }
        Err(Error::Schema(format!("create class {}: {detail}", class.class)))
    }

    /// `GET /v1/schema`.
    pub async fn describe_schema(&self) -> Result<SchemaDescription> {
        let resp = self
            .http
            .get(self.url(SCHEMA_PATH))
            .send()
            .await
            .map_err(|e| Error::Schema(format!("get schema: {e}")))?;
        if !resp.status().is_success() {
            return Err(Error::Schema(format!("get schema: {}", describe_failure(resp).await)));
        }
        resp.json().await.map_err(|e| Error::Schema(format!("decoding schema: {e}")))
    }
}
