//! `POST /v1/batch/objects`.
//!
//! Weaviate answers 200 even when individual objects are rejected; those
//! errors come back per object under `result.errors.error[]`. Any rejected
//! object fails the whole batch here so the caller can count it.
use serde::{Deserialize, Serialize};
use tracing::debug;

use randovec_core::error::{Error, Result};
use randovec_core::types::InsertObject;

use crate::client::{describe_failure, WeaviateClient};

const BATCH_PATH: &str = "/v1/batch/objects";

#[derive(Serialize)]
struct BatchRequest<'a> {
    objects: &'a [InsertObject],
}

#[derive(Debug, Deserialize)]
struct ObjectResponse {
    #[serde(default)]
    result: Option<ObjectResult>,
}

#[derive(Debug, Deserialize)]
struct ObjectResult {
    #[serde(default)]
    errors: Option<ErrorList>,
}

#[derive(Debug, Deserialize)]
struct ErrorList {
    #[serde(default)]
    error: Vec<ErrorItem>,
}

#[derive(Debug, Deserialize)]
struct ErrorItem {
    message: String,
}

impl ObjectResponse {
    fn first_error(&self) -> Option<&str> {
        self.result
            .as_ref()
            .and_then(|r| r.errors.as_ref())
            .and_then(|e| e.error.first())
            .map(|e| e.message.as_str())
    }
}

impl WeaviateClient {
    pub async fn batch_write(&self, objects: &[InsertObject]) -> Result<()> {
        if objects.is_empty() {
            return Ok(());
        }
        let resp = self
            .http
            .post(self.url(BATCH_PATH))
            .json(&BatchRequest { objects })
            .send()
            .await
            .map_err(|e| Error::BatchWrite(e.to_string()))?;
        if !resp.status().is_success() {
            return Err(Error::BatchWrite(describe_failure(resp).await));
        }

        let results: Vec<ObjectResponse> = resp
            .json()
            .await
            .map_err(|e| Error::BatchWrite(format!("decoding batch response: {e}")))?;
        let rejected: Vec<&str> = results.iter().filter_map(ObjectResponse::first_error).collect();
        if let Some(first) = rejected.first() {
            return Err(Error::BatchWrite(format!(
                "{} of {} objects rejected, first: {first}",
                rejected.len(),
                objects.len()
            )));
        }
        debug!(objects = objects.len(), "batch accepted");
        Ok(())
    }
}
