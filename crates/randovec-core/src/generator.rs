//! Synthetic record generation.
//!
//! Content strings come from the OS CSPRNG; vectors are constant-filled
//! placeholders standing in for a real embedding pipeline.
use tracing::info;

use crate::error::{Error, Result};
use crate::types::DataObject;

pub const CONTENT_LEN: usize = 10;
pub const PLACEHOLDER_COMPONENT: f32 = 0.12345;
const SAMPLE_LEN: usize = 5;

/// Random lowercase hex string of exactly `len` characters.
pub fn rand_content(len: usize) -> Result<String> {
    let mut bytes = vec![0u8; len.div_ceil(2)];
    getrandom::fill(&mut bytes).map_err(|e| Error::Operation(format!("reading OS randomness: {e}")))?;
    let mut s = hex::encode(bytes);
    s.truncate(len);
    Ok(s)
}

pub fn placeholder_vector(dim: usize) -> Vec<f32> {
    vec![PLACEHOLDER_COMPONENT; dim]
}

/// Produce exactly `count` records with `vector_dim`-long vectors.
pub fn generate(count: usize, vector_dim: usize) -> Result<Vec<DataObject>> {
    let mut objects = Vec::new();
    objects
        .try_reserve_exact(count)
        .map_err(|e| Error::InvalidArgument(format!("cannot hold {count} objects: {e}")))?;
    for _ in 0..count {
        objects.push(DataObject { content: rand_content(CONTENT_LEN)?, vector: placeholder_vector(vector_dim) });
    }

    let sample: Vec<&str> = objects[..objects.len().min(SAMPLE_LEN)].iter().map(|o| o.content.as_str()).collect();
    info!(count, vector_dim, ?sample, "generated data objects");

    Ok(objects)
}
