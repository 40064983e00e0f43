//! Generate, wrap, chunk, and write.
//!
//! Writes are sequential and best-effort: a failed batch is logged and
//! recorded in the [`ImportReport`], and the loop moves on to the next one.
//! Cancelling the token aborts the in-flight request and stops the loop.
use std::fmt;

use indicatif::{ProgressBar, ProgressStyle};
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use crate::chunk::chunk;
use crate::config::RunSettings;
use crate::error::Result;
use crate::generator::generate;
use crate::traits::VectorStore;
use crate::types::{DataObject, InsertObject};

#[derive(Debug, Clone, Copy, Default)]
pub struct ImportOptions {
    /// Draw a progress bar on stderr while writing.
    pub progress: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchFailure {
    pub chunk: usize,
    pub size: usize,
    pub error: String,
}

/// Aggregated outcome of one import run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub total_chunks: usize,
    pub succeeded_chunks: usize,
    pub failed: Vec<BatchFailure>,
    /// Chunks not completed because the run was cancelled.
    pub skipped_chunks: usize,
    pub objects_written: usize,
    pub objects_failed: usize,
    pub cancelled: bool,
}

impl ImportReport {
    pub fn attempted_chunks(&self) -> usize {
        self.succeeded_chunks + self.failed.len()
    }

    /// True only when every chunk was written.
    pub fn is_success(&self) -> bool {
        !self.cancelled && self.failed.is_empty() && self.succeeded_chunks == self.total_chunks
    }
}

impl fmt::Display for ImportReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {} chunks succeeded", self.succeeded_chunks, self.total_chunks)?;
        if !self.failed.is_empty() {
            write!(f, ", {} failed", self.failed.len())?;
        }
        if self.cancelled {
            write!(f, ", cancelled with {} not completed", self.skipped_chunks)?;
        }
        write!(f, " ({} objects written)", self.objects_written)
    }
}

pub fn wrap(objects: Vec<DataObject>) -> Vec<InsertObject> {
    objects.into_iter().map(InsertObject::from).collect()
}

/// Generate and wrap `run.num_objects` objects and split them into batches.
pub fn prepare(run: &RunSettings) -> Result<Vec<Vec<InsertObject>>> {
    let objects = generate(run.num_objects, run.vector_size)?;
    chunk(wrap(objects), run.batch_size)
}

pub async fn import<S>(store: &S, run: &RunSettings, cancel: &CancellationToken, options: ImportOptions) -> Result<ImportReport>
where
    S: VectorStore + ?Sized,
{
    // The empty chunk produced for an empty input is never sent.
    let chunks: Vec<Vec<InsertObject>> = prepare(run)?.into_iter().filter(|c| !c.is_empty()).collect();
    let mut report = ImportReport { total_chunks: chunks.len(), ..ImportReport::default() };
    if chunks.is_empty() {
        info!("nothing to import");
        return Ok(report);
    }

    let pb = progress_bar(options, run.num_objects);
    for (i, batch) in chunks.iter().enumerate() {
        if cancel.is_cancelled() {
            report.cancelled = true;
            report.skipped_chunks = chunks.len() - i;
            break;
        }
        info!(chunk = i, size = batch.len(), "adding chunk to store");

        let outcome = tokio::select! {
            biased;
            () = cancel.cancelled() => None,
            res = store.batch_write(batch) => Some(res),
        };
        match outcome {
            None => {
                report.cancelled = true;
                report.skipped_chunks = chunks.len() - i;
                break;
            }
            Some(Ok(())) => {
                report.succeeded_chunks += 1;
                report.objects_written += batch.len();
                info!(chunk = i, written = report.objects_written, "added objects to store");
            }
            Some(Err(e)) => {
                error!(chunk = i, size = batch.len(), error = %e, "error importing chunk, continuing");
                report.failed.push(BatchFailure { chunk: i, size: batch.len(), error: e.to_string() });
                report.objects_failed += batch.len();
            }
        }
        pb.inc(batch.len() as u64);
    }

    if report.cancelled {
        warn!(skipped = report.skipped_chunks, "import cancelled");
        pb.abandon_with_message("cancelled");
    } else {
        pb.finish_with_message("done");
    }
    Ok(report)
}

fn progress_bar(options: ImportOptions, total: usize) -> ProgressBar {
    if !options.progress {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(total as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} objects ({percent}%) {msg}")
    {
        pb.set_style(style.progress_chars("#>-"));
    }
    pb
}
