use crate::models::{
    flatten_corpus, Event, EventFilter, EventLoader, EventPassages, PassageExtractor, PassageRow,
};
use crate::Error;
use log::{info, warn};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub files_total: usize,
    pub events_loaded: usize,
    /// Loaded events carrying at least one warning.
    pub events_degraded: usize,
    pub files_failed: usize,
    pub events_accepted: usize,
    pub rows: usize,
    /// One message per file which could not be loaded.
    pub failures: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct BatchOutput {
    /// Events accepted by the filter, in file order.
    pub events: Vec<Event>,
    /// Passages of `events`, index-aligned.
    pub corpus: Vec<EventPassages>,
    pub rows: Vec<PassageRow>,
    pub report: BatchReport,
}

/// Loads, filters and extracts every file. A file which cannot be loaded is reported and
/// skipped; it never aborts the batch.
///
/// # Errors
/// Only extraction errors (invalid extraction configuration) are returned.
pub fn run_batch<P: AsRef<Path>>(
    files: &[P],
    loader: &EventLoader,
    filter: &EventFilter,
    extractor: &PassageExtractor,
) -> Result<BatchOutput, Error> {
    let mut report = BatchReport {
        files_total: files.len(),
        ..BatchReport::default()
    };
    let mut events = Vec::new();

    for (file_idx, file) in files.iter().enumerate() {
        let file = file.as_ref();
        info!(
            "Processing file {}/{}: {}",
            file_idx + 1,
            files.len(),
            file.display()
        );

        let event = match loader.load_event_file(file) {
            Ok(event) => event,
            Err(err) => {
                let message = format!("{}: {}", file.display(), err);
                warn!("Skipping {}", message);
                report.files_failed += 1;
                report.failures.push(message);
                continue;
            }
        };

        report.events_loaded += 1;
        if event.is_degraded() {
            report.events_degraded += 1;
        }

        if filter.accepts(&event) {
            events.push(event);
        }
    }

    report.events_accepted = events.len();

    let corpus = extractor.extract_events(&events)?;
    let rows = flatten_corpus(&corpus);
    report.rows = rows.len();

    info!(
        "Loaded {} of {} files ({} degraded, {} failed), {} events accepted, {} passages",
        report.events_loaded,
        report.files_total,
        report.events_degraded,
        report.files_failed,
        report.events_accepted,
        report.rows
    );

    Ok(BatchOutput {
        events,
        corpus,
        rows,
        report,
    })
}
