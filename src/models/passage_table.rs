use crate::models::{Event, EventPassages};
use crate::types::{EventIndex, SentenceIndex, TurnNumber};
use crate::Error;
use csv::Writer;
use serde::Serialize;
use std::io::Write;

/// One passage of the flattened corpus, located by its positional indices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PassageRow {
    pub event_idx: EventIndex,
    /// `0` for the presentation, `1` for the Q&A.
    pub section_idx: usize,
    /// Position of the turn among the contributing turns of its section.
    pub part_idx: usize,
    pub turn_number: TurnNumber,
    pub paragraph_idx: usize,
    pub sentence_idx: SentenceIndex,
    pub text: String,
}

/// Event metadata keyed by the same `event_idx` as the passage rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventInfoRow {
    pub event_idx: EventIndex,
    pub id: Option<i64>,
    pub year_upload: Option<i32>,
    pub date: Option<String>,
    pub company_name: String,
}

pub fn flatten_corpus(corpus: &[EventPassages]) -> Vec<PassageRow> {
    let mut rows = Vec::new();

    for (event_idx, event_passages) in corpus.iter().enumerate() {
        for (section_idx, turns) in event_passages.sections().into_iter().enumerate() {
            for (part_idx, turn) in turns.iter().enumerate() {
                for (paragraph_idx, paragraph) in turn.paragraphs.iter().enumerate() {
                    for (sentence_idx, passage) in paragraph.iter().enumerate() {
                        rows.push(PassageRow {
                            event_idx,
                            section_idx,
                            part_idx,
                            turn_number: turn.turn_number,
                            paragraph_idx,
                            sentence_idx,
                            text: passage.clone(),
                        });
                    }
                }
            }
        }
    }

    rows
}

pub fn event_info_rows<'a, I>(events: I) -> Vec<EventInfoRow>
where
    I: IntoIterator<Item = &'a Event>,
{
    events
        .into_iter()
        .enumerate()
        .map(|(event_idx, event)| EventInfoRow {
            event_idx,
            id: event.id,
            year_upload: event.year_upload,
            date: event.date.map(|date| date.format("%Y-%m-%d %H:%M:%S").to_string()),
            company_name: event.company_name.clone(),
        })
        .collect()
}

/// Writes serializable rows as CSV (with a header row) to `writer`.
pub fn write_rows_csv<T, W>(rows: &[T], writer: W) -> Result<(), Error>
where
    T: Serialize,
    W: Write,
{
    let mut csv_writer = Writer::from_writer(writer);

    for row in rows {
        csv_writer.serialize(row)?;
    }

    csv_writer.flush()?;

    Ok(())
}
