use crate::constants::UNKNOWN_METADATA;
use crate::models::{ParsedTranscript, Roster, SectionTurns, TranscriptParser};
use chrono::NaiveDateTime;

/// One earnings-call transcript document: its metadata plus the parsed rosters and turns.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    /// Source file name (without directories).
    pub file: String,
    /// Numeric name of the directory the file was found in, if any.
    pub year_upload: Option<i32>,
    pub action: String,
    pub story_type: String,
    pub version: String,
    pub title: String,
    pub city: String,
    pub company_name: String,
    pub company_ticker: String,
    pub date: Option<NaiveDateTime>,
    pub id: Option<i64>,
    pub last_update: Option<NaiveDateTime>,
    pub event_type_id: Option<i64>,
    pub event_type_name: String,
    pub corporate_participants: Roster,
    pub conference_participants: Roster,
    pub presentation: SectionTurns,
    pub questions_and_answers: SectionTurns,
    /// Recoverable problems met while loading or parsing.
    pub warnings: Vec<String>,
}

impl Default for Event {
    fn default() -> Self {
        let unknown = UNKNOWN_METADATA.to_string();

        Self {
            file: unknown.clone(),
            year_upload: None,
            action: unknown.clone(),
            story_type: unknown.clone(),
            version: unknown.clone(),
            title: unknown.clone(),
            city: unknown.clone(),
            company_name: unknown.clone(),
            company_ticker: unknown.clone(),
            date: None,
            id: None,
            last_update: None,
            event_type_id: None,
            event_type_name: unknown,
            corporate_participants: Roster::default(),
            conference_participants: Roster::default(),
            presentation: SectionTurns::Absent,
            questions_and_answers: SectionTurns::Absent,
            warnings: vec![],
        }
    }
}

impl Event {
    /// An event without metadata, parsed from a bare transcript body.
    pub fn from_body(body: &str) -> Self {
        Self::default().with_body(body, &TranscriptParser::new())
    }

    pub fn with_body(self, body: &str, parser: &TranscriptParser) -> Self {
        self.with_parsed_transcript(parser.parse(body))
    }

    pub fn with_parsed_transcript(mut self, parsed: ParsedTranscript) -> Self {
        self.corporate_participants = parsed.corporate_participants;
        self.conference_participants = parsed.conference_participants;
        self.presentation = parsed.presentation;
        self.questions_and_answers = parsed.questions_and_answers;
        self.warnings.extend(parsed.warnings);
        self
    }

    /// Texts of the corporate presentation turns joined by spaces.
    pub fn presentation_collapsed(&self) -> String {
        self.presentation.collapsed_corporate_text()
    }

    /// Texts of the corporate Q&A turns joined by spaces.
    pub fn questions_and_answers_collapsed(&self) -> String {
        self.questions_and_answers.collapsed_corporate_text()
    }

    pub fn is_degraded(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Distinct words of all listed participant names.
    pub fn participant_name_parts(&self) -> Vec<String> {
        Roster::distinct_name_parts([&self.corporate_participants, &self.conference_participants])
    }
}
