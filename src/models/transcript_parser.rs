use crate::constants::{
    CONFERENCE_PARTICIPANTS_HEADING, CORPORATE_PARTICIPANTS_HEADING, PRESENTATION_HEADING,
    QUESTIONS_AND_ANSWERS_HEADING, SECTION_END_RULE, TRANSCRIPT_HEADING, TURN_SEPARATOR_RULE,
    UNKNOWN_PARTICIPANT,
};
use crate::models::{ParticipantResolver, Roster, SectionTurns, Turn};
use crate::types::{SpeakerName, TurnNumber};
use log::warn;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static CORPORATE_PARTICIPANTS_MARKER: LazyLock<String> = LazyLock::new(|| {
    format!(
        "{}\n{}\n",
        CORPORATE_PARTICIPANTS_HEADING, SECTION_END_RULE
    )
});
static CONFERENCE_PARTICIPANTS_MARKER: LazyLock<String> = LazyLock::new(|| {
    format!(
        "{}\n{}\n",
        CONFERENCE_PARTICIPANTS_HEADING, SECTION_END_RULE
    )
});
static PRESENTATION_MARKER: LazyLock<String> =
    LazyLock::new(|| format!("{}\n{}", PRESENTATION_HEADING, TURN_SEPARATOR_RULE));
static TRANSCRIPT_MARKER: LazyLock<String> =
    LazyLock::new(|| format!("{}\n{}", TRANSCRIPT_HEADING, TURN_SEPARATOR_RULE));
static QUESTIONS_AND_ANSWERS_MARKER: LazyLock<String> = LazyLock::new(|| {
    format!(
        "{}\n{}",
        QUESTIONS_AND_ANSWERS_HEADING, TURN_SEPARATOR_RULE
    )
});
static TURN_BLOCK_DELIMITER: LazyLock<String> =
    LazyLock::new(|| format!("{}\n", TURN_SEPARATOR_RULE));

static SPEAKER_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^.+\s{2,}\[\d+\]").expect("valid speaker header pattern"));
static BRACKET_ONLY_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[\d+\]").expect("valid bracket header pattern"));
static SPEAKER_HEADER_PARTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(.*)\s{2,}\[(\d+)\]$").expect("valid speaker header parts pattern")
});

/// Bracket-only headers (e.g. `[12]`) are at most this many characters long.
const MAX_BRACKET_ONLY_HEADER_LENGTH: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Presentation,
    QuestionsAndAnswers,
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectionKind::Presentation => write!(f, "presentation"),
            SectionKind::QuestionsAndAnswers => write!(f, "questions and answers"),
        }
    }
}

/// Raw text of the four transcript sections. A missing section is an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TranscriptSections {
    pub corporate_participants: String,
    pub conference_participants: String,
    pub presentation: String,
    pub questions_and_answers: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedTranscript {
    pub corporate_participants: Roster,
    pub conference_participants: Roster,
    pub presentation: SectionTurns,
    pub questions_and_answers: SectionTurns,
    /// Human-readable notes about recoverable structural problems.
    pub warnings: Vec<String>,
}

/// Splits a transcript body into rosters and speaker turns.
#[derive(Debug, Clone, Default)]
pub struct TranscriptParser {
    resolver: ParticipantResolver,
}

impl TranscriptParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_resolver(resolver: ParticipantResolver) -> Self {
        Self { resolver }
    }

    pub fn parse(&self, body: &str) -> ParsedTranscript {
        let sections = Self::separate_sections(body);

        let corporate_participants = Roster::parse(&sections.corporate_participants);
        let conference_participants = Roster::parse(&sections.conference_participants);

        let mut warnings = Vec::new();

        let presentation = self.split_turns(
            &sections.presentation,
            SectionKind::Presentation,
            &corporate_participants,
            &conference_participants,
            &mut warnings,
        );
        let questions_and_answers = self.split_turns(
            &sections.questions_and_answers,
            SectionKind::QuestionsAndAnswers,
            &corporate_participants,
            &conference_participants,
            &mut warnings,
        );

        ParsedTranscript {
            corporate_participants,
            conference_participants,
            presentation,
            questions_and_answers,
            warnings,
        }
    }

    /// Locates the four sections by their heading markers.
    ///
    /// `&amp;` is unescaped and CRLF line endings are normalized first. Every section ends at the
    /// next `=` rule, or at the end of the body if there is none. "Transcript" is the fallback
    /// heading for the presentation.
    pub fn separate_sections(body: &str) -> TranscriptSections {
        let body = body.replace("&amp;", "&").replace("\r\n", "\n");

        let presentation = extract_section(&body, &PRESENTATION_MARKER)
            .or_else(|| extract_section(&body, &TRANSCRIPT_MARKER));

        TranscriptSections {
            corporate_participants: extract_section(&body, &CORPORATE_PARTICIPANTS_MARKER)
                .unwrap_or_default()
                .to_string(),
            conference_participants: extract_section(&body, &CONFERENCE_PARTICIPANTS_MARKER)
                .unwrap_or_default()
                .to_string(),
            presentation: presentation.unwrap_or_default().to_string(),
            questions_and_answers: extract_section(&body, &QUESTIONS_AND_ANSWERS_MARKER)
                .unwrap_or_default()
                .to_string(),
        }
    }

    /// Pairs speaker headers with the text blocks following them.
    ///
    /// Headers and texts are paired by position. When their counts differ, a single warning is
    /// recorded and the shorter side is padded: extra texts get "unknown participant" headers
    /// continuing the numbering, extra headers get empty texts.
    pub fn split_turns(
        &self,
        section_text: &str,
        kind: SectionKind,
        corporate: &Roster,
        conference: &Roster,
        warnings: &mut Vec<String>,
    ) -> SectionTurns {
        if section_text.trim().is_empty() {
            return SectionTurns::Absent;
        }

        // Blank blocks ahead of the first header belong to no speaker
        let (headers, mut texts): (Vec<&str>, Vec<&str>) = section_text
            .split(TURN_BLOCK_DELIMITER.as_str())
            .map(str::trim)
            .skip_while(|block| block.is_empty())
            .partition(|block| is_speaker_header(block));

        if headers.is_empty() {
            record_warning(warnings, format!("No speakers present at {}", kind));
            return SectionTurns::Empty;
        }
        if texts.is_empty() {
            record_warning(warnings, format!("No texts present at {}", kind));
            return SectionTurns::Empty;
        }

        let mut speakers = parse_speaker_headers(&headers, kind, warnings);

        if speakers.len() != texts.len() {
            record_warning(
                warnings,
                format!(
                    "Number of speakers ({}) and texts ({}) differ at {}",
                    speakers.len(),
                    texts.len(),
                    kind
                ),
            );

            let last_number = speakers.last().map_or(0, |(number, _)| *number);
            let missing_headers = texts.len().saturating_sub(speakers.len());
            speakers.extend(
                (1..=missing_headers)
                    .map(|offset| (last_number + offset, UNKNOWN_PARTICIPANT.to_string())),
            );
            texts.resize(speakers.len(), "");
        }

        let turns = speakers
            .into_iter()
            .zip(texts)
            .map(|((number, raw_name), text)| {
                let (speaker, role) = self.resolver.resolve(&raw_name, corporate, conference);
                Turn {
                    number,
                    speaker,
                    role,
                    text: text.to_string(),
                }
            })
            .collect();

        SectionTurns::Present(turns)
    }
}

/// Text between `start_marker` and the next section end rule.
fn extract_section<'a>(body: &'a str, start_marker: &str) -> Option<&'a str> {
    let start = body.find(start_marker)? + start_marker.len();
    let rest = &body[start..];

    Some(match rest.find(SECTION_END_RULE) {
        Some(end) => &rest[..end],
        None => rest,
    })
}

pub fn is_speaker_header(block: &str) -> bool {
    SPEAKER_HEADER.is_match(block)
        || (BRACKET_ONLY_HEADER.is_match(block)
            && block.chars().count() <= MAX_BRACKET_ONLY_HEADER_LENGTH)
}

fn parse_speaker_headers(
    headers: &[&str],
    kind: SectionKind,
    warnings: &mut Vec<String>,
) -> Vec<(TurnNumber, SpeakerName)> {
    let mut speakers: Vec<(TurnNumber, SpeakerName)> = Vec::with_capacity(headers.len());

    for header in headers {
        let previous_number = speakers.last().map_or(0, |(number, _)| *number);

        let parsed = if BRACKET_ONLY_HEADER.is_match(header) && !SPEAKER_HEADER.is_match(header) {
            header
                .trim_matches(|c| c == '[' || c == ']')
                .parse::<TurnNumber>()
                .ok()
                .map(|number| (number, UNKNOWN_PARTICIPANT.to_string()))
        } else {
            SPEAKER_HEADER_PARTS.captures(header).and_then(|captures| {
                let number = captures.get(2)?.as_str().parse::<TurnNumber>().ok()?;
                let name = captures.get(1)?.as_str().trim().to_string();
                Some((number, name))
            })
        };

        match parsed {
            Some(speaker) => speakers.push(speaker),
            None => {
                record_warning(
                    warnings,
                    format!("Could not parse speaker header '{}' at {}", header, kind),
                );
                speakers.push((previous_number + 1, UNKNOWN_PARTICIPANT.to_string()));
            }
        }
    }

    speakers
}

fn record_warning(warnings: &mut Vec<String>, message: String) {
    warn!("{}", message);
    warnings.push(message);
}
