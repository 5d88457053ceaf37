use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

pub const EQUALS_RULE: &str =
    "================================================================================";
pub const DASH_RULE: &str =
    "--------------------------------------------------------------------------------";

/// Transcripts are delivered with Windows line endings.
const LINE_END: &str = "\r\n";

/// `"name  [number]"`, the speaker header form used in transcripts.
pub fn speaker_header(name: &str, number: usize) -> String {
    format!("{}  [{}]", name, number)
}

/// Builds a transcript body from the canonical section templates.
#[derive(Debug, Clone, Default)]
pub struct TranscriptBuilder {
    title: String,
    corporate_participants: Vec<(String, Option<String>)>,
    conference_participants: Vec<(String, Option<String>)>,
    presentation: Option<Vec<String>>,
    questions_and_answers: Option<Vec<String>>,
    use_transcript_heading: bool,
}

impl TranscriptBuilder {
    pub fn new() -> Self {
        Self {
            title: "Q4 2021 Acme Corp Earnings Call".to_string(),
            ..Self::default()
        }
    }

    pub fn corporate_participant(mut self, name: &str, position: &str) -> Self {
        self.corporate_participants
            .push((name.to_string(), Some(position.to_string())));
        self
    }

    pub fn conference_participant(mut self, name: &str, position: &str) -> Self {
        self.conference_participants
            .push((name.to_string(), Some(position.to_string())));
        self
    }

    /// A speaker turn in the presentation. `header` is the full header line, e.g. built with
    /// [`speaker_header`].
    pub fn presentation_turn(mut self, header: &str, text: &str) -> Self {
        let blocks = self.presentation.get_or_insert_with(Vec::new);
        blocks.push(header.to_string());
        blocks.push(text.to_string());
        self
    }

    pub fn qa_turn(mut self, header: &str, text: &str) -> Self {
        let blocks = self.questions_and_answers.get_or_insert_with(Vec::new);
        blocks.push(header.to_string());
        blocks.push(text.to_string());
        self
    }

    /// A raw block in the presentation, for malformed sections.
    pub fn presentation_block(mut self, block: &str) -> Self {
        self.presentation
            .get_or_insert_with(Vec::new)
            .push(block.to_string());
        self
    }

    pub fn qa_block(mut self, block: &str) -> Self {
        self.questions_and_answers
            .get_or_insert_with(Vec::new)
            .push(block.to_string());
        self
    }

    /// Uses the "Transcript" heading instead of "Presentation".
    pub fn with_transcript_heading(mut self) -> Self {
        self.use_transcript_heading = true;
        self
    }

    pub fn build(&self) -> String {
        let mut lines: Vec<String> = vec![self.title.clone(), String::new()];

        push_roster(&mut lines, "Corporate Participants", &self.corporate_participants);
        push_roster(
            &mut lines,
            "Conference Call Participants",
            &self.conference_participants,
        );

        if let Some(blocks) = &self.presentation {
            let heading = if self.use_transcript_heading {
                "Transcript"
            } else {
                "Presentation"
            };
            push_turn_section(&mut lines, heading, blocks);
        }

        if let Some(blocks) = &self.questions_and_answers {
            push_turn_section(&mut lines, "Questions and Answers", blocks);
        }

        lines.push(EQUALS_RULE.to_string());
        lines.push("Definitions".to_string());
        lines.push(EQUALS_RULE.to_string());
        lines.push("PRELIMINARY TRANSCRIPT: boilerplate.".to_string());

        lines.join(LINE_END) + LINE_END
    }
}

fn push_roster(lines: &mut Vec<String>, heading: &str, participants: &[(String, Option<String>)]) {
    if participants.is_empty() {
        return;
    }

    lines.push(EQUALS_RULE.to_string());
    lines.push(heading.to_string());
    lines.push(EQUALS_RULE.to_string());
    lines.push(String::new());
    for (name, position) in participants {
        lines.push(format!(" * {}", name));
        if let Some(position) = position {
            lines.push(format!("   {}", position));
        }
    }
    lines.push(String::new());
}

fn push_turn_section(lines: &mut Vec<String>, heading: &str, blocks: &[String]) {
    lines.push(EQUALS_RULE.to_string());
    lines.push(heading.to_string());
    for block in blocks {
        lines.push(DASH_RULE.to_string());
        lines.extend(block.split('\n').map(str::to_string));
        lines.push(String::new());
    }
}

/// The transcript used across the integration tests: a corporate roster of two, one analyst,
/// a presentation of three turns and a Q&A with a keyword question.
pub fn sample_transcript() -> String {
    TranscriptBuilder::new()
        .corporate_participant("John Smith", "Acme Corp - CEO")
        .corporate_participant("Jane Doe", "Acme Corp - CFO")
        .conference_participant("Alan Analyst", "Big Bank - Analyst")
        .presentation_turn(
            &speaker_header("Operator", 1),
            "Good day and welcome to the Acme fourth quarter call. Russia will be discussed.",
        )
        .presentation_turn(
            &speaker_header("John Smith,  Acme Corp - CEO", 2),
            "Thank you. Revenue grew 10 percent.\nOur business in Russia was suspended in March. We expect no further impact. Margins improved.\nEurope remained stable.\nAsia grew strongly.",
        )
        .presentation_turn(
            &speaker_header("Jane Doe,  Acme Corp - CFO", 3),
            "Sales excluding Russia rose 5 percent. Cash flow was strong.",
        )
        .qa_turn(
            &speaker_header("Operator", 4),
            "Our first question comes from Alan Analyst.",
        )
        .qa_turn(
            &speaker_header("Alan Analyst,  Big Bank - Analyst", 5),
            "What is your exposure to Ukraine?",
        )
        .qa_turn(
            &speaker_header("Jane Doe,  Acme Corp - CFO", 6),
            "It is limited.\nWe have no assets there.",
        )
        .qa_turn(
            &speaker_header("Alan Analyst,  Big Bank - Analyst", 7),
            "And on pricing?",
        )
        .qa_turn(
            &speaker_header("John Smith,  Acme Corp - CEO", 8),
            "Prices rose.\nEnergy costs in Russia doubled. That hurt.",
        )
        .build()
}

/// Builds a transcript XML document around an (unescaped) body.
#[derive(Debug, Clone)]
pub struct EventXmlBuilder {
    pub id: i64,
    pub last_update: String,
    pub event_type_id: i64,
    pub event_type_name: String,
    pub action: String,
    pub story_type: String,
    pub version: String,
    pub title: String,
    pub city: String,
    pub company_name: String,
    pub company_ticker: String,
    pub start_date: String,
    pub body: String,
}

impl EventXmlBuilder {
    pub fn new(body: &str) -> Self {
        Self {
            id: 1234567,
            last_update: "Wednesday, March 2, 2022 at 9:41:23pm GMT".to_string(),
            event_type_id: 1,
            event_type_name: "Earnings Conference Call".to_string(),
            action: "publish".to_string(),
            story_type: "transcript".to_string(),
            version: "Final".to_string(),
            title: "Q4 2021 Acme Corp Earnings Call".to_string(),
            city: "New York".to_string(),
            company_name: "Acme Corp & Co".to_string(),
            company_ticker: "ACME".to_string(),
            start_date: "02-Mar-22 1:30pm GMT".to_string(),
            body: body.to_string(),
        }
    }

    pub fn build(&self) -> String {
        format!(
            concat!(
                "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\r\n",
                "<Event Id=\"{}\" lastUpdate=\"{}\" eventTypeId=\"{}\" eventTypeName=\"{}\">\r\n",
                "  <EventStory Id=\"1\" expirationDate=\"\" action=\"{}\" storyType=\"{}\" version=\"{}\">\r\n",
                "    <eventTitle>{}</eventTitle>\r\n",
                "    <city>{}</city>\r\n",
                "    <companyName>{}</companyName>\r\n",
                "    <companyTicker>{}</companyTicker>\r\n",
                "    <startDate>{}</startDate>\r\n",
                "    <headline>{}</headline>\r\n",
                "    <Body>{}</Body>\r\n",
                "  </EventStory>\r\n",
                "</Event>\r\n"
            ),
            self.id,
            escape_xml(&self.last_update),
            self.event_type_id,
            escape_xml(&self.event_type_name),
            escape_xml(&self.action),
            escape_xml(&self.story_type),
            escape_xml(&self.version),
            escape_xml(&self.title),
            escape_xml(&self.city),
            escape_xml(&self.company_name),
            escape_xml(&self.company_ticker),
            escape_xml(&self.start_date),
            escape_xml(&self.title),
            escape_xml(&self.body),
        )
    }
}

pub fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Writes `contents` to `path`, gzip-compressed if the path ends with `.gz`.
pub fn write_fixture_file(path: &Path, contents: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    if path.extension().map_or(false, |extension| extension == "gz") {
        let mut encoder = GzEncoder::new(fs::File::create(path)?, Compression::default());
        encoder.write_all(contents.as_bytes())?;
        encoder.finish()?;
        Ok(())
    } else {
        fs::write(path, contents)
    }
}

/// A fresh, empty scratch directory below the system temp directory.
pub fn scratch_dir(name: &str) -> io::Result<std::path::PathBuf> {
    let dir = std::env::temp_dir().join(format!(
        "transcript-sniffer-{}-{}",
        name,
        std::process::id()
    ));
    if dir.exists() {
        fs::remove_dir_all(&dir)?;
    }
    fs::create_dir_all(&dir)?;
    Ok(dir)
}
