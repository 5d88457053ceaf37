use test_utils::{sample_transcript, speaker_header, TranscriptBuilder, DASH_RULE};
use transcript_sniffer::models::SectionTurns;
use transcript_sniffer::{Role, TranscriptParser};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sample_transcript() {
        let parsed = TranscriptParser::new().parse(&sample_transcript());

        assert_eq!(parsed.corporate_participants.len(), 2);
        assert_eq!(parsed.conference_participants.len(), 1);
        assert_eq!(
            parsed.corporate_participants.collapsed_names(),
            &[
                "John Smith,  Acme Corp - CEO".to_string(),
                "Jane Doe,  Acme Corp - CFO".to_string()
            ]
        );

        let presentation = parsed.presentation.turns();
        assert_eq!(presentation.len(), 3);
        assert_eq!(
            presentation
                .iter()
                .map(|turn| (turn.number, turn.role.clone()))
                .collect::<Vec<_>>(),
            vec![(1, Role::Operator), (2, Role::Corporate), (3, Role::Corporate)]
        );
        assert_eq!(presentation[1].speaker, "John Smith,  Acme Corp - CEO");
        assert_eq!(
            presentation[2].text,
            "Sales excluding Russia rose 5 percent. Cash flow was strong."
        );

        let qa = parsed.questions_and_answers.turns();
        assert_eq!(qa.len(), 5);
        assert_eq!(qa[1].role, Role::Conference);
        assert_eq!(qa[1].speaker, "Alan Analyst,  Big Bank - Analyst");

        assert!(parsed.warnings.is_empty(), "{:?}", parsed.warnings);
    }

    #[test]
    fn test_paragraphs_of_turn() {
        let parsed = TranscriptParser::new().parse(&sample_transcript());
        let turn = &parsed.presentation.turns()[1];

        let paragraphs: Vec<&str> = turn.paragraphs().collect();
        assert_eq!(paragraphs.len(), 4);
        assert_eq!(paragraphs[2], "Europe remained stable.");
    }

    #[test]
    fn test_transcript_heading_fallback() {
        let body = TranscriptBuilder::new()
            .corporate_participant("John Smith", "Acme Corp - CEO")
            .presentation_turn(&speaker_header("John Smith,  Acme Corp - CEO", 1), "Hello.")
            .with_transcript_heading()
            .build();

        let parsed = TranscriptParser::new().parse(&body);

        assert_eq!(parsed.presentation.len(), 1);
        assert_eq!(parsed.presentation.turns()[0].text, "Hello.");
        assert_eq!(parsed.questions_and_answers, SectionTurns::Absent);
    }

    #[test]
    fn test_absent_sections_are_not_warned_about() {
        let body = TranscriptBuilder::new()
            .corporate_participant("John Smith", "Acme Corp - CEO")
            .build();

        let parsed = TranscriptParser::new().parse(&body);

        assert!(!parsed.presentation.is_present());
        assert!(!parsed.questions_and_answers.is_present());
        assert!(parsed.presentation.is_absent());
        assert!(parsed.warnings.is_empty());
    }

    #[test]
    fn test_section_without_speakers_is_empty() {
        let body = TranscriptBuilder::new()
            .corporate_participant("John Smith", "Acme Corp - CEO")
            .presentation_block("Just some text without any speaker.")
            .build();

        let parsed = TranscriptParser::new().parse(&body);

        assert_eq!(parsed.presentation, SectionTurns::Empty);
        assert!(!parsed.presentation.is_present());
        assert!(!parsed.presentation.is_absent());
        assert_eq!(
            parsed.warnings,
            vec!["No speakers present at presentation".to_string()]
        );
    }

    #[test]
    fn test_extra_text_gets_unknown_speaker() {
        let body = TranscriptBuilder::new()
            .corporate_participant("John Smith", "Acme Corp - CEO")
            .conference_participant("Alan Analyst", "Big Bank - Analyst")
            .qa_turn(
                &speaker_header("Alan Analyst,  Big Bank - Analyst", 1),
                "A question?",
            )
            .qa_block("An answer nobody introduced.")
            .qa_block("And another one.")
            .build();

        let parsed = TranscriptParser::new().parse(&body);
        let turns = parsed.questions_and_answers.turns();

        assert_eq!(turns.len(), 3);
        assert_eq!(turns[0].text, "A question?");
        assert_eq!(turns[1].number, 2);
        assert_eq!(turns[1].speaker, "unknown participant");
        assert_eq!(turns[1].role, Role::Unknown);
        assert_eq!(turns[2].number, 3);
        assert_eq!(turns[2].text, "And another one.");

        assert_eq!(parsed.warnings.len(), 1);
        assert!(parsed.warnings[0].contains("differ"));
    }

    #[test]
    fn test_extra_header_gets_empty_text() {
        let body = TranscriptBuilder::new()
            .corporate_participant("John Smith", "Acme Corp - CEO")
            .presentation_turn(&speaker_header("John Smith,  Acme Corp - CEO", 1), "Hello.")
            .presentation_block(&speaker_header("Operator", 2))
            .build();

        let parsed = TranscriptParser::new().parse(&body);
        let turns = parsed.presentation.turns();

        assert_eq!(turns.len(), 2);
        assert_eq!(turns[1].role, Role::Operator);
        assert_eq!(turns[1].text, "");
        assert_eq!(parsed.warnings.len(), 1);
    }

    #[test]
    fn test_bracket_only_header() {
        let body = TranscriptBuilder::new()
            .corporate_participant("John Smith", "Acme Corp - CEO")
            .presentation_turn("[7]", "Who is speaking?")
            .build();

        let parsed = TranscriptParser::new().parse(&body);
        let turns = parsed.presentation.turns();

        assert_eq!(turns.len(), 1);
        assert_eq!(turns[0].number, 7);
        assert_eq!(turns[0].speaker, "unknown participant");
    }

    #[test]
    fn test_section_runs_to_end_of_body_without_end_rule() {
        let body = format!(
            "Presentation\r\n{}\r\nOperator  [1]\r\n{}\r\nWelcome to the call.\r\n",
            DASH_RULE, DASH_RULE
        );

        let sections = TranscriptParser::separate_sections(&body);
        assert!(sections.presentation.trim_end().ends_with("Welcome to the call."));

        let parsed = TranscriptParser::new().parse(&body);
        assert_eq!(parsed.presentation.len(), 1);
        assert_eq!(parsed.presentation.turns()[0].text, "Welcome to the call.");
    }

    #[test]
    fn test_ampersand_is_unescaped() {
        let body = TranscriptBuilder::new()
            .corporate_participant("John Smith", "Smith &amp; Sons - CEO")
            .build();

        let parsed = TranscriptParser::new().parse(&body);

        assert!(parsed
            .corporate_participants
            .contains("John Smith,  Smith & Sons - CEO"));
    }

    #[test]
    fn test_unlisted_speaker_keeps_name_as_role() {
        let with_rosters = TranscriptBuilder::new()
            .corporate_participant("John Smith", "Acme Corp - CEO")
            .conference_participant("Alan Analyst", "Big Bank - Analyst")
            .qa_turn(&speaker_header("Mystery Guest", 1), "Hello there.")
            .build();

        let parsed = TranscriptParser::new().parse(&with_rosters);
        assert_eq!(
            parsed.questions_and_answers.turns()[0].role,
            Role::Unlisted("Mystery Guest".to_string())
        );

        let without_rosters = TranscriptBuilder::new()
            .qa_turn(&speaker_header("Mystery Guest", 1), "Hello there.")
            .build();

        let parsed = TranscriptParser::new().parse(&without_rosters);
        assert_eq!(parsed.questions_and_answers.turns()[0].role, Role::Unknown);
    }

    #[test]
    fn test_speaker_names_snap_to_roster() {
        let body = TranscriptBuilder::new()
            .corporate_participant("Jane Doe (ph)", "Acme Corp - CFO")
            .conference_participant("Alan Analyst", "Big Bank - Analyst")
            .presentation_turn(&speaker_header("Jane Doe,   Acme Corp - CFO,", 1), "Hello.")
            .build();

        let parsed = TranscriptParser::new().parse(&body);
        let turn = &parsed.presentation.turns()[0];

        assert_eq!(turn.speaker, "Jane Doe (ph),  Acme Corp - CFO");
        assert_eq!(turn.role, Role::Corporate);
    }
}
