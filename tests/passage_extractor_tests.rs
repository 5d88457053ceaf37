use test_utils::{sample_transcript, speaker_header, TranscriptBuilder};
use transcript_sniffer::models::PassageExtractorBuilder;
use transcript_sniffer::{
    extract_passages_from_transcript, ContextWindow, Event, EventPassages, Keywords,
    PassageExtractor, PunctuationSentenceSegmenter, Sections,
};

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> PassageExtractorBuilder {
        PassageExtractor::builder().segmenter(PunctuationSentenceSegmenter::new())
    }

    fn extract(builder: PassageExtractorBuilder, body: &str) -> EventPassages {
        builder
            .build()
            .expect("extractor should build")
            .extract_event(&Event::from_body(body))
            .expect("extraction should succeed")
    }

    /// (turn number, paragraphs) of every contributing turn.
    fn summarize(turns: &[transcript_sniffer::TurnPassages]) -> Vec<(usize, Vec<Vec<String>>)> {
        turns
            .iter()
            .map(|turn| (turn.turn_number, turn.paragraphs.clone()))
            .collect()
    }

    fn paragraphs(paragraphs: &[&[&str]]) -> Vec<Vec<String>> {
        paragraphs
            .iter()
            .map(|passages| passages.iter().map(|passage| passage.to_string()).collect())
            .collect()
    }

    fn single_turn_transcript(text: &str) -> String {
        TranscriptBuilder::new()
            .corporate_participant("John Smith", "Acme Corp - CEO")
            .conference_participant("Alan Analyst", "Big Bank - Analyst")
            .presentation_turn(&speaker_header("John Smith,  Acme Corp - CEO", 1), text)
            .build()
    }

    #[test]
    fn test_extract_sample_transcript_with_defaults() {
        let passages = extract(builder(), &sample_transcript());

        // The operator turn and the negated "excluding Russia" turn contribute nothing
        assert_eq!(
            summarize(&passages.presentation),
            vec![(
                2,
                paragraphs(&[&["Our business in Russia was suspended in March."]])
            )]
        );
        assert_eq!(passages.presentation[0].speaker, "John Smith,  Acme Corp - CEO");

        // The answer to the Ukraine question is kept whole; the next answer is narrowed again
        assert_eq!(
            summarize(&passages.qa),
            vec![
                (6, paragraphs(&[&["It is limited.\nWe have no assets there."]])),
                (8, paragraphs(&[&["Energy costs in Russia doubled."]])),
            ]
        );

        assert_eq!(passages.passage_count(), 3);
        assert_eq!(
            passages.collapse(),
            "Our business in Russia was suspended in March.\nIt is limited.\nWe have no assets there.\nEnergy costs in Russia doubled."
        );
    }

    #[test]
    fn test_section_selection() {
        let presentation_only = extract(
            builder().sections(Sections::Presentation),
            &sample_transcript(),
        );
        assert_eq!(presentation_only.presentation.len(), 1);
        assert!(presentation_only.qa.is_empty());

        let qa_only = extract(builder().sections(Sections::Qa), &sample_transcript());
        assert!(qa_only.presentation.is_empty());
        assert_eq!(qa_only.qa.len(), 2);
    }

    #[test]
    fn test_answers_are_narrowed_without_extract_answers() {
        let passages = extract(builder().extract_answers(false), &sample_transcript());

        assert_eq!(
            summarize(&passages.qa),
            vec![(8, paragraphs(&[&["Energy costs in Russia doubled."]]))]
        );
    }

    #[test]
    fn test_subsequent_paragraphs_are_kept_whole() {
        let body = single_turn_transcript(
            "Russia was discussed. Nothing else.\nSecond paragraph.\nThird paragraph.\nUkraine too.\nFifth paragraph.",
        );

        let passages = extract(builder().subsequent_paragraphs(1), &body);

        assert_eq!(
            summarize(&passages.presentation),
            vec![(
                1,
                paragraphs(&[
                    &["Russia was discussed."],
                    &["Second paragraph."],
                    &["Ukraine too."],
                    &["Fifth paragraph."],
                ])
            )]
        );

        let passages = extract(builder(), &body);
        assert_eq!(
            summarize(&passages.presentation),
            vec![(1, paragraphs(&[&["Russia was discussed."], &["Ukraine too."]]))]
        );
    }

    #[test]
    fn test_subsequent_paragraphs_do_not_cross_turns() {
        let body = TranscriptBuilder::new()
            .corporate_participant("John Smith", "Acme Corp - CEO")
            .corporate_participant("Jane Doe", "Acme Corp - CFO")
            .presentation_turn(
                &speaker_header("John Smith,  Acme Corp - CEO", 1),
                "We left Russia.",
            )
            .presentation_turn(
                &speaker_header("Jane Doe,  Acme Corp - CFO", 2),
                "Costs were flat.",
            )
            .build();

        let passages = extract(builder().subsequent_paragraphs(3), &body);

        assert_eq!(
            summarize(&passages.presentation),
            vec![(1, paragraphs(&[&["We left Russia."]]))]
        );
    }

    #[test]
    fn test_context_window() {
        let body = single_turn_transcript(
            "First. Our business in Russia was suspended. We expect no impact. Margins improved.",
        );

        let passages = extract(builder().context_window(ContextWindow::new(0, 1).unwrap()), &body);
        assert_eq!(
            summarize(&passages.presentation),
            vec![(
                1,
                paragraphs(&[&[
                    "Our business in Russia was suspended. We expect no impact."
                ]])
            )]
        );

        let passages = extract(
            builder().context_window(ContextWindow::WHOLE_PARAGRAPH),
            &body,
        );
        assert_eq!(
            summarize(&passages.presentation),
            vec![(
                1,
                paragraphs(&[&[
                    "First. Our business in Russia was suspended. We expect no impact. Margins improved."
                ]])
            )]
        );

        // The sentinel does not force joining
        let passages = extract(
            builder()
                .context_window(ContextWindow::WHOLE_PARAGRAPH)
                .join_adjacent_sentences(false),
            &body,
        );
        assert_eq!(passages.passage_count(), 4);
    }

    #[test]
    fn test_join_adjacent_sentences() {
        let body = single_turn_transcript("Russia fell. Ukraine rose. Europe was flat. Russia again.");

        let joined = extract(builder(), &body);
        assert_eq!(
            summarize(&joined.presentation),
            vec![(1, paragraphs(&[&["Russia fell. Ukraine rose.", "Russia again."]]))]
        );

        let separate = extract(builder().join_adjacent_sentences(false), &body);
        assert_eq!(
            summarize(&separate.presentation),
            vec![(
                1,
                paragraphs(&[&["Russia fell.", "Ukraine rose.", "Russia again."]])
            )]
        );
    }

    #[test]
    fn test_keyword_question_flag_spans_answers() {
        let body = TranscriptBuilder::new()
            .corporate_participant("John Smith", "Acme Corp - CEO")
            .corporate_participant("Jane Doe", "Acme Corp - CFO")
            .conference_participant("Alan Analyst", "Big Bank - Analyst")
            .qa_turn(
                &speaker_header("Moderator", 1),
                "Let us start with Russia.",
            )
            .qa_turn(
                &speaker_header("Jane Doe,  Acme Corp - CFO", 2),
                "We paused shipments.",
            )
            .qa_turn(&speaker_header("Operator", 3), "Next question.")
            .qa_turn(
                &speaker_header("John Smith,  Acme Corp - CEO", 4),
                "And we closed the office.",
            )
            .build();

        let passages = extract(builder(), &body);

        assert_eq!(
            summarize(&passages.qa),
            vec![
                (2, paragraphs(&[&["We paused shipments."]])),
                (4, paragraphs(&[&["And we closed the office."]])),
            ]
        );
    }

    #[test]
    fn test_custom_keywords_and_modifiers() {
        let body = single_turn_transcript("Sales excluding sanctions rose. Sanctions hurt margins.");

        let passages = extract(
            builder()
                .keywords(Keywords::from_list(&["sanctions"]).unwrap())
                .modifier_words(&["excluding"]),
            &body,
        );
        assert_eq!(
            summarize(&passages.presentation),
            vec![(1, paragraphs(&[&["Sanctions hurt margins."]]))]
        );
    }

    #[test]
    fn test_transcript_without_sections_yields_nothing() {
        let body = TranscriptBuilder::new()
            .corporate_participant("John Smith", "Acme Corp - CEO")
            .build();

        assert!(extract(builder(), &body).is_empty());
        assert!(extract(builder(), "").is_empty());
    }

    #[test]
    fn test_excluded_sentences() {
        let extractor = builder().build().unwrap();
        let event = Event::from_body(&sample_transcript());

        assert_eq!(
            extractor.excluded_sentences(&event),
            vec!["Sales excluding Russia rose 5 percent.".to_string()]
        );
    }

    #[test]
    fn test_extract_passages_from_transcript() {
        let keywords = Keywords::from_list(&["ukraine"]).unwrap();
        let passages = extract_passages_from_transcript(&sample_transcript(), &keywords).unwrap();

        assert!(passages.presentation.is_empty());
        assert_eq!(
            summarize(&passages.qa),
            vec![(6, paragraphs(&[&["It is limited.\nWe have no assets there."]]))]
        );
    }

    #[test]
    fn test_extract_events_keeps_order() {
        let extractor = builder().build().unwrap();
        let events = vec![
            Event::from_body(&sample_transcript()),
            Event::from_body(&single_turn_transcript("Nothing to see.")),
        ];

        let corpus = extractor.extract_events(&events).unwrap();

        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus[0].passage_count(), 3);
        assert!(corpus[1].is_empty());
    }

    #[test]
    fn test_answer_to_keyword_question_is_kept_verbatim() {
        let body = TranscriptBuilder::new()
            .corporate_participant("John Smith", "Acme Corp - CEO")
            .conference_participant("Alan Analyst", "Big Bank - Analyst")
            .qa_turn(
                &speaker_header("Alan Analyst,  Big Bank - Analyst", 1),
                "What about Russia sanctions?",
            )
            .qa_turn(
                &speaker_header("John Smith,  Acme Corp - CEO", 2),
                "We are monitoring the situation closely.",
            )
            .build();

        let keywords = Keywords::from_list(&["russia"]).unwrap();
        let passages = extract(builder().keywords(keywords), &body);

        assert!(passages.presentation.is_empty());
        assert_eq!(
            passages.passages().collect::<Vec<_>>(),
            vec!["We are monitoring the situation closely."]
        );
    }

    #[test]
    fn test_unanswered_keyword_questions() {
        let analyst = "Alan Analyst,  Big Bank - Analyst";
        let ceo = "John Smith,  Acme Corp - CEO";
        let body = TranscriptBuilder::new()
            .corporate_participant("John Smith", "Acme Corp - CEO")
            .conference_participant("Alan Analyst", "Big Bank - Analyst")
            .qa_turn(&speaker_header(analyst, 1), "How exposed are you to Russia?")
            .qa_turn(&speaker_header(ceo, 2), "Russia is two percent of sales.")
            .qa_turn(&speaker_header(analyst, 3), "And Ukraine?")
            .qa_turn(&speaker_header("Operator", 4), "Please go ahead.")
            .qa_turn(&speaker_header(ceo, 5), "We do not break that out.")
            .qa_turn(&speaker_header(analyst, 6), "Thanks. What about margins?")
            .qa_turn(&speaker_header(ceo, 7), "Margins were flat.")
            .build();

        let extractor = builder().build().unwrap();

        assert_eq!(
            extractor.unanswered_keyword_questions(&Event::from_body(&body)),
            vec![3]
        );
        assert_eq!(
            extractor.unanswered_keyword_questions(&Event::from_body(&sample_transcript())),
            vec![5]
        );
    }

    #[test]
    fn test_blank_lines_do_not_use_up_subsequent_paragraphs() {
        let body = TranscriptBuilder::new()
            .corporate_participant("John Smith", "Acme Corp - CEO")
            .presentation_turn(
                &speaker_header("John Smith,  Acme Corp - CEO", 1),
                "B about Russia.\n\nC plain.\nD plain.",
            )
            .build();

        let passages = extract(builder().subsequent_paragraphs(1), &body);

        assert_eq!(
            summarize(&passages.presentation),
            vec![(
                1,
                vec![vec!["B about Russia.".to_string()], vec!["C plain.".to_string()]]
            )]
        );
    }
}
