use clap::{Args, Parser, Subcommand};
use log::{error, info};
use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;
use transcript_sniffer::config::{
    BASE_YEAR, DEFAULT_KEYWORDS, DEFAULT_SUBSEQUENT_PARAGRAPHS,
};
use transcript_sniffer::models::{event_info_rows, write_rows_csv};
use transcript_sniffer::utils::discover_transcript_files;
use transcript_sniffer::{
    run_batch, ContextWindow, Error, Event, EventFilter, EventFilterConfig, EventLoader,
    ExtractionConfig, Keywords, PassageExtractor, PunctuationSentenceSegmenter, Sections,
    MODIFIER_WORDS,
};

#[derive(Parser)]
#[command(
    name = "transcript-sniffer-cli",
    version,
    about = "Extracts keyword passages from earnings call transcripts"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Extract passages from a single transcript (XML file, or a plain body on stdin)
    Extract {
        /// Transcript XML file (`.xml` or `.xml.gz`); reads a transcript body from stdin if omitted
        #[arg(long, value_name = "FILE")]
        file: Option<PathBuf>,

        #[command(flatten)]
        extraction: ExtractionArgs,
    },
    /// Filter and extract every transcript below a directory into CSV tables
    Batch {
        /// Directory searched recursively for `.xml` / `.xml.gz` transcripts
        #[arg(long, value_name = "DIR")]
        dir: PathBuf,

        /// Passage table (one row per passage)
        #[arg(long, value_name = "CSV", default_value = "passages.csv")]
        output: PathBuf,

        /// Optional event metadata table
        #[arg(long, value_name = "CSV")]
        events: Option<PathBuf>,

        /// Earliest event year kept by the filter
        #[arg(long, default_value_t = BASE_YEAR)]
        min_year: i32,

        #[command(flatten)]
        extraction: ExtractionArgs,
    },
}

#[derive(Args)]
struct ExtractionArgs {
    /// Keyword, optionally with a minimum number of occurrences (`russia` or `russia=2`)
    #[arg(short, long = "keyword", value_name = "KEYWORD[=N]", value_parser = parse_keyword)]
    keywords: Vec<(String, usize)>,

    /// Modifier word which negates a directly following keyword (replaces the defaults)
    #[arg(long = "modifier-word", value_name = "WORD")]
    modifier_words: Vec<String>,

    /// Disable modifier words entirely
    #[arg(long, conflicts_with = "modifier_words")]
    no_modifier_words: bool,

    /// Sections to extract from: all, presentation or qa
    #[arg(long, default_value = "all", value_parser = parse_sections)]
    sections: Sections,

    /// Sentences kept around every matching sentence: `N` or `BEFORE,AFTER` (-1 = whole paragraph)
    #[arg(long, default_value = "0", value_parser = parse_context_window, allow_hyphen_values = true)]
    context_window: ContextWindow,

    /// Keep every matching sentence as its own passage
    #[arg(long)]
    no_join_adjacent_sentences: bool,

    /// Paragraphs kept verbatim after a matching paragraph
    #[arg(long, default_value_t = DEFAULT_SUBSEQUENT_PARAGRAPHS)]
    subsequent_paragraphs: usize,

    /// Do not keep whole answers to questions mentioning a keyword
    #[arg(long)]
    no_extract_answers: bool,
}

fn parse_keyword(value: &str) -> Result<(String, usize), String> {
    Keywords::parse_entry(value).map_err(|err| err.to_string())
}

fn parse_sections(value: &str) -> Result<Sections, String> {
    value.parse::<Sections>().map_err(|err| err.to_string())
}

fn parse_context_window(value: &str) -> Result<ContextWindow, String> {
    value.parse::<ContextWindow>().map_err(|err| err.to_string())
}

impl ExtractionArgs {
    fn keywords(&self) -> Result<Keywords, Error> {
        if self.keywords.is_empty() {
            Keywords::from_thresholds(DEFAULT_KEYWORDS)
        } else {
            Keywords::from_thresholds(&self.keywords)
        }
    }

    fn modifier_words(&self) -> Vec<String> {
        if self.no_modifier_words {
            vec![]
        } else if self.modifier_words.is_empty() {
            MODIFIER_WORDS.iter().map(|word| word.to_string()).collect()
        } else {
            self.modifier_words.clone()
        }
    }

    fn extraction_config(&self) -> Result<ExtractionConfig, Error> {
        Ok(ExtractionConfig {
            keywords: self.keywords()?,
            modifier_words: self.modifier_words(),
            sections: self.sections,
            context_window: self.context_window,
            join_adjacent_sentences: !self.no_join_adjacent_sentences,
            subsequent_paragraphs: self.subsequent_paragraphs,
            extract_answers: !self.no_extract_answers,
        })
    }

    fn extractor(&self) -> Result<PassageExtractor, Error> {
        PassageExtractor::builder()
            .config(self.extraction_config()?)
            .segmenter(PunctuationSentenceSegmenter::new())
            .build()
    }
}

fn main() {
    // Initialize the logger
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Extract { file, extraction } => run_extract(file, &extraction),
        Command::Batch {
            dir,
            output,
            events,
            min_year,
            extraction,
        } => run_batch_command(dir, output, events, min_year, &extraction),
    };

    if let Err(err) = result {
        error!("{}", err);
        std::process::exit(1);
    }
}

fn run_extract(file: Option<PathBuf>, extraction: &ExtractionArgs) -> Result<(), Error> {
    let extractor = extraction.extractor()?;

    let event = match file {
        Some(path) => EventLoader::new().load_event_file(path)?,
        None => {
            // Read the transcript body from stdin
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            Event::from_body(&input)
        }
    };

    let passages = extractor.extract_event(&event)?;

    for (section, turns) in [("presentation", &passages.presentation), ("qa", &passages.qa)] {
        for turn in turns {
            println!("[{}] {} ({})", section, turn.speaker, turn.turn_number);
            for passage in turn.passages() {
                println!("  {}", passage);
            }
        }
    }

    Ok(())
}

fn run_batch_command(
    dir: PathBuf,
    output: PathBuf,
    events_output: Option<PathBuf>,
    min_year: i32,
    extraction: &ExtractionArgs,
) -> Result<(), Error> {
    let extractor = extraction.extractor()?;
    let filter = EventFilter::new(&EventFilterConfig {
        min_year,
        keywords: extraction.keywords()?,
        modifier_words: extraction.modifier_words(),
    });

    let files = discover_transcript_files(&dir)?;
    info!("Found {} transcript files in '{}'", files.len(), dir.display());

    let batch = run_batch(&files, &EventLoader::new(), &filter, &extractor)?;

    write_rows_csv(&batch.rows, File::create(&output)?)?;
    info!("Wrote {} passages to '{}'", batch.rows.len(), output.display());

    if let Some(events_output) = events_output {
        let info_rows = event_info_rows(&batch.events);
        write_rows_csv(&info_rows, File::create(&events_output)?)?;
    }

    let report = &batch.report;
    println!(
        "files: {}, loaded: {}, degraded: {}, failed: {}, accepted: {}, passages: {}",
        report.files_total,
        report.events_loaded,
        report.events_degraded,
        report.files_failed,
        report.events_accepted,
        report.rows
    );

    Ok(())
}
