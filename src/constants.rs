#![allow(unused)] // Not every constant is used by every build of the crate (lib vs. cli)

/// Horizontal rule of `=` closing the participant lists and the transcript sections.
pub const SECTION_END_RULE: &str =
    "================================================================================";

/// Horizontal rule of `-` separating speaker headers from their texts.
pub const TURN_SEPARATOR_RULE: &str =
    "--------------------------------------------------------------------------------";

pub const CORPORATE_PARTICIPANTS_HEADING: &str = "Corporate Participants";
pub const CONFERENCE_PARTICIPANTS_HEADING: &str = "Conference Call Participants";
pub const PRESENTATION_HEADING: &str = "Presentation";
pub const TRANSCRIPT_HEADING: &str = "Transcript";
pub const QUESTIONS_AND_ANSWERS_HEADING: &str = "Questions and Answers";

/// Speaker name used whenever a header carries no (usable) name.
pub const UNKNOWN_PARTICIPANT: &str = "unknown participant";

/// Roster entries sometimes carry a phonetic-spelling marker which must be ignored when matching.
pub const PHONETIC_MARKER: &str = "(ph)";

/// Separator between the name and the position of a collapsed roster entry.
pub const ROSTER_FIELD_SEPARATOR: &str = ",  ";

pub const PUBLISH_ACTION: &str = "publish";
pub const FINAL_VERSION: &str = "Final";

/// Used for event metadata which is missing from a transcript document.
pub const UNKNOWN_METADATA: &str = "unknown";

/// Phrases which negate a directly following keyword, e.g. "excluding russia".
pub const MODIFIER_WORDS: &[&str] = &[
    "excluding",
    "exclude",
    "excluded",
    "ex",
    "without",
    "outside",
    "outside of",
    "except",
    "except for",
    "other than",
    "apart from",
    "not including",
];

/// Negations which invalidate a directly following strategy keyword, e.g. "not exit".
pub const MODIFIER_WORDS_STRATEGY: &[&str] = &["not", "no", "never", "don't", "won't", "didn't"];

pub const STRATEGY_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "exit",
        &[
            "exit",
            "withdraw",
            "leave",
            "left",
            "divest",
            "wind down",
            "wind-down",
            "sell",
            "sold",
            "close",
            "closing",
            "shut down",
            "cease",
            "ceasing",
            "terminate",
        ],
    ),
    (
        "stay",
        &[
            "stay",
            "remain",
            "continue",
            "maintain",
            "keep operating",
            "committed to",
        ],
    ),
    (
        "adaptation",
        &[
            "adapt",
            "adjust",
            "relocat",
            "redirect",
            "reroute",
            "diversif",
            "shift",
            "alternative supplier",
            "reorganiz",
            "restructur",
            "mitigat",
            "suspend",
            "pause",
        ],
    ),
];

/// Words which are frequent in earnings calls but carry no topical information.
pub const ADDITIONAL_STOPWORDS: &[&str] = &[
    "quarter",
    "year",
    "percent",
    "million",
    "billion",
    "basis point",
    "thank",
    "question",
    "good morning",
    "good afternoon",
    "operator",
    "company",
    "think",
    "guess",
    "yes",
    "okay",
];

pub const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
    "are", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "few",
    "for", "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers",
    "herself", "him", "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its",
    "itself", "just", "me", "might", "more", "most", "must", "my", "myself", "no", "nor", "not",
    "now", "of", "off", "on", "once", "only", "or", "other", "our", "ours", "ourselves", "out",
    "over", "own", "same", "shall", "she", "should", "so", "some", "such", "than", "that", "the",
    "their", "theirs", "them", "themselves", "then", "there", "these", "they", "this", "those",
    "through", "to", "too", "under", "until", "up", "very", "was", "we", "were", "what", "when",
    "where", "which", "while", "who", "whom", "why", "will", "with", "would", "you", "your",
    "yours", "yourself", "yourselves",
];

/// Abbreviations after which a period does not end a sentence.
pub const SENTENCE_ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "inc", "corp", "co", "ltd", "plc", "llc",
    "vs", "etc", "approx", "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct",
    "nov", "dec", "u.s", "u.k", "e.g", "i.e",
];

/// Default topic categories used to label clusters by keyword overlap.
pub const TOPIC_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "energy",
        &["energy", "gas", "oil", "electricity", "power", "fuel", "price"],
    ),
    (
        "supply chain",
        &["supply", "chain", "supplier", "logistic", "shipment", "shortage", "freight"],
    ),
    (
        "sanctions",
        &["sanction", "regulation", "compliance", "restriction", "export", "license"],
    ),
    (
        "demand",
        &["demand", "customer", "order", "sale", "volume", "market"],
    ),
    (
        "operations",
        &["operation", "business", "employee", "plant", "site", "facility"],
    ),
    (
        "financial",
        &["impairment", "write", "cost", "inflation", "currency", "ruble", "margin"],
    ),
];
