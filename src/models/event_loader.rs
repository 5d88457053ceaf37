use crate::constants::UNKNOWN_METADATA;
use crate::models::{Event, TranscriptParser};
use crate::Error;
use chrono::NaiveDateTime;
use flate2::read::GzDecoder;
use log::{info, warn};
use regex::Regex;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::LazyLock;

/// `<Event ...>` and `<EventStory ...>` opening tags.
static EVENT_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<Event\s([^>]*)>").expect("valid event tag pattern"));
static EVENT_STORY_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<EventStory\s([^>]*)>").expect("valid event story tag pattern"));
static ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([A-Za-z_][\w.-]*)\s*=\s*(?:"([^"]*)"|'([^']*)')"#)
        .expect("valid attribute pattern")
});
static NUMERIC_ENTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&#(x[0-9A-Fa-f]+|[0-9]+);").expect("valid entity pattern"));

const START_DATE_FORMAT: &str = "%d-%b-%y %I:%M%p";
const LAST_UPDATE_FORMAT: &str = "%A, %B %d, %Y at %I:%M:%S%p";

/// Reads transcript XML documents into parsed events.
#[derive(Debug, Clone, Default)]
pub struct EventLoader {
    parser: TranscriptParser,
}

impl EventLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parser(parser: TranscriptParser) -> Self {
        Self { parser }
    }

    /// Loads a plain (`.xml`) or gzip-compressed (`.xml.gz`) transcript document.
    ///
    /// The upload year is taken from the parent directory's name when it is numeric.
    pub fn load_event_file<P: AsRef<Path>>(&self, path: P) -> Result<Event, Error> {
        let path = path.as_ref();
        info!("Loading '{}'", path.display());

        let mut xml = String::new();
        let file = File::open(path)?;
        if path.extension().map_or(false, |extension| extension == "gz") {
            GzDecoder::new(file).read_to_string(&mut xml)?;
        } else {
            let mut file = file;
            file.read_to_string(&mut xml)?;
        }

        let year_upload = path
            .parent()
            .and_then(Path::file_name)
            .and_then(|name| name.to_str())
            .and_then(|name| name.parse::<i32>().ok());

        self.parse_event_xml(&xml, &path.to_string_lossy(), year_upload)
    }

    /// Extracts the event metadata and the parsed transcript body from one XML document.
    ///
    /// Missing metadata keeps its `"unknown"` / `None` default and an unparsable value is
    /// recorded as a warning. Only a missing `<Body>` element is an error.
    pub fn parse_event_xml(
        &self,
        xml: &str,
        file: &str,
        year_upload: Option<i32>,
    ) -> Result<Event, Error> {
        let body = element_text(xml, "Body").ok_or_else(|| {
            Error::ParserError(format!("'{}' has no <Body> element", file))
        })?;

        let mut event = Event {
            file: file.to_string(),
            year_upload,
            ..Event::default()
        };
        let mut warnings = Vec::new();

        if let Some(attributes) = tag_attributes(xml, &EVENT_TAG) {
            event.id = parse_number(&attributes, "Id", &mut warnings);
            event.event_type_id = parse_number(&attributes, "eventTypeId", &mut warnings);
            event.event_type_name = attribute_or_unknown(&attributes, "eventTypeName");
            event.last_update = attribute(&attributes, "lastUpdate").and_then(|value| {
                parse_datetime(value, LAST_UPDATE_FORMAT, "lastUpdate", &mut warnings)
            });
        }

        if let Some(attributes) = tag_attributes(xml, &EVENT_STORY_TAG) {
            event.action = attribute_or_unknown(&attributes, "action");
            event.story_type = attribute_or_unknown(&attributes, "storyType");
            event.version = attribute_or_unknown(&attributes, "version");
        }

        let text_or_unknown =
            |tag: &str| element_text(xml, tag).unwrap_or_else(|| UNKNOWN_METADATA.to_string());
        event.title = text_or_unknown("eventTitle");
        event.city = text_or_unknown("city");
        event.company_name = text_or_unknown("companyName");
        event.company_ticker = text_or_unknown("companyTicker");
        event.date = element_text(xml, "startDate").and_then(|value| {
            parse_datetime(&value, START_DATE_FORMAT, "startDate", &mut warnings)
        });

        for message in &warnings {
            warn!("{}: {}", file, message);
        }
        event.warnings = warnings;

        Ok(event.with_body(&body, &self.parser))
    }
}

/// Unescaped text content of the first `<tag>` element.
fn element_text(xml: &str, tag: &str) -> Option<String> {
    let open_start = find_opening_tag(xml, tag)?;
    let content_start = open_start + xml[open_start..].find('>')? + 1;

    // Self-closing element
    if xml[..content_start].ends_with("/>") {
        return Some(String::new());
    }

    let closing_tag = format!("</{}>", tag);
    let content_end = content_start + xml[content_start..].find(&closing_tag)?;

    let content = &xml[content_start..content_end];
    let content = match content
        .trim()
        .strip_prefix("<![CDATA[")
        .and_then(|inner| inner.strip_suffix("]]>"))
    {
        Some(cdata) => cdata.to_string(),
        None => unescape_xml(content),
    };

    Some(content)
}

fn find_opening_tag(xml: &str, tag: &str) -> Option<usize> {
    let needle = format!("<{}", tag);
    let mut position = 0;

    while let Some(offset) = xml[position..].find(&needle) {
        let start = position + offset;
        let next = xml[start + needle.len()..].chars().next();
        // Guards against prefix matches such as `<Event` for `<EventStory`
        if matches!(next, Some('>') | Some('/')) || next.map_or(false, char::is_whitespace) {
            return Some(start);
        }
        position = start + needle.len();
    }

    None
}

fn tag_attributes(xml: &str, tag: &Regex) -> Option<Vec<(String, String)>> {
    let captures = tag.captures(xml)?;
    let raw_attributes = captures.get(1)?.as_str();

    Some(
        ATTRIBUTE
            .captures_iter(raw_attributes)
            .filter_map(|attribute| {
                let name = attribute.get(1)?.as_str().to_string();
                let value = attribute.get(2).or_else(|| attribute.get(3))?.as_str();
                Some((name, unescape_xml(value)))
            })
            .collect(),
    )
}

fn attribute<'a>(attributes: &'a [(String, String)], name: &str) -> Option<&'a str> {
    attributes
        .iter()
        .find(|(attribute_name, _)| attribute_name == name)
        .map(|(_, value)| value.as_str())
}

fn attribute_or_unknown(attributes: &[(String, String)], name: &str) -> String {
    attribute(attributes, name)
        .unwrap_or(UNKNOWN_METADATA)
        .to_string()
}

fn parse_number(
    attributes: &[(String, String)],
    name: &str,
    warnings: &mut Vec<String>,
) -> Option<i64> {
    let value = attribute(attributes, name)?;

    match value.trim().parse::<i64>() {
        Ok(number) => Some(number),
        Err(_) => {
            warnings.push(format!("{} '{}' is not a number", name, value));
            None
        }
    }
}

/// Parses a timestamp whose trailing time zone abbreviation (e.g. `GMT`) is ignored.
fn parse_datetime(
    value: &str,
    format: &str,
    name: &str,
    warnings: &mut Vec<String>,
) -> Option<NaiveDateTime> {
    let value = value.trim();
    let without_zone = match value.rsplit_once(char::is_whitespace) {
        Some((rest, zone)) if !zone.is_empty() && zone.chars().all(char::is_alphabetic) => rest,
        _ => value,
    };

    match NaiveDateTime::parse_from_str(without_zone.trim(), format) {
        Ok(datetime) => Some(datetime),
        Err(err) => {
            warnings.push(format!("{} '{}' could not be parsed: {}", name, value, err));
            None
        }
    }
}

/// Resolves the predefined XML entities and numeric character references.
///
/// `&amp;` is resolved last so escaped entities (`&amp;lt;`) survive a single pass.
pub fn unescape_xml(text: &str) -> String {
    let text = NUMERIC_ENTITY.replace_all(text, |captures: &regex::Captures| {
        let reference = &captures[1];
        let code_point = match reference.strip_prefix('x') {
            Some(hex) => u32::from_str_radix(hex, 16).ok(),
            None => reference.parse::<u32>().ok(),
        };

        code_point
            .and_then(char::from_u32)
            .map(String::from)
            .unwrap_or_else(|| captures[0].to_string())
    });

    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_text() {
        let xml = "<Event><EventStory action=\"publish\"><city>New York</city><Body><![CDATA[a < b]]></Body><empty/></EventStory></Event>";

        assert_eq!(element_text(xml, "city"), Some("New York".to_string()));
        assert_eq!(element_text(xml, "Body"), Some("a < b".to_string()));
        assert_eq!(element_text(xml, "empty"), Some(String::new()));
        assert_eq!(element_text(xml, "companyName"), None);
    }

    #[test]
    fn test_event_tag_does_not_match_event_story() {
        let xml = "<EventStory action=\"publish\"></EventStory><Event Id=\"7\"></Event>";
        let attributes = tag_attributes(xml, &EVENT_TAG).unwrap();
        assert_eq!(attribute(&attributes, "Id"), Some("7"));
    }

    #[test]
    fn test_unescape_xml() {
        assert_eq!(unescape_xml("AT&amp;T &lt;3 &#8217; &#x41;"), "AT&T <3 \u{2019} A");
        assert_eq!(unescape_xml("&amp;amp;"), "&amp;");
    }

    #[test]
    fn test_parse_datetime_formats() {
        let mut warnings = vec![];

        let start = parse_datetime("02-Mar-22 01:30PM GMT", START_DATE_FORMAT, "startDate", &mut warnings);
        assert_eq!(start.unwrap().to_string(), "2022-03-02 13:30:00");

        let update = parse_datetime(
            "Wednesday, March 2, 2022 at 9:41:23pm GMT",
            LAST_UPDATE_FORMAT,
            "lastUpdate",
            &mut warnings,
        );
        assert_eq!(update.unwrap().to_string(), "2022-03-02 21:41:23");

        assert!(warnings.is_empty());
        assert!(parse_datetime("not a date", START_DATE_FORMAT, "startDate", &mut warnings).is_none());
        assert_eq!(warnings.len(), 1);
    }
}
