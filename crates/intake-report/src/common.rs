//! Shared helpers for assessment report generation.

use std::io::Write;

use anyhow::Result;
use chrono::NaiveDate;
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

/// Display form for dates in reports, e.g. "08/06/2026".
pub const DISPLAY_DATE_FORMAT: &str = "%m/%d/%Y";

/// Compact date form used in file names, e.g. "08062026".
pub const FILE_DATE_FORMAT: &str = "%m%d%Y";

/// Render a submitted ISO date (`YYYY-MM-DD`) for display, or empty when
/// the input is absent or unparseable -- absent data defaults, it never
/// errors.
pub fn display_date(raw: &str) -> String {
    parse_date(raw)
        .map(|date| date.format(DISPLAY_DATE_FORMAT).to_string())
        .unwrap_or_default()
}

/// Compact date for file names; falls back to `fallback` (normally the
/// submission date) when the input does not parse.
pub fn file_date(raw: &str, fallback: NaiveDate) -> String {
    parse_date(raw)
        .unwrap_or(fallback)
        .format(FILE_DATE_FORMAT)
        .to_string()
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

pub fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

/// Write a simple text element.
pub fn write_text_element<W: Write>(writer: &mut Writer<W>, name: &str, text: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_date_formats_iso_input() {
        assert_eq!(display_date("2017-03-09"), "03/09/2017");
        assert_eq!(display_date(" 2017-03-09 "), "03/09/2017");
    }

    #[test]
    fn display_date_defaults_empty() {
        assert_eq!(display_date(""), "");
        assert_eq!(display_date("03/09/2017"), "");
    }

    #[test]
    fn file_date_falls_back_to_submission_date() {
        let fallback = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        assert_eq!(file_date("2017-03-09", fallback), "03092017");
        assert_eq!(file_date("", fallback), "08062026");
    }
}
