use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parses the timestamps the backend hands out.
/// Date only values are taken as midnight, offsets are converted to UTC.
pub fn parse_timestamp(buf: &str) -> Option<NaiveDateTime> {
    let buf = buf.trim();
    if buf.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(buf, "%Y-%m-%d") {
        return Some(NaiveDateTime::new(date, NaiveTime::MIN));
    }

    if let Ok(date_time) = DateTime::parse_from_rfc3339(buf) {
        return Some(date_time.naive_utc());
    }

    DATE_TIME_FORMATS.iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(buf, fmt).ok())
}

/// Label shown on a card, like "1 Jan 2026". Unparseable values are shown as they came.
pub fn format_date_label(timestamp: &str) -> String {
    match parse_timestamp(timestamp) {
        Some(date_time) => date_time.format("%-d %b %Y").to_string(),
        None => timestamp.to_string(),
    }
}

pub fn today_iso(today: NaiveDate) -> String {
    today.format("%Y-%m-%d").to_string()
}

/// Cuts the text at `max_chars` characters. Returns None when it already fits.
/// A limit of 0 means no truncation.
pub fn truncate_chars(text: &str, max_chars: usize) -> Option<String> {
    if max_chars == 0 {
        return None;
    }

    match text.char_indices().nth(max_chars) {
        None => None,
        Some((end, _)) => {
            let mut excerpt = text[..end].trim_end().to_string();
            excerpt.push_str("...");
            Some(excerpt)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_timestamp() {
        let date_time = parse_timestamp("2017-09-10").unwrap();
        assert_eq!(date_time.format("%Y-%m-%d %H:%M:%S").to_string(), "2017-09-10 00:00:00");

        let date_time = parse_timestamp("2017-09-10 10:42:32.123").unwrap();
        assert_eq!(date_time.format("%Y-%m-%d %H:%M:%S").to_string(), "2017-09-10 10:42:32");

        let date_time = parse_timestamp("2017-09-10T10:42:32").unwrap();
        assert_eq!(date_time.format("%Y-%m-%d %H:%M:%S").to_string(), "2017-09-10 10:42:32");

        let date_time = parse_timestamp("2017-09-10T10:42:32+02:00").unwrap();
        assert_eq!(date_time.format("%Y-%m-%d %H:%M:%S").to_string(), "2017-09-10 08:42:32");

        let date_time = parse_timestamp(" 2017-09-10 ").unwrap();
        assert_eq!(date_time.format("%Y-%m-%d").to_string(), "2017-09-10");
    }

    #[test]
    fn test_parse_invalid_timestamp() {
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_timestamp("someday"), None);
        assert_eq!(parse_timestamp("2017-13-40"), None);
        assert_eq!(parse_timestamp("10/09/2017"), None);
    }

    #[test]
    fn test_format_date_label() {
        assert_eq!(format_date_label("2026-01-01"), "1 Jan 2026");
        assert_eq!(format_date_label("2025-06-21T09:00:00"), "21 Jun 2025");
        assert_eq!(format_date_label("someday"), "someday");
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("short", 10), None);
        assert_eq!(truncate_chars("exactly10!", 10), None);
        assert_eq!(truncate_chars("hello world again", 11), Some("hello world...".to_string()));
        assert_eq!(truncate_chars("hello world again", 6), Some("hello...".to_string()));
        assert_eq!(truncate_chars("ábaco ábaco", 5), Some("ábaco...".to_string()));
        assert_eq!(truncate_chars("hello world again", 0), None);
    }
}
