use chrono::{DateTime, Datelike, NaiveDate, SecondsFormat, Utc};

/// Parse a transaction timestamp.
///
/// Accepts full RFC 3339 timestamps as well as bare `YYYY-MM-DD` dates, which
/// are read as midnight UTC.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// Canonical storage and wire form, e.g. `2024-01-05T00:00:00.000Z`.
///
/// Fixed width, so lexical order in the database matches chronological order.
pub fn format_timestamp(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Serde adapter for timestamps in the canonical form.
pub mod timestamp {
    use chrono::{DateTime, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_timestamp(dt))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        super::parse_timestamp(&s)
            .ok_or_else(|| de::Error::custom(format!("invalid date: {:?}", s)))
    }
}

/// `YYYY-MM` key of the month containing `date`.
pub fn month_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

/// Parse a strict `YYYY-MM` month, returning the first day of that month.
pub fn parse_month(s: &str) -> Option<NaiveDate> {
    let bytes = s.as_bytes();
    if bytes.len() != 7 || bytes[4] != b'-' {
        return None;
    }
    NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d").ok()
}

/// First day of each month of `year`, January through December.
pub fn months_of_year(year: i32) -> Vec<NaiveDate> {
    (1..=12)
        .filter_map(|month| NaiveDate::from_ymd_opt(year, month, 1))
        .collect()
}

/// Short chart label such as `Jan 24`.
pub fn month_label(first_of_month: NaiveDate) -> String {
    first_of_month.format("%b %y").to_string()
}

/// Long display form such as `January 5, 2024`.
pub fn long_date(date: NaiveDate) -> String {
    format!("{} {}, {}", date.format("%B"), date.day(), date.year())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_parse_timestamp_rfc3339() {
        let dt = parse_timestamp("2024-03-10T14:30:00.000Z").unwrap();
        assert_eq!(dt.date_naive(), NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
        assert_eq!(dt.hour(), 14);
        assert_eq!(dt.minute(), 30);
    }

    #[test]
    fn test_parse_timestamp_converts_offsets_to_utc() {
        let dt = parse_timestamp("2024-03-10T01:00:00+02:00").unwrap();
        assert_eq!(dt.date_naive(), NaiveDate::from_ymd_opt(2024, 3, 9).unwrap());
        assert_eq!(dt.hour(), 23);
    }

    #[test]
    fn test_parse_timestamp_plain_date() {
        let dt = parse_timestamp("2024-01-05").unwrap();
        assert_eq!(format_timestamp(&dt), "2024-01-05T00:00:00.000Z");
    }

    #[test]
    fn test_parse_timestamp_rejects_garbage() {
        assert!(parse_timestamp("").is_none());
        assert!(parse_timestamp("yesterday").is_none());
        assert!(parse_timestamp("2024-13-01").is_none());
    }

    #[test]
    fn test_parse_month() {
        assert_eq!(
            parse_month("2024-02"),
            NaiveDate::from_ymd_opt(2024, 2, 1)
        );
        assert!(parse_month("2024-13").is_none());
        assert!(parse_month("2024-2").is_none());
        assert!(parse_month("2024/02").is_none());
        assert!(parse_month("2024-02-01").is_none());
        assert!(parse_month("").is_none());
    }

    #[test]
    fn test_months_of_year() {
        let months = months_of_year(2024);
        assert_eq!(months.len(), 12);
        assert_eq!(month_key(months[0]), "2024-01");
        assert_eq!(month_key(months[11]), "2024-12");
        assert_eq!(month_label(months[0]), "Jan 24");
    }

    #[test]
    fn test_long_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(long_date(date), "January 5, 2024");
    }
}
