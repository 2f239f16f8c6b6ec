use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// Value for an `<input type="date">`.
pub fn date_input_value(date: NaiveDate) -> String {
    date.format(DATE_INPUT_FORMAT).to_string()
}

pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_INPUT_FORMAT).ok()
}

/// `2025-01-02` becomes `2025-01-02T00:00:00.000Z`.
pub fn to_utc_midnight_timestamp(date: NaiveDate) -> String {
    date.and_hms_opt(0, 0, 0)
        .map(|naive| naive.and_utc().to_rfc3339_opts(SecondsFormat::Millis, true))
        .unwrap_or_else(|| date_input_value(date))
}

/// Human readable date for table cells. Accepts full timestamps or bare dates;
/// anything unparseable is shown as-is.
pub fn display_date(value: &str) -> String {
    let date = DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc).date_naive())
        .ok()
        .or_else(|| parse_date_input(value));
    match date {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => value.to_string(),
    }
}
