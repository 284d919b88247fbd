use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use serde_json::Value;

use crate::usecase::ports::data_source::ParamMap;

const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Current value of one search field, keyed by column.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    Text(String),
    /// Raw key of a selected enum entry.
    Choice(String),
    /// Unparsed numeric input text.
    Number(String),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    DateRange(Option<NaiveDate>, Option<NaiveDate>),
    DateTimeRange(Option<NaiveDateTime>, Option<NaiveDateTime>),
}

pub type QueryState = BTreeMap<String, QueryValue>;

/// Merges static initial values under the live query values and converts
/// everything into transport-safe JSON parameters. Date-time values become
/// "YYYY-MM-DD HH:mm:ss" strings, plain dates date-only strings, ranges
/// arrays of formatted strings. Empty values are omitted.
pub fn normalize_params(initial: &ParamMap, query: &QueryState) -> ParamMap {
    let mut params = initial.clone();
    for (key, value) in query {
        match canonical_value(value) {
            Some(value) => {
                params.insert(key.clone(), value);
            }
            None => {
                params.remove(key);
            }
        }
    }
    params
}

fn canonical_value(value: &QueryValue) -> Option<Value> {
    match value {
        QueryValue::Text(text) | QueryValue::Choice(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(Value::String(trimmed.to_string()))
            }
        }
        QueryValue::Number(text) => {
            let number = text.trim().parse::<f64>().ok()?;
            serde_json::Number::from_f64(number).map(Value::Number)
        }
        QueryValue::Date(date) => Some(Value::String(date.format(DATE_FORMAT).to_string())),
        QueryValue::DateTime(at) => Some(Value::String(at.format(DATE_TIME_FORMAT).to_string())),
        QueryValue::DateRange(start, end) => {
            let (start, end) = ((*start)?, (*end)?);
            Some(Value::Array(vec![
                Value::String(start.format(DATE_FORMAT).to_string()),
                Value::String(end.format(DATE_FORMAT).to_string()),
            ]))
        }
        QueryValue::DateTimeRange(start, end) => {
            let (start, end) = ((*start)?, (*end)?);
            Some(Value::Array(vec![
                Value::String(start.format(DATE_TIME_FORMAT).to_string()),
                Value::String(end.format(DATE_TIME_FORMAT).to_string()),
            ]))
        }
    }
}

/// Parses the value of an `<input type="date">`.
pub fn parse_date_input(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT).ok()
}

/// Parses the value of an `<input type="datetime-local">`, with or without
/// a seconds component.
pub fn parse_date_time_input(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(entries: Vec<(&str, QueryValue)>) -> QueryState {
        entries
            .into_iter()
            .map(|(key, value)| (key.to_string(), value))
            .collect()
    }

    #[test]
    fn date_time_values_use_the_fixed_wire_format() {
        let issued_at = NaiveDate::from_ymd_opt(2024, 1, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .expect("valid timestamp");
        let params = normalize_params(
            &ParamMap::new(),
            &query(vec![("issuedAt", QueryValue::DateTime(issued_at))]),
        );

        assert_eq!(
            params.get("issuedAt"),
            Some(&Value::String("2024-01-01 00:00:00".to_string()))
        );
    }

    #[test]
    fn date_time_ranges_format_every_element() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .expect("valid timestamp");
        let end = NaiveDate::from_ymd_opt(2024, 2, 1)
            .and_then(|d| d.and_hms_opt(12, 30, 0))
            .expect("valid timestamp");
        let params = normalize_params(
            &ParamMap::new(),
            &query(vec![("range", QueryValue::DateTimeRange(Some(start), Some(end)))]),
        );

        assert_eq!(
            params.get("range"),
            Some(&serde_json::json!(["2024-01-01 00:00:00", "2024-02-01 12:30:00"]))
        );
    }

    #[test]
    fn plain_dates_become_date_only_strings() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 15).expect("valid date");
        let params = normalize_params(
            &ParamMap::new(),
            &query(vec![("createdAt", QueryValue::Date(day))]),
        );

        assert_eq!(
            params.get("createdAt"),
            Some(&Value::String("2024-03-15".to_string()))
        );
    }

    #[test]
    fn empty_and_half_filled_values_are_omitted() {
        let params = normalize_params(
            &ParamMap::new(),
            &query(vec![
                ("name", QueryValue::Text("  ".to_string())),
                ("isActive", QueryValue::Choice(String::new())),
                ("stock", QueryValue::Number("abc".to_string())),
                ("period", QueryValue::DateRange(None, None)),
            ]),
        );

        assert!(params.is_empty(), "unexpected params: {params:?}");
    }

    #[test]
    fn live_values_override_initial_values() {
        let mut initial = ParamMap::new();
        initial.insert("attributeId".to_string(), Value::String("a-1".to_string()));
        initial.insert("isActive".to_string(), Value::from(1));

        let params = normalize_params(
            &initial,
            &query(vec![("isActive", QueryValue::Choice("0".to_string()))]),
        );

        assert_eq!(params.get("attributeId"), Some(&Value::String("a-1".to_string())));
        assert_eq!(params.get("isActive"), Some(&Value::String("0".to_string())));
    }

    #[test]
    fn numbers_and_text_pass_through() {
        let params = normalize_params(
            &ParamMap::new(),
            &query(vec![
                ("name", QueryValue::Text("引出棒".to_string())),
                ("safetyStock", QueryValue::Number("12.5".to_string())),
            ]),
        );

        assert_eq!(params.get("name"), Some(&Value::String("引出棒".to_string())));
        assert_eq!(params.get("safetyStock"), Some(&serde_json::json!(12.5)));
    }

    #[test]
    fn datetime_local_inputs_parse_with_and_without_seconds() {
        assert!(parse_date_time_input("2024-01-01T08:00").is_some());
        assert!(parse_date_time_input("2024-01-01T08:00:30").is_some());
        assert!(parse_date_time_input("not a date").is_none());
    }
}
