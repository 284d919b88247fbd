pub mod attributes;
pub mod base;
pub mod categories;
pub mod dashboard;
pub mod inventory;
pub mod login;
pub mod not_found;
pub mod options;
pub mod products;
pub mod register;
pub mod roles;
pub mod users;

/// ISO timestamps from the backend ("2024-01-01T08:30:00.000Z") rendered
/// the way operators read them.
pub fn format_timestamp(raw: &str) -> String {
    if raw.len() >= 19 && raw.as_bytes().get(10) == Some(&b'T') {
        let mut text = raw[..19].to_string();
        text.replace_range(10..11, " ");
        text
    } else if raw.is_empty() {
        "-".to_string()
    } else {
        raw.to_string()
    }
}

pub const TOOLBAR_BUTTON_STYLE: &str =
    "border: 1px solid #4c6ef5; background: #4c6ef5; color: #fff; padding: 5px 14px; border-radius: 6px; cursor: pointer;";
pub const ACTION_BUTTON_STYLE: &str =
    "border: 1px solid #bbb; background: #fff; padding: 3px 10px; border-radius: 6px; cursor: pointer;";
pub const DANGER_BUTTON_STYLE: &str =
    "border: 1px solid #d24; background: #fff; color: #d24; padding: 3px 10px; border-radius: 6px; cursor: pointer;";

/// Shorthand for ad-hoc request parameter maps built with `json!`.
pub fn obj(value: serde_json::Value) -> crate::usecase::ports::data_source::ParamMap {
    value.as_object().cloned().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso_timestamps_render_in_local_notation() {
        assert_eq!(format_timestamp("2024-01-01T08:30:00.000Z"), "2024-01-01 08:30:00");
        assert_eq!(format_timestamp("2024-01-01 08:30:00"), "2024-01-01 08:30:00");
        assert_eq!(format_timestamp(""), "-");
    }
}
