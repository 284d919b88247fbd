use dioxus::prelude::*;
use serde_json::Value;

use super::column::{ColumnSpec, EnumEntry};
use crate::usecase::ports::data_source::TableRecord;

/// Renders one grid cell: an explicit column renderer wins, then the
/// enumerated-value table, then the kind's default renderer, then the raw
/// value.
pub fn render_cell<T: TableRecord>(column: &ColumnSpec<T>, record: &T) -> Element {
    if let Some(render) = &column.render {
        return render.call(record.clone());
    }

    let raw = record.field(&column.key);
    if !column.options.is_empty() {
        return enum_cell(&column.options, &raw);
    }
    if let Some(cell) = (super::registry::handlers(column.kind).default_cell)(&raw) {
        return cell;
    }
    rsx! {
        span { "{display_text(&raw)}" }
    }
}

fn enum_cell(options: &[EnumEntry], raw: &Option<Value>) -> Element {
    match enum_match(options, raw) {
        Some(entry) => {
            let (background, color) = tag_palette(entry.color.as_deref());
            rsx! {
                span {
                    style: "display: inline-block; padding: 2px 8px; border-radius: 4px; font-size: 12px; background: {background}; color: {color};",
                    "{entry.label}"
                }
            }
        }
        None => rsx! {
            span { "{display_text(raw)}" }
        },
    }
}

pub fn money_cell(raw: &Option<Value>) -> Option<Element> {
    let text = money_text(raw);
    Some(rsx! {
        span { "{text}" }
    })
}

/// Looks an enumerated entry up by the string form of the raw value, so
/// numeric and boolean cells match string keys.
pub fn enum_match<'a>(options: &'a [EnumEntry], raw: &Option<Value>) -> Option<&'a EnumEntry> {
    let key = coerce_key(raw);
    options.iter().find(|entry| entry.value == key)
}

pub fn coerce_key(raw: &Option<Value>) -> String {
    match raw {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Number(number)) => number.to_string(),
        Some(Value::Bool(flag)) => flag.to_string(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

pub fn display_text(raw: &Option<Value>) -> String {
    match raw {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Number(number)) => number.to_string(),
        Some(Value::Bool(flag)) => flag.to_string(),
        Some(Value::Null) | None => "-".to_string(),
        Some(other) => other.to_string(),
    }
}

/// "¥ 12,345.68" style: currency glyph plus thousands grouping, fractions
/// kept to two digits. Nil renders as a placeholder dash.
pub fn money_text(raw: &Option<Value>) -> String {
    let amount = match raw {
        Some(Value::Number(number)) => number.as_f64(),
        Some(Value::String(text)) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    match amount {
        Some(amount) => format!("¥ {}", group_thousands(amount)),
        None => "-".to_string(),
    }
}

fn group_thousands(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::new();
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let mut text = if fraction > 0 {
        format!("{grouped}.{fraction:02}")
    } else {
        grouped
    };
    if negative {
        text.insert(0, '-');
    }
    text
}

fn tag_palette(color: Option<&str>) -> (&'static str, &'static str) {
    match color {
        Some("green") => ("#e6f7e6", "#2d7a36"),
        Some("red") => ("#fdebec", "#c2373f"),
        Some("orange") => ("#fdf3e7", "#b26205"),
        Some("blue") => ("#eef4ff", "#2a5ad9"),
        Some("grey") | Some("gray") => ("#f0f0f0", "#555"),
        _ => ("#eef4ff", "#333"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_options() -> Vec<EnumEntry> {
        vec![
            EnumEntry::new("1", "启用").color("green"),
            EnumEntry::new("0", "禁用").color("grey"),
        ]
    }

    #[test]
    fn numeric_cells_match_string_enum_keys() {
        let raw = Some(serde_json::json!(1));
        let entry = enum_match(&status_options(), &raw).expect("should match entry \"1\"");
        assert_eq!(entry.label, "启用");
    }

    #[test]
    fn boolean_cells_coerce_before_lookup() {
        let options = vec![
            EnumEntry::new("true", "是"),
            EnumEntry::new("false", "否"),
        ];
        let entry = enum_match(&options, &Some(serde_json::json!(false)))
            .expect("should match entry \"false\"");
        assert_eq!(entry.label, "否");
    }

    #[test]
    fn unknown_enum_values_fall_back_to_the_raw_value() {
        assert!(enum_match(&status_options(), &Some(serde_json::json!(7))).is_none());
        assert_eq!(display_text(&Some(serde_json::json!(7))), "7");
    }

    #[test]
    fn money_groups_thousands_and_keeps_two_decimals() {
        assert_eq!(money_text(&Some(serde_json::json!(1234567))), "¥ 1,234,567");
        assert_eq!(money_text(&Some(serde_json::json!(8520.5))), "¥ 8,520.50");
        assert_eq!(money_text(&Some(serde_json::json!("42"))), "¥ 42");
    }

    #[test]
    fn nil_money_renders_a_placeholder_dash() {
        assert_eq!(money_text(&None), "-");
        assert_eq!(money_text(&Some(Value::Null)), "-");
    }
}
