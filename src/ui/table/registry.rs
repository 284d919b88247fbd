use dioxus::prelude::*;
use serde_json::Value;

use super::cells::money_cell;
use super::column::{EnumEntry, ValueKind};
use super::params::{parse_date_input, parse_date_time_input, QueryState, QueryValue};
use crate::ui::widgets::dropdown::{DropdownOption, DropdownSelect};

pub const NONE_OPTION_VALUE: &str = "__none__";

const FIELD_WRAP_STYLE: &str = "display: inline-flex; align-items: center; gap: 6px;";
const FIELD_INPUT_STYLE: &str =
    "border: 1px solid #bbb; border-radius: 6px; padding: 5px 8px; width: 160px;";
const FIELD_INPUT_NARROW_STYLE: &str =
    "border: 1px solid #bbb; border-radius: 6px; padding: 5px 8px; width: 120px;";

/// Everything a field builder needs to render one search control.
#[derive(Clone)]
pub struct FieldCtx {
    pub key: String,
    pub title: String,
    pub options: Vec<EnumEntry>,
    pub query: Signal<QueryState>,
    pub open_dropdown: Signal<Option<String>>,
    pub dropdown_pos: Signal<Option<(f64, f64)>>,
}

/// Per-kind behavior of the engine: how to build the search control and how
/// to render a cell when the column carries no explicit renderer. Adding a
/// semantic kind means adding one entry to `handlers`.
pub struct KindHandlers {
    pub build_field: fn(FieldCtx) -> Element,
    pub default_cell: fn(&Option<Value>) -> Option<Element>,
}

pub fn handlers(kind: ValueKind) -> &'static KindHandlers {
    match kind {
        ValueKind::Select => &SELECT,
        ValueKind::Digit => &DIGIT,
        ValueKind::Money => &MONEY,
        ValueKind::Percent => &PERCENT,
        ValueKind::Date => &DATE,
        ValueKind::DateRange => &DATE_RANGE,
        ValueKind::DateTime => &DATE_TIME,
        ValueKind::DateTimeRange => &DATE_TIME_RANGE,
        ValueKind::Text | ValueKind::Switch => &TEXT,
    }
}

static TEXT: KindHandlers = KindHandlers {
    build_field: text_field,
    default_cell: no_default_cell,
};
static SELECT: KindHandlers = KindHandlers {
    build_field: select_field,
    default_cell: no_default_cell,
};
static DIGIT: KindHandlers = KindHandlers {
    build_field: digit_field,
    default_cell: no_default_cell,
};
static MONEY: KindHandlers = KindHandlers {
    build_field: money_field,
    default_cell: money_cell,
};
static PERCENT: KindHandlers = KindHandlers {
    build_field: percent_field,
    default_cell: no_default_cell,
};
static DATE: KindHandlers = KindHandlers {
    build_field: date_field,
    default_cell: no_default_cell,
};
static DATE_RANGE: KindHandlers = KindHandlers {
    build_field: date_range_field,
    default_cell: no_default_cell,
};
static DATE_TIME: KindHandlers = KindHandlers {
    build_field: date_time_field,
    default_cell: no_default_cell,
};
static DATE_TIME_RANGE: KindHandlers = KindHandlers {
    build_field: date_time_range_field,
    default_cell: no_default_cell,
};

fn no_default_cell(_raw: &Option<Value>) -> Option<Element> {
    None
}

fn text_field(ctx: FieldCtx) -> Element {
    let mut query = ctx.query;
    let key = ctx.key.clone();
    let title = ctx.title.clone();
    let placeholder = format!("请输入{title}");
    let current = match query.read().get(&key) {
        Some(QueryValue::Text(text)) => text.clone(),
        _ => String::new(),
    };

    rsx! {
        div { style: FIELD_WRAP_STYLE,
            span { "{title}" }
            input {
                style: FIELD_INPUT_STYLE,
                value: current,
                placeholder: placeholder,
                oninput: move |event| {
                    query.write().insert(key.clone(), QueryValue::Text(event.value()));
                },
            }
        }
    }
}

fn select_field(ctx: FieldCtx) -> Element {
    let mut query = ctx.query;
    let key = ctx.key.clone();
    let key_for_select = ctx.key.clone();
    let title = ctx.title.clone();
    let placeholder = format!("请选择{title}");

    let selected = match query.read().get(&key) {
        Some(QueryValue::Choice(value)) => Some(value.clone()),
        _ => None,
    };
    let options = std::iter::once(DropdownOption {
        value: NONE_OPTION_VALUE.to_string(),
        label: "全部".to_string(),
    })
    .chain(ctx.options.iter().map(|entry| DropdownOption {
        value: entry.value.clone(),
        label: entry.label.clone(),
    }))
    .collect::<Vec<_>>();

    rsx! {
        DropdownSelect {
            id: ctx.key.clone(),
            label: title,
            placeholder: placeholder,
            options: options,
            selected: selected,
            open_dropdown: ctx.open_dropdown,
            dropdown_pos: ctx.dropdown_pos,
            on_select: move |value: String| {
                if value == NONE_OPTION_VALUE {
                    query.write().remove(&key_for_select);
                } else {
                    query.write().insert(key_for_select.clone(), QueryValue::Choice(value));
                }
            },
        }
    }
}

fn numeric_field(ctx: FieldCtx, prefix: Option<&'static str>, suffix: Option<&'static str>) -> Element {
    let mut query = ctx.query;
    let key = ctx.key.clone();
    let title = ctx.title.clone();
    let placeholder = format!("请输入{title}");
    let step = if prefix.is_some() { "0.01" } else { "any" };
    let current = match query.read().get(&key) {
        Some(QueryValue::Number(text)) => text.clone(),
        _ => String::new(),
    };

    rsx! {
        div { style: FIELD_WRAP_STYLE,
            span { "{title}" }
            if let Some(prefix) = prefix {
                span { style: "color: #888;", "{prefix}" }
            }
            input {
                style: FIELD_INPUT_NARROW_STYLE,
                r#type: "number",
                step: step,
                value: current,
                placeholder: placeholder,
                oninput: move |event| {
                    query.write().insert(key.clone(), QueryValue::Number(event.value()));
                },
            }
            if let Some(suffix) = suffix {
                span { style: "color: #888;", "{suffix}" }
            }
        }
    }
}

fn digit_field(ctx: FieldCtx) -> Element {
    numeric_field(ctx, None, None)
}

fn money_field(ctx: FieldCtx) -> Element {
    numeric_field(ctx, Some("¥"), None)
}

fn percent_field(ctx: FieldCtx) -> Element {
    numeric_field(ctx, None, Some("%"))
}

fn date_field(ctx: FieldCtx) -> Element {
    let mut query = ctx.query;
    let key = ctx.key.clone();
    let title = ctx.title.clone();
    let current = match query.read().get(&key) {
        Some(QueryValue::Date(date)) => date.format("%Y-%m-%d").to_string(),
        _ => String::new(),
    };

    rsx! {
        div { style: FIELD_WRAP_STYLE,
            span { "{title}" }
            input {
                style: FIELD_INPUT_NARROW_STYLE,
                r#type: "date",
                value: current,
                onchange: move |event| {
                    match parse_date_input(&event.value()) {
                        Some(date) => {
                            query.write().insert(key.clone(), QueryValue::Date(date));
                        }
                        None => {
                            query.write().remove(&key);
                        }
                    }
                },
            }
        }
    }
}

fn date_time_field(ctx: FieldCtx) -> Element {
    let mut query = ctx.query;
    let key = ctx.key.clone();
    let title = ctx.title.clone();
    let current = match query.read().get(&key) {
        Some(QueryValue::DateTime(at)) => at.format("%Y-%m-%dT%H:%M").to_string(),
        _ => String::new(),
    };

    rsx! {
        div { style: FIELD_WRAP_STYLE,
            span { "{title}" }
            input {
                style: FIELD_INPUT_STYLE,
                r#type: "datetime-local",
                value: current,
                onchange: move |event| {
                    match parse_date_time_input(&event.value()) {
                        Some(at) => {
                            query.write().insert(key.clone(), QueryValue::DateTime(at));
                        }
                        None => {
                            query.write().remove(&key);
                        }
                    }
                },
            }
        }
    }
}

fn date_range_field(ctx: FieldCtx) -> Element {
    let mut query = ctx.query;
    let key_start = ctx.key.clone();
    let key_end = ctx.key.clone();
    let title = ctx.title.clone();
    let (start, end) = match query.read().get(&ctx.key) {
        Some(QueryValue::DateRange(start, end)) => (*start, *end),
        _ => (None, None),
    };
    let start_text = start.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default();
    let end_text = end.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default();

    rsx! {
        div { style: FIELD_WRAP_STYLE,
            span { "{title}" }
            input {
                style: FIELD_INPUT_NARROW_STYLE,
                r#type: "date",
                value: start_text,
                onchange: move |event| {
                    let start = parse_date_input(&event.value());
                    let end = match query.read().get(&key_start) {
                        Some(QueryValue::DateRange(_, end)) => *end,
                        _ => None,
                    };
                    query.write().insert(key_start.clone(), QueryValue::DateRange(start, end));
                },
            }
            span { "至" }
            input {
                style: FIELD_INPUT_NARROW_STYLE,
                r#type: "date",
                value: end_text,
                onchange: move |event| {
                    let end = parse_date_input(&event.value());
                    let start = match query.read().get(&key_end) {
                        Some(QueryValue::DateRange(start, _)) => *start,
                        _ => None,
                    };
                    query.write().insert(key_end.clone(), QueryValue::DateRange(start, end));
                },
            }
        }
    }
}

fn date_time_range_field(ctx: FieldCtx) -> Element {
    let mut query = ctx.query;
    let key_start = ctx.key.clone();
    let key_end = ctx.key.clone();
    let title = ctx.title.clone();
    let (start, end) = match query.read().get(&ctx.key) {
        Some(QueryValue::DateTimeRange(start, end)) => (*start, *end),
        _ => (None, None),
    };
    let start_text = start.map(|at| at.format("%Y-%m-%dT%H:%M").to_string()).unwrap_or_default();
    let end_text = end.map(|at| at.format("%Y-%m-%dT%H:%M").to_string()).unwrap_or_default();

    rsx! {
        div { style: FIELD_WRAP_STYLE,
            span { "{title}" }
            input {
                style: FIELD_INPUT_NARROW_STYLE,
                r#type: "datetime-local",
                value: start_text,
                onchange: move |event| {
                    let start = parse_date_time_input(&event.value());
                    let end = match query.read().get(&key_start) {
                        Some(QueryValue::DateTimeRange(_, end)) => *end,
                        _ => None,
                    };
                    query.write().insert(key_start.clone(), QueryValue::DateTimeRange(start, end));
                },
            }
            span { "至" }
            input {
                style: FIELD_INPUT_NARROW_STYLE,
                r#type: "datetime-local",
                value: end_text,
                onchange: move |event| {
                    let end = parse_date_time_input(&event.value());
                    let start = match query.read().get(&key_end) {
                        Some(QueryValue::DateTimeRange(start, _)) => *start,
                        _ => None,
                    };
                    query.write().insert(key_end.clone(), QueryValue::DateTimeRange(start, end));
                },
            }
        }
    }
}
