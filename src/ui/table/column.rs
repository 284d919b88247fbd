use dioxus::prelude::*;

use crate::usecase::ports::data_source::TableRecord;

/// Field category a column implies, both for the search form control and for
/// the default cell rendering. Unknown needs fall back to `Text`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueKind {
    #[default]
    Text,
    Select,
    Digit,
    Switch,
    Date,
    DateRange,
    DateTime,
    DateTimeRange,
    Money,
    Percent,
}

/// One entry of a column's enumerated-value table: raw value, display label
/// and an optional color hint for the rendered tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumEntry {
    pub value: String,
    pub label: String,
    pub color: Option<String>,
}

impl EnumEntry {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            color: None,
        }
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// Declarative description of one table column. A column may take part in
/// the search form, the rendered grid, both, or neither.
#[derive(Clone)]
pub struct ColumnSpec<T: TableRecord> {
    pub key: String,
    pub title: String,
    pub kind: ValueKind,
    pub options: Vec<EnumEntry>,
    pub searchable: bool,
    pub in_table: bool,
    pub width: Option<u32>,
    pub render: Option<Callback<T, Element>>,
}

impl<T: TableRecord> ColumnSpec<T> {
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            kind: ValueKind::Text,
            options: Vec::new(),
            searchable: true,
            in_table: true,
            width: None,
            render: None,
        }
    }

    pub fn kind(mut self, kind: ValueKind) -> Self {
        self.kind = kind;
        self
    }

    /// Attaches an enumerated-value table. Columns with options default to a
    /// select search field unless a kind was set explicitly.
    pub fn options(mut self, options: Vec<EnumEntry>) -> Self {
        if self.kind == ValueKind::Text {
            self.kind = ValueKind::Select;
        }
        self.options = options;
        self
    }

    pub fn hide_in_search(mut self) -> Self {
        self.searchable = false;
        self
    }

    pub fn hide_in_table(mut self) -> Self {
        self.in_table = false;
        self
    }

    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn render(mut self, render: Callback<T, Element>) -> Self {
        self.render = Some(render);
        self
    }
}

impl<T: TableRecord> PartialEq for ColumnSpec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
            && self.title == other.title
            && self.kind == other.kind
            && self.options == other.options
            && self.searchable == other.searchable
            && self.in_table == other.in_table
            && self.width == other.width
            && self.render.is_some() == other.render.is_some()
    }
}
