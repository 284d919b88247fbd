use dioxus::prelude::*;

use super::column::ColumnSpec;
use super::params::QueryState;
use super::registry::{handlers, FieldCtx};
use crate::usecase::ports::data_source::TableRecord;

/// Columns that contribute a search control: searchable with a usable key.
pub fn searchable_columns<T: TableRecord>(columns: &[ColumnSpec<T>]) -> Vec<&ColumnSpec<T>> {
    columns
        .iter()
        .filter(|column| column.searchable && !column.key.is_empty())
        .collect()
}

#[derive(Props, Clone)]
pub struct QueryFormProps<T: TableRecord> {
    pub columns: Vec<ColumnSpec<T>>,
    pub query: Signal<QueryState>,
    pub busy: bool,
    pub open_dropdown: Signal<Option<String>>,
    pub dropdown_pos: Signal<Option<(f64, f64)>>,
    pub on_search: EventHandler<()>,
    pub on_reset: EventHandler<()>,
}

impl<T: TableRecord> PartialEq for QueryFormProps<T> {
    fn eq(&self, other: &Self) -> bool {
        self.columns == other.columns
            && self.query == other.query
            && self.busy == other.busy
            && self.open_dropdown == other.open_dropdown
            && self.dropdown_pos == other.dropdown_pos
    }
}

/// Derives the search form from the column set; one control per searchable
/// column, dispatched on the column's kind.
#[allow(non_snake_case)]
pub fn QueryForm<T: TableRecord>(props: QueryFormProps<T>) -> Element {
    let fields = searchable_columns(&props.columns)
        .into_iter()
        .map(|column| {
            let ctx = FieldCtx {
                key: column.key.clone(),
                title: column.title.clone(),
                options: column.options.clone(),
                query: props.query,
                open_dropdown: props.open_dropdown,
                dropdown_pos: props.dropdown_pos,
            };
            (handlers(column.kind).build_field)(ctx)
        })
        .collect::<Vec<_>>();

    rsx! {
        div {
            style: "display: flex; gap: 12px; align-items: center; flex-wrap: wrap; padding: 12px 0;",
            {fields.into_iter()}
            div { style: "margin-left: auto; display: flex; gap: 8px;",
                button {
                    style: "border: 1px solid #4c6ef5; background: #4c6ef5; color: #fff; padding: 5px 14px; border-radius: 6px; cursor: pointer;",
                    disabled: props.busy,
                    onclick: move |_| props.on_search.call(()),
                    "查询"
                }
                button {
                    style: "border: 1px solid #bbb; background: #fff; padding: 5px 14px; border-radius: 6px; cursor: pointer;",
                    disabled: props.busy,
                    onclick: move |_| props.on_reset.call(()),
                    "重置"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecase::ports::data_source::JsonRow;

    #[test]
    fn only_searchable_columns_contribute_fields() {
        let columns = vec![
            ColumnSpec::<JsonRow>::new("name", "名称"),
            ColumnSpec::<JsonRow>::new("status", "状态").hide_in_search(),
        ];

        let fields = searchable_columns(&columns);

        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].key, "name");
    }

    #[test]
    fn columns_without_a_key_contribute_no_field() {
        let columns = vec![ColumnSpec::<JsonRow>::new("", "操作")];
        assert!(searchable_columns(&columns).is_empty());
    }
}
