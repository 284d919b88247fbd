mod cells;
mod column;
mod form;
mod handle;
mod pager;
mod params;
mod registry;
mod state;

use dioxus::prelude::*;

pub use cells::render_cell;
pub use column::{ColumnSpec, EnumEntry, ValueKind};
pub use handle::{use_table_handle, TableCommand, TableHandle};
pub use params::{normalize_params, QueryState, QueryValue};
pub use state::TableState;

pub use crate::domain::entities::page::{PageEnvelope, PageState};
pub use crate::usecase::ports::data_source::{JsonRow, PageSource, ParamMap, TableRecord};

use form::{searchable_columns, QueryForm};
use pager::Pager;

const HEADER_CELL_STYLE: &str =
    "border: 1px solid #e0e0e0; padding: 8px 10px; background: #fafafa; text-align: left; font-weight: 600; white-space: nowrap;";
const BODY_CELL_STYLE: &str = "border: 1px solid #e0e0e0; padding: 8px 10px;";

#[derive(Props, Clone)]
pub struct ProTableProps<T: TableRecord> {
    pub columns: Vec<ColumnSpec<T>>,
    pub source: PageSource<T>,
    #[props(default)]
    pub initial_values: ParamMap,
    #[props(default)]
    pub title: Option<String>,
    #[props(default = true)]
    pub search: bool,
    #[props(default)]
    pub handle: Option<TableHandle>,
    #[props(default)]
    pub toolbar: Option<Element>,
}

impl<T: TableRecord> PartialEq for ProTableProps<T> {
    fn eq(&self, other: &Self) -> bool {
        self.columns == other.columns
            && self.source == other.source
            && self.initial_values == other.initial_values
            && self.title == other.title
            && self.search == other.search
            && self.handle == other.handle
            && self.toolbar.is_some() == other.toolbar.is_some()
    }
}

/// Declarative list screen: the column set drives the search form, the
/// remote fetch cycle and the rendered grid. Screens supply columns and a
/// page source and get the whole query/paginate/render loop for free.
#[allow(non_snake_case)]
pub fn ProTable<T: TableRecord>(props: ProTableProps<T>) -> Element {
    let mut state = use_signal(TableState::<T>::new);
    let query = use_signal(QueryState::new);
    let mut open_dropdown = use_signal(|| None::<String>);
    let dropdown_pos = use_signal(|| None::<(f64, f64)>);

    let source = props.source.clone();
    let initial_values = props.initial_values.clone();
    let load = use_callback(move |target: Option<u64>| {
        let source = source.clone();
        let initial_values = initial_values.clone();
        spawn(async move {
            let (page, page_size) = {
                let snapshot = state.peek();
                (
                    target.unwrap_or(snapshot.page.current_page),
                    snapshot.page.page_size,
                )
            };
            let generation = state.write().begin_load();
            let mut params = normalize_params(&initial_values, &query.peek());
            params.insert("page".to_string(), page.into());
            params.insert("pageSize".to_string(), page_size.into());
            log::debug!("table request: {}", serde_json::Value::Object(params.clone()));
            let outcome = source.fetch(params).await;
            state.write().apply(generation, outcome);
        });
    });

    // First page on mount.
    use_effect(move || {
        load.call(Some(1));
    });

    // Drain commands queued through the imperative handle.
    let handle = props.handle;
    use_effect(move || {
        let Some(handle) = handle else {
            return;
        };
        let mut commands = handle.command_signal();
        let Some(command) = commands() else {
            return;
        };
        commands.set(None);
        if command == TableCommand::Reset {
            let mut query = query;
            query.write().clear();
        }
        let target = command.target_page(state.peek().page.current_page);
        load.call(Some(target));
    });

    let snapshot = state.read();
    let busy = snapshot.loading;
    let page = snapshot.page;
    let rows = snapshot.rows.clone();
    drop(snapshot);

    let visible_columns = props
        .columns
        .iter()
        .filter(|column| column.in_table)
        .cloned()
        .collect::<Vec<_>>();
    let has_search = props.search && !searchable_columns(&props.columns).is_empty();
    let title = props.title.clone();
    let table_columns = visible_columns.clone();

    rsx! {
        div {
            style: "background: #fff; border-radius: 8px; padding: 16px;",
            onclick: move |_| open_dropdown.set(None),

            if has_search {
                QueryForm {
                    columns: props.columns.clone(),
                    query: query,
                    busy: busy,
                    open_dropdown: open_dropdown,
                    dropdown_pos: dropdown_pos,
                    on_search: move |_| load.call(Some(1)),
                    on_reset: move |_| {
                        let mut query = query;
                        query.write().clear();
                        load.call(Some(1));
                    },
                }
                div { style: "border-bottom: 1px solid #eee; margin-bottom: 12px;" }
            }

            div {
                style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 12px;",
                div {
                    if let Some(title) = title {
                        span { style: "font-weight: 600;", "{title}" }
                    }
                }
                div { style: "display: flex; gap: 8px;",
                    if let Some(toolbar) = props.toolbar.clone() {
                        {toolbar}
                    }
                }
            }

            div { style: "overflow-x: auto;",
                table { style: "border-collapse: collapse; width: 100%; background: #fff;",
                    thead {
                        tr {
                            for column in visible_columns.iter() {
                                th {
                                    style: match column.width {
                                        Some(width) => format!("{HEADER_CELL_STYLE} width: {width}px;"),
                                        None => HEADER_CELL_STYLE.to_string(),
                                    },
                                    "{column.title}"
                                }
                            }
                        }
                    }
                    tbody {
                        if rows.is_empty() {
                            tr {
                                td {
                                    style: "border: 1px solid #e0e0e0; padding: 24px; text-align: center; color: #999;",
                                    colspan: table_columns.len() as i64,
                                    if busy { "加载中…" } else { "暂无数据" }
                                }
                            }
                        }
                        {rows.iter().map(|record| {
                            let record = record.clone();
                            let table_columns = table_columns.clone();
                            rsx!(
                                tr {
                                    {table_columns.iter().map(|column| {
                                        rsx!(
                                            td { style: BODY_CELL_STYLE,
                                                {render_cell(column, &record)}
                                            }
                                        )
                                    })}
                                }
                            )
                        })}
                    }
                }
            }

            Pager {
                page: page,
                busy: busy,
                on_page: move |target: u64| load.call(Some(target)),
            }
        }
    }
}
