use dioxus::prelude::*;
use serde_json::json;

use super::{format_timestamp, obj, ACTION_BUTTON_STYLE, DANGER_BUTTON_STYLE, TOOLBAR_BUTTON_STYLE};
use crate::app::AppCtx;
use crate::domain::entities::category::CategorySave;
use crate::domain::entities::session::id_text;
use crate::infra::api::{attributes, categories};
use crate::ui::table::{
    use_table_handle, ColumnSpec, EnumEntry, JsonRow, PageSource, ProTable, TableHandle,
};
use crate::ui::widgets::confirm::confirm;
use crate::ui::widgets::dropdown::{DropdownMultiSelect, DropdownOption, DropdownSelect};
use crate::ui::widgets::modal::{Modal, ModalFooter, FORM_GRID_STYLE, MODAL_INPUT_STYLE};

/// 类目列表：负责产品分类定义及属性绑定关系维护。
#[component]
pub fn CategoryListScreen() -> Element {
    let ctx = use_context::<AppCtx>();
    let handle = use_table_handle();
    let mut modal_visible = use_signal(|| false);
    let mut editing_id = use_signal(|| None::<String>);

    let page_client = ctx.client.clone();
    let source = use_hook(move || {
        PageSource::new(move |params| {
            let client = page_client.clone();
            async move { Ok(categories::page(&client, params).await?) }
        })
    });

    let action_client = ctx.client.clone();
    let toasts = ctx.toasts;
    let actions = use_callback(move |record: JsonRow| {
        let Some(id) = id_text(record.get("id")) else {
            return rsx! {};
        };
        let name = record
            .get("name")
            .and_then(|value| value.as_str())
            .unwrap_or_default()
            .to_string();
        let is_active = record.get("isActive").and_then(|value| value.as_i64()) == Some(1);
        let client_for_status = action_client.clone();
        let client_for_delete = action_client.clone();
        let id_for_status = id.clone();
        let id_for_delete = id.clone();
        let id_for_edit = id.clone();

        rsx! {
            div { style: "display: flex; gap: 6px;",
                button {
                    style: ACTION_BUTTON_STYLE,
                    onclick: move |_| {
                        editing_id.set(Some(id_for_edit.clone()));
                        modal_visible.set(true);
                    },
                    "编辑"
                }
                button {
                    style: ACTION_BUTTON_STYLE,
                    onclick: move |_| {
                        let action = if is_active { "禁用" } else { "启用" };
                        let detail = if is_active {
                            "禁用后，该类目将无法用于产品录入。"
                        } else {
                            "启用后，可正常用于产品分类。"
                        };
                        if !confirm(&format!("确定要{action}类目「{name}」吗？"), detail) {
                            return;
                        }
                        let client = client_for_status.clone();
                        let id = id_for_status.clone();
                        spawn(async move {
                            if categories::set_status(&client, &id, if is_active { 0 } else { 1 })
                                .await
                                .is_ok()
                            {
                                toasts.success(format!("{action}成功"));
                                handle.reload(false);
                            }
                        });
                    },
                    if is_active { "禁用" } else { "启用" }
                }
                button {
                    style: DANGER_BUTTON_STYLE,
                    onclick: move |_| {
                        if !confirm("确定删除该类目吗？", "删除后相关产品分类将受影响。") {
                            return;
                        }
                        let client = client_for_delete.clone();
                        let id = id_for_delete.clone();
                        spawn(async move {
                            if categories::remove(&client, &id).await.is_ok() {
                                toasts.success("删除成功");
                                handle.reload(false);
                            }
                        });
                    },
                    "删除"
                }
            }
        }
    });

    let bound_attributes = use_callback(move |record: JsonRow| {
        let joined = record
            .get("attributes")
            .and_then(|value| value.as_array())
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| item.get("name").and_then(|name| name.as_str()))
                    .collect::<Vec<_>>()
                    .join(", ")
            })
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| "-".to_string());
        rsx! {
            span { "{joined}" }
        }
    });

    let created_at = use_callback(move |record: JsonRow| {
        let text = record
            .get("createdAt")
            .and_then(|value| value.as_str())
            .map(format_timestamp)
            .unwrap_or_else(|| "-".to_string());
        rsx! {
            span { "{text}" }
        }
    });

    let columns = vec![
        ColumnSpec::new("name", "类目名称"),
        ColumnSpec::new("code", "编码"),
        ColumnSpec::new("isActive", "状态").options(vec![
            EnumEntry::new("1", "启用").color("green"),
            EnumEntry::new("0", "禁用").color("grey"),
        ]),
        ColumnSpec::new("attributes", "已绑定属性")
            .hide_in_search()
            .render(bound_attributes),
        ColumnSpec::new("createdAt", "创建时间")
            .hide_in_search()
            .width(180)
            .render(created_at),
        ColumnSpec::new("option", "操作").hide_in_search().render(actions),
    ];

    rsx! {
        ProTable {
            columns: columns,
            source: source,
            title: "类目管理",
            handle: handle,
            toolbar: rsx! {
                button {
                    style: TOOLBAR_BUTTON_STYLE,
                    onclick: move |_| {
                        editing_id.set(None);
                        modal_visible.set(true);
                    },
                    "创建类目"
                }
            },
        }

        CategoryEditModal {
            visible: modal_visible,
            editing_id: editing_id,
            handle: handle,
        }
    }
}

#[component]
fn CategoryEditModal(
    mut visible: Signal<bool>,
    editing_id: Signal<Option<String>>,
    handle: TableHandle,
) -> Element {
    let ctx = use_context::<AppCtx>();
    let mut name = use_signal(String::new);
    let mut code = use_signal(String::new);
    let mut is_active = use_signal(|| 1_i64);
    let mut attribute_ids = use_signal(Vec::<String>::new);
    let mut attribute_options = use_signal(Vec::<DropdownOption>::new);
    let mut busy = use_signal(|| false);
    let open_dropdown = use_signal(|| None::<String>);
    let dropdown_pos = use_signal(|| None::<(f64, f64)>);

    // Load the attribute catalog and, when editing, the current values.
    let load_client = ctx.client.clone();
    use_effect(move || {
        if !visible() {
            return;
        }
        let id = editing_id();
        let client = load_client.clone();
        spawn(async move {
            if let Ok(envelope) =
                attributes::page(&client, obj(json!({ "page": 1, "pageSize": 200, "isActive": 1 })))
                    .await
            {
                let options = envelope
                    .list
                    .unwrap_or_default()
                    .iter()
                    .filter_map(|row| {
                        let value = id_text(row.get("id"))?;
                        let label = row.get("name").and_then(|name| name.as_str())?.to_string();
                        Some(DropdownOption { value, label })
                    })
                    .collect::<Vec<_>>();
                attribute_options.set(options);
            }

            match id {
                Some(id) => {
                    if let Ok(detail) = categories::detail(&client, &id).await {
                        name.set(detail.name);
                        code.set(detail.code);
                        is_active.set(detail.is_active);
                        attribute_ids.set(detail.attribute_ids);
                    }
                }
                None => {
                    name.set(String::new());
                    code.set(String::new());
                    is_active.set(1);
                    attribute_ids.set(Vec::new());
                }
            }
        });
    });

    let toasts = ctx.toasts;
    let save_client = ctx.client.clone();
    let handle_save = move |_| {
        if name.read().trim().is_empty() || code.read().trim().is_empty() {
            toasts.error("请填写类目名称和编码");
            return;
        }
        let payload = CategorySave {
            id: editing_id(),
            name: name.read().trim().to_string(),
            code: code.read().trim().to_string(),
            is_active: is_active(),
            attribute_ids: attribute_ids(),
        };
        let client = save_client.clone();
        busy.set(true);
        spawn(async move {
            let result = if payload.id.is_some() {
                categories::update(&client, &payload).await
            } else {
                categories::save(&client, &payload).await
            };
            if result.is_ok() {
                toasts.success("保存成功");
                visible.set(false);
                handle.reload(false);
            }
            busy.set(false);
        });
    };

    let title = if editing_id().is_some() { "编辑类目" } else { "创建类目" }.to_string();

    rsx! {
        Modal {
            title: title,
            visible: visible(),
            on_close: move |_| visible.set(false),
            div { style: FORM_GRID_STYLE,
                label { style: "align-self: center;", "类目名称" }
                input {
                    style: MODAL_INPUT_STYLE,
                    value: name(),
                    placeholder: "请输入类目名称",
                    oninput: move |event| name.set(event.value()),
                }
                label { style: "align-self: center;", "编码" }
                input {
                    style: MODAL_INPUT_STYLE,
                    value: code(),
                    placeholder: "请输入类目编码",
                    oninput: move |event| code.set(event.value()),
                }
                label { style: "align-self: center;", "状态" }
                DropdownSelect {
                    id: "category-status",
                    label: "",
                    placeholder: "请选择状态",
                    options: vec![
                        DropdownOption { value: "1".to_string(), label: "启用".to_string() },
                        DropdownOption { value: "0".to_string(), label: "禁用".to_string() },
                    ],
                    selected: Some(is_active().to_string()),
                    open_dropdown: open_dropdown,
                    dropdown_pos: dropdown_pos,
                    on_select: move |value: String| {
                        is_active.set(value.parse().unwrap_or(1));
                    },
                }
                label { style: "align-self: center;", "绑定属性" }
                DropdownMultiSelect {
                    id: "category-attributes",
                    label: "",
                    placeholder: "请选择要绑定的属性",
                    options: attribute_options(),
                    selected: attribute_ids(),
                    open_dropdown: open_dropdown,
                    dropdown_pos: dropdown_pos,
                    on_toggle: move |value: String| {
                        let mut ids = attribute_ids.write();
                        if let Some(idx) = ids.iter().position(|held| held == &value) {
                            ids.remove(idx);
                        } else {
                            ids.push(value);
                        }
                    },
                }
            }
            ModalFooter {
                busy: busy(),
                on_cancel: move |_| visible.set(false),
                on_save: handle_save,
            }
        }
    }
}
