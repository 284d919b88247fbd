use dioxus::prelude::*;
use serde_json::json;

use super::{obj, ACTION_BUTTON_STYLE, DANGER_BUTTON_STYLE, TOOLBAR_BUTTON_STYLE};
use crate::app::AppCtx;
use crate::domain::entities::option_value::{BatchOptionSave, OptionSave};
use crate::domain::entities::session::id_text;
use crate::infra::api::{attributes, options};
use crate::ui::table::{
    use_table_handle, ColumnSpec, EnumEntry, JsonRow, PageSource, ProTable, TableHandle,
};
use crate::ui::widgets::confirm::confirm;
use crate::ui::widgets::dropdown::{DropdownOption, DropdownSelect};
use crate::ui::widgets::modal::{Modal, ModalFooter, FORM_GRID_STYLE, MODAL_INPUT_STYLE};

/// 规格值列表：属性下具体可选的规格内容维护。
#[component]
pub fn OptionListScreen() -> Element {
    let ctx = use_context::<AppCtx>();
    let handle = use_table_handle();
    let mut modal_visible = use_signal(|| false);
    let mut batch_visible = use_signal(|| false);
    let mut editing_id = use_signal(|| None::<String>);
    let mut attribute_entries = use_signal(Vec::<(String, String)>::new);

    // 属性下拉数据：搜索表单与两个弹窗共用。
    let catalog_client = ctx.client.clone();
    use_effect(move || {
        let client = catalog_client.clone();
        spawn(async move {
            if let Ok(envelope) =
                attributes::page(&client, obj(json!({ "page": 1, "pageSize": 200, "isActive": 1 })))
                    .await
            {
                let entries = envelope
                    .list
                    .unwrap_or_default()
                    .iter()
                    .filter_map(|row| {
                        let id = id_text(row.get("id"))?;
                        let name = row.get("name").and_then(|name| name.as_str())?.to_string();
                        Some((id, name))
                    })
                    .collect::<Vec<_>>();
                attribute_entries.set(entries);
            }
        });
    });

    let page_client = ctx.client.clone();
    let source = use_hook(move || {
        PageSource::new(move |params| {
            let client = page_client.clone();
            async move { Ok(options::page(&client, params).await?) }
        })
    });

    let action_client = ctx.client.clone();
    let toasts = ctx.toasts;
    let actions = use_callback(move |record: JsonRow| {
        let Some(id) = id_text(record.get("id")) else {
            return rsx! {};
        };
        let value = record
            .get("value")
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
                        if !confirm(
                            &format!("确定要{action}规格「{value}」吗？"),
                            "禁用后的规格在录入产品时不可见。",
                        ) {
                            return;
                        }
                        let client = client_for_status.clone();
                        let id = id_for_status.clone();
                        spawn(async move {
                            if options::set_status(&client, &id, if is_active { 0 } else { 1 })
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
                        if !confirm("确定删除该规格吗？", "删除后引用该规格的产品将无法回显。") {
                            return;
                        }
                        let client = client_for_delete.clone();
                        let id = id_for_delete.clone();
                        spawn(async move {
                            if options::remove(&client, &id).await.is_ok() {
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

    let attribute_name = use_callback(move |record: JsonRow| {
        let text = record
            .get("attribute")
            .and_then(|attr| attr.get("name"))
            .and_then(|name| name.as_str())
            .unwrap_or("-")
            .to_string();
        let unit = record
            .get("attribute")
            .and_then(|attr| attr.get("unit"))
            .and_then(|unit| unit.as_str())
            .unwrap_or_default()
            .to_string();
        rsx! {
            span { "{text}" }
            if !unit.is_empty() {
                span { style: "color: #999; margin-left: 4px;", "({unit})" }
            }
        }
    });

    let attribute_options = attribute_entries()
        .iter()
        .map(|(id, name)| EnumEntry::new(id.clone(), name.clone()))
        .collect::<Vec<_>>();

    let columns = vec![
        ColumnSpec::new("value", "规格内容"),
        ColumnSpec::new("attributeId", "所属属性")
            .options(attribute_options)
            .hide_in_table(),
        ColumnSpec::new("attribute", "所属属性")
            .hide_in_search()
            .render(attribute_name),
        ColumnSpec::new("sort", "排序").hide_in_search().width(80),
        ColumnSpec::new("isActive", "状态").options(vec![
            EnumEntry::new("1", "启用").color("green"),
            EnumEntry::new("0", "禁用").color("grey"),
        ]),
        ColumnSpec::new("option", "操作").hide_in_search().render(actions),
    ];

    rsx! {
        ProTable {
            columns: columns,
            source: source,
            title: "规格管理",
            handle: handle,
            toolbar: rsx! {
                button {
                    style: TOOLBAR_BUTTON_STYLE,
                    onclick: move |_| {
                        editing_id.set(None);
                        modal_visible.set(true);
                    },
                    "新增规格"
                }
                button {
                    style: ACTION_BUTTON_STYLE,
                    onclick: move |_| batch_visible.set(true),
                    "批量录入"
                }
            },
        }

        OptionEditModal {
            visible: modal_visible,
            editing_id: editing_id,
            attribute_entries: attribute_entries,
            handle: handle,
        }
        OptionBatchModal {
            visible: batch_visible,
            attribute_entries: attribute_entries,
            handle: handle,
        }
    }
}

fn attribute_dropdown_options(entries: &[(String, String)]) -> Vec<DropdownOption> {
    entries
        .iter()
        .map(|(id, name)| DropdownOption {
            value: id.clone(),
            label: name.clone(),
        })
        .collect()
}

#[component]
fn OptionEditModal(
    mut visible: Signal<bool>,
    editing_id: Signal<Option<String>>,
    attribute_entries: Signal<Vec<(String, String)>>,
    handle: TableHandle,
) -> Element {
    let ctx = use_context::<AppCtx>();
    let mut attribute_id = use_signal(String::new);
    let mut value = use_signal(String::new);
    let mut sort = use_signal(String::new);
    let mut is_active = use_signal(|| 1_i64);
    let mut busy = use_signal(|| false);
    let open_dropdown = use_signal(|| None::<String>);
    let dropdown_pos = use_signal(|| None::<(f64, f64)>);

    let load_client = ctx.client.clone();
    use_effect(move || {
        if !visible() {
            return;
        }
        let id = editing_id();
        let client = load_client.clone();
        spawn(async move {
            match id {
                Some(id) => {
                    if let Ok(detail) = options::detail(&client, &id).await {
                        attribute_id.set(detail.attribute_id);
                        value.set(detail.value);
                        sort.set(detail.sort.map(|sort| sort.to_string()).unwrap_or_default());
                        is_active.set(detail.is_active);
                    }
                }
                None => {
                    attribute_id.set(String::new());
                    value.set(String::new());
                    sort.set(String::new());
                    is_active.set(1);
                }
            }
        });
    });

    let toasts = ctx.toasts;
    let save_client = ctx.client.clone();
    let handle_save = move |_| {
        if attribute_id.read().is_empty() {
            toasts.error("请选择所属属性");
            return;
        }
        if value.read().trim().is_empty() {
            toasts.error("请输入规格内容");
            return;
        }
        let payload = OptionSave {
            id: editing_id(),
            attribute_id: attribute_id(),
            value: value.read().trim().to_string(),
            sort: sort.read().trim().parse().ok(),
            is_active: is_active(),
        };
        let client = save_client.clone();
        busy.set(true);
        spawn(async move {
            let result = if payload.id.is_some() {
                options::update(&client, &payload).await
            } else {
                options::save(&client, &payload).await
            };
            if result.is_ok() {
                toasts.success("保存成功");
                visible.set(false);
                handle.reload(false);
            }
            busy.set(false);
        });
    };

    let title = if editing_id().is_some() { "编辑规格" } else { "新增规格" }.to_string();

    rsx! {
        Modal {
            title: title,
            visible: visible(),
            on_close: move |_| visible.set(false),
            div { style: FORM_GRID_STYLE,
                label { style: "align-self: center;", "所属属性" }
                DropdownSelect {
                    id: "option-attribute",
                    label: "",
                    placeholder: "请选择所属属性",
                    options: attribute_dropdown_options(&attribute_entries()),
                    selected: if attribute_id.read().is_empty() { None } else { Some(attribute_id()) },
                    open_dropdown: open_dropdown,
                    dropdown_pos: dropdown_pos,
                    on_select: move |next: String| attribute_id.set(next),
                }
                label { style: "align-self: center;", "规格内容" }
                input {
                    style: MODAL_INPUT_STYLE,
                    value: value(),
                    placeholder: "请输入规格内容，如：304、12.5",
                    oninput: move |event| value.set(event.value()),
                }
                label { style: "align-self: center;", "排序号" }
                input {
                    style: MODAL_INPUT_STYLE,
                    r#type: "number",
                    value: sort(),
                    placeholder: "值越小越靠前，可不填",
                    oninput: move |event| sort.set(event.value()),
                }
                label { style: "align-self: center;", "状态" }
                DropdownSelect {
                    id: "option-status",
                    label: "",
                    placeholder: "请选择状态",
                    options: vec![
                        DropdownOption { value: "1".to_string(), label: "启用".to_string() },
                        DropdownOption { value: "0".to_string(), label: "禁用".to_string() },
                    ],
                    selected: Some(is_active().to_string()),
                    open_dropdown: open_dropdown,
                    dropdown_pos: dropdown_pos,
                    on_select: move |next: String| is_active.set(next.parse().unwrap_or(1)),
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

/// 工业品多规格快速录入：一行一个规格值，后端自动去重。
#[component]
fn OptionBatchModal(
    mut visible: Signal<bool>,
    attribute_entries: Signal<Vec<(String, String)>>,
    handle: TableHandle,
) -> Element {
    let ctx = use_context::<AppCtx>();
    let mut attribute_id = use_signal(String::new);
    let mut values_text = use_signal(String::new);
    let mut busy = use_signal(|| false);
    let open_dropdown = use_signal(|| None::<String>);
    let dropdown_pos = use_signal(|| None::<(f64, f64)>);

    let toasts = ctx.toasts;
    let save_client = ctx.client.clone();
    let handle_save = move |_| {
        if attribute_id.read().is_empty() {
            toasts.error("请选择所属属性");
            return;
        }
        let values = values_text
            .read()
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect::<Vec<_>>();
        if values.is_empty() {
            toasts.error("请输入至少一个规格值");
            return;
        }
        let count = values.len();
        let payload = BatchOptionSave {
            attribute_id: attribute_id(),
            values,
        };
        let client = save_client.clone();
        busy.set(true);
        spawn(async move {
            if options::batch_save(&client, &payload).await.is_ok() {
                toasts.success(format!("已提交 {count} 条规格值"));
                visible.set(false);
                values_text.set(String::new());
                handle.reload(true);
            }
            busy.set(false);
        });
    };

    rsx! {
        Modal {
            title: "批量录入规格值",
            visible: visible(),
            on_close: move |_| visible.set(false),
            div { style: FORM_GRID_STYLE,
                label { style: "align-self: center;", "所属属性" }
                DropdownSelect {
                    id: "batch-attribute",
                    label: "",
                    placeholder: "请选择所属属性",
                    options: attribute_dropdown_options(&attribute_entries()),
                    selected: if attribute_id.read().is_empty() { None } else { Some(attribute_id()) },
                    open_dropdown: open_dropdown,
                    dropdown_pos: dropdown_pos,
                    on_select: move |next: String| attribute_id.set(next),
                }
                label { "规格值" }
                textarea {
                    style: "border: 1px solid #bbb; border-radius: 6px; padding: 6px 8px; width: 100%; box-sizing: border-box; min-height: 140px; font-family: inherit;",
                    value: values_text(),
                    placeholder: "一行一个规格值，如：\n304\n316L\n12.5",
                    oninput: move |event| values_text.set(event.value()),
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
