use dioxus::prelude::*;

use super::{ACTION_BUTTON_STYLE, DANGER_BUTTON_STYLE, TOOLBAR_BUTTON_STYLE};
use crate::app::AppCtx;
use crate::domain::entities::attribute::AttributeDetail;
use crate::domain::entities::session::id_text;
use crate::infra::api::attributes;
use crate::ui::table::{
    use_table_handle, ColumnSpec, EnumEntry, JsonRow, PageSource, ProTable, TableHandle,
};
use crate::ui::widgets::confirm::confirm;
use crate::ui::widgets::dropdown::{DropdownOption, DropdownSelect};
use crate::ui::widgets::modal::{Modal, ModalFooter, FORM_GRID_STYLE, MODAL_INPUT_STYLE};

/// 属性列表：产品动态规格的维度定义。
#[component]
pub fn AttributeListScreen() -> Element {
    let ctx = use_context::<AppCtx>();
    let handle = use_table_handle();
    let mut modal_visible = use_signal(|| false);
    let mut editing_id = use_signal(|| None::<String>);

    let page_client = ctx.client.clone();
    let source = use_hook(move || {
        PageSource::new(move |params| {
            let client = page_client.clone();
            async move { Ok(attributes::page(&client, params).await?) }
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
                        if !confirm(
                            &format!("确定要{action}属性「{name}」吗？"),
                            "禁用后，该属性不再出现在类目绑定和产品录入中。",
                        ) {
                            return;
                        }
                        let client = client_for_status.clone();
                        let id = id_for_status.clone();
                        spawn(async move {
                            if attributes::set_status(&client, &id, if is_active { 0 } else { 1 })
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
                        if !confirm("确定删除该属性吗？", "删除后引用该属性的规格值将失效。") {
                            return;
                        }
                        let client = client_for_delete.clone();
                        let id = id_for_delete.clone();
                        spawn(async move {
                            if attributes::remove(&client, &id).await.is_ok() {
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

    let columns = vec![
        ColumnSpec::new("name", "属性名称"),
        ColumnSpec::new("code", "属性编码"),
        ColumnSpec::new("type", "输入类型")
            .hide_in_search()
            .options(vec![
                EnumEntry::new("text", "文本"),
                EnumEntry::new("select", "下拉选择"),
                EnumEntry::new("number", "数值"),
            ]),
        ColumnSpec::new("unit", "单位").hide_in_search(),
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
            title: "属性管理",
            handle: handle,
            toolbar: rsx! {
                button {
                    style: TOOLBAR_BUTTON_STYLE,
                    onclick: move |_| {
                        editing_id.set(None);
                        modal_visible.set(true);
                    },
                    "新增属性"
                }
            },
        }

        AttributeEditModal {
            visible: modal_visible,
            editing_id: editing_id,
            handle: handle,
        }
    }
}

#[component]
fn AttributeEditModal(
    mut visible: Signal<bool>,
    editing_id: Signal<Option<String>>,
    handle: TableHandle,
) -> Element {
    let ctx = use_context::<AppCtx>();
    let mut name = use_signal(String::new);
    let mut code = use_signal(String::new);
    let mut input_type = use_signal(|| "text".to_string());
    let mut unit = use_signal(String::new);
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
                    if let Ok(detail) = attributes::detail(&client, &id).await {
                        name.set(detail.name);
                        code.set(detail.code);
                        input_type.set(detail.input_type);
                        unit.set(detail.unit.unwrap_or_default());
                        is_active.set(detail.is_active);
                    }
                }
                None => {
                    name.set(String::new());
                    code.set(String::new());
                    input_type.set("text".to_string());
                    unit.set(String::new());
                    is_active.set(1);
                }
            }
        });
    });

    let toasts = ctx.toasts;
    let save_client = ctx.client.clone();
    let handle_save = move |_| {
        if name.read().trim().is_empty() || code.read().trim().is_empty() {
            toasts.error("请填写属性名称和编码");
            return;
        }
        let unit_text = unit.read().trim().to_string();
        let payload = AttributeDetail {
            id: editing_id(),
            name: name.read().trim().to_string(),
            code: code.read().trim().to_string(),
            input_type: input_type(),
            unit: if unit_text.is_empty() { None } else { Some(unit_text) },
            is_active: is_active(),
        };
        let client = save_client.clone();
        busy.set(true);
        spawn(async move {
            let result = if payload.id.is_some() {
                attributes::update(&client, &payload).await
            } else {
                attributes::save(&client, &payload).await
            };
            if result.is_ok() {
                toasts.success("保存成功");
                visible.set(false);
                handle.reload(false);
            }
            busy.set(false);
        });
    };

    let title = if editing_id().is_some() { "编辑属性" } else { "新增属性" }.to_string();

    rsx! {
        Modal {
            title: title,
            visible: visible(),
            on_close: move |_| visible.set(false),
            div { style: FORM_GRID_STYLE,
                label { style: "align-self: center;", "属性名称" }
                input {
                    style: MODAL_INPUT_STYLE,
                    value: name(),
                    placeholder: "请输入属性名称，如：材质",
                    oninput: move |event| name.set(event.value()),
                }
                label { style: "align-self: center;", "属性编码" }
                input {
                    style: MODAL_INPUT_STYLE,
                    value: code(),
                    placeholder: "请输入属性编码，如：ATTR_CZ",
                    oninput: move |event| code.set(event.value()),
                }
                label { style: "align-self: center;", "输入类型" }
                DropdownSelect {
                    id: "attribute-type",
                    label: "",
                    placeholder: "请选择输入类型",
                    options: vec![
                        DropdownOption { value: "text".to_string(), label: "文本".to_string() },
                        DropdownOption { value: "select".to_string(), label: "下拉选择".to_string() },
                        DropdownOption { value: "number".to_string(), label: "数值".to_string() },
                    ],
                    selected: Some(input_type()),
                    open_dropdown: open_dropdown,
                    dropdown_pos: dropdown_pos,
                    on_select: move |value: String| input_type.set(value),
                }
                label { style: "align-self: center;", "单位" }
                input {
                    style: MODAL_INPUT_STYLE,
                    value: unit(),
                    placeholder: "如：mm、kg，可不填",
                    oninput: move |event| unit.set(event.value()),
                }
                label { style: "align-self: center;", "状态" }
                DropdownSelect {
                    id: "attribute-status",
                    label: "",
                    placeholder: "请选择状态",
                    options: vec![
                        DropdownOption { value: "1".to_string(), label: "启用".to_string() },
                        DropdownOption { value: "0".to_string(), label: "禁用".to_string() },
                    ],
                    selected: Some(is_active().to_string()),
                    open_dropdown: open_dropdown,
                    dropdown_pos: dropdown_pos,
                    on_select: move |value: String| is_active.set(value.parse().unwrap_or(1)),
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
