use dioxus::prelude::*;
use serde_json::json;

use super::{format_timestamp, obj, ACTION_BUTTON_STYLE, DANGER_BUTTON_STYLE, TOOLBAR_BUTTON_STYLE};
use crate::app::AppCtx;
use crate::domain::entities::category::AttributeBrief;
use crate::domain::entities::product::ProductSave;
use crate::domain::entities::session::id_text;
use crate::infra::api::{categories, products};
use crate::ui::table::{
    use_table_handle, ColumnSpec, EnumEntry, JsonRow, PageSource, ProTable, TableHandle, ValueKind,
};
use crate::ui::widgets::confirm::confirm;
use crate::ui::widgets::dropdown::{DropdownOption, DropdownSelect};
use crate::ui::widgets::modal::{Modal, ModalFooter, FORM_GRID_STYLE, MODAL_INPUT_STYLE};
use crate::ui::widgets::upload::UploadImage;

/// 产品列表：物料主数据，含类目关联与动态规格。
#[component]
pub fn ProductListScreen() -> Element {
    let ctx = use_context::<AppCtx>();
    let handle = use_table_handle();
    let mut modal_visible = use_signal(|| false);
    let mut editing_id = use_signal(|| None::<String>);
    let mut category_entries = use_signal(Vec::<(String, String)>::new);

    let catalog_client = ctx.client.clone();
    use_effect(move || {
        let client = catalog_client.clone();
        spawn(async move {
            if let Ok(envelope) =
                categories::page(&client, obj(json!({ "page": 1, "pageSize": 200, "isActive": 1 })))
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
                category_entries.set(entries);
            }
        });
    });

    let page_client = ctx.client.clone();
    let source = use_hook(move || {
        PageSource::new(move |params| {
            let client = page_client.clone();
            async move { Ok(products::page(&client, params).await?) }
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
                            &format!("确定要{action}产品「{name}」吗？"),
                            "禁用后，该产品不再参与出入库选择。",
                        ) {
                            return;
                        }
                        let client = client_for_status.clone();
                        let id = id_for_status.clone();
                        spawn(async move {
                            if products::set_status(&client, &id, if is_active { 0 } else { 1 })
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
                        if !confirm("确定删除该产品吗？", "删除后保留业务轨迹，但列表不再展示。") {
                            return;
                        }
                        let client = client_for_delete.clone();
                        let id = id_for_delete.clone();
                        spawn(async move {
                            if products::remove(&client, &id).await.is_ok() {
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

    let category_name = use_callback(move |record: JsonRow| {
        let text = record
            .get("category")
            .and_then(|category| category.get("name"))
            .and_then(|name| name.as_str())
            .unwrap_or("-")
            .to_string();
        rsx! {
            span { "{text}" }
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

    let category_options = category_entries()
        .iter()
        .map(|(id, name)| EnumEntry::new(id.clone(), name.clone()))
        .collect::<Vec<_>>();

    let columns = vec![
        ColumnSpec::new("keyword", "关键词").hide_in_table(),
        ColumnSpec::new("name", "产品名称").hide_in_search(),
        ColumnSpec::new("code", "SKU 编码").hide_in_search(),
        ColumnSpec::new("categoryId", "所属类目")
            .options(category_options)
            .hide_in_table(),
        ColumnSpec::new("category", "所属类目")
            .hide_in_search()
            .render(category_name),
        ColumnSpec::new("safetyStock", "安全库存")
            .kind(ValueKind::Digit)
            .hide_in_search()
            .width(100),
        ColumnSpec::new("isActive", "状态").options(vec![
            EnumEntry::new("1", "启用").color("green"),
            EnumEntry::new("0", "禁用").color("grey"),
        ]),
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
            title: "产品列表",
            handle: handle,
            toolbar: rsx! {
                button {
                    style: TOOLBAR_BUTTON_STYLE,
                    onclick: move |_| {
                        editing_id.set(None);
                        modal_visible.set(true);
                    },
                    "新增产品"
                }
            },
        }

        ProductEditModal {
            visible: modal_visible,
            editing_id: editing_id,
            category_entries: category_entries,
            handle: handle,
        }
    }
}

#[component]
fn ProductEditModal(
    mut visible: Signal<bool>,
    editing_id: Signal<Option<String>>,
    category_entries: Signal<Vec<(String, String)>>,
    handle: TableHandle,
) -> Element {
    let ctx = use_context::<AppCtx>();
    let mut name = use_signal(String::new);
    let mut category_id = use_signal(String::new);
    let mut unit = use_signal(String::new);
    let mut safety_stock = use_signal(String::new);
    let mut is_active = use_signal(|| 1_i64);
    let mut specs = use_signal(serde_json::Map::<String, serde_json::Value>::new);
    let images = use_signal(Vec::<String>::new);
    let mut spec_attributes = use_signal(Vec::<AttributeBrief>::new);
    let mut busy = use_signal(|| false);
    let open_dropdown = use_signal(|| None::<String>);
    let dropdown_pos = use_signal(|| None::<(f64, f64)>);

    // 编辑回显。
    let load_client = ctx.client.clone();
    use_effect(move || {
        if !visible() {
            return;
        }
        let id = editing_id();
        let client = load_client.clone();
        let mut images = images;
        spawn(async move {
            match id {
                Some(id) => {
                    if let Ok(detail) = products::detail(&client, &id).await {
                        name.set(detail.name);
                        category_id.set(detail.category_id);
                        unit.set(detail.unit.unwrap_or_default());
                        safety_stock
                            .set(detail.safety_stock.map(|stock| stock.to_string()).unwrap_or_default());
                        is_active.set(detail.is_active);
                        specs.set(detail.specs);
                        images.set(detail.images);
                    }
                }
                None => {
                    name.set(String::new());
                    category_id.set(String::new());
                    unit.set(String::new());
                    safety_stock.set(String::new());
                    is_active.set(1);
                    specs.set(serde_json::Map::new());
                    images.set(Vec::new());
                }
            }
        });
    });

    // 类目决定动态规格字段：需包含该类目绑定的所有属性值。
    let spec_client = ctx.client.clone();
    use_effect(move || {
        let selected = category_id();
        let client = spec_client.clone();
        spawn(async move {
            if selected.is_empty() {
                spec_attributes.set(Vec::new());
                return;
            }
            match categories::detail(&client, &selected).await {
                Ok(detail) => spec_attributes.set(detail.attributes),
                Err(err) => {
                    log::warn!("failed to load category attributes: {err}");
                    spec_attributes.set(Vec::new());
                }
            }
        });
    });

    let toasts = ctx.toasts;
    let save_client = ctx.client.clone();
    let handle_save = move |_| {
        if name.read().trim().is_empty() {
            toasts.error("请输入产品名称");
            return;
        }
        if category_id.read().is_empty() {
            toasts.error("请选择所属类目");
            return;
        }
        let missing = spec_attributes
            .read()
            .iter()
            .find(|attribute| {
                specs
                    .read()
                    .get(&attribute.code)
                    .and_then(|value| value.as_str())
                    .map(str::trim)
                    .unwrap_or_default()
                    .is_empty()
            })
            .map(|attribute| attribute.name.clone());
        if let Some(missing) = missing {
            toasts.error(format!("请填写规格「{missing}」"));
            return;
        }

        let unit_text = unit.read().trim().to_string();
        let payload = ProductSave {
            id: editing_id(),
            name: name.read().trim().to_string(),
            code: None,
            category_id: category_id(),
            unit: if unit_text.is_empty() { None } else { Some(unit_text) },
            specs: specs(),
            images: images(),
            safety_stock: safety_stock.read().trim().parse().ok(),
            is_active: is_active(),
        };
        let client = save_client.clone();
        busy.set(true);
        spawn(async move {
            let result = if payload.id.is_some() {
                products::update(&client, &payload).await
            } else {
                products::save(&client, &payload).await
            };
            if result.is_ok() {
                toasts.success("保存成功");
                visible.set(false);
                handle.reload(false);
            }
            busy.set(false);
        });
    };

    let title = if editing_id().is_some() { "编辑产品" } else { "新增产品" }.to_string();
    let spec_fields = spec_attributes();

    rsx! {
        Modal {
            title: title,
            visible: visible(),
            width: 560,
            on_close: move |_| visible.set(false),
            div { style: FORM_GRID_STYLE,
                label { style: "align-self: center;", "产品名称" }
                input {
                    style: MODAL_INPUT_STYLE,
                    value: name(),
                    placeholder: "请输入产品名称",
                    oninput: move |event| name.set(event.value()),
                }
                label { style: "align-self: center;", "所属类目" }
                DropdownSelect {
                    id: "product-category",
                    label: "",
                    placeholder: "请选择所属类目",
                    options: category_entries()
                        .iter()
                        .map(|(id, name)| DropdownOption { value: id.clone(), label: name.clone() })
                        .collect::<Vec<_>>(),
                    selected: if category_id.read().is_empty() { None } else { Some(category_id()) },
                    open_dropdown: open_dropdown,
                    dropdown_pos: dropdown_pos,
                    on_select: move |next: String| category_id.set(next),
                }
                label { style: "align-self: center;", "单位" }
                input {
                    style: MODAL_INPUT_STYLE,
                    value: unit(),
                    placeholder: "如：支、件，可不填",
                    oninput: move |event| unit.set(event.value()),
                }
                label { style: "align-self: center;", "安全库存" }
                input {
                    style: MODAL_INPUT_STYLE,
                    r#type: "number",
                    value: safety_stock(),
                    placeholder: "低于该数量触发预警",
                    oninput: move |event| safety_stock.set(event.value()),
                }
                label { style: "align-self: center;", "状态" }
                DropdownSelect {
                    id: "product-status",
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

            if !spec_fields.is_empty() {
                div { style: "font-weight: 600; margin: 4px 0 8px;", "规格参数" }
                div { style: FORM_GRID_STYLE,
                    {spec_fields.iter().map(|attribute| {
                        let code = attribute.code.clone();
                        let label = match attribute.unit.as_deref() {
                            Some(unit) if !unit.is_empty() => format!("{} ({unit})", attribute.name),
                            _ => attribute.name.clone(),
                        };
                        let current = specs
                            .read()
                            .get(&code)
                            .and_then(|value| value.as_str())
                            .unwrap_or_default()
                            .to_string();
                        let placeholder = format!("请输入{}", attribute.name);
                        rsx!(
                            label { style: "align-self: center;", "{label}" }
                            input {
                                style: MODAL_INPUT_STYLE,
                                value: current,
                                placeholder: placeholder,
                                oninput: move |event| {
                                    specs.write().insert(code.clone(), serde_json::Value::String(event.value()));
                                },
                            }
                        )
                    })}
                }
            }

            div { style: "font-weight: 600; margin: 4px 0 8px;", "产品图片" }
            UploadImage { images: images }

            ModalFooter {
                busy: busy(),
                on_cancel: move |_| visible.set(false),
                on_save: handle_save,
            }
        }
    }
}
