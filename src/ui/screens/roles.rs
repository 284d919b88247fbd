use dioxus::prelude::*;

use super::{format_timestamp, ACTION_BUTTON_STYLE, DANGER_BUTTON_STYLE, TOOLBAR_BUTTON_STYLE};
use crate::app::AppCtx;
use crate::domain::entities::menu::{all_permission_codes, menu_config};
use crate::domain::entities::role::RoleSave;
use crate::domain::entities::session::id_text;
use crate::infra::api::roles;
use crate::ui::table::{
    use_table_handle, ColumnSpec, EnumEntry, JsonRow, PageSource, ProTable, TableHandle,
};
use crate::ui::widgets::confirm::confirm;
use crate::ui::widgets::dropdown::{DropdownOption, DropdownSelect};
use crate::ui::widgets::modal::{Modal, ModalFooter, FORM_GRID_STYLE, MODAL_INPUT_STYLE};

/// 角色列表：权限码集合的命名与分配。
#[component]
pub fn RoleListScreen() -> Element {
    let ctx = use_context::<AppCtx>();
    let handle = use_table_handle();
    let mut modal_visible = use_signal(|| false);
    let mut editing_id = use_signal(|| None::<String>);

    let page_client = ctx.client.clone();
    let source = use_hook(move || {
        PageSource::new(move |params| {
            let client = page_client.clone();
            async move { Ok(roles::page(&client, params).await?) }
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
                            &format!("确定要{action}角色「{name}」吗？"),
                            "禁用后，绑定该角色的员工将失去对应权限。",
                        ) {
                            return;
                        }
                        let client = client_for_status.clone();
                        let id = id_for_status.clone();
                        spawn(async move {
                            if roles::set_status(&client, &id, if is_active { 0 } else { 1 })
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
                        if !confirm("确定删除该角色吗？", "删除前请确认没有员工绑定该角色。") {
                            return;
                        }
                        let client = client_for_delete.clone();
                        let id = id_for_delete.clone();
                        spawn(async move {
                            if roles::remove(&client, &id).await.is_ok() {
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
        ColumnSpec::new("name", "角色名称"),
        ColumnSpec::new("isActive", "状态").options(vec![
            EnumEntry::new("1", "启用").color("green"),
            EnumEntry::new("0", "禁用").color("grey"),
        ]),
        ColumnSpec::new("remark", "备注").hide_in_search(),
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
            title: "角色管理",
            handle: handle,
            toolbar: rsx! {
                button {
                    style: TOOLBAR_BUTTON_STYLE,
                    onclick: move |_| {
                        editing_id.set(None);
                        modal_visible.set(true);
                    },
                    "创建角色"
                }
            },
        }

        RoleEditModal {
            visible: modal_visible,
            editing_id: editing_id,
            handle: handle,
        }
    }
}

#[component]
fn RoleEditModal(
    mut visible: Signal<bool>,
    editing_id: Signal<Option<String>>,
    handle: TableHandle,
) -> Element {
    let ctx = use_context::<AppCtx>();
    let mut name = use_signal(String::new);
    let mut remark = use_signal(String::new);
    let mut is_active = use_signal(|| 1_i64);
    let mut permission_codes = use_signal(Vec::<String>::new);
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
                    if let Ok(detail) = roles::detail(&client, &id).await {
                        name.set(
                            detail
                                .get("name")
                                .and_then(|value| value.as_str())
                                .unwrap_or_default()
                                .to_string(),
                        );
                        remark.set(
                            detail
                                .get("remark")
                                .and_then(|value| value.as_str())
                                .unwrap_or_default()
                                .to_string(),
                        );
                        is_active.set(
                            detail
                                .get("isActive")
                                .and_then(|value| value.as_i64())
                                .unwrap_or(1),
                        );
                        permission_codes.set(
                            detail
                                .get("permissionCodes")
                                .and_then(|value| value.as_array())
                                .map(|codes| {
                                    codes
                                        .iter()
                                        .filter_map(|code| code.as_str().map(String::from))
                                        .collect::<Vec<_>>()
                                })
                                .unwrap_or_default(),
                        );
                    }
                }
                None => {
                    name.set(String::new());
                    remark.set(String::new());
                    is_active.set(1);
                    permission_codes.set(Vec::new());
                }
            }
        });
    });

    let toasts = ctx.toasts;
    let save_client = ctx.client.clone();
    let handle_save = move |_| {
        if name.read().trim().is_empty() {
            toasts.error("请输入角色名称");
            return;
        }
        let remark_text = remark.read().trim().to_string();
        let payload = RoleSave {
            name: name.read().trim().to_string(),
            is_active: is_active(),
            remark: if remark_text.is_empty() { None } else { Some(remark_text) },
            permission_codes: permission_codes(),
        };
        let id = editing_id();
        let client = save_client.clone();
        busy.set(true);
        spawn(async move {
            let result = match &id {
                Some(id) => roles::update(&client, id, &payload).await,
                None => roles::create(&client, &payload).await,
            };
            if result.is_ok() {
                toasts.success("保存成功");
                visible.set(false);
                handle.reload(false);
            }
            busy.set(false);
        });
    };

    let title = if editing_id().is_some() { "编辑角色" } else { "创建角色" }.to_string();
    let codes = all_permission_codes(&menu_config());
    let held = permission_codes();

    rsx! {
        Modal {
            title: title,
            visible: visible(),
            width: 520,
            on_close: move |_| visible.set(false),
            div { style: FORM_GRID_STYLE,
                label { style: "align-self: center;", "角色名称" }
                input {
                    style: MODAL_INPUT_STYLE,
                    value: name(),
                    placeholder: "请输入角色名称",
                    oninput: move |event| name.set(event.value()),
                }
                label { style: "align-self: center;", "状态" }
                DropdownSelect {
                    id: "role-status",
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
                label { style: "align-self: center;", "备注" }
                input {
                    style: MODAL_INPUT_STYLE,
                    value: remark(),
                    placeholder: "可不填",
                    oninput: move |event| remark.set(event.value()),
                }
            }

            div { style: "font-weight: 600; margin: 4px 0 8px;", "菜单权限" }
            div {
                style: "border: 1px solid #e0e0e0; border-radius: 6px; padding: 8px; max-height: 280px; overflow-y: auto; display: flex; flex-direction: column;",
                {codes.iter().map(|(code, label)| {
                    let code = code.to_string();
                    let label = label.clone();
                    let checked = held.iter().any(|held| held == &code);
                    rsx!(
                        label {
                            style: "display: flex; align-items: center; gap: 8px; padding: 4px 2px; cursor: pointer;",
                            input {
                                r#type: "checkbox",
                                checked: checked,
                                onclick: move |_| {
                                    let mut codes = permission_codes.write();
                                    if let Some(idx) = codes.iter().position(|held| held == &code) {
                                        codes.remove(idx);
                                    } else {
                                        codes.push(code.clone());
                                    }
                                }
                            }
                            span { "{label}" }
                        }
                    )
                })}
            }

            ModalFooter {
                busy: busy(),
                on_cancel: move |_| visible.set(false),
                on_save: handle_save,
            }
        }
    }
}
