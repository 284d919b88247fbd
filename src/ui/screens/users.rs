use dioxus::prelude::*;

use super::{ACTION_BUTTON_STYLE, DANGER_BUTTON_STYLE, TOOLBAR_BUTTON_STYLE};
use crate::app::AppCtx;
use crate::domain::entities::session::id_text;
use crate::domain::entities::user::{ResetPassword, UserSave};
use crate::infra::api::{roles, users};
use crate::ui::table::{
    use_table_handle, ColumnSpec, EnumEntry, JsonRow, PageSource, ProTable, TableHandle,
};
use crate::ui::widgets::confirm::confirm;
use crate::ui::widgets::dropdown::{DropdownMultiSelect, DropdownOption, DropdownSelect};
use crate::ui::widgets::modal::{Modal, ModalFooter, FORM_GRID_STYLE, MODAL_INPUT_STYLE};

/// 员工列表。
#[component]
pub fn UserListScreen() -> Element {
    let ctx = use_context::<AppCtx>();
    let handle = use_table_handle();
    let mut modal_visible = use_signal(|| false);
    let mut editing_id = use_signal(|| None::<String>);
    let mut reset_target = use_signal(|| None::<(String, String)>);
    let mut role_options = use_signal(Vec::<DropdownOption>::new);

    // 角色下拉：过滤脏数据后按名称排序。
    let roles_client = ctx.client.clone();
    use_effect(move || {
        let client = roles_client.clone();
        spawn(async move {
            if let Ok(list) = roles::select_list(&client).await {
                let mut usable = list
                    .iter()
                    .filter(|role| role.usable())
                    .filter_map(|role| {
                        Some(DropdownOption {
                            value: role.id_text()?,
                            label: role.name.clone(),
                        })
                    })
                    .collect::<Vec<_>>();
                usable.sort_by(|a, b| a.label.cmp(&b.label));
                role_options.set(usable);
            }
        });
    });

    let page_client = ctx.client.clone();
    let source = use_hook(move || {
        PageSource::new(move |params| {
            let client = page_client.clone();
            async move { Ok(users::page(&client, params).await?) }
        })
    });

    let action_client = ctx.client.clone();
    let toasts = ctx.toasts;
    let actions = use_callback(move |record: JsonRow| {
        let Some(id) = id_text(record.get("id")) else {
            return rsx! {};
        };
        let username = record
            .get("username")
            .and_then(|value| value.as_str())
            .or_else(|| record.get("nickname").and_then(|value| value.as_str()))
            .unwrap_or_default()
            .to_string();
        let client_for_delete = action_client.clone();
        let id_for_delete = id.clone();
        let id_for_edit = id.clone();
        let id_for_reset = id.clone();

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
                    style: DANGER_BUTTON_STYLE,
                    onclick: move |_| {
                        if !confirm("确定要删除该员工吗？", "") {
                            return;
                        }
                        let client = client_for_delete.clone();
                        let id = id_for_delete.clone();
                        spawn(async move {
                            if users::remove(&client, &id).await.is_ok() {
                                toasts.success("删除成功");
                                handle.reload(false);
                            }
                        });
                    },
                    "删除"
                }
                button {
                    style: ACTION_BUTTON_STYLE,
                    onclick: move |_| {
                        reset_target.set(Some((id_for_reset.clone(), username.clone())));
                    },
                    "重置密码"
                }
            }
        }
    });

    // 兼容布尔和数字两种 isActive 表示。
    let status_text = use_callback(move |record: JsonRow| {
        let active = match record.get("isActive") {
            Some(serde_json::Value::Bool(flag)) => *flag,
            Some(serde_json::Value::Number(number)) => number.as_i64() == Some(1),
            _ => false,
        };
        rsx! {
            span { if active { "启用" } else { "禁用" } }
        }
    });

    let role_names = use_callback(move |record: JsonRow| {
        let joined = record
            .get("roleNames")
            .and_then(|value| value.as_array())
            .map(|names| {
                names
                    .iter()
                    .filter_map(|name| name.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            })
            .unwrap_or_default();
        rsx! {
            span { "{joined}" }
        }
    });

    let columns = vec![
        ColumnSpec::new("username", "用户名"),
        ColumnSpec::new("isActive", "状态")
            .options(vec![
                EnumEntry::new("1", "启用").color("green"),
                EnumEntry::new("0", "禁用").color("grey"),
            ])
            .render(status_text),
        ColumnSpec::new("roleNames", "角色")
            .hide_in_search()
            .render(role_names),
        ColumnSpec::new("option", "操作").hide_in_search().render(actions),
    ];

    rsx! {
        ProTable {
            columns: columns,
            source: source,
            title: "员工管理",
            handle: handle,
            toolbar: rsx! {
                button {
                    style: TOOLBAR_BUTTON_STYLE,
                    onclick: move |_| {
                        editing_id.set(None);
                        modal_visible.set(true);
                    },
                    "新增员工"
                }
            },
        }

        UserEditModal {
            visible: modal_visible,
            editing_id: editing_id,
            role_options: role_options,
            handle: handle,
        }
        ResetPasswordModal { target: reset_target }
    }
}

#[component]
fn UserEditModal(
    mut visible: Signal<bool>,
    editing_id: Signal<Option<String>>,
    role_options: Signal<Vec<DropdownOption>>,
    handle: TableHandle,
) -> Element {
    let ctx = use_context::<AppCtx>();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut nickname = use_signal(String::new);
    let mut role_ids = use_signal(Vec::<String>::new);
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
                    if let Ok(detail) = users::detail(&client, &id).await {
                        username.set(
                            detail
                                .get("username")
                                .and_then(|value| value.as_str())
                                .unwrap_or_default()
                                .to_string(),
                        );
                        nickname.set(
                            detail
                                .get("nickname")
                                .and_then(|value| value.as_str())
                                .unwrap_or_default()
                                .to_string(),
                        );
                        is_active.set(match detail.get("isActive") {
                            Some(serde_json::Value::Bool(true)) => 1,
                            Some(serde_json::Value::Number(number)) => {
                                number.as_i64().unwrap_or(1)
                            }
                            Some(serde_json::Value::Bool(false)) => 0,
                            _ => 1,
                        });
                        role_ids.set(
                            detail
                                .get("roleIds")
                                .and_then(|value| value.as_array())
                                .map(|ids| {
                                    ids.iter()
                                        .filter_map(|id| id_text(Some(id)))
                                        .collect::<Vec<_>>()
                                })
                                .unwrap_or_default(),
                        );
                        password.set(String::new());
                    }
                }
                None => {
                    username.set(String::new());
                    password.set(String::new());
                    nickname.set(String::new());
                    role_ids.set(Vec::new());
                    is_active.set(1);
                }
            }
        });
    });

    let toasts = ctx.toasts;
    let save_client = ctx.client.clone();
    let handle_save = move |_| {
        let editing = editing_id().is_some();
        if username.read().trim().is_empty() {
            toasts.error("请输入用户名");
            return;
        }
        if !editing && password.read().len() < 6 {
            toasts.error("请输入密码，至少6位");
            return;
        }
        if role_ids.read().is_empty() {
            toasts.error("请选择角色");
            return;
        }
        let nickname_text = nickname.read().trim().to_string();
        let payload = UserSave {
            id: editing_id(),
            username: username.read().trim().to_string(),
            password: if editing { None } else { Some(password()) },
            nickname: if nickname_text.is_empty() { None } else { Some(nickname_text) },
            role_ids: role_ids(),
            is_active: is_active(),
        };
        let client = save_client.clone();
        busy.set(true);
        spawn(async move {
            let result = if payload.id.is_some() {
                users::update(&client, &payload).await
            } else {
                users::save(&client, &payload).await
            };
            if result.is_ok() {
                toasts.success("保存成功");
                visible.set(false);
                handle.reload(false);
            }
            busy.set(false);
        });
    };

    let editing = editing_id().is_some();
    let title = if editing { "编辑员工" } else { "新增员工" }.to_string();

    rsx! {
        Modal {
            title: title,
            visible: visible(),
            on_close: move |_| visible.set(false),
            div { style: FORM_GRID_STYLE,
                label { style: "align-self: center;", "用户名" }
                input {
                    style: MODAL_INPUT_STYLE,
                    value: username(),
                    placeholder: "请输入用户名",
                    disabled: editing,
                    oninput: move |event| username.set(event.value()),
                }
                if !editing {
                    label { style: "align-self: center;", "密码" }
                    input {
                        style: MODAL_INPUT_STYLE,
                        r#type: "password",
                        value: password(),
                        placeholder: "请输入密码，至少6位",
                        oninput: move |event| password.set(event.value()),
                    }
                }
                label { style: "align-self: center;", "昵称" }
                input {
                    style: MODAL_INPUT_STYLE,
                    value: nickname(),
                    placeholder: "请输入昵称",
                    oninput: move |event| nickname.set(event.value()),
                }
                label { style: "align-self: center;", "角色" }
                DropdownMultiSelect {
                    id: "user-roles",
                    label: "",
                    placeholder: "请选择角色",
                    options: role_options(),
                    selected: role_ids(),
                    open_dropdown: open_dropdown,
                    dropdown_pos: dropdown_pos,
                    on_toggle: move |value: String| {
                        let mut ids = role_ids.write();
                        if let Some(idx) = ids.iter().position(|held| held == &value) {
                            ids.remove(idx);
                        } else {
                            ids.push(value);
                        }
                    },
                }
                label { style: "align-self: center;", "状态" }
                DropdownSelect {
                    id: "user-status",
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

/// 管理员重置密码。
#[component]
fn ResetPasswordModal(mut target: Signal<Option<(String, String)>>) -> Element {
    let ctx = use_context::<AppCtx>();
    let mut new_password = use_signal(String::new);
    let mut busy = use_signal(|| false);

    let toasts = ctx.toasts;
    let client = ctx.client.clone();
    let handle_save = move |_| {
        let Some((user_id, _)) = target() else {
            return;
        };
        if new_password.read().len() < 6 {
            toasts.error("新密码至少6位");
            return;
        }
        let payload = ResetPassword {
            user_id,
            new_password: new_password(),
        };
        let client = client.clone();
        busy.set(true);
        spawn(async move {
            if users::reset_password(&client, &payload).await.is_ok() {
                toasts.success("密码已重置");
                target.set(None);
                new_password.set(String::new());
            }
            busy.set(false);
        });
    };

    let username = target().map(|(_, name)| name).unwrap_or_default();
    let title = format!("重置密码 - {username}");

    rsx! {
        Modal {
            title: title,
            visible: target().is_some(),
            on_close: move |_| target.set(None),
            div { style: FORM_GRID_STYLE,
                label { style: "align-self: center;", "新密码" }
                input {
                    style: MODAL_INPUT_STYLE,
                    r#type: "password",
                    value: new_password(),
                    placeholder: "请输入新密码，至少6位",
                    oninput: move |event| new_password.set(event.value()),
                }
            }
            ModalFooter {
                busy: busy(),
                on_cancel: move |_| target.set(None),
                on_save: handle_save,
            }
        }
    }
}
