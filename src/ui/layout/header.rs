use dioxus::prelude::*;

use crate::app::AppCtx;
use crate::domain::entities::menu::{breadcrumb_trail, menu_config, Route};
use crate::domain::entities::session::Session;
use crate::domain::entities::user::ChangePassword;
use crate::infra::api::{auth, users};
use crate::ui::widgets::modal::{Modal, ModalFooter, FORM_GRID_STYLE, MODAL_INPUT_STYLE};

/// 顶栏：面包屑 + 当前用户操作区。
#[component]
pub fn AppHeader() -> Element {
    let ctx = use_context::<AppCtx>();
    let mut session = ctx.session;
    let mut route = ctx.route;
    let current = (ctx.route)();
    let snapshot = session();

    let trail = breadcrumb_trail(&menu_config(), current.path());
    let display_name = snapshot
        .user
        .as_ref()
        .map(|user| user.display_name().to_string())
        .unwrap_or_else(|| "未登录".to_string());
    let tenant_name = snapshot
        .user
        .as_ref()
        .and_then(|user| user.tenant_name.clone())
        .unwrap_or_default();
    let initial = display_name.chars().next().map(String::from).unwrap_or_default();

    let mut show_password_modal = use_signal(|| false);

    let logout_client = ctx.client.clone();
    let handle_logout = move |_| {
        let client = logout_client.clone();
        if let Err(err) = crate::infra::session::clear_token() {
            log::warn!("failed to clear saved token: {err:#}");
        }
        spawn(async move {
            // Best-effort server-side logout; the local session is gone
            // either way.
            let _ = auth::logout(&client).await;
        });
        session.set(Session::default());
        route.set(Route::Login);
    };

    rsx! {
        header {
            style: "display: flex; justify-content: space-between; align-items: center; padding: 0 24px; height: 56px; background: #fff; border-bottom: 1px solid #e8e8e8;",
            div { style: "display: flex; gap: 6px; color: #666;",
                {trail.iter().enumerate().map(|(idx, crumb)| {
                    let crumb = crumb.clone();
                    rsx!(
                        if idx > 0 {
                            span { style: "color: #bbb;", "/" }
                        }
                        span { "{crumb}" }
                    )
                })}
            }
            div { style: "display: flex; align-items: center; gap: 12px;",
                if !tenant_name.is_empty() {
                    span { style: "color: #999; font-size: 13px;", "{tenant_name}" }
                }
                div { style: "width: 30px; height: 30px; border-radius: 50%; background: #4c6ef5; color: #fff; display: flex; align-items: center; justify-content: center;", "{initial}" }
                span { "{display_name}" }
                button {
                    style: "border: 1px solid #bbb; background: #fff; padding: 4px 10px; border-radius: 6px; cursor: pointer;",
                    onclick: move |_| show_password_modal.set(true),
                    "修改密码"
                }
                button {
                    style: "border: 1px solid #bbb; background: #fff; padding: 4px 10px; border-radius: 6px; cursor: pointer;",
                    onclick: handle_logout,
                    "退出登录"
                }
            }
        }

        ChangePasswordModal { visible: show_password_modal }
    }
}

#[component]
fn ChangePasswordModal(mut visible: Signal<bool>) -> Element {
    let ctx = use_context::<AppCtx>();
    let mut old_password = use_signal(String::new);
    let mut new_password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut busy = use_signal(|| false);

    let close = use_callback(move |_: ()| {
        visible.set(false);
        old_password.set(String::new());
        new_password.set(String::new());
        confirm_password.set(String::new());
    });

    let toasts = ctx.toasts;
    let client = ctx.client.clone();
    let handle_save = move |_| {
        if new_password.read().len() < 6 {
            toasts.error("新密码至少6位");
            return;
        }
        if *new_password.read() != *confirm_password.read() {
            toasts.error("两次输入的新密码不一致");
            return;
        }
        let client = client.clone();
        let payload = ChangePassword {
            old_password: old_password(),
            new_password: new_password(),
        };
        busy.set(true);
        spawn(async move {
            if users::change_password(&client, &payload).await.is_ok() {
                toasts.success("密码修改成功");
                close.call(());
            }
            busy.set(false);
        });
    };

    rsx! {
        Modal {
            title: "修改密码",
            visible: visible(),
            on_close: move |_| close.call(()),
            div { style: FORM_GRID_STYLE,
                label { style: "align-self: center;", "原密码" }
                input {
                    style: MODAL_INPUT_STYLE,
                    r#type: "password",
                    value: old_password(),
                    placeholder: "请输入原密码",
                    oninput: move |event| old_password.set(event.value()),
                }
                label { style: "align-self: center;", "新密码" }
                input {
                    style: MODAL_INPUT_STYLE,
                    r#type: "password",
                    value: new_password(),
                    placeholder: "请输入新密码，至少6位",
                    oninput: move |event| new_password.set(event.value()),
                }
                label { style: "align-self: center;", "确认密码" }
                input {
                    style: MODAL_INPUT_STYLE,
                    r#type: "password",
                    value: confirm_password(),
                    placeholder: "请再次输入新密码",
                    oninput: move |event| confirm_password.set(event.value()),
                }
            }
            ModalFooter {
                busy: busy(),
                on_cancel: move |_| close.call(()),
                on_save: handle_save,
            }
        }
    }
}
