use dioxus::prelude::*;

use crate::app::AppCtx;
use crate::domain::entities::menu::Route;
use crate::domain::entities::session::LoginParams;
use crate::infra::api::{auth, users};

const FIELD_STYLE: &str =
    "border: 1px solid #bbb; border-radius: 8px; padding: 10px 12px; width: 100%; box-sizing: border-box; font-size: 14px;";

/// 登录页。
#[component]
pub fn LoginScreen() -> Element {
    let ctx = use_context::<AppCtx>();
    let mut code = use_signal(String::new);
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut remember = use_signal(|| true);
    let mut loading = use_signal(|| false);

    let toasts = ctx.toasts;
    let client = ctx.client.clone();
    let mut session = ctx.session;
    let mut route = ctx.route;
    let handle_submit = use_callback(move |_: ()| {
        if username.read().trim().is_empty() {
            toasts.error("请输入账号");
            return;
        }
        if password.read().is_empty() {
            toasts.error("请输入密码");
            return;
        }
        let code_text = code.read().trim().to_string();
        let params = LoginParams {
            code: if code_text.is_empty() { None } else { Some(code_text) },
            username: username.read().trim().to_string(),
            password: password(),
            remember: remember(),
        };
        let client = client.clone();
        loading.set(true);
        spawn(async move {
            match auth::login(&client, &params).await {
                Ok(reply) => {
                    if let Err(err) = crate::infra::session::save_token(&reply.access_token) {
                        log::warn!("failed to persist token: {err:#}");
                    }
                    session.write().token = Some(reply.access_token);

                    match users::get_user_info(&client).await {
                        Ok(user) => {
                            session.write().user = Some(user);
                        }
                        Err(err) => {
                            log::warn!("获取用户信息失败: {err}");
                        }
                    }

                    toasts.success("登录成功，欢迎回来");
                    route.set(Route::Dashboard);
                }
                Err(err) => {
                    // 错误提示已由 HTTP 层统一弹出。
                    log::debug!("login rejected: {err}");
                }
            }
            loading.set(false);
        });
    });

    rsx! {
        div {
            style: "min-height: 100vh; display: flex; align-items: center; justify-content: center; background: #eef1f6;",
            div {
                style: "width: 400px; background: #fff; border-radius: 16px; padding: 40px 32px; box-shadow: 0 16px 40px rgba(0,0,0,0.1);",
                div { style: "text-align: center; margin-bottom: 32px;",
                    div { style: "width: 48px; height: 48px; border-radius: 12px; background: #4c6ef5; color: #fff; display: flex; align-items: center; justify-content: center; font-size: 22px; font-weight: 700; margin: 0 auto 14px;", "W" }
                    div { style: "font-size: 20px; font-weight: 700; margin-bottom: 6px;", "WMS 智能仓储系统" }
                    div { style: "color: #999; font-size: 13px;", "高效 · 精准 · 智能" }
                }

                div { style: "display: flex; flex-direction: column; gap: 14px;",
                    input {
                        style: FIELD_STYLE,
                        value: code(),
                        placeholder: "请输入企业编码",
                        oninput: move |event| code.set(event.value()),
                    }
                    input {
                        style: FIELD_STYLE,
                        value: username(),
                        placeholder: "请输入工号/用户名",
                        oninput: move |event| username.set(event.value()),
                    }
                    input {
                        style: FIELD_STYLE,
                        r#type: "password",
                        value: password(),
                        placeholder: "请输入密码",
                        oninput: move |event| password.set(event.value()),
                        onkeydown: move |event: KeyboardEvent| {
                            if event.key() == Key::Enter {
                                handle_submit.call(());
                            }
                        },
                    }
                    label { style: "display: flex; align-items: center; gap: 6px; font-size: 13px; color: #666;",
                        input {
                            r#type: "checkbox",
                            checked: remember(),
                            onclick: move |_| {
                                let next = !remember();
                                remember.set(next);
                            }
                        }
                        "记住我"
                    }
                    button {
                        style: "height: 46px; border: none; border-radius: 8px; background: #4c6ef5; color: #fff; font-weight: 600; font-size: 15px; cursor: pointer;",
                        disabled: loading(),
                        onclick: move |_| handle_submit.call(()),
                        if loading() { "登录中…" } else { "立即登录" }
                    }
                }

                div { style: "margin-top: 28px; padding-top: 20px; border-top: 1px solid #f0f0f0; text-align: center; font-size: 13px;",
                    span { style: "color: #999;", "还没有租户账号？" }
                    button {
                        style: "border: none; background: transparent; color: #4c6ef5; cursor: pointer; font-size: 13px;",
                        onclick: move |_| route.set(Route::Register),
                        "立即申请开通 →"
                    }
                }
            }
        }
    }
}
