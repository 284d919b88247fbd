use dioxus::prelude::*;

use crate::app::AppCtx;
use crate::domain::entities::menu::Route;
use crate::domain::entities::session::RegisterParams;
use crate::infra::api::auth;
use crate::ui::widgets::dropdown::{DropdownOption, DropdownSelect};

const FIELD_STYLE: &str =
    "border: 1px solid #bbb; border-radius: 8px; padding: 9px 12px; width: 100%; box-sizing: border-box;";
const SECTION_STYLE: &str =
    "display: flex; align-items: center; gap: 8px; margin: 20px 0 12px; color: #2a5ad9; font-weight: 700;";

/// 新工厂/租户入驻申请。
#[component]
pub fn RegisterScreen() -> Element {
    let ctx = use_context::<AppCtx>();
    let mut code = use_signal(String::new);
    let mut name = use_signal(String::new);
    let mut industry = use_signal(|| "heating_element".to_string());
    let mut contact_person = use_signal(String::new);
    let mut contact_phone = use_signal(String::new);
    let mut admin_user = use_signal(String::new);
    let mut admin_pass = use_signal(String::new);
    let mut confirm_pass = use_signal(String::new);
    let mut loading = use_signal(|| false);
    let mut submitted = use_signal(|| false);
    let open_dropdown = use_signal(|| None::<String>);
    let dropdown_pos = use_signal(|| None::<(f64, f64)>);

    let toasts = ctx.toasts;
    let client = ctx.client.clone();
    let mut route = ctx.route;
    let handle_submit = move |_| {
        let code_text = code.read().trim().to_string();
        if code_text.len() < 3 || !code_text.chars().all(|ch| ch.is_ascii_alphanumeric()) {
            toasts.error("企业编码至少3位，只能包含字母和数字");
            return;
        }
        if name.read().trim().is_empty() {
            toasts.error("企业名称不能为空");
            return;
        }
        if admin_user.read().trim().len() < 4 {
            toasts.error("管理员账号至少4位");
            return;
        }
        if admin_pass.read().len() < 6 {
            toasts.error("初始密码至少6位");
            return;
        }
        if *admin_pass.read() != *confirm_pass.read() {
            toasts.error("两次输入的管理员密码不一致");
            return;
        }
        let contact_person_text = contact_person.read().trim().to_string();
        let contact_phone_text = contact_phone.read().trim().to_string();
        let params = RegisterParams {
            code: code_text,
            name: name.read().trim().to_string(),
            industry: Some(industry()),
            contact_person: if contact_person_text.is_empty() { None } else { Some(contact_person_text) },
            contact_phone: if contact_phone_text.is_empty() { None } else { Some(contact_phone_text) },
            admin_user: admin_user.read().trim().to_string(),
            admin_pass: admin_pass(),
        };
        let client = client.clone();
        loading.set(true);
        spawn(async move {
            if auth::register(&client, &params).await.is_ok() {
                toasts.success("企业入驻成功，请登录管理员账号");
                submitted.set(true);
            }
            loading.set(false);
        });
    };

    if submitted() {
        return rsx! {
            div {
                style: "min-height: 100vh; display: flex; align-items: center; justify-content: center; background: #eef1f6;",
                div {
                    style: "width: 420px; background: #fff; border-radius: 16px; padding: 48px 32px; box-shadow: 0 16px 40px rgba(0,0,0,0.1); text-align: center;",
                    div { style: "font-size: 40px; margin-bottom: 16px;", "✓" }
                    div { style: "font-size: 18px; font-weight: 700; margin-bottom: 8px;", "入驻申请已提交" }
                    div { style: "color: #999; margin-bottom: 24px;", "请使用初始管理员账号登录系统" }
                    button {
                        style: "height: 44px; width: 100%; border: none; border-radius: 8px; background: #4c6ef5; color: #fff; font-weight: 600; cursor: pointer;",
                        onclick: move |_| route.set(Route::Login),
                        "前往登录"
                    }
                }
            }
        };
    }

    rsx! {
        div {
            style: "min-height: 100vh; display: flex; align-items: center; justify-content: center; background: #eef1f6; padding: 24px;",
            div {
                style: "width: 640px; background: #fff; border-radius: 16px; padding: 32px; box-shadow: 0 16px 40px rgba(0,0,0,0.1);",
                button {
                    style: "border: none; background: transparent; color: #666; cursor: pointer; margin-bottom: 12px;",
                    onclick: move |_| route.set(Route::Login),
                    "← 返回登录"
                }
                div { style: "font-size: 20px; font-weight: 700;", "新工厂/租户入驻" }
                div { style: "color: #999; font-size: 13px; margin-top: 4px;",
                    "请完善企业及管理员信息以开通 WMS 智能仓储服务"
                }

                div { style: SECTION_STYLE, "企业身份信息" }
                div { style: "display: grid; grid-template-columns: 1fr 1fr; gap: 12px;",
                    input {
                        style: FIELD_STYLE,
                        value: code(),
                        placeholder: "企业唯一编码，如：XH001 (用于登录)",
                        oninput: move |event| code.set(event.value()),
                    }
                    input {
                        style: FIELD_STYLE,
                        value: name(),
                        placeholder: "企业全称（工商登记全称）",
                        oninput: move |event| name.set(event.value()),
                    }
                    DropdownSelect {
                        id: "register-industry",
                        label: "所属行业",
                        placeholder: "请选择所属行业",
                        options: vec![
                            DropdownOption { value: "heating_element".to_string(), label: "电热元件制造".to_string() },
                            DropdownOption { value: "cnc_machining".to_string(), label: "数控加工".to_string() },
                            DropdownOption { value: "other".to_string(), label: "其他制造业".to_string() },
                        ],
                        selected: Some(industry()),
                        open_dropdown: open_dropdown,
                        dropdown_pos: dropdown_pos,
                        on_select: move |value: String| industry.set(value),
                    }
                }

                div { style: SECTION_STYLE, "商务联系信息" }
                div { style: "display: grid; grid-template-columns: 1fr 1fr; gap: 12px;",
                    input {
                        style: FIELD_STYLE,
                        value: contact_person(),
                        placeholder: "工厂联系人，如：张经理",
                        oninput: move |event| contact_person.set(event.value()),
                    }
                    input {
                        style: FIELD_STYLE,
                        value: contact_phone(),
                        placeholder: "联系电话（手机或座机）",
                        oninput: move |event| contact_phone.set(event.value()),
                    }
                }

                div { style: SECTION_STYLE, "初始管理员设置" }
                div { style: "display: grid; grid-template-columns: 1fr 1fr 1fr; gap: 12px;",
                    input {
                        style: FIELD_STYLE,
                        value: admin_user(),
                        placeholder: "管理员账号，不少于4位",
                        oninput: move |event| admin_user.set(event.value()),
                    }
                    input {
                        style: FIELD_STYLE,
                        r#type: "password",
                        value: admin_pass(),
                        placeholder: "初始密码，不少于6位",
                        oninput: move |event| admin_pass.set(event.value()),
                    }
                    input {
                        style: FIELD_STYLE,
                        r#type: "password",
                        value: confirm_pass(),
                        placeholder: "请再次输入密码",
                        oninput: move |event| confirm_pass.set(event.value()),
                    }
                }

                button {
                    style: "height: 48px; width: 100%; margin-top: 28px; border: none; border-radius: 8px; background: linear-gradient(to right, #2563eb, #4f46e5); color: #fff; font-weight: 600; font-size: 15px; cursor: pointer;",
                    disabled: loading(),
                    onclick: handle_submit,
                    if loading() { "提交中…" } else { "提交入驻申请" }
                }
                div { style: "margin-top: 14px; text-align: center; color: #bbb; font-size: 12px;",
                    "点击提交即代表您同意本系统的服务协议与隐私条款"
                }
            }
        }
    }
}
