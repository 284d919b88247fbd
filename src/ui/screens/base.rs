use dioxus::prelude::*;

use super::TOOLBAR_BUTTON_STYLE;
use crate::app::AppCtx;
use crate::domain::entities::tenant::TenantDetail;
use crate::infra::api::{dicts, tenants};
use crate::ui::widgets::dropdown::{DropdownOption, DropdownSelect};
use crate::ui::widgets::modal::{Modal, ModalFooter, FORM_GRID_STYLE, MODAL_INPUT_STYLE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EditSection {
    Base,
    Business,
}

/// 租户基本信息：工厂档案查看与分区编辑。
#[component]
pub fn BaseScreen() -> Element {
    let ctx = use_context::<AppCtx>();
    let mut detail = use_signal(|| None::<TenantDetail>);
    let mut loading = use_signal(|| true);
    let mut edit_section = use_signal(|| None::<EditSection>);

    let tenant_id = (ctx.session)()
        .user
        .as_ref()
        .and_then(|user| user.tenant_id_text());

    let load_client = ctx.client.clone();
    let tenant_id_for_load = tenant_id.clone();
    use_effect(move || {
        let Some(id) = tenant_id_for_load.clone() else {
            loading.set(false);
            return;
        };
        let client = load_client.clone();
        spawn(async move {
            loading.set(true);
            if let Ok(data) = tenants::detail(&client, &id).await {
                detail.set(Some(data));
            }
            loading.set(false);
        });
    });

    let snapshot = detail();
    let field = |value: Option<&String>| -> String {
        match value {
            Some(text) if !text.is_empty() => text.clone(),
            _ => "-".to_string(),
        }
    };

    let content = if loading() {
        rsx! {
            div { style: "background: #fff; border-radius: 8px; padding: 48px; text-align: center; color: #999;", "加载中…" }
        }
    } else if let Some(data) = snapshot.clone() {
        rsx! {
                div { style: "background: #fff; border-radius: 8px; padding: 20px;",
                    div { style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 16px;",
                        div { style: "display: flex; align-items: center; gap: 10px;",
                            span { style: "font-weight: 700; font-size: 16px;", "{data.name}" }
                            span { style: "display: inline-block; padding: 2px 8px; border-radius: 4px; font-size: 12px; background: #e6f7e6; color: #2d7a36;", "运营中" }
                        }
                        button {
                            style: TOOLBAR_BUTTON_STYLE,
                            onclick: move |_| edit_section.set(Some(EditSection::Base)),
                            "编辑基础信息"
                        }
                    }
                    div { style: "display: grid; grid-template-columns: 140px 1fr 140px 1fr; gap: 10px; color: #555;",
                        span { style: "color: #999;", "企业编码" }
                        span { "{data.code}" }
                        span { style: "color: #999;", "所属行业" }
                        span { "{field(data.industry.as_ref())}" }
                        span { style: "color: #999;", "工厂联系人" }
                        span { "{field(data.contact_person.as_ref())}" }
                        span { style: "color: #999;", "联系电话" }
                        span { "{field(data.contact_phone.as_ref())}" }
                    }
                }

                div { style: "background: #fff; border-radius: 8px; padding: 20px;",
                    div { style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 16px;",
                        span { style: "font-weight: 700;", "工商与结算信息" }
                        button {
                            style: TOOLBAR_BUTTON_STYLE,
                            onclick: move |_| edit_section.set(Some(EditSection::Business)),
                            "编辑结算信息"
                        }
                    }
                    div { style: "display: grid; grid-template-columns: 140px 1fr 140px 1fr; gap: 10px; color: #555;",
                        span { style: "color: #999;", "税号" }
                        span { "{field(data.tax_no.as_ref())}" }
                        span { style: "color: #999;", "开户银行" }
                        span { "{field(data.bank_name.as_ref())}" }
                        span { style: "color: #999;", "银行账号" }
                        span { "{field(data.bank_account.as_ref())}" }
                    }
                }
        }
    } else {
        rsx! {
            div { style: "background: #fff; border-radius: 8px; padding: 48px; text-align: center; color: #999;",
                "未能加载租户信息"
            }
        }
    };

    rsx! {
        div { style: "display: flex; flex-direction: column; gap: 16px;",
            {content}
        }

        TenantEditModal {
            section: edit_section,
            detail: detail,
        }
    }
}

#[component]
fn TenantEditModal(
    mut section: Signal<Option<EditSection>>,
    mut detail: Signal<Option<TenantDetail>>,
) -> Element {
    let ctx = use_context::<AppCtx>();
    let mut name = use_signal(String::new);
    let mut contact_person = use_signal(String::new);
    let mut contact_phone = use_signal(String::new);
    let mut industry = use_signal(String::new);
    let mut tax_no = use_signal(String::new);
    let mut bank_name = use_signal(String::new);
    let mut bank_account = use_signal(String::new);
    let mut industry_options = use_signal(Vec::<DropdownOption>::new);
    let mut busy = use_signal(|| false);
    let open_dropdown = use_signal(|| None::<String>);
    let dropdown_pos = use_signal(|| None::<(f64, f64)>);

    // 回显 + 行业字典。
    let dict_client = ctx.client.clone();
    use_effect(move || {
        let Some(active) = section() else {
            return;
        };
        let snapshot = detail.peek().clone();
        let Some(data) = snapshot else {
            return;
        };
        match active {
            EditSection::Base => {
                name.set(data.name.clone());
                contact_person.set(data.contact_person.clone().unwrap_or_default());
                contact_phone.set(data.contact_phone.clone().unwrap_or_default());
                industry.set(data.industry.clone().unwrap_or_default());
            }
            EditSection::Business => {
                tax_no.set(data.tax_no.clone().unwrap_or_default());
                bank_name.set(data.bank_name.clone().unwrap_or_default());
                bank_account.set(data.bank_account.clone().unwrap_or_default());
            }
        }
        let client = dict_client.clone();
        spawn(async move {
            if let Ok(entries) = dicts::options(&client, "industry").await {
                let options = entries
                    .iter()
                    .filter_map(|entry| {
                        let label = entry.get("label").and_then(|label| label.as_str())?;
                        let value = entry.get("value").and_then(|value| value.as_str())?;
                        Some(DropdownOption {
                            value: value.to_string(),
                            label: label.to_string(),
                        })
                    })
                    .collect::<Vec<_>>();
                if !options.is_empty() {
                    industry_options.set(options);
                }
            }
        });
    });

    let toasts = ctx.toasts;
    let save_client = ctx.client.clone();
    let handle_save = move |_| {
        let Some(active) = section() else {
            return;
        };
        let Some(current) = detail.peek().clone() else {
            return;
        };
        let Some(id) = current.id.clone() else {
            return;
        };
        let mut next = current;
        match active {
            EditSection::Base => {
                if name.read().trim().is_empty() {
                    toasts.error("企业名称不能为空");
                    return;
                }
                next.name = name.read().trim().to_string();
                next.contact_person = non_empty(&contact_person.read());
                next.contact_phone = non_empty(&contact_phone.read());
                next.industry = non_empty(&industry.read());
            }
            EditSection::Business => {
                next.tax_no = non_empty(&tax_no.read());
                next.bank_name = non_empty(&bank_name.read());
                next.bank_account = non_empty(&bank_account.read());
            }
        }
        let client = save_client.clone();
        busy.set(true);
        spawn(async move {
            match tenants::update(&client, &id, &next).await {
                Ok(updated) => {
                    toasts.success("保存成功");
                    detail.set(Some(updated));
                    section.set(None);
                }
                Err(err) => {
                    log::debug!("tenant update rejected: {err}");
                }
            }
            busy.set(false);
        });
    };

    let active = section();
    let title = match active {
        Some(EditSection::Base) => "编辑基础信息",
        Some(EditSection::Business) => "编辑结算信息",
        None => "",
    }
    .to_string();

    rsx! {
        Modal {
            title: title,
            visible: active.is_some(),
            on_close: move |_| section.set(None),
            if active == Some(EditSection::Base) {
                div { style: FORM_GRID_STYLE,
                    label { style: "align-self: center;", "企业全称" }
                    input {
                        style: MODAL_INPUT_STYLE,
                        value: name(),
                        placeholder: "请输入企业全称",
                        oninput: move |event| name.set(event.value()),
                    }
                    label { style: "align-self: center;", "所属行业" }
                    if industry_options.read().is_empty() {
                        input {
                            style: MODAL_INPUT_STYLE,
                            value: industry(),
                            placeholder: "请输入行业标识",
                            oninput: move |event| industry.set(event.value()),
                        }
                    } else {
                        DropdownSelect {
                            id: "tenant-industry",
                            label: "",
                            placeholder: "请选择所属行业",
                            options: industry_options(),
                            selected: if industry.read().is_empty() { None } else { Some(industry()) },
                            open_dropdown: open_dropdown,
                            dropdown_pos: dropdown_pos,
                            on_select: move |value: String| industry.set(value),
                        }
                    }
                    label { style: "align-self: center;", "工厂联系人" }
                    input {
                        style: MODAL_INPUT_STYLE,
                        value: contact_person(),
                        placeholder: "如：张经理",
                        oninput: move |event| contact_person.set(event.value()),
                    }
                    label { style: "align-self: center;", "联系电话" }
                    input {
                        style: MODAL_INPUT_STYLE,
                        value: contact_phone(),
                        placeholder: "请输入手机或座机",
                        oninput: move |event| contact_phone.set(event.value()),
                    }
                }
            }
            if active == Some(EditSection::Business) {
                div { style: FORM_GRID_STYLE,
                    label { style: "align-self: center;", "税号" }
                    input {
                        style: MODAL_INPUT_STYLE,
                        value: tax_no(),
                        placeholder: "请输入税号",
                        oninput: move |event| tax_no.set(event.value()),
                    }
                    label { style: "align-self: center;", "开户银行" }
                    input {
                        style: MODAL_INPUT_STYLE,
                        value: bank_name(),
                        placeholder: "请输入开户银行",
                        oninput: move |event| bank_name.set(event.value()),
                    }
                    label { style: "align-self: center;", "银行账号" }
                    input {
                        style: MODAL_INPUT_STYLE,
                        value: bank_account(),
                        placeholder: "请输入银行账号",
                        oninput: move |event| bank_account.set(event.value()),
                    }
                }
            }
            ModalFooter {
                busy: busy(),
                on_cancel: move |_| section.set(None),
                on_save: handle_save,
            }
        }
    }
}

fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
