use dioxus::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct DropdownOption {
    pub value: String,
    pub label: String,
}

fn dropdown_label(options: &[DropdownOption], selected: Option<&str>, placeholder: &str) -> String {
    selected
        .and_then(|value| options.iter().find(|opt| opt.value == value))
        .map(|opt| opt.label.clone())
        .unwrap_or_else(|| placeholder.to_string())
}

/// Inline select backed by a fixed-position panel. The owner supplies the
/// shared open/position signals so at most one dropdown is open at a time
/// and an outside click can close it.
#[component]
pub fn DropdownSelect(
    id: String,
    label: String,
    placeholder: String,
    options: Vec<DropdownOption>,
    selected: Option<String>,
    mut open_dropdown: Signal<Option<String>>,
    mut dropdown_pos: Signal<Option<(f64, f64)>>,
    on_select: EventHandler<String>,
) -> Element {
    let is_open = open_dropdown().as_deref() == Some(id.as_str());
    let selected_label = dropdown_label(&options, selected.as_deref(), &placeholder);
    let (left, top) = dropdown_pos().unwrap_or((0.0, 0.0));
    let id_for_toggle = id.clone();

    rsx! {
        div {
            style: "position: relative; display: inline-flex; align-items: center; gap: 6px;",
            span { "{label}" }
            button {
                style: "border: 1px solid #bbb; background: #fff; padding: 4px 10px; border-radius: 6px; cursor: pointer; min-width: 120px; text-align: left;",
                onclick: move |event| {
                    event.stop_propagation();
                    if open_dropdown().as_deref() == Some(id_for_toggle.as_str()) {
                        open_dropdown.set(None);
                        return;
                    }
                    let point = event.client_coordinates();
                    dropdown_pos.set(Some((point.x, point.y + 24.0)));
                    open_dropdown.set(Some(id_for_toggle.clone()));
                },
                "{selected_label}"
            }
        }

        if is_open {
            div {
                style: "position: fixed; left: {left}px; top: {top}px; min-width: 200px; max-height: 320px; overflow-y: auto; background: #fff; border: 1px solid #bbb; border-radius: 8px; box-shadow: 0 10px 24px rgba(0,0,0,0.15); z-index: 1200;",
                onclick: move |event| event.stop_propagation(),
                {options.iter().map(|opt| {
                    let value = opt.value.clone();
                    let label = opt.label.clone();
                    let is_selected = selected.as_deref() == Some(value.as_str());
                    let background = if is_selected { "#eef4ff" } else { "transparent" };
                    rsx!(
                        div {
                            style: "padding: 8px 10px; cursor: pointer; background: {background};",
                            onclick: move |_| {
                                on_select.call(value.clone());
                                open_dropdown.set(None);
                            },
                            "{label}"
                        }
                    )
                })}
            }
        }
    }
}

/// Multi-select variant used by modal forms (role binding, attribute
/// binding). Selection toggles entries instead of replacing them.
#[component]
pub fn DropdownMultiSelect(
    id: String,
    label: String,
    placeholder: String,
    options: Vec<DropdownOption>,
    selected: Vec<String>,
    mut open_dropdown: Signal<Option<String>>,
    mut dropdown_pos: Signal<Option<(f64, f64)>>,
    on_toggle: EventHandler<String>,
) -> Element {
    let is_open = open_dropdown().as_deref() == Some(id.as_str());
    let summary = if selected.is_empty() {
        placeholder.clone()
    } else {
        options
            .iter()
            .filter(|opt| selected.contains(&opt.value))
            .map(|opt| opt.label.clone())
            .collect::<Vec<_>>()
            .join(", ")
    };
    let (left, top) = dropdown_pos().unwrap_or((0.0, 0.0));
    let id_for_toggle = id.clone();

    rsx! {
        div {
            style: "position: relative; display: inline-flex; align-items: center; gap: 6px;",
            span { "{label}" }
            button {
                style: "border: 1px solid #bbb; background: #fff; padding: 4px 10px; border-radius: 6px; cursor: pointer; min-width: 180px; max-width: 280px; overflow: hidden; text-overflow: ellipsis; white-space: nowrap; text-align: left;",
                onclick: move |event| {
                    event.stop_propagation();
                    if open_dropdown().as_deref() == Some(id_for_toggle.as_str()) {
                        open_dropdown.set(None);
                        return;
                    }
                    let point = event.client_coordinates();
                    dropdown_pos.set(Some((point.x, point.y + 24.0)));
                    open_dropdown.set(Some(id_for_toggle.clone()));
                },
                "{summary}"
            }
        }

        if is_open {
            div {
                style: "position: fixed; left: {left}px; top: {top}px; min-width: 220px; max-height: 320px; overflow-y: auto; background: #fff; border: 1px solid #bbb; border-radius: 8px; box-shadow: 0 10px 24px rgba(0,0,0,0.15); z-index: 1200; padding: 6px;",
                onclick: move |event| event.stop_propagation(),
                {options.iter().map(|opt| {
                    let value = opt.value.clone();
                    let label = opt.label.clone();
                    let checked = selected.contains(&value);
                    rsx!(
                        label {
                            style: "display: flex; align-items: center; gap: 8px; padding: 6px 4px; cursor: pointer;",
                            input {
                                r#type: "checkbox",
                                checked: checked,
                                onclick: move |_| {
                                    on_toggle.call(value.clone());
                                }
                            }
                            span { "{label}" }
                        }
                    )
                })}
            }
        }
    }
}
