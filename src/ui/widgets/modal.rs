use dioxus::prelude::*;

/// Centered modal shell over a dimmed backdrop. Clicking the backdrop
/// closes it; the panel swallows clicks so embedded dropdowns behave.
#[component]
pub fn Modal(
    title: String,
    visible: bool,
    width: Option<u32>,
    on_close: EventHandler<()>,
    children: Element,
) -> Element {
    if !visible {
        return rsx! {};
    }
    let width = width.unwrap_or(480);

    rsx! {
        div {
            style: "position: fixed; inset: 0; background: rgba(0,0,0,0.35); display: flex; align-items: center; justify-content: center; z-index: 1100;",
            onclick: move |_| on_close.call(()),
            div {
                style: "background: #fff; padding: 16px; border: 1px solid #999; border-radius: 8px; min-width: {width}px; max-width: 90vw; max-height: 85vh; overflow: auto;",
                onclick: move |event| event.stop_propagation(),
                div {
                    style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 12px;",
                    span { style: "font-weight: 600;", "{title}" }
                    button {
                        style: "border: none; background: transparent; cursor: pointer; font-size: 16px;",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                {children}
            }
        }
    }
}

/// Label + control row in the modal's two-column grid.
#[component]
pub fn FormRow(label: String, children: Element) -> Element {
    rsx! {
        label { style: "align-self: center;", "{label}" }
        div { {children} }
    }
}

pub const FORM_GRID_STYLE: &str =
    "display: grid; grid-template-columns: 120px 1fr; gap: 10px; margin-bottom: 12px;";
pub const MODAL_INPUT_STYLE: &str =
    "border: 1px solid #bbb; border-radius: 6px; padding: 6px 8px; width: 100%; box-sizing: border-box;";

/// 取消/保存 footer.
#[component]
pub fn ModalFooter(busy: bool, on_cancel: EventHandler<()>, on_save: EventHandler<()>) -> Element {
    rsx! {
        div { style: "display: flex; gap: 8px; justify-content: flex-end; margin-top: 16px;",
            button {
                style: "border: 1px solid #bbb; background: #fff; padding: 5px 14px; border-radius: 6px; cursor: pointer;",
                disabled: busy,
                onclick: move |_| on_cancel.call(()),
                "取消"
            }
            button {
                style: "border: 1px solid #4c6ef5; background: #4c6ef5; color: #fff; padding: 5px 14px; border-radius: 6px; cursor: pointer;",
                disabled: busy,
                onclick: move |_| on_save.call(()),
                "保存"
            }
        }
    }
}
