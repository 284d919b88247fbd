use dioxus::prelude::*;

/// 库存管理页面（开发中占位）。
#[component]
pub fn InventoryScreen() -> Element {
    rsx! {
        div { style: "background: #fff; border-radius: 8px; padding: 24px;",
            h3 { style: "margin: 0 0 12px;", "库存管理" }
            p { style: "color: #888;", "库存管理页面开发中…" }
        }
    }
}
