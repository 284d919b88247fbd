use dioxus::prelude::*;

use crate::app::AppCtx;
use crate::domain::entities::menu::{
    filter_by_audience, filter_by_permissions, menu_config, MenuEntry, Route,
};

const ITEM_STYLE: &str =
    "display: block; width: 100%; text-align: left; border: none; background: transparent; padding: 9px 16px; cursor: pointer; border-radius: 6px; color: #333;";
const ACTIVE_ITEM_STYLE: &str =
    "display: block; width: 100%; text-align: left; border: none; background: #eef4ff; padding: 9px 16px; cursor: pointer; border-radius: 6px; color: #2a5ad9; font-weight: 600;";

/// 侧边导航：按用户权限码和菜单类型过滤后的菜单树。
#[component]
pub fn AppSider() -> Element {
    let ctx = use_context::<AppCtx>();
    let session = (ctx.session)();
    let mut route = ctx.route;
    let mut collapsed = ctx.collapsed;

    let menu = filter_by_permissions(
        &filter_by_audience(&menu_config(), session.is_platform_admin()),
        session.permissions(),
    );
    let current = (ctx.route)();
    let is_collapsed = collapsed();
    let width = if is_collapsed { "64px" } else { "220px" };

    let item = |entry: &MenuEntry, indent: bool| {
        let target = Route::from_path(entry.path);
        let active = target == current && target != Route::NotFound;
        let text = if is_collapsed {
            entry.text.chars().next().map(String::from).unwrap_or_default()
        } else {
            entry.text.to_string()
        };
        let style = format!(
            "{}{}",
            if active { ACTIVE_ITEM_STYLE } else { ITEM_STYLE },
            if indent && !is_collapsed { "padding-left: 32px;" } else { "" }
        );
        rsx!(
            button {
                style: "{style}",
                onclick: move |_| route.set(target),
                "{text}"
            }
        )
    };

    rsx! {
        nav {
            style: "width: {width}; flex-shrink: 0; background: #fff; border-right: 1px solid #e8e8e8; display: flex; flex-direction: column; height: 100%;",
            div {
                style: "display: flex; align-items: center; gap: 8px; padding: 14px 16px; border-bottom: 1px solid #f0f0f0;",
                div { style: "width: 28px; height: 28px; border-radius: 8px; background: #4c6ef5; color: #fff; display: flex; align-items: center; justify-content: center; font-weight: 700;", "W" }
                if !is_collapsed {
                    span { style: "font-weight: 700;", "WMS" }
                }
            }
            div { style: "flex: 1; overflow-y: auto; padding: 8px;",
                {menu.iter().map(|entry| {
                    if entry.children.is_empty() {
                        rsx!( {item(entry, false)} )
                    } else {
                        rsx!(
                            div { style: "padding: 9px 16px; color: #999; font-size: 12px;",
                                if is_collapsed { "·" } else { "{entry.text}" }
                            }
                            {entry.children.iter().map(|child| item(child, true))}
                        )
                    }
                })}
            }
            div { style: "padding: 8px; border-top: 1px solid #f0f0f0;",
                button {
                    style: ITEM_STYLE,
                    onclick: move |_| {
                        let next = !collapsed();
                        collapsed.set(next);
                    },
                    if is_collapsed { "»" } else { "« 收起" }
                }
            }
        }
    }
}
