use dioxus::prelude::*;

use crate::app::AppCtx;
use crate::domain::entities::menu::Route;

#[component]
pub fn NotFoundScreen() -> Element {
    let ctx = use_context::<AppCtx>();
    let mut route = ctx.route;

    rsx! {
        div { style: "background: #fff; border-radius: 8px; padding: 64px; text-align: center;",
            div { style: "font-size: 48px; font-weight: 700; color: #d9d9d9;", "404" }
            div { style: "color: #999; margin: 12px 0 24px;", "页面不存在或尚未开放" }
            button {
                style: "border: 1px solid #4c6ef5; background: #4c6ef5; color: #fff; padding: 8px 20px; border-radius: 6px; cursor: pointer;",
                onclick: move |_| route.set(Route::Dashboard),
                "返回首页"
            }
        }
    }
}
