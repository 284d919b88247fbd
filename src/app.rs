use dioxus::prelude::*;

use crate::domain::entities::menu::Route;
use crate::domain::entities::session::Session;
use crate::infra::api::users;
use crate::infra::http::client::ApiClient;
use crate::ui::layout::header::AppHeader;
use crate::ui::layout::sider::AppSider;
use crate::ui::screens;
use crate::ui::state::app_state::AppState;
use crate::ui::widgets::toast::{use_toasts, ToastHost, Toasts};

/// Everything a screen needs from the shell: navigation, identity, the
/// toast stack and the HTTP collaborator. Handed down through context so no
/// component reads process-wide state.
#[derive(Clone)]
pub struct AppCtx {
    pub route: Signal<Route>,
    pub session: Signal<Session>,
    pub collapsed: Signal<bool>,
    pub toasts: Toasts,
    pub client: ApiClient,
}

#[component]
pub fn App() -> Element {
    let AppState {
        route,
        mut session,
        collapsed,
        mut booting,
    } = AppState::new();
    let toasts = use_toasts();
    let client = use_hook(|| ApiClient::new(session, route, toasts));

    let ctx = use_context_provider({
        let client = client.clone();
        move || AppCtx {
            route,
            session,
            collapsed,
            toasts,
            client,
        }
    });

    // Restore the persisted token, then re-fetch the profile behind it.
    let boot_client = ctx.client.clone();
    use_effect(move || {
        let client = boot_client.clone();
        let mut route = route;
        spawn(async move {
            match crate::infra::session::load_token() {
                Ok(Some(token)) => {
                    session.write().token = Some(token);
                    match users::get_user_info(&client).await {
                        Ok(user) => {
                            session.write().user = Some(user);
                        }
                        Err(err) => {
                            log::warn!("自动补全用户信息失败: {err}");
                        }
                    }
                }
                Ok(None) => {
                    route.set(Route::Login);
                }
                Err(err) => {
                    log::warn!("failed to load saved session: {err:#}");
                    route.set(Route::Login);
                }
            }
            booting.set(false);
        });
    });

    let current = route();
    let authenticated = session.read().authenticated();
    // Route guard: unauthenticated sessions only reach the public screens,
    // and a live session skips them.
    let effective = if !authenticated && !current.is_public() {
        Route::Login
    } else if authenticated && current.is_public() {
        Route::Dashboard
    } else {
        current
    };

    rsx! {
        div {
            style: "font-family: 'Noto Sans SC', sans-serif; height: 100vh; background: #f5f6f8; color: #333;",
            ToastHost { toasts: toasts }

            if booting() {
                div {
                    style: "height: 100%; display: flex; align-items: center; justify-content: center; color: #999;",
                    "正在加载…"
                }
            } else if effective == Route::Login {
                screens::login::LoginScreen {}
            } else if effective == Route::Register {
                screens::register::RegisterScreen {}
            } else {
                Shell { route: effective }
            }
        }
    }
}

#[component]
fn Shell(route: Route) -> Element {
    rsx! {
        div { style: "display: flex; height: 100vh; overflow: hidden;",
            AppSider {}
            div { style: "flex: 1; display: flex; flex-direction: column; overflow: hidden;",
                AppHeader {}
                div { style: "flex: 1; overflow: auto; padding: 16px;",
                    {screen_for(route)}
                }
            }
        }
    }
}

fn screen_for(route: Route) -> Element {
    match route {
        Route::Dashboard => rsx! {
            screens::dashboard::DashboardScreen {}
        },
        Route::Base => rsx! {
            screens::base::BaseScreen {}
        },
        Route::CategoryList => rsx! {
            screens::categories::CategoryListScreen {}
        },
        Route::ProductAttr => rsx! {
            screens::attributes::AttributeListScreen {}
        },
        Route::ProductSpec => rsx! {
            screens::options::OptionListScreen {}
        },
        Route::ProductList => rsx! {
            screens::products::ProductListScreen {}
        },
        Route::Inventory => rsx! {
            screens::inventory::InventoryScreen {}
        },
        Route::Users => rsx! {
            screens::users::UserListScreen {}
        },
        Route::Roles => rsx! {
            screens::roles::RoleListScreen {}
        },
        Route::Login | Route::Register | Route::NotFound => rsx! {
            screens::not_found::NotFoundScreen {}
        },
    }
}
