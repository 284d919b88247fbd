use dioxus::prelude::{use_signal, Signal};

use crate::domain::entities::menu::Route;
use crate::domain::entities::session::Session;

/// Shell-wide signals, created once at the root and handed around by copy.
pub struct AppState {
    pub route: Signal<Route>,
    pub session: Signal<Session>,
    pub collapsed: Signal<bool>,
    pub booting: Signal<bool>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            route: use_signal(Route::default),
            session: use_signal(Session::default),
            collapsed: use_signal(|| false),
            booting: use_signal(|| true),
        }
    }
}
