//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::navigation::{NavStack, Route};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Route stack; the last entry is on screen
    nav: RwSignal<NavStack>,
    /// Location picked from a promotion card, shown by the location screen
    pub selected_localizacao: RwSignal<Option<String>>,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            nav: RwSignal::new(NavStack::default()),
            selected_localizacao: RwSignal::new(None),
        }
    }

    pub fn current_route(&self) -> Route {
        self.nav.with(|nav| nav.current())
    }

    pub fn can_go_back(&self) -> bool {
        self.nav.with(|nav| nav.can_go_back())
    }

    pub fn navigate(&self, route: Route) {
        web_sys::console::log_1(&format!("[NAV] -> {:?}", route).into());
        self.nav.update(|nav| nav.navigate(route));
    }

    pub fn go_back(&self) {
        self.nav.update(|nav| {
            nav.go_back();
        });
    }

    pub fn reset(&self, route: Route) {
        self.nav.update(|nav| nav.reset(route));
    }

    /// Open the location screen for a promotion's location
    pub fn show_localizacao(&self, localizacao: String) {
        self.selected_localizacao.set(Some(localizacao));
        self.navigate(Route::Localizacao);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
