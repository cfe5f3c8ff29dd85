//! Screen Header Component
//!
//! Back arrow, title and an optional logout button.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::ErrorBanner;
use crate::commands;
use crate::context::use_app_context;
use crate::navigation::Route;
use crate::store::{store_clear, use_app_store};

#[component]
pub fn ScreenHeader(
    #[prop(into)] title: String,
    #[prop(optional)] show_back: bool,
    #[prop(optional)] show_logout: bool,
) -> impl IntoView {
    let ctx = use_app_context();
    let logout_error = RwSignal::new(None::<String>);

    view! {
        <ErrorBanner message=logout_error />
        <header class="screen-header">
            <Show when=move || show_back && ctx.can_go_back()>
                <button class="back-btn" title="Voltar" on:click=move |_| ctx.go_back()>
                    "←"
                </button>
            </Show>
            <h1 class="screen-title">{title}</h1>
            <Show when=move || show_logout>
                <LogoutButton error=logout_error />
            </Show>
        </header>
    }
}

/// Clears the session token and the promotions, then returns to Login.
/// When the token could not be removed the user stays put and sees why.
#[component]
pub fn LogoutButton(error: RwSignal<Option<String>>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let logout = move |_| {
        spawn_local(async move {
            match commands::logout().await {
                Ok(()) => {
                    store_clear(&store);
                    ctx.reset(Route::Login);
                }
                Err(e) => {
                    web_sys::console::log_1(&format!("[AUTH] Logout failed: {}", e).into());
                    error.set(e.banner());
                }
            }
        });
    };

    view! {
        <button class="logout-btn" on:click=logout>"Logout"</button>
    }
}
