//! Promo Lojas Frontend App
//!
//! Navigation shell: renders the screen on top of the route stack.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::components::{HomeScreen, LocalizacaoScreen, LoginScreen, LojaScreen, RegisterScreen};
use crate::context::AppContext;
use crate::navigation::Route;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();

    // Provide context to all children
    provide_context(ctx);
    provide_context(Store::new(AppState::default()));

    // Skip the login screen when a token is already stored. Checked again
    // once the database reports open, in case the first check ran too early.
    let check_session = move || {
        spawn_local(async move {
            match commands::has_session().await {
                Ok(true) if ctx.current_route() == Route::Login => {
                    web_sys::console::log_1(&"[APP] Stored session found".into());
                    ctx.navigate(Route::Home);
                }
                Ok(_) => {}
                Err(e) => web_sys::console::log_1(&format!("[APP] Session check failed: {}", e).into()),
            }
        });
    };

    Effect::new(move |_| {
        check_session();
        spawn_local(async move {
            if let Err(e) = commands::on_event(commands::DB_INITIALIZED_EVENT, check_session).await {
                web_sys::console::log_1(&format!("[APP] Could not listen for database init: {}", e).into());
            }
        });
    });

    view! {
        <div class="app-shell">
            {move || match ctx.current_route() {
                Route::Login => view! { <LoginScreen /> }.into_any(),
                Route::Register => view! { <RegisterScreen /> }.into_any(),
                Route::Home => view! { <HomeScreen /> }.into_any(),
                Route::Lojas => view! { <LojaScreen /> }.into_any(),
                Route::Localizacao => view! { <LocalizacaoScreen /> }.into_any(),
            }}
        </div>
    }
}
