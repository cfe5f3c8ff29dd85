//! Store List Screen
//!
//! Renders the promotions mirror. Every mutation goes through the backend
//! container; the mirror is updated from the command result.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{ErrorBanner, FormMode, PromocaoCard, PromocaoForm, ScreenHeader};
use crate::commands;
use crate::models::{Promocao, PromocaoDraft};
use crate::store::{store_is_loaded, store_mark_loaded, store_promocoes, store_set_promocoes, use_app_store};

#[component]
pub fn LojaScreen() -> impl IntoView {
    let store = use_app_store();
    let error = RwSignal::new(None::<String>);
    let mode = RwSignal::new(FormMode::Closed);
    let draft = RwSignal::new(PromocaoDraft::default());
    let refreshing = RwSignal::new(false);

    let load = move || {
        if refreshing.get_untracked() {
            return;
        }
        refreshing.set(true);
        spawn_local(async move {
            match commands::load_promocoes().await {
                Ok(list) => {
                    web_sys::console::log_1(&format!("[LOJAS] Loaded {} promotions", list.len()).into());
                    store_set_promocoes(&store, list);
                }
                Err(e) => {
                    // Previous list stays on screen
                    store_mark_loaded(&store);
                    let _ = error.try_set(e.banner());
                }
            }
            let _ = refreshing.try_set(false);
        });
    };

    // Load on mount
    Effect::new(move |_| load());

    let on_edit = Callback::new(move |p: Promocao| {
        draft.set(PromocaoDraft::from(&p));
        mode.set(FormMode::Editing(p.id));
    });

    view! {
        <div class="screen loja-screen">
            <ScreenHeader title="Lojas e Ofertas" show_back=true show_logout=true />
            <ErrorBanner message=error />
            <Show
                when=move || store_is_loaded(&store)
                fallback=|| view! { <p class="loading">"Carregando..."</p> }
            >
                <div class="loja-toolbar">
                    <button class="add-btn" on:click=move |_| mode.set(FormMode::Adding)>
                        "Adicionar Promoção"
                    </button>
                    <button class="refresh-btn" disabled=move || refreshing.get() on:click=move |_| load()>
                        {move || if refreshing.get() { "Atualizando..." } else { "Atualizar" }}
                    </button>
                </div>
                <div class="loja-list">
                    {move || {
                        let promocoes = store_promocoes(&store);
                        if promocoes.is_empty() {
                            view! { <p class="empty">"Nenhuma promoção cadastrada."</p> }.into_any()
                        } else {
                            promocoes
                                .into_iter()
                                .map(|p| view! { <PromocaoCard promocao=p on_edit=on_edit error=error /> })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </div>
            </Show>
            <PromocaoForm mode=mode draft=draft error=error />
        </div>
    }
}
