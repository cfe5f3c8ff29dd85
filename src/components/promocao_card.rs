//! Promotion Card Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::DeleteConfirmButton;
use crate::commands;
use crate::context::use_app_context;
use crate::format::{format_price, format_promotional};
use crate::models::Promocao;
use crate::store::{store_remove_promocao, use_app_store};

#[component]
pub fn PromocaoCard(
    promocao: Promocao,
    #[prop(into)] on_edit: Callback<Promocao>,
    error: RwSignal<Option<String>>,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let deleting = RwSignal::new(false);

    let id = promocao.id;
    let on_delete = Callback::new(move |_: ()| {
        deleting.set(true);
        spawn_local(async move {
            match commands::remove_promocao(id).await {
                Ok(()) => store_remove_promocao(&store, id),
                Err(e) => {
                    let _ = error.try_set(e.banner());
                }
            }
            let _ = deleting.try_set(false);
        });
    });

    let localizacao = promocao.localizacao.clone();
    let promo_price = format_promotional(promocao.valor_promocional);
    let full_class = if promo_price.is_some() { "preco-original riscado" } else { "preco-original" };
    let for_edit = promocao.clone();

    view! {
        <div class="loja-card">
            <h2 class="loja-nome">{promocao.promocao.clone()}</h2>
            <p class="localizacao-text">"Localização: " {promocao.localizacao.clone()}</p>
            <div class="produto">
                <span class=full_class>{format_price(promocao.valor_cheio)}</span>
                {promo_price.map(|p| view! { <span class="preco-promocional">{p}</span> })}
            </div>
            <div class="card-actions">
                <button class="edit-btn" on:click=move |_| on_edit.run(for_edit.clone())>
                    "Editar"
                </button>
                <DeleteConfirmButton button_class="delete-btn" disabled=deleting on_confirm=on_delete />
            </div>
            <button
                class="localizacao-btn"
                on:click=move |_| ctx.show_localizacao(localizacao.clone())
            >
                "Mostrar Localização"
            </button>
        </div>
    }
}
