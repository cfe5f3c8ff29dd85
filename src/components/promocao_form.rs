//! Promotion Form Modal
//!
//! Shared by add and edit. Field errors from the backend are shown under
//! their inputs; the modal stays open until the command succeeds.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::models::{CommandError, PromocaoDraft};
use crate::store::{store_add_promocao, store_update_promocao, use_app_store};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormMode {
    Closed,
    Adding,
    Editing(u32),
}

/// What the modal does once a submit has finished
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitOutcome {
    pub mode: FormMode,
    /// Replace the typed values with an empty draft
    pub reset_draft: bool,
    /// Shown under the inputs
    pub field_errors: Option<CommandError>,
    /// Replaces the screen banner when set
    pub banner: Option<String>,
}

/// Success closes the modal and empties the draft. Any failure keeps the
/// modal open in the same mode with the typed values intact.
pub fn after_submit(mode: FormMode, result: Result<(), CommandError>) -> SubmitOutcome {
    match result {
        Ok(()) => SubmitOutcome {
            mode: FormMode::Closed,
            reset_draft: true,
            field_errors: None,
            banner: None,
        },
        Err(e @ CommandError::Validation(_)) => SubmitOutcome {
            mode,
            reset_draft: false,
            banner: e.banner(),
            field_errors: Some(e),
        },
        Err(e) => SubmitOutcome {
            mode,
            reset_draft: false,
            field_errors: None,
            banner: e.banner(),
        },
    }
}

#[component]
fn DraftInput(
    #[prop(into)] placeholder: String,
    #[prop(optional)] numeric: bool,
    draft: RwSignal<PromocaoDraft>,
    read: fn(&PromocaoDraft) -> String,
    write: fn(&mut PromocaoDraft, String),
    /// Backend field key, `None` for fields without validation
    field: Option<&'static str>,
    errors: RwSignal<Option<CommandError>>,
) -> impl IntoView {
    let message = move || field.and_then(|f| errors.get().and_then(|e| e.field(f)));

    view! {
        <input
            type="text"
            inputmode=if numeric { "decimal" } else { "text" }
            placeholder=placeholder
            prop:value=move || draft.with(read)
            on:input=move |ev| draft.update(|d| write(d, event_target_value(&ev)))
        />
        <Show when=move || message().is_some()>
            <p class="field-error">{move || message().unwrap_or_default()}</p>
        </Show>
    }
}

#[component]
pub fn PromocaoForm(
    mode: RwSignal<FormMode>,
    draft: RwSignal<PromocaoDraft>,
    error: RwSignal<Option<String>>,
) -> impl IntoView {
    let store = use_app_store();
    let errors = RwSignal::new(None::<CommandError>);
    let submitting = RwSignal::new(false);

    let close = move || {
        if matches!(mode.get_untracked(), FormMode::Editing(_)) {
            draft.set(PromocaoDraft::default());
        }
        errors.set(None);
        mode.set(FormMode::Closed);
    };

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let current = draft.get_untracked();
        let current_mode = mode.get_untracked();
        submitting.set(true);
        spawn_local(async move {
            let result = match current_mode {
                FormMode::Adding => commands::add_promocao(&current).await.map(|p| store_add_promocao(&store, p)),
                FormMode::Editing(id) => commands::edit_promocao(id, &current).await.map(|updated| {
                    if let Some(p) = updated {
                        store_update_promocao(&store, p);
                    }
                }),
                FormMode::Closed => Ok(()),
            };
            submitting.set(false);

            let outcome = after_submit(current_mode, result);
            if outcome.reset_draft {
                draft.set(PromocaoDraft::default());
            }
            if outcome.banner.is_some() {
                error.set(outcome.banner);
            }
            errors.set(outcome.field_errors);
            mode.set(outcome.mode);
        });
    };

    let title = move || match mode.get() {
        FormMode::Editing(_) => "Editar Promoção",
        _ => "Adicionar Promoção",
    };

    view! {
        <Show when=move || mode.get() != FormMode::Closed>
            <div class="modal-backdrop">
                <form class="modal" on:submit=submit>
                    <h2 class="modal-title">{title}</h2>
                    <DraftInput
                        placeholder="Produto"
                        draft=draft
                        read=|d| d.promocao.clone()
                        write=|d, v| d.promocao = v
                        field=Some("promocao")
                        errors=errors
                    />
                    <DraftInput
                        placeholder="Valor Cheio"
                        numeric=true
                        draft=draft
                        read=|d| d.valor_cheio.clone()
                        write=|d, v| d.valor_cheio = v
                        field=Some("valorCheio")
                        errors=errors
                    />
                    <DraftInput
                        placeholder="Valor Promocional (opcional)"
                        numeric=true
                        draft=draft
                        read=|d| d.valor_promocional.clone()
                        write=|d, v| d.valor_promocional = v
                        field=None
                        errors=errors
                    />
                    <DraftInput
                        placeholder="Localização"
                        draft=draft
                        read=|d| d.localizacao.clone()
                        write=|d, v| d.localizacao = v
                        field=Some("localizacao")
                        errors=errors
                    />
                    <button type="submit" class="primary-btn" disabled=move || submitting.get()>
                        {move || match mode.get() {
                            FormMode::Editing(_) => "Salvar",
                            _ => "Adicionar",
                        }}
                    </button>
                    <button type="button" class="cancel-modal-btn" on:click=move |_| close()>
                        "Cancelar"
                    </button>
                </form>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_success_closes_and_resets() {
        for mode in [FormMode::Adding, FormMode::Editing(7)] {
            let outcome = after_submit(mode, Ok(()));
            assert_eq!(outcome.mode, FormMode::Closed);
            assert!(outcome.reset_draft);
            assert_eq!(outcome.field_errors, None);
            assert_eq!(outcome.banner, None);
        }
    }

    #[test]
    fn test_validation_failure_stays_open_with_field_errors() {
        let mut fields = BTreeMap::new();
        fields.insert("valorCheio".to_string(), "O campo \"Valor Cheio\" é obrigatório.".to_string());
        let err = CommandError::Validation(fields);

        let outcome = after_submit(FormMode::Editing(3), Err(err.clone()));
        assert_eq!(outcome.mode, FormMode::Editing(3));
        assert!(!outcome.reset_draft);
        assert_eq!(outcome.field_errors, Some(err));
        assert_eq!(outcome.banner, None);
    }

    #[test]
    fn test_rejection_stays_open_with_banner() {
        let err = CommandError::Failed("Não foi possível adicionar a promoção".into());
        let outcome = after_submit(FormMode::Adding, Err(err));
        assert_eq!(outcome.mode, FormMode::Adding);
        assert!(!outcome.reset_draft);
        assert_eq!(outcome.field_errors, None);
        assert_eq!(outcome.banner.as_deref(), Some("Não foi possível adicionar a promoção"));
    }
}
