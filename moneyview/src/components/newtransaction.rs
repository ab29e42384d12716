//! New-transaction dialog
//!
//! The overlay is the native `<dialog>` element: backdrop and focus
//! trapping belong to the browser, not to this component. The
//! component only drives `show_modal()`/`close()` from its `open`
//! prop and validates its own form before posting.

use gloo_console::error;
use serde_json::{json, Value};
use wasm_bindgen::UnwrapThrowExt;
use web_sys::{HtmlDialogElement, HtmlInputElement};
use yew::prelude::*;
use moneyview_data::{NewTransactionDraft, Submission, TransactionKind};
use crate::AppContext;

#[derive(Clone, PartialEq, Properties)]
pub struct Props {
    pub open: bool,
    /// Notified when the dialog wants to close (cancel, Esc, success)
    pub on_close: Callback<()>,
}

#[function_component(NewTransactionModal)]
pub fn new_transaction_modal(props: &Props) -> Html {
    let context = use_context::<AppContext>().unwrap_throw();
    let dialog_ref = use_node_ref();
    let description_ref = use_node_ref();
    let price_ref = use_node_ref();
    let category_ref = use_node_ref();
    let kind = use_state(|| TransactionKind::Income);
    let lock = use_mut_ref(Submission::new);
    let submitting = use_state(|| false);

    // Drive the native dialog from the `open` prop
    {
        let dialog_ref = dialog_ref.clone();
        use_effect_with(props.open, move |open| {
            if let Some(dialog) = dialog_ref.cast::<HtmlDialogElement>() {
                if *open && !dialog.open() {
                    dialog.show_modal().unwrap_throw();
                } else if !*open && dialog.open() {
                    dialog.close();
                }
            }
        });
    }

    let onsubmit = {
        let context = context.clone();
        let description_ref = description_ref.clone();
        let price_ref = price_ref.clone();
        let category_ref = category_ref.clone();
        let kind = kind.clone();
        let submitting = submitting.clone();
        let on_close = props.on_close.clone();
        move |e: SubmitEvent| {
            e.prevent_default();
            let description = description_ref.cast::<HtmlInputElement>().unwrap_throw().value();
            let price_raw = price_ref.cast::<HtmlInputElement>().unwrap_throw().value();
            let category = category_ref.cast::<HtmlInputElement>().unwrap_throw().value();
            // Non-numeric input is forwarded as-is; validation reports it
            let price: Value = price_raw
                .trim()
                .parse::<f64>()
                .map(Value::from)
                .unwrap_or_else(|_| Value::String(price_raw.clone()));
            let candidate = json!({
                "description": description,
                "price": price,
                "category": category,
                "type": *kind,
            });
            let draft = match NewTransactionDraft::validate(&candidate) {
                Ok(draft) => draft,
                Err(e) => {
                    error!(format!("new transaction rejected: {}", e));
                    return;
                }
            };
            let Some(guard) = lock.borrow().begin() else { return };
            submitting.set(true);
            let context = context.clone();
            let submitting = submitting.clone();
            let on_close = on_close.clone();
            yew::platform::spawn_local(async move {
                let _guard = guard;
                match context.create_transaction(draft).await {
                    Ok(()) => on_close.emit(()),
                    Err(e) => error!(format!("failed to create transaction: {}", e)),
                }
                submitting.set(false);
            });
        }
    };

    let choose = |wanted: TransactionKind| {
        let kind = kind.clone();
        Callback::from(move |_| kind.set(wanted))
    };
    let kind_class = |wanted: TransactionKind| (*kind == wanted).then_some("selected");

    html! {
        <dialog id="new-transaction" ref={dialog_ref} onclose={props.on_close.reform(|_| ())}>
            <h2>{ "New transaction" }</h2>
            <form {onsubmit}>
                <input ref={description_ref} type="text" name="description" placeholder="Description" />
                <input ref={price_ref} type="text" name="price" inputmode="decimal" placeholder="Price" />
                <input ref={category_ref} type="text" name="category" placeholder="Category" />
                <div class="kind-switch">
                    <button type="button"
                        class={classes!("kind-income", kind_class(TransactionKind::Income))}
                        onclick={choose(TransactionKind::Income)}>
                        { "Income" }
                    </button>
                    <button type="button"
                        class={classes!("kind-outcome", kind_class(TransactionKind::Outcome))}
                        onclick={choose(TransactionKind::Outcome)}>
                        { "Outcome" }
                    </button>
                </div>
                <button type="submit" disabled={*submitting}>{ "Create" }</button>
                <button type="button" onclick={props.on_close.reform(|_| ())}>{ "Cancel" }</button>
            </form>
        </dialog>
    }
}
