//! Search form bound to the shared transactions context
//!
//! The input is uncontrolled: its value is read from the DOM at submit
//! time, so typing never re-renders the form. The submit lock is taken
//! synchronously in the submit handler, before the fetch future is
//! spawned; the disabled state of the button follows one render later.

use gloo_console::error;
use serde_json::json;
use wasm_bindgen::UnwrapThrowExt;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use moneyview_data::{prepare_search, SubmitError, Submission};
use crate::AppContext;

#[derive(Clone, PartialEq, Properties)]
pub struct Props {
    /// Query of the currently displayed list, set as input value
    pub value: String,
}

#[function_component(SearchForm)]
pub fn search_form(props: &Props) -> Html {
    let context = use_context::<AppContext>().unwrap_throw();
    let input_ref = use_node_ref();
    // Synchronous truth for the lock; `submitting` mirrors it for rendering
    let lock = use_mut_ref(Submission::new);
    let submitting = use_state(|| false);

    let onsubmit = {
        let context = context.clone();
        let input_ref = input_ref.clone();
        let submitting = submitting.clone();
        move |e: SubmitEvent| {
            e.prevent_default();
            let input: HtmlInputElement = input_ref.cast().unwrap_throw();
            let candidate = json!({ "query": input.value() });
            let prepared = match prepare_search(&lock.borrow(), &candidate) {
                Ok(prepared) => prepared,
                // A submit fired while the previous one is in flight is dropped
                Err(SubmitError::InFlight) => return,
                Err(e) => {
                    error!(format!("search rejected: {}", e));
                    return;
                }
            };
            submitting.set(true);
            let context = context.clone();
            let submitting = submitting.clone();
            yew::platform::spawn_local(async move {
                let result = prepared
                    .dispatch(move |query| async move { context.fetch_transactions(query).await })
                    .await;
                if let Err(e) = result {
                    error!(format!("failed to fetch transactions: {}", e));
                }
                submitting.set(false);
            });
        }
    };

    html! {
        <form id="search-form" {onsubmit}>
            <input
                ref={input_ref}
                type="text"
                name="query"
                placeholder="Search transactions"
                value={props.value.clone()}
            />
            <button type="submit" disabled={*submitting}>{ "Search" }</button>
        </form>
    }
}
