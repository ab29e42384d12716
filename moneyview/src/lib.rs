#![recursion_limit = "256"]
#[macro_use]
pub mod settings;
mod components;
mod fetchservice;
mod services;
mod utils;

use std::rc::Rc;
use gloo_console::{error, info};
use yew::prelude::*;
use wasm_bindgen::{
    JsCast,
    JsValue,
    UnwrapThrowExt,
    closure::Closure,
};
use moneyview_data::{format_amount, Summary, Transaction};

use components::*;
use services::TransactionsContext;
use utils::*;

pub use fetchservice::FetchError;


pub enum AppAction {
    /// Replace the list after a user-triggered fetch
    TransactionsFetched { query: String, transactions: Vec<Transaction> },
    /// Replace the list after history navigation
    HistoryRestored { query: String, transactions: Vec<Transaction> },
    /// Prepend a newly created transaction
    TransactionCreated(Transaction),
}

#[derive(Clone, Default, PartialEq)]
pub struct AppState {
    /// Query of the currently displayed list
    query: String,
    /// Transactions, as last fetched
    transactions: Vec<Transaction>,
}

impl AppState {
    fn with_list(query: String, transactions: Vec<Transaction>) -> Self {
        Self { query, transactions }
    }

    /// Push the current query to the browser history
    fn push_history(&self) -> Result<(), JsValue> {
        let url = build_app_url(&self.query);
        let window = web_sys::window().unwrap_throw();
        window.history()?.push_state_with_url(&JsValue::NULL, "", Some(&url))
    }
}

impl Reducible for AppState {
    type Action = AppAction;

    fn reduce(self: Rc<Self>, action: AppAction) -> Rc<Self> {
        match action {
            AppAction::TransactionsFetched { query, transactions } => {
                info!(format!("fetched {} transactions for {:?}", transactions.len(), query));
                let this: Rc<Self> = Self::with_list(query, transactions).into();
                this.push_history().unwrap_throw();
                this
            }

            AppAction::HistoryRestored { query, transactions } => {
                Self::with_list(query, transactions).into()
            }

            AppAction::TransactionCreated(transaction) => {
                let mut transactions = Vec::with_capacity(self.transactions.len() + 1);
                transactions.push(transaction);
                transactions.extend(self.transactions.iter().cloned());
                Self::with_list(self.query.clone(), transactions).into()
            }
        }
    }
}


pub type AppContext = Rc<TransactionsContext>;


#[function_component(App)]
pub fn app() -> Html {
    let state = use_reducer(AppState::default);

    // Created once; consumers depend on this exact reference
    let context: AppContext = (*use_memo((), {
        let state = state.clone();
        move |_| {
            Rc::new(TransactionsContext::new(Callback::from(move |action| state.dispatch(action))))
        }
    })).clone();

    // Load the list for the URL query once at startup
    use_memo((), {
        let context = context.clone();
        move |_| {
            let query = parse_app_url();
            yew::platform::spawn_local(async move {
                if let Err(e) = context.restore_transactions(query).await {
                    error!(format!("failed to load transactions: {}", e));
                }
            });
        }
    });

    // Setup listener for history change
    use_effect_with((), {
        let context = context.clone();
        move |_| {
            let window = web_sys::window().unwrap_throw();
            let listener: Closure<dyn FnMut()> = Closure::new(move || {
                let context = context.clone();
                let query = parse_app_url();
                yew::platform::spawn_local(async move {
                    if let Err(e) = context.restore_transactions(query).await {
                        error!(format!("failed to restore transactions: {}", e));
                    }
                });
            });
            window.add_event_listener_with_callback("popstate", listener.as_ref().unchecked_ref()).unwrap_throw();

            move || drop(listener)
        }
    });

    let summary = Summary::of(&state.transactions);

    html! {
        <ContextProvider<AppContext> context={context}>
            <div id="app">
                <Header />
                <main>
                    { html_summary(&summary) }
                    <SearchForm value={state.query.clone()} />
                    <table id="transactions">
                        <tbody>
                            { for state.transactions.iter().map(|tx| html! {
                                <TransactionRow key={tx.id} transaction={tx.clone()} />
                            }) }
                        </tbody>
                    </table>
                </main>
            </div>
        </ContextProvider<AppContext>>
    }
}


/// Return the totals displayed between the header and the list
fn html_summary(summary: &Summary) -> Html {
    html! {
        <div id="summary">
            <div class="summary-card">
                <span>{ "Income" }</span>
                <strong>{ format_amount(summary.income) }</strong>
            </div>
            <div class="summary-card">
                <span>{ "Outcome" }</span>
                <strong>{ format_amount(summary.outcome) }</strong>
            </div>
            <div class="summary-card highlight">
                <span>{ "Total" }</span>
                <strong>{ format_amount(summary.total) }</strong>
            </div>
        </div>
    }
}
