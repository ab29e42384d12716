pub use header::Header;
pub use searchform::SearchForm;
pub use transactionrow::TransactionRow;

mod header {
    use yew::prelude::*;
    use super::newtransaction::NewTransactionModal;

    /// Top bar with the app name and the new-transaction trigger
    ///
    /// The trigger only toggles the dialog; it is not wired to the
    /// search path.
    #[function_component(Header)]
    pub fn header() -> Html {
        let open = use_state(|| false);

        let on_open = {
            let open = open.clone();
            Callback::from(move |_| open.set(true))
        };
        let on_close = {
            let open = open.clone();
            Callback::from(move |()| open.set(false))
        };

        html! {
            <header id="header">
                <strong class="logo">{ "moneyview" }</strong>
                <button class="new-transaction" onclick={on_open}>{ "New transaction" }</button>
                <NewTransactionModal open={*open} {on_close} />
            </header>
        }
    }
}

mod newtransaction;
mod searchform;
mod transactionrow;
