use yew::prelude::*;
use moneyview_data::{format_amount, Transaction, TransactionKind};

#[derive(Clone, PartialEq, Properties)]
pub struct Props {
    pub transaction: Transaction,
}

/// One row of the transactions table
#[function_component(TransactionRow)]
pub fn transaction_row(props: &Props) -> Html {
    let tx = &props.transaction;
    let (price_class, sign) = match tx.kind {
        TransactionKind::Income => ("price income", ""),
        TransactionKind::Outcome => ("price outcome", "- "),
    };
    // Timestamps come back as ISO 8601; the date part is enough here
    let date = tx.created_at.split('T').next().unwrap_or(&tx.created_at);

    html! {
        <tr class="transaction">
            <td class="description">{ &tx.description }</td>
            <td class={price_class}>{ format!("{}{}", sign, format_amount(tx.price)) }</td>
            <td class="category">{ &tx.category }</td>
            <td class="date">{ date }</td>
        </tr>
    }
}
