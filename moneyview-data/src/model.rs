//! Transaction data model, as exchanged with the transactions API

use serde::{Deserialize, Serialize};

/// Direction of a transaction amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Outcome,
}

/// A single transaction, as served by the transactions API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: u64,
    pub description: String,
    pub price: f64,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub created_at: String,
}

/// Aggregated totals over a transaction list
///
/// `total` is income minus outcome; both partial sums keep the sign of
/// the stored prices (the API stores outcome prices as positive
/// amounts).
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Summary {
    pub income: f64,
    pub outcome: f64,
    pub total: f64,
}

impl Summary {
    /// Sum up a transaction list
    pub fn of(transactions: &[Transaction]) -> Self {
        transactions.iter().fold(Self::default(), |mut acc, tx| {
            match tx.kind {
                TransactionKind::Income => {
                    acc.income += tx.price;
                    acc.total += tx.price;
                }
                TransactionKind::Outcome => {
                    acc.outcome += tx.price;
                    acc.total -= tx.price;
                }
            }
            acc
        })
    }
}

/// Format an amount with thousands separators and two decimals
pub fn format_amount(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let mut units = (cents / 100).to_string();
    let frac = cents % 100;
    let mut grouped = String::new();
    while units.len() > 3 {
        let tail = units.split_off(units.len() - 3);
        grouped = if grouped.is_empty() {
            tail
        } else {
            format!("{},{}", tail, grouped)
        };
    }
    if !grouped.is_empty() {
        units = format!("{},{}", units, grouped);
    }
    format!("{}{}.{:02}", if negative { "-" } else { "" }, units, frac)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(price: f64, kind: TransactionKind) -> Transaction {
        Transaction {
            id: 1,
            description: "test".into(),
            price,
            category: "misc".into(),
            kind,
            created_at: "2024-01-01T00:00:00.000Z".into(),
        }
    }

    #[test]
    fn summary_of_empty_list_is_zero() {
        assert_eq!(Summary::of(&[]), Summary::default());
    }

    #[test]
    fn summary_splits_income_and_outcome() {
        let txs = [
            tx(1200.0, TransactionKind::Income),
            tx(300.0, TransactionKind::Outcome),
            tx(50.5, TransactionKind::Outcome),
        ];
        let summary = Summary::of(&txs);
        assert_eq!(summary.income, 1200.0);
        assert_eq!(summary.outcome, 350.5);
        assert_eq!(summary.total, 849.5);
    }

    #[test]
    fn amounts_are_grouped_and_padded() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(12.5), "12.50");
        assert_eq!(format_amount(1200.0), "1,200.00");
        assert_eq!(format_amount(1234567.89), "1,234,567.89");
        assert_eq!(format_amount(-849.5), "-849.50");
    }

    #[test]
    fn transaction_round_trips_through_api_json() {
        let json = r#"{
            "id": 7,
            "description": "Groceries",
            "price": 129.9,
            "category": "Food",
            "type": "outcome",
            "createdAt": "2024-03-10T12:00:00.000Z"
        }"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.kind, TransactionKind::Outcome);
        assert_eq!(tx.created_at, "2024-03-10T12:00:00.000Z");
        let back = serde_json::to_value(&tx).unwrap();
        assert_eq!(back["type"], "outcome");
        assert_eq!(back["createdAt"], "2024-03-10T12:00:00.000Z");
    }
}
