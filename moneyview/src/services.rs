use yew::Callback;
use moneyview_data::NewTransactionDraft;
use crate::fetchservice::{FetchError, TransactionFetchService};
use crate::AppAction;

/// Operations shared by all components, created once by the root
///
/// The context value is compared by identity: consumers only re-render
/// when the root replaces the whole context, never because the
/// transaction list changed. This is what keeps the reference to the
/// fetch operations stable across re-renders.
pub struct TransactionsContext {
    fetch_service: TransactionFetchService,
    dispatch: Callback<AppAction>,
}

impl PartialEq for TransactionsContext {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

impl TransactionsContext {
    pub fn new(dispatch: Callback<AppAction>) -> Self {
        Self { fetch_service: TransactionFetchService::default(), dispatch }
    }

    /// Fetch the transactions matching `query` and publish them to the
    /// app state. Resolves once the list update has been dispatched.
    pub async fn fetch_transactions(&self, query: String) -> Result<(), FetchError> {
        let transactions = self.fetch_service.fetch_transactions(&query).await?;
        self.dispatch.emit(AppAction::TransactionsFetched { query, transactions });
        Ok(())
    }

    /// Same fetch, for history navigation: no new history entry
    pub async fn restore_transactions(&self, query: String) -> Result<(), FetchError> {
        let transactions = self.fetch_service.fetch_transactions(&query).await?;
        self.dispatch.emit(AppAction::HistoryRestored { query, transactions });
        Ok(())
    }

    /// Store a new transaction and prepend it to the displayed list
    pub async fn create_transaction(&self, draft: NewTransactionDraft) -> Result<(), FetchError> {
        let transaction = self.fetch_service.create_transaction(&draft).await?;
        self.dispatch.emit(AppAction::TransactionCreated(transaction));
        Ok(())
    }
}
