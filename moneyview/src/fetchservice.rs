use std::cell::RefCell;
use std::rc::Rc;
use gloo_console::debug;
use gloo_net::http::Request;
use thiserror::Error;
use moneyview_data::{NewTransactionDraft, Transaction};


#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP error ({0})")]
    HttpError(u16),
    #[error(transparent)]
    Network(#[from] gloo_net::Error),
}


/// Cached transaction list for the last query, to avoid refetching it
type CachedQuery = Rc<(String, Vec<Transaction>)>;

/// Load and store transactions through the JSON API
///
/// This service does not hold a state (aside its cache) and thus can be
/// cloned. Clones start with a cold cache.
#[derive(Default)]
pub struct TransactionFetchService {
    cached_query: RefCell<Option<CachedQuery>>,
}

impl Clone for TransactionFetchService {
    fn clone(&self) -> Self {
        Self { cached_query: RefCell::default() }
    }
}


impl TransactionFetchService {
    /// Fetch the transactions matching `query`
    ///
    /// An empty query means "no filter" and returns the whole list.
    pub async fn fetch_transactions(&self, query: &str) -> Result<Vec<Transaction>, FetchError> {
        {
            let cache = self.cached_query.borrow().clone();
            if let Some(cached) = cache.filter(|c| c.0 == query) {
                debug!(format!("serving cached transactions for {:?}", query));
                return Ok(cached.1.clone());
            }
        }

        let uri = api_uri!("transactions");
        let request = if query.is_empty() {
            Request::get(&uri)
        } else {
            Request::get(&uri).query([("q", query)])
        };
        let response = request.send().await?;
        if !response.ok() {
            return Err(FetchError::HttpError(response.status()));
        }
        let transactions: Vec<Transaction> = response.json().await?;
        debug!(format!("fetched {} transactions for {:?}", transactions.len(), query));
        self.cached_query.replace(Some(CachedQuery::new((query.to_string(), transactions.clone()))));
        Ok(transactions)
    }

    /// Store a new transaction; the server echoes the stored record
    pub async fn create_transaction(&self, draft: &NewTransactionDraft) -> Result<Transaction, FetchError> {
        let response = Request::post(&api_uri!("transactions"))
            .json(draft)?
            .send().await?;
        if !response.ok() {
            return Err(FetchError::HttpError(response.status()));
        }
        // The list changed server-side, drop the stale query cache
        self.cached_query.replace(None);
        Ok(response.json().await?)
    }
}
