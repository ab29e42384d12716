//! Domain types for the moneyview web app
//!
//! Everything here is kept free of UI framework types so the
//! validation and submission rules can be tested on the host.

pub mod model;
pub mod schema;
pub mod submit;

pub use model::{format_amount, Summary, Transaction, TransactionKind};
pub use schema::{NewTransactionDraft, SchemaValidationError, SearchQuery};
pub use submit::{prepare_search, PreparedSearch, Submission, SubmitError, SubmitGuard};
