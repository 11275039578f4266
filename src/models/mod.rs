pub mod coerce;
pub mod loaders;
pub mod photo;
pub mod transaction;
pub mod verdict;

pub use loaders::load_transaction_form;
pub use photo::UploadedPhoto;
pub use transaction::{TransactionField, TransactionForm, TransactionInput};
pub use verdict::Verdict;
