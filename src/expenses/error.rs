use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExpenseError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("date {raw:?}: {source}")]
    InvalidDate {
        raw: String,
        #[source]
        source: time::error::Parse,
    },
    #[error("expense storage: {0}")]
    Storage(#[from] anyhow::Error),
}
