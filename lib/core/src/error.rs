use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Dataset is empty: at least one employee record is required")]
    EmptyDataset,

    #[error("Employee index {index} is out of range for a dataset of {len} records")]
    IndexOutOfRange { index: i64, len: usize },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// True for caller contract violations (bad dataset or index) as opposed
    /// to environment failures such as IO.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Error::EmptyDataset
                | Error::IndexOutOfRange { .. }
                | Error::Csv(_)
        )
    }
}
