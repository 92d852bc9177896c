use crate::domain::member::MemberId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, MembershipError>;

#[derive(Error, Debug)]
pub enum MembershipError {
    /// A renewal that cannot be applied: unknown member id, or a new end past
    /// the representable timestamp range.
    #[error("Validation error: {0}")]
    ValidationError(String),
    /// A status lookup for an id with no record.
    #[error("Member not found: {0}")]
    MemberNotFound(MemberId),
    /// A day count that is not positive or cannot be represented as a duration.
    #[error("Invalid renewal period: {0} days")]
    InvalidRenewalPeriod(i64),
    /// Malformed member CSV input or output.
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    /// Reading or writing a file failed.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    /// The RocksDB member store failed.
    #[cfg(feature = "storage-rocksdb")]
    #[error("Storage error: {0}")]
    StorageError(#[from] rocksdb::Error),
    /// Any other collaborator failure, such as a notifier error.
    #[error("Internal error: {0}")]
    InternalError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl MembershipError {
    /// The validation failure renewal reports for an id with no record.
    pub fn member_not_found(id: MemberId) -> Self {
        Self::ValidationError(format!("member not found: {}", id))
    }
}
