use crate::domain::member::Member;
use crate::error::{MembershipError, Result};
use std::io::Read;

/// Reads members from a CSV source.
///
/// This reader wraps `csv::Reader` and provides an iterator over `Result<Member>`.
/// Whitespace around fields is trimmed.
pub struct MemberReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> MemberReader<R> {
    /// Creates a new `MemberReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes members.
    pub fn members(self) -> impl Iterator<Item = Result<Member>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(MembershipError::from))
    }
}
