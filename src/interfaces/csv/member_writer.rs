use crate::domain::member::Member;
use crate::error::Result;
use std::io::Write;

/// Writes the member table as CSV.
pub struct MemberWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> MemberWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    /// Writes a header followed by one row per member, then flushes.
    pub fn write_members(&mut self, members: impl IntoIterator<Item = Member>) -> Result<()> {
        let mut wrote_any = false;
        for member in members {
            self.writer.serialize(member)?;
            wrote_any = true;
        }
        if !wrote_any {
            // serde-driven headers are only emitted with the first record.
            self.writer
                .write_record(["id", "name", "active", "subscription_end"])?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
