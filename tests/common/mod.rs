use rand::Rng;
use std::fs::File;
use std::io::{Error, Write};
use std::path::Path;
use tempfile::NamedTempFile;

pub const HEADER: [&str; 4] = ["id", "name", "active", "subscription_end"];

/// Far enough ahead that no sweep touches it.
pub const FUTURE: &str = "2999-01-01T00:00:00Z";

/// Writes a members CSV into a temp file and returns it.
pub fn members_file(rows: &[[&str; 4]]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    {
        let mut wtr = csv::Writer::from_writer(file.as_file_mut());
        wtr.write_record(HEADER).unwrap();
        for row in rows {
            wtr.write_record(row).unwrap();
        }
        wtr.flush().unwrap();
    }
    file.flush().unwrap();
    file
}

/// Generates `rows` active members, roughly half of them already lapsed.
///
/// Returns how many lapsed members were written.
pub fn generate_members_csv(path: &Path, rows: usize) -> Result<usize, Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);
    wtr.write_record(HEADER)?;

    let mut rng = rand::thread_rng();
    let mut lapsed = 0;
    for id in 1..=rows {
        let end = if rng.gen_bool(0.5) {
            lapsed += 1;
            format!("20{:02}-06-15T12:00:00Z", rng.gen_range(0..20))
        } else {
            format!("2{:03}-06-15T12:00:00Z", rng.gen_range(900..1000))
        };
        let id = id.to_string();
        let name = format!("member-{}", id);
        wtr.write_record([id.as_str(), name.as_str(), "true", end.as_str()])?;
    }

    wtr.flush()?;
    Ok(lapsed)
}
