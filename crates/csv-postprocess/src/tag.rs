//! Unique-ID tagging pass.

use crate::error::PostprocessError;
use rand::rngs::StdRng;
use rand::RngCore;
use std::path::Path;
use tracing::info;
use uuid::Uuid;

/// Column added by the tagging pass.
pub const UNIQUE_ID_COLUMN: &str = "unique_id";

/// Tag every row of the CSV at `path` with a random UUID.
///
/// Adds a `unique_id` column to the header and one freshly generated
/// UUID per data row. When the column already exists its values are
/// overwritten, so re-running the pass never grows the file. Returns
/// the number of rows tagged.
pub fn append_unique_ids<P: AsRef<Path>>(
    path: P,
    rng: &mut StdRng,
) -> Result<u64, PostprocessError> {
    let path = path.as_ref();

    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();
    if headers.is_empty() {
        return Err(PostprocessError::MissingHeader(path.display().to_string()));
    }
    let existing = headers.iter().position(|h| h == UNIQUE_ID_COLUMN);

    let rows = reader.into_records().collect::<Result<Vec<_>, _>>()?;

    let mut writer = csv::Writer::from_path(path)?;
    let mut out_headers: Vec<&str> = headers.iter().collect();
    if existing.is_none() {
        out_headers.push(UNIQUE_ID_COLUMN);
    }
    writer.write_record(&out_headers)?;

    let mut tagged = 0u64;
    for row in &rows {
        let id = random_uuid(rng).to_string();
        let mut fields: Vec<&str> = row.iter().collect();
        match existing {
            Some(idx) => fields[idx] = id.as_str(),
            None => fields.push(id.as_str()),
        }
        writer.write_record(&fields)?;
        tagged += 1;
    }
    writer.flush()?;

    info!(
        "Added '{}' to {} rows in '{}'",
        UNIQUE_ID_COLUMN,
        tagged,
        path.display()
    );
    Ok(tagged)
}

/// Generate a version 4 UUID from the seeded RNG.
fn random_uuid(rng: &mut StdRng) -> Uuid {
    let mut bytes = [0u8; 16];
    rng.fill_bytes(&mut bytes);
    // Set version (4) and variant (RFC 4122) bits.
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;
    Uuid::from_bytes(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_appends_unique_id_column() {
        let file = write_csv("name,email\nalice,a@example.com\nbob,b@example.com\n");
        let mut rng = StdRng::seed_from_u64(42);

        let tagged = append_unique_ids(file.path(), &mut rng).unwrap();
        assert_eq!(tagged, 2);

        let mut reader = csv::Reader::from_path(file.path()).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.iter().last(), Some(UNIQUE_ID_COLUMN));

        let ids: Vec<String> = reader
            .records()
            .map(|r| r.unwrap().get(2).unwrap().to_string())
            .collect();
        assert_eq!(ids.len(), 2);
        assert_ne!(ids[0], ids[1]);
        for id in &ids {
            assert!(Uuid::parse_str(id).is_ok());
        }
    }

    #[test]
    fn test_header_only_file_gets_tagged_header() {
        let file = write_csv("name,email\n");
        let mut rng = StdRng::seed_from_u64(42);

        let tagged = append_unique_ids(file.path(), &mut rng).unwrap();
        assert_eq!(tagged, 0);

        let content = std::fs::read_to_string(file.path()).unwrap();
        assert_eq!(content.trim_end(), "name,email,unique_id");
    }

    #[test]
    fn test_existing_column_is_overwritten() {
        let file = write_csv("name,unique_id\nalice,old-value\n");
        let mut rng = StdRng::seed_from_u64(42);

        append_unique_ids(file.path(), &mut rng).unwrap();

        let mut reader = csv::Reader::from_path(file.path()).unwrap();
        assert_eq!(reader.headers().unwrap().len(), 2);
        let row = reader.records().next().unwrap().unwrap();
        assert_ne!(row.get(1), Some("old-value"));
        assert!(Uuid::parse_str(row.get(1).unwrap()).is_ok());
    }

    #[test]
    fn test_empty_file_is_rejected() {
        let file = write_csv("");
        let mut rng = StdRng::seed_from_u64(42);

        let err = append_unique_ids(file.path(), &mut rng).unwrap_err();
        assert!(matches!(err, PostprocessError::MissingHeader(_)));
    }

    #[test]
    fn test_seeded_rng_reproduces_ids() {
        let file1 = write_csv("name\nalice\nbob\n");
        let file2 = write_csv("name\nalice\nbob\n");

        let mut rng1 = StdRng::seed_from_u64(7);
        let mut rng2 = StdRng::seed_from_u64(7);
        append_unique_ids(file1.path(), &mut rng1).unwrap();
        append_unique_ids(file2.path(), &mut rng2).unwrap();

        assert_eq!(
            std::fs::read_to_string(file1.path()).unwrap(),
            std::fs::read_to_string(file2.path()).unwrap()
        );
    }

    #[test]
    fn test_random_uuid_sets_version_and_variant() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let id = random_uuid(&mut rng);
            assert_eq!(id.get_version_num(), 4);
            assert_eq!(id.get_variant(), uuid::Variant::RFC4122);
        }
    }
}
