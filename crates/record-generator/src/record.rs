//! The synthetic user-activity record and its CSV schema.

use chrono::{NaiveDate, NaiveDateTime};

/// Column names of the generated file, in schema order.
///
/// The `unique_id` column is not part of this list: it is appended by the
/// tag pass after generation, once the row count is fixed.
pub const COLUMNS: [&str; 15] = [
    "person_name",
    "user_name",
    "email",
    "personal_number",
    "birth_date",
    "address",
    "phone",
    "mac_address",
    "ip_address",
    "iban",
    ACCESSED_AT_COLUMN,
    "session_duration",
    "download_speed",
    "upload_speed",
    "consumed_traffic",
];

/// Name of the access-timestamp column rewritten on "next" runs.
pub const ACCESSED_AT_COLUMN: &str = "accessed_at";

/// Cell format for `birth_date`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Cell format for `accessed_at`, both at generation time and when the
/// timestamp pass rewrites the column.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Inclusive upper bound for `session_duration` (seconds).
pub const MAX_SESSION_DURATION: u32 = 36_000;

/// Inclusive upper bound for `download_speed`.
pub const MAX_DOWNLOAD_SPEED: u32 = 1_000;

/// Inclusive upper bound for `upload_speed`.
pub const MAX_UPLOAD_SPEED: u32 = 800;

/// Inclusive upper bound for `consumed_traffic`.
pub const MAX_CONSUMED_TRAFFIC: u32 = 2_000_000;

/// One synthetic user-activity record.
///
/// Field order matches [`COLUMNS`] and forms the file schema.
#[derive(Debug, Clone, PartialEq)]
pub struct UserRecord {
    pub person_name: String,
    /// `person_name` with spaces removed, lowercased.
    pub user_name: String,
    /// `{user_name}@{free email domain}`.
    pub email: String,
    pub personal_number: String,
    pub birth_date: NaiveDate,
    /// Single line; source line breaks joined with ", ".
    pub address: String,
    pub phone: String,
    pub mac_address: String,
    pub ip_address: String,
    pub iban: String,
    /// Uniform within the past year at generation time; overwritten
    /// batch-wide by the timestamp pass on "next" runs.
    pub accessed_at: NaiveDateTime,
    pub session_duration: u32,
    pub download_speed: u32,
    pub upload_speed: u32,
    pub consumed_traffic: u32,
}

impl UserRecord {
    /// Convert the record to a CSV record (vector of cell strings) in
    /// [`COLUMNS`] order.
    pub fn to_csv_record(&self) -> Vec<String> {
        vec![
            self.person_name.clone(),
            self.user_name.clone(),
            self.email.clone(),
            self.personal_number.clone(),
            self.birth_date.format(DATE_FORMAT).to_string(),
            self.address.clone(),
            self.phone.clone(),
            self.mac_address.clone(),
            self.ip_address.clone(),
            self.iban.clone(),
            self.accessed_at.format(DATETIME_FORMAT).to_string(),
            self.session_duration.to_string(),
            self.download_speed.to_string(),
            self.upload_speed.to_string(),
            self.consumed_traffic.to_string(),
        ]
    }
}
