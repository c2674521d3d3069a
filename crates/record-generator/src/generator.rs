//! Main generator producing synthetic user-activity records.

use crate::record::{
    UserRecord, MAX_CONSUMED_TRAFFIC, MAX_DOWNLOAD_SPEED, MAX_SESSION_DURATION, MAX_UPLOAD_SPEED,
};
use crate::source::{FakeData, Locale};
use chrono::{Duration, Local, NaiveDateTime, Timelike};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Length of the historical window `accessed_at` is sampled from.
pub const ACCESS_WINDOW_DAYS: i64 = 365;

/// Generator that produces synthetic user-activity records.
///
/// One localized fake-data source serves the whole batch, and a seeded
/// random number generator makes runs reproducible: the same locale, seed
/// and access window yield the same records.
pub struct RecordGenerator {
    source: Box<dyn FakeData>,
    rng: StdRng,
    /// Inclusive bounds `accessed_at` is sampled from.
    window_start: NaiveDateTime,
    window_end: NaiveDateTime,
}

impl RecordGenerator {
    /// Create a generator for the given locale and seed.
    ///
    /// The access window is the year ending at construction time; use
    /// [`with_access_window`](Self::with_access_window) to pin it for
    /// byte-identical reproduction.
    pub fn new(locale: Locale, seed: u64) -> Self {
        let end = Local::now()
            .naive_local()
            .with_nanosecond(0)
            .unwrap_or_else(|| Local::now().naive_local());
        let start = end - Duration::days(ACCESS_WINDOW_DAYS);
        Self {
            source: locale.data_source(),
            rng: StdRng::seed_from_u64(seed),
            window_start: start,
            window_end: end,
        }
    }

    /// Pin the `accessed_at` sampling window.
    pub fn with_access_window(mut self, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        self.window_start = start;
        self.window_end = end;
        self
    }

    /// Generate the next record.
    ///
    /// Generation cannot fail: every field is pure data synthesis.
    pub fn next_record(&mut self) -> UserRecord {
        let rng = &mut self.rng;

        let person_name = self.source.person_name(rng);
        // user_name and the email local part derive from the name with no
        // randomness of their own.
        let user_name = person_name.replace(' ', "").to_lowercase();
        let email = format!("{user_name}@{}", self.source.free_email_domain(rng));

        let personal_number = self.source.personal_number(rng);
        let birth_date = self.source.birth_date(rng, self.window_end.date());
        let address = self.source.postal_address(rng).replace('\n', ", ");
        let phone = self.source.phone_number(rng);
        let mac_address = self.source.mac_address(rng);
        let ip_address = self.source.ipv4_address(rng);
        let iban = self.source.iban(rng);
        let accessed_at = self
            .source
            .datetime_between(rng, self.window_start, self.window_end);

        UserRecord {
            person_name,
            user_name,
            email,
            personal_number,
            birth_date,
            address,
            phone,
            mac_address,
            ip_address,
            iban,
            accessed_at,
            session_duration: rng.random_range(0..=MAX_SESSION_DURATION),
            download_speed: rng.random_range(0..=MAX_DOWNLOAD_SPEED),
            upload_speed: rng.random_range(0..=MAX_UPLOAD_SPEED),
            consumed_traffic: rng.random_range(0..=MAX_CONSUMED_TRAFFIC),
        }
    }

    /// Lazily generate `count` records.
    pub fn records(&mut self, count: u64) -> RecordIterator<'_> {
        RecordIterator {
            generator: self,
            remaining: count,
        }
    }
}

/// Iterator that lazily generates records.
pub struct RecordIterator<'a> {
    generator: &'a mut RecordGenerator,
    remaining: u64,
}

impl Iterator for RecordIterator<'_> {
    type Item = UserRecord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.generator.next_record())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RecordIterator<'_> {}
