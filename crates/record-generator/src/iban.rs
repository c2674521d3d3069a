//! Synthetic IBAN construction.
//!
//! Account identifiers are fictitious but structurally valid: the two check
//! digits are computed with the ISO 13616 mod-97 scheme over the generated
//! BBAN, so downstream consumers that validate IBANs accept them.

use rand::Rng;

/// Shape of an IBAN for one locale: ISO country prefix plus a BBAN format
/// string where `#` expands to a random digit and `?` to a random uppercase
/// letter. Any other character is kept verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IbanSpec {
    pub country: &'static str,
    pub bban_format: &'static str,
}

/// Generate one synthetic IBAN for the given spec.
pub fn generate_iban<R: Rng + ?Sized>(rng: &mut R, spec: &IbanSpec) -> String {
    let bban: String = spec
        .bban_format
        .chars()
        .map(|c| match c {
            '#' => char::from_digit(rng.random_range(0..10), 10).unwrap_or('0'),
            '?' => char::from(b'A' + rng.random_range(0..26) as u8),
            other => other,
        })
        .collect();

    let check = check_digits(spec.country, &bban);
    format!("{}{:02}{}", spec.country, check, bban)
}

/// Compute the two ISO 13616 check digits for `country` + `bban`.
///
/// The checksum input is BBAN, country code, then "00", with letters mapped
/// to 10..=35; the check digits are 98 minus the mod-97 remainder.
fn check_digits(country: &str, bban: &str) -> u32 {
    let mut remainder: u32 = 0;
    for c in bban.chars().chain(country.chars()).chain("00".chars()) {
        if let Some(d) = c.to_digit(10) {
            remainder = (remainder * 10 + d) % 97;
        } else if c.is_ascii_uppercase() {
            let v = c as u32 - 'A' as u32 + 10;
            remainder = (remainder * 100 + v) % 97;
        }
    }
    98 - remainder
}

/// Validate an IBAN with the standard rearranged mod-97 test.
///
/// Used by tests; kept here so the checksum logic lives in one place.
pub fn mod97_is_valid(iban: &str) -> bool {
    if iban.len() < 5 {
        return false;
    }
    let rearranged: String = iban.chars().skip(4).chain(iban.chars().take(4)).collect();
    let mut remainder: u32 = 0;
    for c in rearranged.chars() {
        if let Some(d) = c.to_digit(10) {
            remainder = (remainder * 10 + d) % 97;
        } else if c.is_ascii_uppercase() {
            let v = c as u32 - 'A' as u32 + 10;
            remainder = (remainder * 100 + v) % 97;
        } else {
            return false;
        }
    }
    remainder == 1
}
