//! Localized fake-data sources.
//!
//! The [`FakeData`] trait is the "localized fake-data source" collaborator:
//! everything a record needs that depends on a language/region setting.
//! [`LocaleFaker`] implements it once, generically over the `fake` crate's
//! locale types; [`Locale`] selects the instantiation at runtime.

use crate::iban::{generate_iban, IbanSpec};
use chrono::{DateTime, Days, NaiveDate, NaiveDateTime};
use clap::ValueEnum;
use fake::faker::address::raw::{BuildingNumber, CityName, StateName, StreetName, ZipCode};
use fake::faker::impls::address::CityNameGenFn;
use fake::faker::internet::raw::{FreeEmailProvider, IPv4, MACAddress};
use fake::faker::name::raw::Name;
use fake::faker::number::raw::NumberWithFormat;
use fake::faker::phone_number::raw::PhoneNumber;
use fake::locales::{Data, AR_SA, EN, FR_FR, JA_JP, PT_BR, ZH_CN, ZH_TW};
use fake::Fake;
use rand::rngs::StdRng;
use rand::Rng;
use std::fmt;

/// Youngest generated account holder, in days.
const MIN_AGE_DAYS: u64 = 18 * 365;

/// Oldest generated account holder, in days.
const MAX_AGE_DAYS: u64 = 90 * 365;

/// A source of localized fictitious personal and network data.
///
/// All methods draw from the caller's RNG so that a seeded run reproduces
/// the same data.
pub trait FakeData {
    /// A localized full name.
    fn person_name(&self, rng: &mut StdRng) -> String;

    /// A free email provider domain, e.g. `gmail.com`.
    fn free_email_domain(&self, rng: &mut StdRng) -> String;

    /// A national-identifier-like string in the locale's format.
    fn personal_number(&self, rng: &mut StdRng) -> String;

    /// A date of birth for an adult account holder relative to `today`.
    fn birth_date(&self, rng: &mut StdRng, today: NaiveDate) -> NaiveDate;

    /// A mailing-label address; lines are separated by `\n`.
    fn postal_address(&self, rng: &mut StdRng) -> String;

    /// A phone number in the locale's format.
    fn phone_number(&self, rng: &mut StdRng) -> String;

    /// A colon-separated hex MAC address.
    fn mac_address(&self, rng: &mut StdRng) -> String;

    /// A dotted-quad IPv4 address.
    fn ipv4_address(&self, rng: &mut StdRng) -> String;

    /// A structurally valid synthetic IBAN.
    fn iban(&self, rng: &mut StdRng) -> String;

    /// A datetime uniformly sampled from `[start, end]`, to whole seconds.
    fn datetime_between(
        &self,
        rng: &mut StdRng,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> NaiveDateTime;
}

/// Per-locale data the `fake` crate does not carry: the national-identifier
/// digit format and the IBAN shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleProfile {
    /// `NumberWithFormat` pattern: `#` is a digit, `^` a non-zero digit.
    pub personal_number_format: &'static str,
    pub iban: IbanSpec,
}

/// [`FakeData`] implementation backed by one `fake` locale.
///
/// `CityNameGenFn` is the extra bound city synthesis needs; every locale in
/// [`Locale`] implements it.
pub struct LocaleFaker<L: Data + Copy + CityNameGenFn> {
    locale: L,
    profile: LocaleProfile,
}

impl<L: Data + Copy + CityNameGenFn> LocaleFaker<L> {
    pub fn new(locale: L, profile: LocaleProfile) -> Self {
        Self { locale, profile }
    }
}

impl<L: Data + Copy + CityNameGenFn> FakeData for LocaleFaker<L> {
    fn person_name(&self, rng: &mut StdRng) -> String {
        Name(self.locale).fake_with_rng(rng)
    }

    fn free_email_domain(&self, rng: &mut StdRng) -> String {
        FreeEmailProvider(self.locale).fake_with_rng(rng)
    }

    fn personal_number(&self, rng: &mut StdRng) -> String {
        NumberWithFormat(self.locale, self.profile.personal_number_format).fake_with_rng(rng)
    }

    fn birth_date(&self, rng: &mut StdRng, today: NaiveDate) -> NaiveDate {
        let age_days = rng.random_range(MIN_AGE_DAYS..=MAX_AGE_DAYS);
        today.checked_sub_days(Days::new(age_days)).unwrap_or(today)
    }

    fn postal_address(&self, rng: &mut StdRng) -> String {
        let building: String = BuildingNumber(self.locale).fake_with_rng(rng);
        let street: String = StreetName(self.locale).fake_with_rng(rng);
        let city: String = CityName(self.locale).fake_with_rng(rng);
        let state: String = StateName(self.locale).fake_with_rng(rng);
        let zip: String = ZipCode(self.locale).fake_with_rng(rng);
        format!("{building} {street}\n{city}, {state} {zip}")
    }

    fn phone_number(&self, rng: &mut StdRng) -> String {
        PhoneNumber(self.locale).fake_with_rng(rng)
    }

    fn mac_address(&self, rng: &mut StdRng) -> String {
        MACAddress(self.locale).fake_with_rng(rng)
    }

    fn ipv4_address(&self, rng: &mut StdRng) -> String {
        IPv4(self.locale).fake_with_rng(rng)
    }

    fn iban(&self, rng: &mut StdRng) -> String {
        generate_iban(rng, &self.profile.iban)
    }

    fn datetime_between(
        &self,
        rng: &mut StdRng,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> NaiveDateTime {
        let start_ts = start.and_utc().timestamp();
        let end_ts = end.and_utc().timestamp();
        if start_ts >= end_ts {
            return start;
        }
        let ts = rng.random_range(start_ts..=end_ts);
        DateTime::from_timestamp(ts, 0)
            .map(|dt| dt.naive_utc())
            .unwrap_or(start)
    }
}

/// Supported fake-data locales.
///
/// The set follows what the `fake` crate ships. Locale is fixed for a whole
/// batch and selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Locale {
    /// English
    En,
    /// French (France)
    FrFr,
    /// Portuguese (Brazil)
    PtBr,
    /// Japanese
    JaJp,
    /// Chinese (Simplified)
    ZhCn,
    /// Chinese (Traditional)
    ZhTw,
    /// Arabic (Saudi Arabia)
    ArSa,
}

impl Locale {
    /// Every supported locale, for exhaustive tests.
    pub const ALL: [Locale; 7] = [
        Locale::En,
        Locale::FrFr,
        Locale::PtBr,
        Locale::JaJp,
        Locale::ZhCn,
        Locale::ZhTw,
        Locale::ArSa,
    ];

    /// Box the [`FakeData`] source for this locale.
    pub fn data_source(self) -> Box<dyn FakeData> {
        let profile = self.profile();
        match self {
            Locale::En => Box::new(LocaleFaker::new(EN, profile)),
            Locale::FrFr => Box::new(LocaleFaker::new(FR_FR, profile)),
            Locale::PtBr => Box::new(LocaleFaker::new(PT_BR, profile)),
            Locale::JaJp => Box::new(LocaleFaker::new(JA_JP, profile)),
            Locale::ZhCn => Box::new(LocaleFaker::new(ZH_CN, profile)),
            Locale::ZhTw => Box::new(LocaleFaker::new(ZH_TW, profile)),
            Locale::ArSa => Box::new(LocaleFaker::new(AR_SA, profile)),
        }
    }

    // Locales without a national IBAN format fall back to the British shape.
    fn profile(self) -> LocaleProfile {
        const GB_IBAN: IbanSpec = IbanSpec {
            country: "GB",
            bban_format: "????##############",
        };
        match self {
            Locale::En => LocaleProfile {
                personal_number_format: "###-##-####",
                iban: GB_IBAN,
            },
            Locale::FrFr => LocaleProfile {
                personal_number_format: "# ## ## ## ### ### ##",
                iban: IbanSpec {
                    country: "FR",
                    bban_format: "#######################",
                },
            },
            Locale::PtBr => LocaleProfile {
                personal_number_format: "###.###.###-##",
                iban: IbanSpec {
                    country: "BR",
                    bban_format: "#######################?#",
                },
            },
            Locale::JaJp => LocaleProfile {
                personal_number_format: "#### #### ####",
                iban: GB_IBAN,
            },
            Locale::ZhCn => LocaleProfile {
                personal_number_format: "^#################",
                iban: GB_IBAN,
            },
            Locale::ZhTw => LocaleProfile {
                personal_number_format: "##########",
                iban: GB_IBAN,
            },
            Locale::ArSa => LocaleProfile {
                personal_number_format: "#-####-####-#",
                iban: IbanSpec {
                    country: "SA",
                    bban_format: "####################",
                },
            },
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Locale::En => "en",
            Locale::FrFr => "fr-fr",
            Locale::PtBr => "pt-br",
            Locale::JaJp => "ja-jp",
            Locale::ZhCn => "zh-cn",
            Locale::ZhTw => "zh-tw",
            Locale::ArSa => "ar-sa",
        };
        f.write_str(name)
    }
}
