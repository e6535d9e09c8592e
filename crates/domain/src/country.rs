//! Country to timezone lookup table.
//!
//! The table is fixed at compile time and materialized once per process.
//! Country names double as the selector labels, so the sorted key list is
//! exactly what the main screen binds to its drop-down.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use chrono_tz::Tz;

use crate::error::{DomainError, DomainResult};

/// Country display names paired with their primary IANA timezone.
pub const COUNTRY_TIME_ZONES: &[(&str, &str)] = &[
    ("United States", "America/New_York"),
    ("United Kingdom", "Europe/London"),
    ("France", "Europe/Paris"),
    ("Germany", "Europe/Berlin"),
    ("India", "Asia/Kolkata"),
    ("China", "Asia/Shanghai"),
    ("Japan", "Asia/Tokyo"),
    ("Australia", "Australia/Sydney"),
    ("Brazil", "America/Sao_Paulo"),
    ("Canada", "America/Toronto"),
    ("Mexico", "America/Mexico_City"),
    ("Russia", "Europe/Moscow"),
    ("South Africa", "Africa/Johannesburg"),
    ("Italy", "Europe/Rome"),
    ("Spain", "Europe/Madrid"),
    ("Netherlands", "Europe/Amsterdam"),
    ("Turkey", "Europe/Istanbul"),
    ("Argentina", "America/Argentina/Buenos_Aires"),
    ("New Zealand", "Pacific/Auckland"),
    ("Saudi Arabia", "Asia/Riyadh"),
    ("Iran", "Asia/Tehran"),
    ("United Arab Emirates", "Asia/Dubai"),
    ("South Korea", "Asia/Seoul"),
    ("Singapore", "Asia/Singapore"),
    ("Thailand", "Asia/Bangkok"),
    ("Malaysia", "Asia/Kuala_Lumpur"),
    ("Vietnam", "Asia/Ho_Chi_Minh"),
    ("Pakistan", "Asia/Karachi"),
    ("Bangladesh", "Asia/Dhaka"),
    ("Colombia", "America/Bogota"),
    ("Chile", "America/Santiago"),
    ("Peru", "America/Lima"),
    ("Poland", "Europe/Warsaw"),
    ("Greece", "Europe/Athens"),
];

static GLOBAL: LazyLock<CountryTable> = LazyLock::new(|| CountryTable::new(COUNTRY_TIME_ZONES));

/// Parses an IANA identifier into a timezone.
///
/// # Errors
///
/// Returns [`DomainError::UnknownTimeZone`] if the identifier is not in the
/// timezone database.
pub fn parse_zone(id: &str) -> DomainResult<Tz> {
    id.parse::<Tz>()
        .map_err(|_| DomainError::UnknownTimeZone(id.to_string()))
}

/// Outcome of resolving a country to a timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneLookup {
    /// The country was found and its identifier parsed.
    Matched(Tz),
    /// The country was missing (or its identifier did not parse).
    Fallback(Tz),
}

impl ZoneLookup {
    /// Returns the resolved timezone regardless of how it was obtained.
    #[must_use]
    pub const fn zone(self) -> Tz {
        match self {
            Self::Matched(tz) | Self::Fallback(tz) => tz,
        }
    }

    /// Returns true if the fallback zone was used.
    #[must_use]
    pub const fn is_fallback(self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

/// Immutable lookup from country name to timezone identifier.
#[derive(Debug, Clone)]
pub struct CountryTable {
    zones: BTreeMap<&'static str, &'static str>,
    names: Vec<&'static str>,
}

impl CountryTable {
    /// Builds a table from `(country, zone)` pairs.
    ///
    /// Later duplicates of a country name replace earlier ones.
    #[must_use]
    pub fn new(entries: &[(&'static str, &'static str)]) -> Self {
        let zones: BTreeMap<_, _> = entries.iter().copied().collect();
        let names = zones.keys().copied().collect();
        Self { zones, names }
    }

    /// Returns the process-wide table built from [`COUNTRY_TIME_ZONES`].
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Country names in ascending lexicographic order.
    #[must_use]
    pub fn country_names(&self) -> &[&'static str] {
        &self.names
    }

    /// Number of distinct countries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns the country shown at `index` in the sorted list.
    #[must_use]
    pub fn name_at(&self, index: usize) -> Option<&'static str> {
        self.names.get(index).copied()
    }

    /// Returns the raw IANA identifier for a country.
    #[must_use]
    pub fn zone_id(&self, country: &str) -> Option<&'static str> {
        self.zones.get(country).copied()
    }

    /// Resolves a country, falling back to GMT.
    #[must_use]
    pub fn resolve(&self, country: &str) -> ZoneLookup {
        self.resolve_or(country, Tz::GMT)
    }

    /// Resolves a country, falling back to `fallback`.
    #[must_use]
    pub fn resolve_or(&self, country: &str, fallback: Tz) -> ZoneLookup {
        self.zone_id(country)
            .and_then(|id| parse_zone(id).ok())
            .map_or(ZoneLookup::Fallback(fallback), ZoneLookup::Matched)
    }
}
