//! # Country / PPP Table
//!
//! Static mapping of country code → (display name, PPP conversion factor
//! relative to the reference currency), used to prefill the form's PPP
//! field and to answer `/countries`.
//!
//! - Loads from a JSON config file (code → name + ppp).
//! - Case-insensitive lookup on trimmed codes.
//! - Fallback order: explicit entry → reference factor.
//! - Includes a built-in `default_seed()` with common countries.
//!
//! Designed to be simple, testable, and resilient to noisy input.

use std::{collections::BTreeMap, fs, path::Path};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::salary::REFERENCE_PPP;

static SEED: Lazy<CountryTable> = Lazy::new(CountryTable::default_seed);

/// One row of the table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryEntry {
    pub name: String,
    /// Local-currency units per reference-currency unit.
    pub ppp: f64,
}

/// The full table, loaded from JSON or seeded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryTable {
    /// Code of the reference country whose PPP factor anchors the scale.
    #[serde(default = "default_reference")]
    pub reference: String,
    #[serde(default)]
    pub countries: BTreeMap<String, CountryEntry>,
}

fn default_reference() -> String {
    "cn".to_string()
}

impl CountryTable {
    /// Load the table from a JSON file.
    /// Falls back to `default_seed()` on error.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Self {
        match fs::read_to_string(path) {
            Ok(s) => serde_json::from_str(&s).unwrap_or_else(|_| SEED.clone()),
            Err(_) => SEED.clone(),
        }
    }

    /// PPP factor for a country code; unknown codes get the reference
    /// factor, which keeps the engine's "no validation" posture.
    pub fn ppp_for(&self, code: &str) -> f64 {
        let c = normalize(code);
        if self.is_reference(&c) {
            return REFERENCE_PPP;
        }
        self.countries
            .get(&c)
            .map(|e| e.ppp)
            .filter(|&p| p > 0.0)
            .unwrap_or(REFERENCE_PPP)
    }

    pub fn is_reference(&self, code: &str) -> bool {
        normalize(code) == normalize(&self.reference)
    }

    /// Built-in seed with common countries and World Bank style PPP
    /// conversion factors. Used as fallback if no config is found.
    pub(crate) fn default_seed() -> Self {
        let mut countries = BTreeMap::new();
        for (code, name, ppp) in [
            ("cn", "China (mainland)", 4.19),
            ("us", "United States", 1.00),
            ("jp", "Japan", 102.59),
            ("sg", "Singapore", 0.84),
            ("hk", "Hong Kong SAR", 6.07),
            ("tw", "Taiwan", 15.22),
            ("kr", "South Korea", 861.82),
            ("gb", "United Kingdom", 0.70),
            ("de", "Germany", 0.75),
            ("fr", "France", 0.73),
            ("it", "Italy", 0.66),
            ("es", "Spain", 0.62),
            ("nl", "Netherlands", 0.77),
            ("ch", "Switzerland", 1.14),
            ("se", "Sweden", 8.77),
            ("ca", "Canada", 1.21),
            ("au", "Australia", 1.47),
            ("nz", "New Zealand", 1.45),
            ("in", "India", 22.88),
            ("id", "Indonesia", 4673.65),
            ("vn", "Vietnam", 7473.67),
            ("th", "Thailand", 12.34),
            ("my", "Malaysia", 1.57),
            ("ph", "Philippines", 19.51),
            ("br", "Brazil", 2.36),
            ("mx", "Mexico", 9.52),
            ("ru", "Russia", 25.88),
        ] {
            countries.insert(
                code.to_string(),
                CountryEntry {
                    name: name.to_string(),
                    ppp,
                },
            );
        }

        Self {
            reference: default_reference(),
            countries,
        }
    }
}

/// Normalize a country code: trimmed, lowercase.
fn normalize(code: &str) -> String {
    code.trim().to_ascii_lowercase()
}
