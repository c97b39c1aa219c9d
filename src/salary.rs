//! # PPP-Normalized Daily Salary
//! Converts a raw annual salary in the user's local currency into a
//! daily salary expressed in reference-currency-equivalent units, so jobs
//! in different countries land on one comparable scale.
//!
//! Division by zero working days is deliberately left alone: an infinite
//! daily salary reads as "maximal score", not as an error.

/// PPP conversion factor of the reference locale itself (local-currency
/// units per reference-currency unit).
pub const REFERENCE_PPP: f64 = 4.19;

/// The PPP factor actually used for normalization. The reference country
/// is pinned to [`REFERENCE_PPP`]; elsewhere a non-positive user value
/// falls back to it as well.
pub fn effective_ppp(is_reference_country: bool, ppp_factor: f64) -> f64 {
    if is_reference_country || ppp_factor <= 0.0 {
        REFERENCE_PPP
    } else {
        ppp_factor
    }
}

/// Daily salary in reference-currency-equivalent units.
///
/// Zero/empty salary yields 0; zero working days yields `f64::INFINITY`.
pub fn daily_salary(
    annual_salary: f64,
    is_reference_country: bool,
    ppp_factor: f64,
    working_days: f64,
) -> f64 {
    if annual_salary <= 0.0 {
        return 0.0;
    }
    let ppp = effective_ppp(is_reference_country, ppp_factor);
    let standardized = annual_salary * (REFERENCE_PPP / ppp);
    standardized / working_days
}

/// Cosmetic reverse conversion for presentation in the local currency.
/// Does not feed back into the score.
pub fn display_salary(daily_salary_ref: f64, is_reference_country: bool, ppp_factor: f64) -> f64 {
    if is_reference_country {
        daily_salary_ref
    } else {
        daily_salary_ref * effective_ppp(false, ppp_factor) / REFERENCE_PPP
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_country_forces_reference_ppp() {
        assert_eq!(effective_ppp(true, 100.0), REFERENCE_PPP);
        assert_eq!(effective_ppp(false, 100.0), 100.0);
    }

    #[test]
    fn non_positive_ppp_falls_back() {
        assert_eq!(effective_ppp(false, 0.0), REFERENCE_PPP);
        assert_eq!(effective_ppp(false, -3.0), REFERENCE_PPP);
    }

    #[test]
    fn empty_salary_is_zero() {
        assert_eq!(daily_salary(0.0, true, REFERENCE_PPP, 234.8), 0.0);
    }

    #[test]
    fn zero_working_days_yields_infinity() {
        let d = daily_salary(300_000.0, true, REFERENCE_PPP, 0.0);
        assert!(d.is_infinite() && d > 0.0);
    }

    #[test]
    fn reference_country_daily_salary() {
        let d = daily_salary(300_000.0, true, REFERENCE_PPP, 234.8);
        assert!((d - 300_000.0 / 234.8).abs() < 1e-9);
    }

    #[test]
    fn ppp_round_trip_reproduces_local_value() {
        // US salary: factor 1.0 → normalized value is 4.19x larger, and
        // the display conversion gets the local figure back.
        let f = 1.0;
        let d_ref = daily_salary(120_000.0, false, f, 240.0);
        let local = display_salary(d_ref, false, f);
        assert!((local - 120_000.0 / 240.0).abs() < 1e-9);
    }
}
