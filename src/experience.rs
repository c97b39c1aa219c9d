//! # Experience Salary Multiplier
//! How much more a tenured employee's salary "should" be. The expected
//! growth discounts the perceived value of a given salary for senior
//! candidates; stable contract types grow slower, so their expectation is
//! damped toward 1.

use crate::inputs::EmploymentType;

/// Ordered `(upper bound on years, multiplier)` ladder; the first bound
/// that is >= the raw years value wins. Comparisons use the raw number,
/// so 2 lands in the "<= 3" bucket and 4 in "<= 5".
const SALARY_GROWTH_LADDER: [(f64, f64); 6] = [
    (0.0, 1.0),
    (1.0, 1.5),
    (3.0, 2.2),
    (5.0, 2.7),
    (8.0, 3.2),
    (10.0, 3.6),
];

/// Multiplier beyond the last ladder bound.
const SALARY_GROWTH_CEILING: f64 = 3.9;

/// Base expected-salary growth for the given years of experience.
pub fn base_salary_multiplier(work_years: f64) -> f64 {
    for (bound, multiplier) in SALARY_GROWTH_LADDER {
        if work_years <= bound {
            return multiplier;
        }
    }
    SALARY_GROWTH_CEILING
}

/// Growth expectation after damping by the contract type:
/// `1 + (base - 1) * damping`.
pub fn experience_salary_multiplier(work_years: f64, employment: EmploymentType) -> f64 {
    1.0 + (base_salary_multiplier(work_years) - 1.0) * employment.growth_damping()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ladder_boundaries_are_exact() {
        assert_eq!(base_salary_multiplier(0.0), 1.0);
        assert_eq!(base_salary_multiplier(1.0), 1.5);
        assert_eq!(base_salary_multiplier(2.0), 2.2);
        assert_eq!(base_salary_multiplier(3.0), 2.2);
        assert_eq!(base_salary_multiplier(4.0), 2.7);
        assert_eq!(base_salary_multiplier(5.0), 2.7);
        assert_eq!(base_salary_multiplier(6.0), 3.2);
        assert_eq!(base_salary_multiplier(8.0), 3.2);
        assert_eq!(base_salary_multiplier(10.0), 3.6);
        assert_eq!(base_salary_multiplier(15.0), 3.9);
    }

    #[test]
    fn private_sector_keeps_full_growth() {
        let m = experience_salary_multiplier(10.0, EmploymentType::Private);
        assert!((m - 3.6).abs() < 1e-12);
    }

    #[test]
    fn government_post_damps_growth_hardest() {
        // 1 + (3.6 - 1) * 0.2 = 1.52
        let m = experience_salary_multiplier(10.0, EmploymentType::Government);
        assert!((m - 1.52).abs() < 1e-12);
    }

    #[test]
    fn fresh_graduate_is_neutral_for_every_contract() {
        for e in [
            EmploymentType::Private,
            EmploymentType::Foreign,
            EmploymentType::State,
            EmploymentType::Government,
        ] {
            assert_eq!(experience_salary_multiplier(0.0, e), 1.0);
        }
    }
}
