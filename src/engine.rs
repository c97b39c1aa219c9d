//! # Worth Score Engine
//! Pure, testable logic that maps `WorkInputs` → `WorthResult`.
//! No I/O, no state; calling it twice with identical inputs yields
//! bit-identical output.
//!
//! Policy: no validation, graceful numeric degradation. Zero working days
//! propagates infinity, an oversized rest entry can flip the denominator
//! negative, and neither case raises an error. The formula is preserved
//! as specified rather than guarded.

use serde::Serialize;

use crate::assessment::Assessment;
use crate::education::education_factor;
use crate::experience::experience_salary_multiplier;
use crate::inputs::WorkInputs;
use crate::salary::{daily_salary, display_salary};
use crate::schedule::working_days;

/// Scale constant in the denominator; calibrates the score so that an
/// ordinary 5-day, 10-hour job at a median salary lands near 1.0.
const HOURLY_BASELINE: f64 = 35.0;

/// Hometown jobs get a flat bonus on the composite environment factor.
const HOME_TOWN_BONUS: f64 = 1.4;

/// Everything the report side needs: the score, the intermediate values
/// it restates, and the assessment tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorthResult {
    /// Dimensionless cost/benefit score; higher is better. Exactly 0 when
    /// no salary has been entered.
    pub score: f64,
    pub working_days: f64,
    /// Daily salary in reference-currency-equivalent units.
    pub daily_salary: f64,
    /// Daily salary converted back to the local currency, for display.
    pub display_salary: f64,
    pub assessment: Assessment,
}

/// Evaluate the full worth formula for one input record.
pub fn evaluate(inputs: &WorkInputs) -> WorthResult {
    let days = working_days(
        inputs.work_days_per_week,
        inputs.annual_leave_days,
        inputs.public_holiday_days,
        inputs.paid_sick_leave_days,
    );
    let daily = daily_salary(
        inputs.annual_salary,
        inputs.is_reference_country,
        inputs.ppp_factor,
        days,
    );
    let shown = display_salary(daily, inputs.is_reference_country, inputs.ppp_factor);

    if !inputs.has_salary() {
        // Sentinel: "not yet computed", not a measured score of zero.
        return WorthResult {
            score: 0.0,
            working_days: days,
            daily_salary: 0.0,
            display_salary: 0.0,
            assessment: Assessment::of(0.0, false),
        };
    }

    let wfh = inputs
        .wfh_days_per_week
        .max(0.0)
        .min(inputs.work_days_per_week);
    let office_days_ratio = if inputs.work_days_per_week > 0.0 {
        (inputs.work_days_per_week - wfh) / inputs.work_days_per_week
    } else {
        0.0
    };
    let effective_commute =
        inputs.commute_hours_per_day * office_days_ratio * inputs.shuttle.factor();

    let home_town = if inputs.is_home_town { HOME_TOWN_BONUS } else { 1.0 };
    let environment = inputs.work_environment.factor()
        * inputs.leadership.factor()
        * inputs.teamwork.factor()
        * inputs.city_tier.factor()
        * inputs.canteen.factor()
        * home_town;

    let education = education_factor(
        inputs.degree_type,
        inputs.school_tier,
        inputs.bachelor_tier,
    );
    let experience = experience_salary_multiplier(inputs.work_years, inputs.employment_type);

    let effective_hours =
        inputs.work_hours_per_day + effective_commute - 0.5 * inputs.rest_hours_per_day;
    let denominator = HOURLY_BASELINE * effective_hours * education * experience;

    let score = daily * environment / denominator;

    WorthResult {
        score,
        working_days: days,
        daily_salary: daily,
        display_salary: shown,
        assessment: Assessment::of(score, true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::Tier;
    use crate::inputs::{EmploymentType, Shuttle};

    fn baseline() -> WorkInputs {
        WorkInputs {
            annual_salary: 300_000.0,
            paid_sick_leave_days: 12.0,
            ..WorkInputs::default()
        }
    }

    #[test]
    fn worked_example_scores_tier_six() {
        // 234.8 working days, 300000/234.8 daily, denominator
        // 35*(10+2-1) = 385, score ~ 3.3186.
        let r = evaluate(&baseline());
        assert!((r.working_days - 234.8).abs() < 1e-9);
        assert!((r.daily_salary - 300_000.0 / 234.8).abs() < 1e-9);
        let expected = (300_000.0 / 234.8) / 385.0;
        assert!((r.score - expected).abs() < 1e-12, "score {}", r.score);
        assert!(r.score > 3.2 && r.score <= 4.0);
        assert_eq!(r.assessment.tier, Tier::Excellent);
    }

    #[test]
    fn empty_salary_is_the_sentinel() {
        let mut inputs = baseline();
        inputs.annual_salary = 0.0;
        let r = evaluate(&inputs);
        assert_eq!(r.score, 0.0);
        assert_eq!(r.assessment.tier, Tier::NoSalary);
        // working days are still reported for the form footer
        assert!((r.working_days - 234.8).abs() < 1e-9);
    }

    #[test]
    fn full_remote_cancels_commute() {
        let mut inputs = baseline();
        inputs.wfh_days_per_week = 5.0;
        let r = evaluate(&inputs);
        // denominator becomes 35*(10+0-1) = 315
        let expected = (300_000.0 / 234.8) / 315.0;
        assert!((r.score - expected).abs() < 1e-12);
    }

    #[test]
    fn wfh_days_clamp_to_the_work_week() {
        let mut a = baseline();
        a.wfh_days_per_week = 5.0;
        let mut b = baseline();
        b.wfh_days_per_week = 9.0;
        assert_eq!(evaluate(&a).score, evaluate(&b).score);
    }

    #[test]
    fn shuttle_discounts_effective_commute() {
        let mut inputs = baseline();
        inputs.shuttle = Shuttle::DoorToDoor;
        let r = evaluate(&inputs);
        // commute 2h * 0.5 shuttle = 1h; denominator 35*(10+1-1) = 350
        let expected = (300_000.0 / 234.8) / 350.0;
        assert!((r.score - expected).abs() < 1e-12);
    }

    #[test]
    fn home_town_bonus_multiplies_environment() {
        let away = evaluate(&baseline());
        let mut inputs = baseline();
        inputs.is_home_town = true;
        let home = evaluate(&inputs);
        assert!((home.score / away.score - 1.4).abs() < 1e-12);
    }

    #[test]
    fn senior_government_tenure_discounts_less_than_private() {
        let mut gov = baseline();
        gov.work_years = 10.0;
        gov.employment_type = EmploymentType::Government;
        let mut private = baseline();
        private.work_years = 10.0;
        private.employment_type = EmploymentType::Private;
        // same salary reads as a better deal on a damped growth curve
        assert!(evaluate(&gov).score > evaluate(&private).score);
    }

    #[test]
    fn zero_working_days_propagates_infinity() {
        let mut inputs = baseline();
        inputs.work_days_per_week = 0.0;
        inputs.annual_leave_days = 0.0;
        inputs.public_holiday_days = 0.0;
        inputs.paid_sick_leave_days = 0.0;
        let r = evaluate(&inputs);
        assert_eq!(r.working_days, 0.0);
        assert!(r.daily_salary.is_infinite());
        // office ratio is 0 with a zero-day week, commute drops out,
        // denominator stays finite, score rides the infinity up.
        assert!(r.score.is_infinite());
        assert_eq!(r.assessment.tier, Tier::Euphoric);
    }

    #[test]
    fn oversized_rest_flips_the_score_negative() {
        let mut inputs = baseline();
        inputs.rest_hours_per_day = 30.0;
        let r = evaluate(&inputs);
        assert!(r.score < 0.0);
        assert_eq!(r.assessment.tier, Tier::Abysmal);
    }

    #[test]
    fn evaluation_is_deterministic() {
        let inputs = baseline();
        let a = evaluate(&inputs);
        let b = evaluate(&inputs);
        assert_eq!(a.score.to_bits(), b.score.to_bits());
        assert_eq!(a, b);
    }
}
