//! # Working-Days Calculator
//! Effective annual working days from the weekly schedule and leave
//! entitlements. Paid sick leave only half counts as real rest, so it is
//! weighted at 60%.
//!
//! Nonsensical input (leave exceeding the schedule) is not rejected; the
//! result floors at zero.

/// Weeks in the scheduling year.
pub const WEEKS_PER_YEAR: f64 = 52.0;

/// Weight applied to paid sick leave days when subtracting leave.
pub const SICK_LEAVE_WEIGHT: f64 = 0.6;

/// Effective annual working days, never negative.
pub fn working_days(
    work_days_per_week: f64,
    annual_leave_days: f64,
    public_holiday_days: f64,
    paid_sick_leave_days: f64,
) -> f64 {
    let scheduled = WEEKS_PER_YEAR * work_days_per_week;
    let leave = annual_leave_days + public_holiday_days + paid_sick_leave_days * SICK_LEAVE_WEIGHT;
    (scheduled - leave).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typical_five_day_week() {
        // 52*5 - (5 + 13 + 12*0.6) = 260 - 25.2
        let days = working_days(5.0, 5.0, 13.0, 12.0);
        assert!((days - 234.8).abs() < 1e-9, "got {days}");
    }

    #[test]
    fn floors_at_zero_when_leave_exceeds_schedule() {
        assert_eq!(working_days(1.0, 400.0, 0.0, 0.0), 0.0);
        assert_eq!(working_days(0.0, 0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn monotone_in_each_argument() {
        let base = working_days(5.0, 5.0, 13.0, 12.0);
        assert!(working_days(6.0, 5.0, 13.0, 12.0) >= base);
        assert!(working_days(5.0, 10.0, 13.0, 12.0) <= base);
        assert!(working_days(5.0, 5.0, 20.0, 12.0) <= base);
        assert!(working_days(5.0, 5.0, 13.0, 30.0) <= base);
    }

    #[test]
    fn sick_leave_weighted_at_sixty_percent() {
        let none = working_days(5.0, 0.0, 0.0, 0.0);
        let ten = working_days(5.0, 0.0, 0.0, 10.0);
        assert!((none - ten - 6.0).abs() < 1e-9);
    }
}
