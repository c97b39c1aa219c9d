//! # Education Factor
//! Derives the education multiplier from degree and school-tier choices.
//! Master's degrees stack an undergraduate base (from the bachelor's
//! pedigree) with a bonus for the master's program itself.

use crate::inputs::{DegreeType, SchoolTier};

fn bachelor_base(tier: SchoolTier) -> f64 {
    match tier {
        SchoolTier::SecondTier => 0.9,
        SchoolTier::FirstTier => 1.0,
        SchoolTier::Elite => 1.2,
    }
}

fn masters_bonus(tier: SchoolTier) -> f64 {
    match tier {
        SchoolTier::SecondTier => 0.4,
        SchoolTier::FirstTier => 0.5,
        SchoolTier::Elite => 0.6,
    }
}

/// Education multiplier. `school_tier` rates the highest degree's program;
/// `bachelor_tier` is consulted only for master's holders.
pub fn education_factor(
    degree: DegreeType,
    school_tier: SchoolTier,
    bachelor_tier: SchoolTier,
) -> f64 {
    match degree {
        DegreeType::BelowBachelor => 0.8,
        DegreeType::Bachelor => bachelor_base(school_tier),
        DegreeType::Masters => bachelor_base(bachelor_tier) + masters_bonus(school_tier),
        DegreeType::Phd => match school_tier {
            SchoolTier::SecondTier => 1.6,
            SchoolTier::FirstTier => 1.8,
            SchoolTier::Elite => 2.0,
        },
    }
}
