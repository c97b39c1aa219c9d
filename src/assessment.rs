//! # Assessment Classifier
//! Maps the worth score onto the ordered tier ladder, with a "no salary
//! yet" sentinel. Labels, color identifiers and emoji are static lookup
//! data; nothing here is computed.
//!
//! Boundary convention: the upper end of each band is inclusive except
//! between the first two bands, so exactly 1.8 stays "average" and
//! exactly 4.0 stays one tier short of the top.

use serde::{Deserialize, Serialize};

/// One of the 7 ordered worth tiers, plus the "enter salary" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    NoSalary,
    Abysmal,
    Miserable,
    Average,
    Decent,
    Great,
    Excellent,
    Euphoric,
}

impl Tier {
    /// Classify a score. Total over the reals: negative, NaN and infinite
    /// scores all land somewhere (NaN compares false everywhere and ends
    /// up in the top band, which matches the "unbounded = maximal" read
    /// of a zero-working-days division).
    pub fn from_score(score: f64, has_salary: bool) -> Self {
        if !has_salary {
            Self::NoSalary
        } else if score < 0.6 {
            Self::Abysmal
        } else if score < 1.0 {
            Self::Miserable
        } else if score <= 1.8 {
            Self::Average
        } else if score <= 2.5 {
            Self::Decent
        } else if score <= 3.2 {
            Self::Great
        } else if score <= 4.0 {
            Self::Excellent
        } else {
            Self::Euphoric
        }
    }

    /// Ordinal position, 0 for the sentinel and 1..=7 for real tiers.
    pub fn ordinal(self) -> u8 {
        match self {
            Self::NoSalary => 0,
            Self::Abysmal => 1,
            Self::Miserable => 2,
            Self::Average => 3,
            Self::Decent => 4,
            Self::Great => 5,
            Self::Excellent => 6,
            Self::Euphoric => 7,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::NoSalary => "enter your annual salary",
            Self::Abysmal => "beyond miserable",
            Self::Miserable => "pretty miserable",
            Self::Average => "just average",
            Self::Decent => "quite decent",
            Self::Great => "really great",
            Self::Excellent => "incredible deal",
            Self::Euphoric => "bliss overload",
        }
    }

    /// Display color identifier consumed by the report renderer.
    pub fn color(self) -> &'static str {
        match self {
            Self::NoSalary => "text-gray-500",
            Self::Abysmal => "text-pink-800",
            Self::Miserable => "text-red-500",
            Self::Average => "text-orange-500",
            Self::Decent => "text-blue-500",
            Self::Great => "text-green-500",
            Self::Excellent => "text-purple-500",
            Self::Euphoric => "text-yellow-400",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Self::NoSalary => "🤔",
            Self::Abysmal => "😭",
            Self::Miserable => "😔",
            Self::Average => "😐",
            Self::Decent => "😊",
            Self::Great => "😁",
            Self::Excellent => "🤩",
            Self::Euphoric => "🎉",
        }
    }
}

/// Tier plus its static presentation data, ready for the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub tier: Tier,
    pub ordinal: u8,
    pub label: &'static str,
    pub color: &'static str,
    pub emoji: &'static str,
}

impl Assessment {
    pub fn of(score: f64, has_salary: bool) -> Self {
        let tier = Tier::from_score(score, has_salary);
        Self {
            tier,
            ordinal: tier.ordinal(),
            label: tier.label(),
            color: tier.color(),
            emoji: tier.emoji(),
        }
    }
}
