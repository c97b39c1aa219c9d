//! # Work Inputs
//!
//! The flat record of salary and working-condition parameters the engine
//! evaluates, plus the categorical factor enums behind it.
//!
//! Every rating the form UI offers is a proper tagged enum mapped through
//! an explicit table to its numeric multiplier; the engine never compares
//! stringified floats. Deserialization is lenient: a key outside the
//! enumeration falls back to the default variant instead of erroring, so
//! the engine stays total over whatever the collector sends.

use serde::{Deserialize, Deserializer, Serialize};

/// Lookup by wire key with a silent fallback to the default variant.
pub trait FactorKey: Default {
    fn from_key(key: &str) -> Self;
}

/// Lenient enum field deserializer: missing or unknown keys become the
/// default variant rather than a deserialization error.
pub(crate) fn lenient<'de, D, T>(de: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FactorKey,
{
    let raw = Option::<String>::deserialize(de)?;
    Ok(raw.as_deref().map(T::from_key).unwrap_or_default())
}

/// Office surroundings rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum WorkEnvironment {
    /// Factory, construction site or outdoor work in a remote area.
    RemoteSite,
    /// Factory, construction site or outdoor work.
    Factory,
    #[default]
    Ordinary,
    Cbd,
}

impl WorkEnvironment {
    pub fn factor(self) -> f64 {
        match self {
            Self::RemoteSite => 0.8,
            Self::Factory => 0.9,
            Self::Ordinary => 1.0,
            Self::Cbd => 1.1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::RemoteSite => "remote factory / site / outdoor",
            Self::Factory => "factory / site / outdoor",
            Self::Ordinary => "ordinary office",
            Self::Cbd => "CBD office",
        }
    }

    /// Resolve the stringified multiplier the share link carries.
    pub fn from_factor_key(key: &str) -> Self {
        match key {
            "0.8" => Self::RemoteSite,
            "0.9" => Self::Factory,
            "1.1" => Self::Cbd,
            _ => Self::Ordinary,
        }
    }
}

impl FactorKey for WorkEnvironment {
    fn from_key(key: &str) -> Self {
        match key {
            "remoteSite" => Self::RemoteSite,
            "factory" => Self::Factory,
            "cbd" => Self::Cbd,
            _ => Self::Ordinary,
        }
    }
}

/// City cost-of-living tier. Lower tiers have higher living costs, so the
/// multiplier rises as the city gets smaller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CityTier {
    TierOne,
    NewTierOne,
    #[default]
    TierTwo,
    TierThree,
    TierFour,
    County,
    Township,
}

impl CityTier {
    pub fn factor(self) -> f64 {
        match self {
            Self::TierOne => 0.70,
            Self::NewTierOne => 0.80,
            Self::TierTwo => 1.0,
            Self::TierThree => 1.10,
            Self::TierFour => 1.25,
            Self::County => 1.40,
            Self::Township => 1.50,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::TierOne => "tier-1 city",
            Self::NewTierOne => "new tier-1 city",
            Self::TierTwo => "tier-2 city",
            Self::TierThree => "tier-3 city",
            Self::TierFour => "tier-4 city",
            Self::County => "county town",
            Self::Township => "township",
        }
    }

    pub fn from_factor_key(key: &str) -> Self {
        match key {
            "0.70" => Self::TierOne,
            "0.80" => Self::NewTierOne,
            "1.0" => Self::TierTwo,
            "1.25" => Self::TierFour,
            "1.40" => Self::County,
            "1.50" => Self::Township,
            _ => Self::TierThree,
        }
    }
}

impl FactorKey for CityTier {
    fn from_key(key: &str) -> Self {
        match key {
            "tierOne" => Self::TierOne,
            "newTierOne" => Self::NewTierOne,
            "tierThree" => Self::TierThree,
            "tierFour" => Self::TierFour,
            "county" => Self::County,
            "township" => Self::Township,
            _ => Self::TierTwo,
        }
    }
}

/// Relationship with the boss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Leadership {
    Hostile,
    Strict,
    #[default]
    Average,
    Supportive,
    Protege,
}

impl Leadership {
    pub fn factor(self) -> f64 {
        match self {
            Self::Hostile => 0.7,
            Self::Strict => 0.9,
            Self::Average => 1.0,
            Self::Supportive => 1.1,
            Self::Protege => 1.3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Hostile => "has it in for me",
            Self::Strict => "strict management",
            Self::Average => "by the book",
            Self::Supportive => "understanding",
            Self::Protege => "I'm the favorite",
        }
    }

    pub fn from_factor_key(key: &str) -> Self {
        match key {
            "0.7" => Self::Hostile,
            "0.9" => Self::Strict,
            "1.1" => Self::Supportive,
            "1.3" => Self::Protege,
            _ => Self::Average,
        }
    }
}

impl FactorKey for Leadership {
    fn from_key(key: &str) -> Self {
        match key {
            "hostile" => Self::Hostile,
            "strict" => Self::Strict,
            "supportive" => Self::Supportive,
            "protege" => Self::Protege,
            _ => Self::Average,
        }
    }
}

/// Coworker atmosphere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Teamwork {
    Toxic,
    #[default]
    Neutral,
    Friendly,
    CloseKnit,
}

impl Teamwork {
    pub fn factor(self) -> f64 {
        match self {
            Self::Toxic => 0.9,
            Self::Neutral => 1.0,
            Self::Friendly => 1.1,
            Self::CloseKnit => 1.2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Toxic => "mostly insufferable",
            Self::Neutral => "passing acquaintances",
            Self::Friendly => "warm and helpful",
            Self::CloseKnit => "genuine friends",
        }
    }

    pub fn from_factor_key(key: &str) -> Self {
        match key {
            "0.9" => Self::Toxic,
            "1.1" => Self::Friendly,
            "1.2" => Self::CloseKnit,
            _ => Self::Neutral,
        }
    }
}

impl FactorKey for Teamwork {
    fn from_key(key: &str) -> Self {
        match key {
            "toxic" => Self::Toxic,
            "friendly" => Self::Friendly,
            "closeKnit" => Self::CloseKnit,
            _ => Self::Neutral,
        }
    }
}

/// Company shuttle service. A good shuttle discounts the commute burden,
/// so the factor scales the effective commute hours downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Shuttle {
    #[default]
    None,
    Inconvenient,
    Convenient,
    DoorToDoor,
}

impl Shuttle {
    pub fn factor(self) -> f64 {
        match self {
            Self::None => 1.0,
            Self::Inconvenient => 0.9,
            Self::Convenient => 0.7,
            Self::DoorToDoor => 0.5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::None => "no shuttle",
            Self::Inconvenient => "shuttle, but awkward",
            Self::Convenient => "convenient shuttle",
            Self::DoorToDoor => "door-to-door shuttle",
        }
    }

    pub fn from_factor_key(key: &str) -> Self {
        match key {
            "0.9" => Self::Inconvenient,
            "0.7" => Self::Convenient,
            "0.5" => Self::DoorToDoor,
            _ => Self::None,
        }
    }
}

impl FactorKey for Shuttle {
    fn from_key(key: &str) -> Self {
        match key {
            "inconvenient" => Self::Inconvenient,
            "convenient" => Self::Convenient,
            "doorToDoor" => Self::DoorToDoor,
            _ => Self::None,
        }
    }
}

/// Canteen quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Canteen {
    #[default]
    None,
    Average,
    Good,
    Excellent,
}

impl Canteen {
    pub fn factor(self) -> f64 {
        match self {
            Self::None => 1.0,
            Self::Average => 1.05,
            Self::Good => 1.1,
            Self::Excellent => 1.15,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::None => "no canteen / barely edible",
            Self::Average => "canteen, nothing special",
            Self::Good => "decent canteen",
            Self::Excellent => "outstanding canteen",
        }
    }

    pub fn from_factor_key(key: &str) -> Self {
        match key {
            "1.05" => Self::Average,
            "1.1" => Self::Good,
            "1.15" => Self::Excellent,
            _ => Self::None,
        }
    }
}

impl FactorKey for Canteen {
    fn from_key(key: &str) -> Self {
        match key {
            "average" => Self::Average,
            "good" => Self::Good,
            "excellent" => Self::Excellent,
            _ => Self::None,
        }
    }
}

/// Contract type; dampens the experience-based salary growth expectation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum EmploymentType {
    #[default]
    Private,
    Foreign,
    State,
    Government,
}

impl EmploymentType {
    pub fn growth_damping(self) -> f64 {
        match self {
            Self::Private => 1.0,
            Self::Foreign => 0.8,
            Self::State => 0.4,
            Self::Government => 0.2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Private => "private-sector contract",
            Self::Foreign => "foreign-company contract",
            Self::State => "long-term state employment",
            Self::Government => "permanent government post",
        }
    }
}

impl FactorKey for EmploymentType {
    fn from_key(key: &str) -> Self {
        match key {
            "foreign" => Self::Foreign,
            "state" => Self::State,
            "government" => Self::Government,
            _ => Self::Private,
        }
    }
}

/// Highest degree held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DegreeType {
    BelowBachelor,
    #[default]
    Bachelor,
    Masters,
    Phd,
}

impl DegreeType {
    pub fn label(self) -> &'static str {
        match self {
            Self::BelowBachelor => "associate or below",
            Self::Bachelor => "bachelor's degree",
            Self::Masters => "master's degree",
            Self::Phd => "doctorate",
        }
    }
}

impl FactorKey for DegreeType {
    fn from_key(key: &str) -> Self {
        match key {
            "belowBachelor" => Self::BelowBachelor,
            "masters" => Self::Masters,
            "phd" => Self::Phd,
            _ => Self::Bachelor,
        }
    }
}

/// School prestige tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SchoolTier {
    SecondTier,
    #[default]
    FirstTier,
    Elite,
}

impl SchoolTier {
    pub fn label(self) -> &'static str {
        match self {
            Self::SecondTier => "second-tier school",
            Self::FirstTier => "first-tier school",
            Self::Elite => "elite school",
        }
    }
}

impl FactorKey for SchoolTier {
    fn from_key(key: &str) -> Self {
        match key {
            "secondTier" => Self::SecondTier,
            "elite" => Self::Elite,
            _ => Self::FirstTier,
        }
    }
}

/// The full evaluation record. Reconstructed per evaluation from whatever
/// the form currently holds; the engine keeps no state across calls.
///
/// Numeric fields are raw `f64` on purpose: the engine accepts any float
/// (including nonsense) and degrades to boundary values instead of
/// validating. `annual_salary == 0` is the "not entered yet" sentinel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkInputs {
    pub annual_salary: f64,
    /// Local-currency units per reference-currency unit. Ignored when
    /// `is_reference_country` is set.
    pub ppp_factor: f64,
    pub is_reference_country: bool,
    pub work_days_per_week: f64,
    pub wfh_days_per_week: f64,
    pub annual_leave_days: f64,
    pub public_holiday_days: f64,
    pub paid_sick_leave_days: f64,
    pub work_hours_per_day: f64,
    pub commute_hours_per_day: f64,
    pub rest_hours_per_day: f64,
    #[serde(deserialize_with = "lenient")]
    pub work_environment: WorkEnvironment,
    #[serde(deserialize_with = "lenient")]
    pub leadership: Leadership,
    #[serde(deserialize_with = "lenient")]
    pub teamwork: Teamwork,
    #[serde(deserialize_with = "lenient")]
    pub city_tier: CityTier,
    #[serde(deserialize_with = "lenient")]
    pub shuttle: Shuttle,
    #[serde(deserialize_with = "lenient")]
    pub canteen: Canteen,
    pub is_home_town: bool,
    #[serde(deserialize_with = "lenient")]
    pub degree_type: DegreeType,
    #[serde(deserialize_with = "lenient")]
    pub school_tier: SchoolTier,
    /// Undergraduate pedigree, consulted only for master's holders.
    #[serde(deserialize_with = "lenient")]
    pub bachelor_tier: SchoolTier,
    pub work_years: f64,
    #[serde(deserialize_with = "lenient")]
    pub employment_type: EmploymentType,
}

impl Default for WorkInputs {
    /// Mirrors the form's initial state: no salary entered yet, reference
    /// country, 5-day week, 10h days with a 2h commute.
    fn default() -> Self {
        Self {
            annual_salary: 0.0,
            ppp_factor: crate::salary::REFERENCE_PPP,
            is_reference_country: true,
            work_days_per_week: 5.0,
            wfh_days_per_week: 0.0,
            annual_leave_days: 5.0,
            public_holiday_days: 13.0,
            paid_sick_leave_days: 3.0,
            work_hours_per_day: 10.0,
            commute_hours_per_day: 2.0,
            rest_hours_per_day: 2.0,
            work_environment: WorkEnvironment::default(),
            leadership: Leadership::default(),
            teamwork: Teamwork::default(),
            city_tier: CityTier::default(),
            shuttle: Shuttle::default(),
            canteen: Canteen::default(),
            is_home_town: false,
            degree_type: DegreeType::default(),
            school_tier: SchoolTier::default(),
            bachelor_tier: SchoolTier::default(),
            work_years: 0.0,
            employment_type: EmploymentType::default(),
        }
    }
}

impl WorkInputs {
    /// Whether a salary has been entered at all. Zero doubles as the
    /// "empty field" sentinel, matching the form's behavior.
    pub fn has_salary(&self) -> bool {
        self.annual_salary > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_employment_type_falls_back_to_private() {
        let v: WorkInputs =
            serde_json::from_str(r#"{"annualSalary": 100000, "employmentType": "startup"}"#)
                .expect("lenient parse");
        assert_eq!(v.employment_type, EmploymentType::Private);
    }

    #[test]
    fn unknown_city_tier_falls_back_to_default() {
        let v: WorkInputs = serde_json::from_str(r#"{"cityTier": "atlantis"}"#).expect("parse");
        assert_eq!(v.city_tier, CityTier::TierTwo);
    }

    #[test]
    fn missing_fields_take_form_defaults() {
        let v: WorkInputs = serde_json::from_str("{}").expect("parse empty record");
        assert!(!v.has_salary());
        assert_eq!(v.work_days_per_week, 5.0);
        assert_eq!(v.public_holiday_days, 13.0);
        assert!(v.is_reference_country);
    }

    #[test]
    fn factor_tables_match_enumerated_sets() {
        let city: Vec<f64> = [
            CityTier::TierOne,
            CityTier::NewTierOne,
            CityTier::TierTwo,
            CityTier::TierThree,
            CityTier::TierFour,
            CityTier::County,
            CityTier::Township,
        ]
        .iter()
        .map(|c| c.factor())
        .collect();
        assert_eq!(city, vec![0.70, 0.80, 1.0, 1.10, 1.25, 1.40, 1.50]);
    }

    #[test]
    fn share_link_factor_keys_resolve() {
        assert_eq!(CityTier::from_factor_key("0.70"), CityTier::TierOne);
        assert_eq!(CityTier::from_factor_key("garbage"), CityTier::TierThree);
        assert_eq!(Shuttle::from_factor_key("0.5"), Shuttle::DoorToDoor);
        assert_eq!(Canteen::from_factor_key("1.15"), Canteen::Excellent);
    }
}
