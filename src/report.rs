//! # Share Report
//!
//! The share page echoes the engine's inputs and outputs as URL query
//! parameters; this module turns that flat string dictionary back into a
//! narrative report: one section per life/work dimension, each with a
//! templated comment and the restated selections.
//!
//! All text comes from static lookup tables keyed off the same factor
//! strings the form emits. Unrecognized values fall back to each table's
//! default row; nothing here validates or errors.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::assessment::Assessment;
use crate::inputs::{
    Canteen, CityTier, DegreeType, EmploymentType, FactorKey, Leadership, SchoolTier, Shuttle,
    Teamwork, WorkEnvironment,
};

/// The flat share-link dictionary. Every field is a string with the
/// form's default, so a bare `/report` still renders a coherent page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShareQuery {
    pub value: String,
    pub city_factor: String,
    pub work_hours: String,
    pub commute_hours: String,
    pub rest_time: String,
    pub daily_salary: String,
    pub is_reference_country: bool,
    pub work_days_per_year: String,
    pub work_days_per_week: String,
    pub wfh_days_per_week: String,
    pub annual_leave: String,
    pub paid_sick_leave: String,
    pub public_holidays: String,
    pub work_environment: String,
    pub leadership: String,
    pub teamwork: String,
    pub home_town: String,
    pub shuttle: String,
    pub canteen: String,
    pub degree_type: String,
    pub school_type: String,
    pub bachelor_type: String,
    pub education: String,
    pub work_years: String,
    pub job_stability: String,
}

impl Default for ShareQuery {
    fn default() -> Self {
        Self {
            value: "0".into(),
            city_factor: "1.0".into(),
            work_hours: "10".into(),
            commute_hours: "2".into(),
            rest_time: "2".into(),
            daily_salary: "0".into(),
            is_reference_country: true,
            work_days_per_year: "250".into(),
            work_days_per_week: "5".into(),
            wfh_days_per_week: "0".into(),
            annual_leave: "5".into(),
            paid_sick_leave: "12".into(),
            public_holidays: "13".into(),
            work_environment: "1.0".into(),
            leadership: "1.0".into(),
            teamwork: "1.0".into(),
            home_town: "no".into(),
            shuttle: "1.0".into(),
            canteen: "1.0".into(),
            degree_type: "bachelor".into(),
            school_type: "elite".into(),
            bachelor_type: "elite".into(),
            education: "1.2".into(),
            work_years: "0".into(),
            job_stability: "private".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDetail {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSection {
    pub title: &'static str,
    pub emoji: &'static str,
    pub body: String,
    pub details: Vec<ReportDetail>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareReport {
    pub score: f64,
    pub assessment: Assessment,
    pub generated_at: String,
    pub sections: Vec<ReportSection>,
}

fn num(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(0.0)
}

fn detail(label: &'static str, value: impl Into<String>) -> ReportDetail {
    ReportDetail {
        label,
        value: value.into(),
    }
}

/// Tenure bucket labels keyed by the form's raw bucket values.
fn tenure_label(raw: &str) -> &'static str {
    match raw {
        "1" => "1-3 years",
        "2" => "3-5 years",
        "4" => "5-8 years",
        "6" => "8-10 years",
        "10" => "10-12 years",
        "15" => "12+ years",
        _ => "fresh graduate",
    }
}

/// School tier label; the exam-score framing differs between bachelor's
/// and graduate programs.
fn school_label(tier: SchoolTier, degree: DegreeType) -> &'static str {
    match (tier, degree) {
        (SchoolTier::SecondTier, _) => "second/third-tier school",
        (SchoolTier::FirstTier, DegreeType::Bachelor) => "regular uni / QS200 / USNews80",
        (SchoolTier::FirstTier, _) => "regular uni / QS100 / USNews50",
        (SchoolTier::Elite, DegreeType::Bachelor) => "elite uni / QS50 / USNews30",
        (SchoolTier::Elite, _) => "elite uni / QS30 / USNews20",
    }
}

/// Build the full narrative report from the echoed share parameters.
pub fn build_report(q: &ShareQuery) -> ShareReport {
    let score = num(&q.value);
    let has_salary = score > 0.0 || num(&q.daily_salary) > 0.0;
    let assessment = Assessment::of(score, has_salary);

    let mut sections = Vec::with_capacity(8);
    sections.push(overall_section(q, score, &assessment));
    sections.push(city_section(q));
    sections.push(commute_section(q));
    sections.push(workplace_section(q));
    sections.push(rhythm_section(q));
    sections.push(career_section(q));
    sections.push(salary_section(q));
    sections.push(summary_section(score));

    ShareReport {
        score,
        assessment,
        generated_at: Utc::now().to_rfc3339(),
        sections,
    }
}

fn overall_section(q: &ShareQuery, score: f64, assessment: &Assessment) -> ReportSection {
    let body = if score < 0.6 {
        "This job is a waking nightmare; every single day is a grind."
    } else if score < 1.0 {
        "This job wears you down, but it may be the toll road to something better."
    } else if score <= 1.8 {
        "This job is plain and steady: few surprises, few disappointments."
    } else if score <= 2.5 {
        "This job gives back a real sense of accomplishment; a satisfying pick."
    } else if score <= 3.2 {
        "This job meets nearly every expectation; the days carry themselves."
    } else if score <= 4.0 {
        "This job fits like it was tailored for you, with both challenge and reward."
    } else {
        "Congratulations: you have found the job other people only daydream about."
    };
    ReportSection {
        title: "Overall",
        emoji: assessment.emoji,
        body: body.to_string(),
        details: vec![detail(
            "overall score",
            format!("{} ({})", q.value, assessment.label),
        )],
    }
}

fn city_section(q: &ShareQuery) -> ReportSection {
    let city = CityTier::from_factor_key(&q.city_factor);
    let at_home = q.home_town == "yes";
    let body = if at_home {
        "Working in your hometown lets you chase a career and still look after \
         family; familiar streets are their own kind of security."
            .to_string()
    } else {
        let base = match city {
            CityTier::TierOne | CityTier::NewTierOne => {
                "Living costs run high, but the opportunities and the platform push you to grow faster."
            }
            CityTier::TierTwo | CityTier::TierThree => {
                "The pace is gentler than a tier-1 city yet the prospects are still solid; pressure stays manageable."
            }
            _ => {
                "Low costs buy a high quality of life. Opportunities are thinner, but so is the stress."
            }
        };
        format!("{base} Take care of yourself out there, so far from home.")
    };
    ReportSection {
        title: "City",
        emoji: if at_home { "🏡" } else { "🌆" },
        body,
        details: vec![
            detail("city", city.label()),
            detail("hometown", if at_home { "yes" } else { "no" }),
        ],
    }
}

fn commute_section(q: &ShareQuery) -> ReportSection {
    let commute = num(&q.commute_hours);
    let wfh = num(&q.wfh_days_per_week);
    let days = num(&q.work_days_per_week);
    let wfh_ratio = if days > 0.0 { wfh / days } else { 0.0 };
    let shuttle = Shuttle::from_factor_key(&q.shuttle);

    let mut body = if commute <= 1.0 {
        "Your commute is short, handing you back precious time every day.".to_string()
    } else if commute <= 2.0 {
        "Your commute is moderate; enough for a podcast or a nap, not enough to hurt.".to_string()
    } else {
        "Your long commute eats serious time and energy; moving closer or changing jobs would pay off."
            .to_string()
    };
    if wfh_ratio >= 0.6 {
        body.push_str(" Generous work-from-home days lighten the load considerably.");
    } else if wfh_ratio >= 0.2 {
        body.push_str(" Your partial work-from-home schedule claws some of that time back.");
    }
    if matches!(shuttle, Shuttle::Convenient | Shuttle::DoorToDoor) {
        body.push_str(" The company shuttle is a genuine perk on top.");
    }

    ReportSection {
        title: "Commute",
        emoji: if wfh_ratio >= 0.5 { "🏠" } else { "🚌" },
        body,
        details: vec![
            detail("commute", format!("{} h/day", q.commute_hours)),
            detail(
                "remote days",
                format!(
                    "{}/{} per week ({:.0}%)",
                    q.wfh_days_per_week,
                    q.work_days_per_week,
                    wfh_ratio * 100.0
                ),
            ),
            detail("shuttle", shuttle.label()),
        ],
    }
}

fn workplace_section(q: &ShareQuery) -> ReportSection {
    let env = WorkEnvironment::from_factor_key(&q.work_environment);
    let lead = Leadership::from_factor_key(&q.leadership);
    let team = Teamwork::from_factor_key(&q.teamwork);
    let canteen = Canteen::from_factor_key(&q.canteen);

    let mut body = match env {
        WorkEnvironment::Cbd => {
            "A CBD office is polished and convenient, and it keeps your professional image sharp."
        }
        WorkEnvironment::RemoteSite | WorkEnvironment::Factory => {
            "Factory or outdoor conditions are rough going, but they build a toughness offices never do."
        }
        WorkEnvironment::Ordinary => {
            "Your workplace is comfortable enough to get solid work done without fuss."
        }
    }
    .to_string();

    body.push(' ');
    body.push_str(match lead {
        Leadership::Protege => {
            "Being the favorite brings real opportunities, and equally real expectations."
        }
        Leadership::Supportive => {
            "A boss who actually understands you is rarer than it should be; hold on to that."
        }
        Leadership::Average => "You and your boss each play your part; unremarkable but dependable.",
        Leadership::Strict => {
            "Strict management grates at times, yet it does keep you disciplined and professional."
        }
        Leadership::Hostile => {
            "Things with your boss are tense. Keep steady, focus on the work, and polish your exit options."
        }
    });

    body.push(' ');
    body.push_str(match team {
        Teamwork::CloseKnit => "Having genuine friends among your colleagues makes the office feel lighter.",
        Teamwork::Friendly => "A warm, supportive team keeps the day pleasant and the work moving.",
        Teamwork::Neutral => "Colleagues keep a polite distance, which suits heads-down work just fine.",
        Teamwork::Toxic => "The team friction is draining, though it has taught you to work independently.",
    });

    ReportSection {
        title: "Workplace",
        emoji: "🏢",
        body,
        details: vec![
            detail("environment", env.label()),
            detail("boss", lead.label()),
            detail("colleagues", team.label()),
            detail("canteen", canteen.label()),
        ],
    }
}

fn rhythm_section(q: &ShareQuery) -> ReportSection {
    let hours = num(&q.work_hours);
    let rest = num(&q.rest_time);
    let commute = num(&q.commute_hours);
    let effective = hours + commute - 0.5 * rest;
    let leave = num(&q.annual_leave);
    let total_leave = leave + num(&q.public_holidays) + num(&q.paid_sick_leave) * 0.6;

    let mut body = if effective <= 8.0 {
        "Your workload is moderate, leaving real room for a life outside the job.".to_string()
    } else if effective <= 11.0 {
        "Your days run a little long but stay within reason; guard your rest.".to_string()
    } else {
        "Your days are simply too long; sustained like this it will cost you health and quality of life."
            .to_string()
    };
    if rest >= 2.5 {
        body.push_str(" Ample breaks help you recharge for the afternoon.");
    } else if rest <= 1.0 {
        body.push_str(" Breaks are scarce; stand up and move now and then.");
    }
    if leave >= 15.0 {
        body.push_str(" A generous leave allowance keeps the long game sustainable.");
    } else if leave <= 5.0 {
        body.push_str(" Annual leave is thin, so spend those days deliberately.");
    }

    ReportSection {
        title: "Rhythm",
        emoji: "⏱️",
        body,
        details: vec![
            detail("work hours", format!("{} h/day", q.work_hours)),
            detail("effective hours", format!("{effective:.1} h/day")),
            detail("breaks", format!("{} h/day", q.rest_time)),
            detail("annual leave", format!("{} days/yr", q.annual_leave)),
            detail("paid sick leave", format!("{} days/yr", q.paid_sick_leave)),
            detail("public holidays", format!("{} days/yr", q.public_holidays)),
            detail("total leave", format!("{total_leave:.1} days/yr")),
        ],
    }
}

fn career_section(q: &ShareQuery) -> ReportSection {
    let degree = DegreeType::from_key(&q.degree_type);
    let school = SchoolTier::from_key(&q.school_type);
    let contract = EmploymentType::from_key(&q.job_stability);
    let years = num(&q.work_years);

    let mut body = match degree {
        DegreeType::Phd => {
            "A doctorate is a calling card that opens doors to research and specialist roles."
        }
        DegreeType::Masters => {
            "A master's degree still carries weight in the market and vouches for your ability to learn."
        }
        DegreeType::Bachelor => {
            "A bachelor's degree plus real experience gives you a footing in nearly any field."
        }
        DegreeType::BelowBachelor => {
            "Without the fancier paper, your hands-on skills and track record do the talking."
        }
    }
    .to_string();

    body.push(' ');
    if years <= 0.0 {
        body.push_str("As a fresh graduate you have energy, curiosity, and every path still open.");
    } else if years >= 6.0 {
        body.push_str("Years of experience are your real asset; you move through the job with earned confidence.");
    } else {
        body.push_str("A few years in, you know the industry and your own strengths; the curve is still rising.");
    }

    body.push(' ');
    body.push_str(match contract {
        EmploymentType::Government => {
            "A permanent post means you can plan the future without watching the exits."
        }
        EmploymentType::State => "Long-term state employment trades some upside for real stability.",
        EmploymentType::Foreign => {
            "A foreign-company contract pairs reasonable stability with broader exposure."
        }
        EmploymentType::Private => {
            "Private-sector work carries risk, and with it the fastest routes to growth and pay."
        }
    });

    ReportSection {
        title: "Career",
        emoji: "📚",
        body,
        details: vec![
            detail("highest degree", degree.label()),
            detail("school", school_label(school, degree)),
            detail("tenure", tenure_label(&q.work_years)),
            detail("contract", contract.label()),
        ],
    }
}

fn salary_section(q: &ShareQuery) -> ReportSection {
    let daily = num(&q.daily_salary);
    let city = CityTier::from_factor_key(&q.city_factor);
    // Thresholds differ by currency scale: local reference units run
    // roughly 4x the normalized reference-currency figures.
    let (high, mid) = if q.is_reference_country {
        (1000.0, 500.0)
    } else {
        (150.0, 80.0)
    };

    let mut body = if daily >= high {
        "Your daily pay sits comfortably high; finances should not be the thing keeping you up."
            .to_string()
    } else if daily >= mid {
        "Your daily pay is middling: enough for the essentials, with budgeting for the rest."
            .to_string()
    } else {
        "Your daily pay runs low; careful budgeting helps, and so does hunting for the next step up."
            .to_string()
    };
    match city {
        CityTier::TierOne | CityTier::NewTierOne => {
            body.push_str(" In an expensive city, the same pay has to be managed more shrewdly.");
        }
        CityTier::TierFour | CityTier::County | CityTier::Township => {
            body.push_str(" Where living is cheap, that pay stretches into comfort and savings.");
        }
        _ => {}
    }

    let symbol = if q.is_reference_country { "¥" } else { "$" };
    ReportSection {
        title: "Salary",
        emoji: "💰",
        body,
        details: vec![
            detail("daily salary", format!("{symbol}{}/day", q.daily_salary)),
            detail("working days", format!("{} days/yr", q.work_days_per_year)),
        ],
    }
}

fn summary_section(score: f64) -> ReportSection {
    let body = if score < 1.0 {
        "The numbers say this job undersells you, but every job teaches something. Bank the \
         experience and set up the next move."
    } else if score <= 2.0 {
        "A middling trade overall: lean on what already works and chip away at what does not."
    } else {
        "A high-value job is rare; enjoy it, build on it, and do not let it go cheaply."
    };
    ReportSection {
        title: "Verdict",
        emoji: "💎",
        body: body.to_string(),
        details: Vec::new(),
    }
}
