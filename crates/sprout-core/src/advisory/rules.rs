//! Ordered rule table for observation feedback.
//!
//! Rules are evaluated top to bottom and the first match wins. Keyword lists
//! are lowercase; the planning UI sends Korean field terms, so those are
//! matched alongside the English ones.

use crate::models::{Environment, Plan};

pub const PEST_KEYWORDS: &[&str] = &[
    "thrips", "aphid", "mite", "whitefly", "pest", "insect", "bug", "총채", "진딧", "응애",
    "가루이", "해충", "벌레",
];

pub const FUNGAL_KEYWORDS: &[&str] = &[
    "mildew",
    "mold",
    "mould",
    "fung",
    "botrytis",
    "sclerotinia",
    "blight",
    "흰가루",
    "곰팡",
    "균핵",
];

pub const CHLOROSIS_KEYWORDS: &[&str] = &[
    "yellow",
    "chlorosis",
    "chlorotic",
    "황화",
    "엽황",
    "잎 노랗",
];

/// Severity at which an unexplained symptom is treated as an outbreak.
pub const HIGH_SEVERITY: u8 = 3;

pub const GREENHOUSE_PEST_ADVICE: &str = "Step up greenhouse pest scouting: raise sticky trap \
density, check the double entrance doors and insect screens, and consider biological control \
with predatory insects.";

pub const GENERAL_PEST_ADVICE: &str = "Clear pest residue and manage surrounding weeds, then \
check insect screens. Spot-treat with a registered pesticide if needed.";

pub const FUNGAL_ADVICE: &str = "Signs of a high-humidity disease: adjust the ventilation \
cycle, thin out dense planting, and consider a preventive sulfur or copper spray or another \
registered fungicide.";

pub const NUTRIENT_ADVICE: &str = "Possible nutrient imbalance: check EC/pH and the drain rate, \
then reset the fertigation ratio. Check for iron or nitrogen deficiency.";

pub const HIGH_SEVERITY_ADVICE: &str = "Severe stage: isolate the affected zone, disinfect \
tools and stop further spread first. Act immediately per SOP and re-observe within 24-48h.";

pub const DEFAULT_ADVICE: &str = "Observation recorded. Re-observe in 2-3 days to confirm the \
trend.";

/// Which rule produced the feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    Pest,
    Fungal,
    Chlorosis,
    HighSeverity,
    Default,
}

/// Condition a rule fires on.
#[derive(Debug, Clone, Copy)]
pub enum Trigger {
    /// Lowercased symptom contains any of the keywords
    Keywords(&'static [&'static str]),
    /// Severity is at least the given level
    MinSeverity(u8),
}

/// A (trigger, advice) pair.
#[derive(Clone, Copy)]
pub struct Rule {
    pub kind: RuleKind,
    pub trigger: Trigger,
    pub advice: fn(&Plan) -> &'static str,
}

fn pest_advice(plan: &Plan) -> &'static str {
    match plan.environment {
        Environment::Greenhouse => GREENHOUSE_PEST_ADVICE,
        Environment::Open | Environment::Hydroponic => GENERAL_PEST_ADVICE,
    }
}

fn fungal_advice(_: &Plan) -> &'static str {
    FUNGAL_ADVICE
}

fn nutrient_advice(_: &Plan) -> &'static str {
    NUTRIENT_ADVICE
}

fn high_severity_advice(_: &Plan) -> &'static str {
    HIGH_SEVERITY_ADVICE
}

pub const RULES: &[Rule] = &[
    Rule {
        kind: RuleKind::Pest,
        trigger: Trigger::Keywords(PEST_KEYWORDS),
        advice: pest_advice,
    },
    Rule {
        kind: RuleKind::Fungal,
        trigger: Trigger::Keywords(FUNGAL_KEYWORDS),
        advice: fungal_advice,
    },
    Rule {
        kind: RuleKind::Chlorosis,
        trigger: Trigger::Keywords(CHLOROSIS_KEYWORDS),
        advice: nutrient_advice,
    },
    Rule {
        kind: RuleKind::HighSeverity,
        trigger: Trigger::MinSeverity(HIGH_SEVERITY),
        advice: high_severity_advice,
    },
];
