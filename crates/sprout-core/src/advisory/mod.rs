//! Observation-to-feedback classification.
//!
//! Maps a field observation to an advisory message using the ordered table in
//! [`rules::RULES`]: pest keywords first, then fungal, then chlorosis, then a
//! high-severity fallback. Observations matching nothing get
//! [`rules::DEFAULT_ADVICE`].
//!
//! Classification is a total function with no side effects. Observations are
//! not stored and no risk score is kept.
//!
//! ```rust
//! use jiff::civil::date;
//! use sprout_core::{
//!     advisory::{self, RuleKind},
//!     models::{Environment, Method},
//!     params::{CreatePlan, Observation},
//!     schedule,
//! };
//!
//! let plan = schedule::generate(&CreatePlan {
//!     crop: "cucumber".to_string(),
//!     start_date: date(2024, 4, 1),
//!     method: Method::Grafting,
//!     environment: Environment::Open,
//!     area: None,
//!     variety: None,
//!     notes: None,
//! });
//! let obs = Observation {
//!     date: date(2024, 4, 20),
//!     task_name: "training/pinching".to_string(),
//!     symptom: "Powdery MILDEW on lower leaves".to_string(),
//!     severity: 2,
//!     note: None,
//! };
//! assert_eq!(advisory::classify_rule(&obs), RuleKind::Fungal);
//! assert!(advisory::classify(&plan, &obs).contains("high-humidity"));
//! ```

use crate::{models::Plan, params::Observation};

pub mod rules;


pub use rules::{Rule, RuleKind, Trigger, DEFAULT_ADVICE, RULES};

impl Trigger {
    /// Whether this trigger fires for the lowercased symptom and severity.
    fn matches(&self, symptom: &str, severity: u8) -> bool {
        match *self {
            Trigger::Keywords(keywords) => keywords.iter().any(|k| symptom.contains(k)),
            Trigger::MinSeverity(level) => severity >= level,
        }
    }
}

/// Finds the first rule that fires for the observation.
pub fn matching_rule(obs: &Observation) -> Option<&'static Rule> {
    let symptom = obs.symptom.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.trigger.matches(&symptom, obs.severity))
}

/// Which rule the observation falls under. The plan only affects the wording
/// of the advice, never the rule.
pub fn classify_rule(obs: &Observation) -> RuleKind {
    matching_rule(obs).map_or(RuleKind::Default, |rule| rule.kind)
}

/// Advisory feedback for an observation made on a plan.
pub fn classify(plan: &Plan, obs: &Observation) -> &'static str {
    matching_rule(obs).map_or(DEFAULT_ADVICE, |rule| (rule.advice)(plan))
}
