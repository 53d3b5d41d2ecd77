//! JSON input for problem definitions and run configurations.
//!
//! A problem file looks like:
//!
//! ```json
//! {
//!   "activities": [
//!     { "name": "SLA100A", "expected_enrollment": 50,
//!       "preferred_facilitators": ["Glen", "Lock"],
//!       "other_facilitators": ["Numen"] }
//!   ],
//!   "rooms": [{ "name": "Loft 206", "capacity": 75 }],
//!   "facilitators": ["Glen", "Lock"],
//!   "timeslots": ["10 AM", "11 AM"],
//!   "exempt_facilitator": "Dr. Tyler"
//! }
//! ```
//!
//! `exempt_facilitator` may be omitted (defaults to "Dr. Tyler") or `null`.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Result, ScheduleError};
use crate::ga::GaConfig;
use crate::models::Problem;
use crate::validation::validate_problem;

impl Problem {
    /// Parses and validates a problem from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let problem: Problem = serde_json::from_str(json)?;
        validate_problem(&problem).map_err(ScheduleError::Validation)?;
        Ok(problem)
    }
}

/// Reads and validates a problem file.
pub fn load_problem(path: impl AsRef<Path>) -> Result<Problem> {
    let path = path.as_ref();
    let problem = Problem::from_json_str(&fs::read_to_string(path)?)?;
    debug!(
        path = %path.display(),
        activities = problem.activities.len(),
        rooms = problem.rooms.len(),
        facilitators = problem.facilitators.len(),
        timeslots = problem.timeslots.len(),
        "loaded problem"
    );
    Ok(problem)
}

/// Reads a run configuration. Missing fields take their defaults.
pub fn load_config(path: impl AsRef<Path>) -> Result<GaConfig> {
    let config: GaConfig = serde_json::from_str(&fs::read_to_string(path)?)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DEFAULT_EXEMPT_FACILITATOR;

    const SLA: &str = r#"{
        "activities": [
            { "name": "SLA100A", "expected_enrollment": 50,
              "preferred_facilitators": ["Glen", "Lock", "Banks", "Zeldin"],
              "other_facilitators": ["Numen", "Richards"] },
            { "name": "SLA100B", "expected_enrollment": 50,
              "preferred_facilitators": ["Glen", "Lock", "Banks", "Zeldin"],
              "other_facilitators": ["Numen", "Richards"] }
        ],
        "rooms": [
            { "name": "Slater 003", "capacity": 45 },
            { "name": "Roman 216", "capacity": 30 },
            { "name": "Loft 206", "capacity": 75 }
        ],
        "facilitators": ["Lock", "Glen", "Banks"],
        "timeslots": ["10 AM", "11 AM", "12 PM"]
    }"#;

    #[test]
    fn test_parse_problem() {
        let p = Problem::from_json_str(SLA).unwrap();
        assert_eq!(p.activities.len(), 2);
        assert_eq!(p.rooms[2].capacity, 75);
        assert_eq!(p.facilitators[1].name, "Glen");
        assert_eq!(p.timeslots[2].label, "12 PM");
        assert_eq!(p.exempt_facilitator.as_deref(), Some(DEFAULT_EXEMPT_FACILITATOR));
    }

    #[test]
    fn test_null_exempt() {
        let json = SLA.replacen('{', r#"{ "exempt_facilitator": null,"#, 1);
        let p = Problem::from_json_str(&json).unwrap();
        assert!(p.exempt_facilitator.is_none());
    }

    #[test]
    fn test_round_trip() {
        let p = Problem::from_json_str(SLA).unwrap();
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(Problem::from_json_str(&json).unwrap(), p);
    }

    #[test]
    fn test_invalid_problem_rejected() {
        let json = r#"{ "activities": [], "rooms": [], "facilitators": [], "timeslots": [] }"#;
        match Problem::from_json_str(json) {
            Err(ScheduleError::Validation(errors)) => assert_eq!(errors.len(), 3),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            Problem::from_json_str("{ not json"),
            Err(ScheduleError::Json(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            load_problem("does/not/exist.json"),
            Err(ScheduleError::Io(_))
        ));
    }

    #[test]
    fn test_bundled_problem_file() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/sla.json");
        let p = load_problem(path).unwrap();
        assert!(!p.activities.is_empty());
    }
}
