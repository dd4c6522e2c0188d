// file: src/models/department.rs
// description: department filter enumeration with wire-format mapping

use clap::ValueEnum;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Department filter narrowing the search scope. `All` is the sentinel the
/// backend treats as "no filter".
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Department {
    All,
    Hr,
    Finance,
    Engineering,
    Legal,
    Operations,
}

impl Department {
    /// Wire value sent in the request body and matched by the index filter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Department::All => "ALL",
            Department::Hr => "HR",
            Department::Finance => "Finance",
            Department::Engineering => "Engineering",
            Department::Legal => "Legal",
            Department::Operations => "Operations",
        }
    }

}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Department {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Department::All),
            "hr" => Ok(Department::Hr),
            "finance" => Ok(Department::Finance),
            "engineering" => Ok(Department::Engineering),
            "legal" => Ok(Department::Legal),
            "operations" => Ok(Department::Operations),
            other => Err(format!("unknown department: {}", other)),
        }
    }
}

impl Serialize for Department {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Department {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_values() {
        assert_eq!(Department::All.as_str(), "ALL");
        assert_eq!(Department::Hr.as_str(), "HR");
        assert_eq!(Department::Finance.as_str(), "Finance");
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("ALL".parse::<Department>().unwrap(), Department::All);
        assert_eq!("hr".parse::<Department>().unwrap(), Department::Hr);
        assert_eq!(
            " Engineering ".parse::<Department>().unwrap(),
            Department::Engineering
        );
        assert!("warehouse".parse::<Department>().is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&Department::Operations).unwrap();
        assert_eq!(json, "\"Operations\"");
        let parsed: Department = serde_json::from_str("\"ALL\"").unwrap();
        assert_eq!(parsed, Department::All);
    }
}
