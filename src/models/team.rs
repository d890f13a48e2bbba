//! Static team reference data.

use serde::{Deserialize, Serialize};

/// A team in the reference catalog. Immutable after load; games reference
/// teams by value but never modify them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    pub name: String,
    pub abbreviation: String,
    pub city: String,
    pub primary_color: String,
    pub secondary_color: String,
}

impl Team {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.city, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        let team = Team {
            id: "nba-lakers".to_string(),
            name: "Lakers".to_string(),
            abbreviation: "LAL".to_string(),
            city: "Los Angeles".to_string(),
            primary_color: "#552583".to_string(),
            secondary_color: "#FDB927".to_string(),
        };
        assert_eq!(team.display_name(), "Los Angeles Lakers");
    }

    #[test]
    fn test_wire_shape_is_camel_case() {
        let team = Team {
            id: "t".to_string(),
            name: "n".to_string(),
            abbreviation: "a".to_string(),
            city: "c".to_string(),
            primary_color: "#000000".to_string(),
            secondary_color: "#ffffff".to_string(),
        };
        let json = serde_json::to_string(&team).unwrap();
        assert!(json.contains("\"primaryColor\""));
        assert!(json.contains("\"secondaryColor\""));
    }
}
