//! Trophy models.

use serde::{Deserialize, Serialize};

use super::common::Envelope;

/// A trophy awarded to an account (`kind: "t6"`).
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Trophy {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon_70: Option<String>,
    #[serde(default)]
    pub icon_40: Option<String>,
    #[serde(default)]
    pub award_id: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub granted_at: Option<f64>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct TrophyListData {
    #[serde(default)]
    pub trophies: Vec<Envelope<Trophy>>,
}

/// Trophy list response (`{"kind": "TrophyList", "data": {"trophies": [...]}}`).
pub type TrophyList = Envelope<TrophyListData>;

impl TrophyList {
    pub fn into_trophies(self) -> Vec<Trophy> {
        self.data.trophies.into_iter().map(|t| t.data).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_trophy_list() {
        let json = r#"{
            "kind": "TrophyList",
            "data": {"trophies": [
                {"kind": "t6", "data": {"name": "Verified Email", "icon_70": "https://example.com/v.png",
                 "granted_at": null, "url": null, "description": null, "award_id": "o", "id": null}},
                {"kind": "t6", "data": {"name": "15-Year Club", "granted_at": 1700000000}}
            ]}
        }"#;
        let list: TrophyList = serde_json::from_str(json).unwrap();
        let trophies = list.into_trophies();
        assert_eq!(trophies.len(), 2);
        assert_eq!(trophies[0].name, "Verified Email");
        assert_eq!(trophies[0].award_id.as_deref(), Some("o"));
        assert_eq!(trophies[1].granted_at, Some(1700000000.0));
    }
}
