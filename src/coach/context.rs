use serde::Serialize;

use crate::analysis::recommender::{ChampionProfile, OrderedItem, Recommendation, Role};
use crate::analysis::tags::DraftTags;
use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Detected {
    pub tanks: u32,
    pub cc_burst: u32,
    pub ap: u32,
    pub ad: u32,
    pub flex: u32,
    pub healing: u32,
    pub pills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextRecommendations {
    pub headline_lines: Vec<String>,
    pub items_ordered: Vec<OrderedItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fight_rule: Option<String>,
}

/// Snapshot of one draft handed to the coach.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachContext {
    pub champion_key: String,
    pub champion_label: String,
    pub role: String,
    pub enemy_team: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enemy_top: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub enemy_bot: Vec<String>,
    pub detected: Detected,
    pub recommendations: ContextRecommendations,
}

impl CoachContext {
    pub fn new(
        profile: &ChampionProfile,
        enemy_team: &[String],
        lane_opponents: &[String],
        tags: &DraftTags,
        rec: &Recommendation,
    ) -> Self {
        let (enemy_top, enemy_bot) = match profile.role {
            Role::Top => (lane_opponents.first().cloned(), Vec::new()),
            Role::Bottom | Role::Support => (None, lane_opponents.to_vec()),
            Role::Jungle => (None, Vec::new()),
        };

        let c = &tags.counts;
        CoachContext {
            champion_key: profile.key.to_string(),
            champion_label: profile.label.to_string(),
            role: profile.role.label().to_string(),
            enemy_team: enemy_team.to_vec(),
            enemy_top,
            enemy_bot,
            detected: Detected {
                tanks: c.tanks,
                cc_burst: c.cc_burst,
                ap: c.ap,
                ad: c.ad,
                flex: c.flex,
                healing: c.healing,
                pills: tags.pills(true),
            },
            recommendations: ContextRecommendations {
                headline_lines: rec.headline_lines.clone(),
                items_ordered: rec.items_ordered.clone(),
                fight_rule: rec.fight_rule.clone(),
            },
        }
    }

    pub fn to_value(&self) -> Result<serde_json::Value, AppError> {
        serde_json::to_value(self).map_err(|e| AppError::JsonError(e.to_string()))
    }
}
