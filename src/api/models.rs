use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::endpoints::champion_icon_url;

/// Attack range Data Dragon uses for melee champions; assumed when `stats` is missing.
pub const MELEE_ATTACK_RANGE: f64 = 125.0;

// Data Dragon champion.json response
#[derive(Debug, Deserialize)]
pub struct DataDragonChampions {
    #[serde(default)]
    pub version: String,
    pub data: HashMap<String, ChampionDto>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChampionDto {
    pub id: String,
    #[serde(default)]
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub image: Option<ImageDto>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub stats: Option<StatsDto>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ImageDto {
    pub full: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StatsDto {
    #[serde(default = "melee_range")]
    pub attackrange: f64,
}

fn melee_range() -> f64 {
    MELEE_ATTACK_RANGE
}

/// A champion reference entry, the only shape the rest of the crate sees.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Champion {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub tags: Vec<String>,
    pub attack_range: f64,
}

impl Champion {
    pub fn icon_url(&self, version: &str) -> String {
        champion_icon_url(version, &self.icon)
    }
}

impl From<ChampionDto> for Champion {
    fn from(dto: ChampionDto) -> Self {
        let icon = dto
            .image
            .map(|i| i.full)
            .unwrap_or_else(|| format!("{}.png", dto.id));
        Champion {
            id: dto.id,
            name: dto.name,
            icon,
            tags: dto.tags,
            attack_range: dto.stats.map(|s| s.attackrange).unwrap_or(MELEE_ATTACK_RANGE),
        }
    }
}

impl DataDragonChampions {
    /// Flattens the `data` map into a roster sorted by display name.
    pub fn into_roster(self) -> Vec<Champion> {
        let mut roster: Vec<Champion> = self.data.into_values().map(Champion::from).collect();
        roster.sort_by(|a, b| a.name.cmp(&b.name));
        roster
    }
}

// OpenAI-compatible chat completions response; only the reply text is read
#[derive(Debug, Deserialize)]
pub struct ChatCompletion {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChatReply,
}

#[derive(Debug, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatCompletion {
    pub fn into_text(self) -> Option<String> {
        self.choices.into_iter().next().and_then(|c| c.message.content)
    }
}
