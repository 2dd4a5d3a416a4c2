use std::collections::HashSet;

use super::normalize;
use crate::api::models::Champion;

const MAX_LANE_OPPONENTS: usize = 2;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resolution {
    pub matched: Vec<Champion>,
    pub unmatched: Vec<String>,
}

impl Resolution {
    pub fn names(&self) -> Vec<String> {
        self.matched.iter().map(|c| c.name.clone()).collect()
    }
}

/// Splits free text on commas and newlines, dropping blank tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split([',', '\n'])
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Lane text names at most two opponents (a bot-lane duo), split on `,` or `/`.
pub fn lane_opponents(text: &str) -> Vec<String> {
    text.split([',', '/', '\n'])
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .take(MAX_LANE_OPPONENTS)
        .map(str::to_string)
        .collect()
}

/// Exact match after normalization against either the id or the display
/// name. Matches are deduplicated in input order; unknown tokens are
/// reported verbatim.
pub fn resolve(text: &str, roster: &[Champion]) -> Resolution {
    let mut resolution = Resolution::default();
    let mut seen = HashSet::new();

    for token in tokenize(text) {
        let key = normalize(&token);
        let hit = (!key.is_empty())
            .then(|| {
                roster
                    .iter()
                    .find(|c| normalize(&c.id) == key || normalize(&c.name) == key)
            })
            .flatten();

        match hit {
            Some(champion) => {
                if seen.insert(champion.id.clone()) {
                    resolution.matched.push(champion.clone());
                }
            }
            None => resolution.unmatched.push(token),
        }
    }

    resolution
}
