use serde::Serialize;
use tracing::debug;

use super::traits::{DamageType, TraitMap};
use super::{contains_any, normalize};

const TANKY: &[&str] = &[
    "mundo", "ornn", "sion", "zac", "sejuani", "rammus", "malphite", "chogath", "cho gath", "tahm",
    "tahm kench", "ksante", "shen", "poppy", "galio", "mordekaiser",
];

const CC_BURST: &[&str] = &[
    "annie", "lissandra", "leona", "nautilus", "rengar", "khazix", "kha zix", "vi", "syndra", "zed",
    "fizz", "diana", "malzahar", "skarner", "twisted fate", "pantheon",
];

const HEALING: &[&str] = &[
    "soraka", "yuumi", "mundo", "aatrox", "vladimir", "swain", "warwick", "fiora", "red kayn",
    "rhaast", "nami", "sona",
];

const RANGED_TOP: &[&str] = &["teemo", "vayne", "quinn", "kennen", "jayce", "gnar", "akshan"];

const AP_HINTS: &[&str] = &[
    "ahri", "annie", "brand", "cassiopeia", "diana", "ekko", "fizz", "katarina", "kennen",
    "lissandra", "malzahar", "orianna", "syndra", "veigar", "vex", "vladimir", "xerath", "zoe",
    "zyra",
];

const AD_HINTS: &[&str] = &[
    "caitlyn", "draven", "ezreal", "jinx", "kaisa", "lucian", "miss fortune", "samira", "tristana",
    "vayne", "yasuo", "yone", "zed", "talon", "kayn", "rengar", "khazix", "kha zix", "darius",
];

// Fixed thresholds for the derived flags.
const TANKY_MIN: u32 = 2;
const CC_BURST_MIN: u32 = 2;
const HEAVY_DAMAGE_MIN: u32 = 3;
const HEALING_MIN: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DraftCounts {
    pub tanks: u32,
    pub cc_burst: u32,
    pub ap: u32,
    pub ad: u32,
    /// Mixed-damage enemies; only the trait-map classifier fills this.
    pub flex: u32,
    pub healing: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DraftTags {
    pub tanky: bool,
    pub heavy_cc_burst: bool,
    pub heavy_ap: bool,
    pub heavy_ad: bool,
    pub healing: bool,
    pub ranged_lane_opponent: bool,
    pub counts: DraftCounts,
}

impl DraftTags {
    pub fn from_counts(counts: DraftCounts, ranged_lane_opponent: bool) -> Self {
        DraftTags {
            tanky: counts.tanks >= TANKY_MIN,
            heavy_cc_burst: counts.cc_burst >= CC_BURST_MIN,
            heavy_ap: counts.ap >= HEAVY_DAMAGE_MIN && counts.ap > counts.ad,
            heavy_ad: counts.ad >= HEAVY_DAMAGE_MIN && counts.ad > counts.ap,
            healing: counts.healing >= HEALING_MIN,
            ranged_lane_opponent,
            counts,
        }
    }

    /// Short labels for every flag that is set.
    pub fn pills(&self, show_counts: bool) -> Vec<String> {
        let c = &self.counts;
        let label = |base: &str, n: u32| {
            if show_counts {
                format!("{} ({})", base, n)
            } else {
                base.to_string()
            }
        };

        let mut pills = Vec::new();
        if self.tanky {
            pills.push(label("2+ tanks", c.tanks));
        }
        if self.heavy_cc_burst {
            pills.push(label("burst + CC", c.cc_burst));
        }
        if self.heavy_ap {
            pills.push(label("heavy AP", c.ap));
        }
        if self.heavy_ad {
            pills.push(label("heavy AD", c.ad));
        }
        if self.healing {
            pills.push(label("healing", c.healing));
        }
        if self.ranged_lane_opponent {
            pills.push("ranged lane".to_string());
        }
        pills
    }
}

/// How enemy names are turned into counts.
#[derive(Debug, Clone, Copy)]
pub enum Classifier<'a> {
    /// Substring matching against curated keyword lists; needs no roster.
    Keywords,
    /// Per-champion trait records built from the reference roster.
    Traits(&'a TraitMap),
}

impl Classifier<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            Classifier::Keywords => "keywords",
            Classifier::Traits(_) => "traits",
        }
    }

    /// Duplicate names are counted once per occurrence.
    pub fn classify(&self, enemies: &[String], lane_opponent: Option<&str>) -> DraftTags {
        let tags = match self {
            Classifier::Keywords => classify_keywords(enemies, lane_opponent),
            Classifier::Traits(map) => classify_traits(map, enemies, lane_opponent),
        };
        debug!(
            classifier = self.name(),
            enemies = enemies.len(),
            counts = ?tags.counts,
            "classified draft"
        );
        tags
    }
}

fn count_matches(enemies: &[String], keywords: &[&str]) -> u32 {
    enemies
        .iter()
        .map(|e| normalize(e))
        .filter(|e| contains_any(e, keywords))
        .count() as u32
}

fn classify_keywords(enemies: &[String], lane_opponent: Option<&str>) -> DraftTags {
    let counts = DraftCounts {
        tanks: count_matches(enemies, TANKY),
        cc_burst: count_matches(enemies, CC_BURST),
        ap: count_matches(enemies, AP_HINTS),
        ad: count_matches(enemies, AD_HINTS),
        flex: 0,
        healing: count_matches(enemies, HEALING),
    };

    let lane = normalize(lane_opponent.unwrap_or_default());
    let ranged = !lane.is_empty() && contains_any(&lane, RANGED_TOP);

    DraftTags::from_counts(counts, ranged)
}

fn classify_traits(map: &TraitMap, enemies: &[String], lane_opponent: Option<&str>) -> DraftTags {
    let (mut tanks, mut cc, mut ap, mut ad, mut heal) =
        (0.0_f64, 0.0_f64, 0.0_f64, 0.0_f64, 0.0_f64);
    let mut flex = 0;

    for traits in enemies.iter().filter_map(|e| map.get(e)) {
        match traits.damage {
            DamageType::Ad => ad += 1.0,
            DamageType::Ap => ap += 1.0,
            DamageType::Mixed => {
                ad += 0.5;
                ap += 0.5;
                flex += 1;
            }
        }
        if traits.tanky {
            tanks += 1.0;
        }
        if traits.heavy_cc {
            cc += 1.0;
        }
        if traits.healing {
            heal += 1.0;
        }
    }

    // Rounded before the thresholds apply, halves round up.
    let counts = DraftCounts {
        tanks: tanks.round() as u32,
        cc_burst: cc.round() as u32,
        ap: ap.round() as u32,
        ad: ad.round() as u32,
        flex,
        healing: heal.round() as u32,
    };

    let ranged = lane_opponent
        .and_then(|lane| map.get(lane))
        .map(|t| t.ranged)
        .unwrap_or(false);

    DraftTags::from_counts(counts, ranged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::Champion;

    fn names(list: &str) -> Vec<String> {
        list.split(',').map(|s| s.trim().to_string()).filter(|s| !s.is_empty()).collect()
    }

    fn champ(id: &str, tags: &[&str], range: f64) -> Champion {
        Champion {
            id: id.to_string(),
            name: id.to_string(),
            icon: format!("{}.png", id),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            attack_range: range,
        }
    }

    fn trait_roster() -> Vec<Champion> {
        vec![
            champ("Ornn", &["Tank"], 175.0),
            champ("Sion", &["Tank", "Fighter"], 175.0),
            champ("Sett", &["Fighter", "Tank"], 125.0),
            champ("Jax", &["Fighter", "Assassin"], 125.0),
            champ("Ahri", &["Mage", "Assassin"], 550.0),
            champ("Lux", &["Mage", "Support"], 550.0),
            champ("Syndra", &["Mage"], 550.0),
            champ("Caitlyn", &["Marksman"], 650.0),
            champ("Leona", &["Tank", "Support"], 125.0),
            champ("Nautilus", &["Tank", "Support"], 175.0),
            champ("Teemo", &["Marksman", "Assassin"], 500.0),
            champ("Soraka", &["Support", "Mage"], 550.0),
            champ("Kaisa", &["Marksman"], 525.0),
        ]
    }

    /// Reference oracle for the derived flags.
    fn assert_flags_match_counts(t: &DraftTags) {
        let c = t.counts;
        assert_eq!(t.tanky, c.tanks >= 2);
        assert_eq!(t.heavy_cc_burst, c.cc_burst >= 2);
        assert_eq!(t.heavy_ap, c.ap >= 3 && c.ap > c.ad);
        assert_eq!(t.heavy_ad, c.ad >= 3 && c.ad > c.ap);
        assert_eq!(t.healing, c.healing >= 1);
    }

    #[test]
    fn three_tanks_is_tanky() {
        let t = Classifier::Keywords.classify(&names("Ornn, Sion, Mundo"), None);
        assert_eq!(t.counts.tanks, 3);
        assert!(t.tanky);
        // Mundo also heals
        assert_eq!(t.counts.healing, 1);
        assert!(t.healing);
    }

    #[test]
    fn two_hard_cc_is_heavy_cc_not_tanky() {
        let t = Classifier::Keywords.classify(&names("Leona, Nautilus"), None);
        assert!(t.heavy_cc_burst);
        assert!(!t.tanky);
    }

    #[test]
    fn empty_roster_is_all_zero() {
        let t = Classifier::Keywords.classify(&[], None);
        assert_eq!(t, DraftTags::default());

        let map = TraitMap::build(&trait_roster());
        assert_eq!(Classifier::Traits(&map).classify(&[], Some("")), DraftTags::default());
    }

    #[test]
    fn unknown_names_contribute_nothing() {
        let t = Classifier::Keywords.classify(&names("Xyzzychamp"), None);
        assert_eq!(t, DraftTags::default());

        let map = TraitMap::build(&trait_roster());
        let t = Classifier::Traits(&map).classify(&names("Xyzzychamp"), Some("Xyzzychamp"));
        assert_eq!(t, DraftTags::default());
    }

    #[test]
    fn duplicates_count_each_time() {
        let t = Classifier::Keywords.classify(&names("Leona, Leona"), None);
        assert_eq!(t.counts.cc_burst, 2);
        assert!(t.heavy_cc_burst);
    }

    #[test]
    fn ranged_lane_keyword_variant() {
        let t = Classifier::Keywords.classify(&[], Some("Teemo"));
        assert!(t.ranged_lane_opponent);
        assert_eq!(t.counts, DraftCounts::default());

        assert!(!Classifier::Keywords.classify(&[], Some("Darius")).ranged_lane_opponent);
        assert!(!Classifier::Keywords.classify(&[], Some("   ")).ranged_lane_opponent);
    }

    #[test]
    fn ranged_lane_trait_variant_uses_attack_range() {
        let map = TraitMap::build(&trait_roster());
        let c = Classifier::Traits(&map);
        assert!(c.classify(&[], Some("teemo")).ranged_lane_opponent);
        assert!(!c.classify(&[], Some("Ornn")).ranged_lane_opponent);
        assert!(!c.classify(&[], None).ranged_lane_opponent);
    }

    #[test]
    fn keyword_substring_false_positive_is_kept() {
        // "vi" is a CC keyword and matches inside "Viktor"
        let t = Classifier::Keywords.classify(&names("Viktor"), None);
        assert_eq!(t.counts.cc_burst, 1);
    }

    #[test]
    fn trait_counts_whole_damage_types() {
        let map = TraitMap::build(&trait_roster());
        let t = Classifier::Traits(&map).classify(&names("Ahri, Lux, Syndra, Caitlyn"), None);
        assert_eq!(t.counts.ap, 3);
        assert_eq!(t.counts.ad, 1);
        assert!(t.heavy_ap);
        assert!(!t.heavy_ad);
    }

    #[test]
    fn mixed_damage_rounding_boundaries() {
        let map = TraitMap::build(&trait_roster());
        let c = Classifier::Traits(&map);

        // one mixed: 0.5 AP / 0.5 AD, both round up to 1
        let t = c.classify(&names("Sett"), None);
        assert_eq!((t.counts.ap, t.counts.ad, t.counts.flex), (1, 1, 1));

        // two mixed: exactly 1 each
        let t = c.classify(&names("Sett, Kaisa"), None);
        assert_eq!((t.counts.ap, t.counts.ad, t.counts.flex), (1, 1, 2));

        // three mixed: 1.5 rounds to 2 on both sides
        let t = c.classify(&names("Sett, Kaisa, Sion"), None);
        assert_eq!((t.counts.ap, t.counts.ad), (2, 2));

        // 2 AP + 1 mixed: 2.5 AP rounds to 3, 0.5 AD rounds to 1, so heavy AP
        let t = c.classify(&names("Ahri, Syndra, Sett"), None);
        assert_eq!((t.counts.ap, t.counts.ad), (3, 1));
        assert!(t.heavy_ap);

        // 2 AP + 2 AD + 1 mixed: 2.5 vs 2.5 rounds to 3 vs 3, neither side heavy
        let t = c.classify(&names("Ahri, Syndra, Caitlyn, Jax, Sett"), None);
        assert_eq!((t.counts.ap, t.counts.ad), (3, 3));
        assert!(!t.heavy_ap && !t.heavy_ad);
    }

    #[test]
    fn trait_variant_counts_overrides() {
        let map = TraitMap::build(&trait_roster());
        let t = Classifier::Traits(&map).classify(&names("Leona, Nautilus, Soraka"), None);
        assert_eq!(t.counts.cc_burst, 2);
        assert_eq!(t.counts.healing, 1);
        assert_eq!(t.counts.tanks, 2);
        assert!(t.heavy_cc_burst && t.healing && t.tanky);
    }

    #[test]
    fn flags_follow_thresholds_for_every_small_roster() {
        let pool = [
            "Ornn", "Sion", "Leona", "Nautilus", "Ahri", "Syndra", "Caitlyn", "Zed", "Soraka",
            "Kaisa", "Sett", "Xyzzychamp",
        ];
        let map = TraitMap::build(&trait_roster());

        // every multiset of up to three picks from the pool
        for a in 0..pool.len() {
            for b in a..pool.len() {
                for c in b..pool.len() {
                    let roster: Vec<String> =
                        [pool[a], pool[b], pool[c]].iter().map(|s| s.to_string()).collect();
                    for classifier in [Classifier::Keywords, Classifier::Traits(&map)] {
                        let first = classifier.classify(&roster, Some(pool[a]));
                        assert_flags_match_counts(&first);
                        assert_eq!(first, classifier.classify(&roster, Some(pool[a])));
                    }
                }
            }
        }
    }

    #[test]
    fn pills_list_set_flags() {
        let t = Classifier::Keywords.classify(&names("Ornn, Sion, Mundo"), Some("Teemo"));
        assert_eq!(
            t.pills(true),
            vec!["2+ tanks (3)", "healing (1)", "ranged lane"]
        );
        assert_eq!(t.pills(false), vec!["2+ tanks", "healing", "ranged lane"]);
        assert!(DraftTags::default().pills(true).is_empty());
    }
}
