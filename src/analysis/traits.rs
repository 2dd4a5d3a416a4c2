use serde::Serialize;
use std::collections::HashMap;

use super::normalize;
use crate::api::models::Champion;

/// Auto attacks at or beyond this range count as ranged.
const RANGED_ATTACK_RANGE: f64 = 300.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DamageType {
    #[serde(rename = "AD")]
    Ad,
    #[serde(rename = "AP")]
    Ap,
    #[serde(rename = "MIXED")]
    Mixed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChampionTraits {
    pub damage: DamageType,
    pub tanky: bool,
    pub heavy_cc: bool,
    pub healing: bool,
    pub ranged: bool,
}

/// Partial correction applied on top of the inferred traits.
#[derive(Debug, Clone, Copy, Default)]
struct Override {
    damage: Option<DamageType>,
    tanky: Option<bool>,
    heavy_cc: Option<bool>,
    healing: Option<bool>,
}

const fn heal(damage: DamageType) -> Override {
    Override {
        damage: Some(damage),
        tanky: None,
        heavy_cc: None,
        healing: Some(true),
    }
}

const fn heal_tank(damage: DamageType) -> Override {
    Override {
        tanky: Some(true),
        ..heal(damage)
    }
}

const CC: Override = Override {
    damage: None,
    tanky: None,
    heavy_cc: Some(true),
    healing: None,
};

const CC_TANK: Override = Override {
    tanky: Some(true),
    ..CC
};

const fn dmg(damage: DamageType) -> Override {
    Override {
        damage: Some(damage),
        tanky: None,
        heavy_cc: None,
        healing: None,
    }
}

// Heavy CC and healing are not in Data Dragon's tags at all; the damage and
// tank entries fix champions the tag heuristics get wrong.
const OVERRIDES: &[(&str, Override)] = &[
    // healing
    ("aatrox", heal(DamageType::Ad)),
    ("warwick", heal(DamageType::Ad)),
    ("soraka", heal(DamageType::Ap)),
    ("yuumi", heal(DamageType::Ap)),
    ("mundo", heal_tank(DamageType::Ad)),
    ("drmundo", heal_tank(DamageType::Ad)),
    ("vladimir", heal(DamageType::Ap)),
    ("swain", heal(DamageType::Ap)),
    ("fiora", heal(DamageType::Ad)),
    ("illaoi", heal(DamageType::Ad)),
    ("zac", heal_tank(DamageType::Ap)),
    ("sona", heal(DamageType::Ap)),
    ("nami", heal(DamageType::Ap)),
    // heavy CC
    ("leona", CC),
    ("nautilus", CC),
    ("sejuani", CC_TANK),
    ("rammus", CC_TANK),
    ("lissandra", CC),
    ("vi", CC),
    ("amumu", CC_TANK),
    ("maokai", CC_TANK),
    ("alistar", CC_TANK),
    ("thresh", CC),
    ("blitzcrank", CC),
    ("skarner", CC_TANK),
    ("twistedfate", CC),
    ("malzahar", CC),
    ("pantheon", CC),
    ("galio", CC_TANK),
    // damage outliers
    ("kayle", dmg(DamageType::Mixed)),
    ("gwen", dmg(DamageType::Ap)),
    ("mordekaiser", dmg(DamageType::Ap)),
    ("corki", dmg(DamageType::Mixed)),
    ("kaisa", dmg(DamageType::Mixed)),
    ("kogmaw", dmg(DamageType::Mixed)),
    ("jax", dmg(DamageType::Ad)),
];

fn find_override(key: &str) -> Option<Override> {
    OVERRIDES.iter().find(|(k, _)| *k == key).map(|(_, o)| *o)
}

fn has_tag(tags: &[String], wanted: &str) -> bool {
    tags.iter().any(|t| t.eq_ignore_ascii_case(wanted))
}

fn infer_damage(tags: &[String]) -> DamageType {
    if has_tag(tags, "marksman") {
        return DamageType::Ad;
    }
    if has_tag(tags, "mage") {
        return DamageType::Ap;
    }
    if has_tag(tags, "assassin") {
        return DamageType::Ad;
    }
    match (has_tag(tags, "tank"), has_tag(tags, "fighter")) {
        (true, true) => DamageType::Mixed,
        (false, true) => DamageType::Ad,
        // most tanks deal magic damage
        (true, false) => DamageType::Ap,
        (false, false) if has_tag(tags, "support") => DamageType::Ap,
        (false, false) => DamageType::Mixed,
    }
}

fn infer(champion: &Champion) -> ChampionTraits {
    ChampionTraits {
        damage: infer_damage(&champion.tags),
        tanky: has_tag(&champion.tags, "tank") || has_tag(&champion.tags, "fighter"),
        heavy_cc: false,
        healing: false,
        ranged: champion.attack_range >= RANGED_ATTACK_RANGE,
    }
}

impl ChampionTraits {
    fn apply(mut self, o: Override) -> Self {
        if let Some(d) = o.damage {
            self.damage = d;
        }
        if let Some(t) = o.tanky {
            self.tanky = t;
        }
        if let Some(c) = o.heavy_cc {
            self.heavy_cc = c;
        }
        if let Some(h) = o.healing {
            self.healing = h;
        }
        self
    }
}

/// Traits for every champion, keyed by normalized id and normalized name.
#[derive(Debug, Clone, Default)]
pub struct TraitMap {
    traits: HashMap<String, ChampionTraits>,
}

impl TraitMap {
    pub fn build(roster: &[Champion]) -> Self {
        let mut traits = HashMap::with_capacity(roster.len() * 2);

        for champion in roster {
            let id_key = normalize(&champion.id);
            let name_key = normalize(&champion.name);

            let base = infer(champion);
            let merged = match find_override(&id_key).or_else(|| find_override(&name_key)) {
                Some(o) => base.apply(o),
                None => base,
            };

            traits.insert(id_key, merged);
            traits.insert(name_key, merged);
        }

        TraitMap { traits }
    }

    pub fn get(&self, name: &str) -> Option<&ChampionTraits> {
        self.traits.get(&normalize(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn champ(id: &str, name: &str, tags: &[&str], range: f64) -> Champion {
        Champion {
            id: id.to_string(),
            name: name.to_string(),
            icon: format!("{}.png", id),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            attack_range: range,
        }
    }

    #[test]
    fn infers_damage_from_tags() {
        let map = TraitMap::build(&[
            champ("Caitlyn", "Caitlyn", &["Marksman"], 650.0),
            champ("Ahri", "Ahri", &["Mage", "Assassin"], 550.0),
            champ("Zed", "Zed", &["Assassin"], 125.0),
            champ("Sett", "Sett", &["Fighter", "Tank"], 125.0),
            champ("Darius", "Darius", &["Fighter"], 175.0),
            champ("Rell", "Rell", &["Tank", "Support"], 175.0),
            champ("Bard", "Bard", &["Support"], 500.0),
            champ("Odd", "Odd", &[], 125.0),
        ]);

        assert_eq!(map.get("Caitlyn").unwrap().damage, DamageType::Ad);
        assert_eq!(map.get("Ahri").unwrap().damage, DamageType::Ap);
        assert_eq!(map.get("Zed").unwrap().damage, DamageType::Ad);
        assert_eq!(map.get("Sett").unwrap().damage, DamageType::Mixed);
        assert_eq!(map.get("Darius").unwrap().damage, DamageType::Ad);
        assert_eq!(map.get("Rell").unwrap().damage, DamageType::Ap);
        assert_eq!(map.get("Bard").unwrap().damage, DamageType::Ap);
        assert_eq!(map.get("Odd").unwrap().damage, DamageType::Mixed);
    }

    #[test]
    fn tanky_and_ranged_inference() {
        let map = TraitMap::build(&[
            champ("Darius", "Darius", &["Fighter"], 175.0),
            champ("Teemo", "Teemo", &["Marksman", "Assassin"], 500.0),
            champ("Jayce", "Jayce", &["Fighter", "Marksman"], 125.0),
        ]);

        assert!(map.get("darius").unwrap().tanky);
        assert!(!map.get("darius").unwrap().ranged);
        assert!(map.get("teemo").unwrap().ranged);
        assert!(!map.get("teemo").unwrap().tanky);
        assert!(!map.get("jayce").unwrap().ranged);
    }

    #[test]
    fn overrides_patch_inferred_traits() {
        let map = TraitMap::build(&[
            champ("DrMundo", "Dr. Mundo", &["Fighter", "Tank"], 125.0),
            champ("Leona", "Leona", &["Tank", "Support"], 125.0),
            champ("Kaisa", "Kai'Sa", &["Marksman"], 525.0),
            champ("Thresh", "Thresh", &["Support", "Fighter"], 450.0),
        ]);

        let mundo = map.get("Dr. Mundo").unwrap();
        assert_eq!(mundo.damage, DamageType::Ad);
        assert!(mundo.healing && mundo.tanky);

        let leona = map.get("leona").unwrap();
        assert!(leona.heavy_cc);
        assert_eq!(leona.damage, DamageType::Ap);

        assert_eq!(map.get("Kai'Sa").unwrap().damage, DamageType::Mixed);
        assert!(map.get("thresh").unwrap().heavy_cc);
    }

    #[test]
    fn keyed_by_id_and_name() {
        let map = TraitMap::build(&[champ("MonkeyKing", "Wukong", &["Fighter", "Tank"], 175.0)]);
        assert_eq!(map.get("monkeyking"), map.get("Wukong"));
        assert!(map.get("Wukong").is_some());
        assert!(map.get("Xyzzychamp").is_none());
    }
}
