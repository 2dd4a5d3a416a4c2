// Short per-enemy notes shown under the recommendation. Curated entries win;
// everything else gets a note assembled from archetype keyword groups.

use serde::Serialize;

use super::{contains_any, normalize};
use crate::api::models::Champion;

/// Variant key that applies whichever champion the user plays.
const ANY: &str = "any";

#[derive(Debug, Clone, Copy)]
struct ScoutSpec {
    tags: &'static [&'static str],
    title: &'static str,
    bullets: &'static [&'static str],
}

/// Curated notes keyed by normalized enemy name, then by playable champion key.
const SCOUT_MAP: &[(&str, &[(&str, ScoutSpec)])] = &[
    (
        "thresh",
        &[
            (
                ANY,
                ScoutSpec {
                    tags: &["Pick", "CC chain"],
                    title: "Hook → Flay → Box can delete carries.",
                    bullets: &[
                        "Respect fog angles; don’t walk into hook + lantern collapse.",
                        "If hook misses, you have a short punish window.",
                    ],
                },
            ),
            (
                "masteryi",
                ScoutSpec {
                    tags: &["Hold Q"],
                    title: "Save Q to dodge hook/Flay when possible.",
                    bullets: &[
                        "If you Q in early, you can get chained by Flay + Box.",
                        "Front-to-back into Thresh is rough—look for flanks/angles.",
                    ],
                },
            ),
        ],
    ),
    (
        "leona",
        &[
            (
                ANY,
                ScoutSpec {
                    tags: &["Hard engage"],
                    title: "If she reaches you, you’re CC’d for days.",
                    bullets: &[
                        "Don’t stand in E range when she has ult up.",
                        "After she commits, punish the backline—Leona can’t peel well.",
                    ],
                },
            ),
            (
                "masteryi",
                ScoutSpec {
                    tags: &["Patience"],
                    title: "Let Leona press buttons first, then clean up.",
                    bullets: &[
                        "If you go first, you’ll eat stun chain.",
                        "Wait for E/R to be used → then commit for resets.",
                    ],
                },
            ),
        ],
    ),
    (
        "lux",
        &[
            (
                ANY,
                ScoutSpec {
                    tags: &["Poke", "Pick"],
                    title: "Q bind is the real threat; E chip sets up R.",
                    bullets: &[
                        "Play around her Q cooldown—miss = punish window.",
                        "Don’t clump: you eat E slow + multi-man poke.",
                    ],
                },
            ),
            (
                "masteryi",
                ScoutSpec {
                    tags: &["Q timing"],
                    title: "Your Q can dodge her Q and even her R if timed well.",
                    bullets: &[
                        "If ahead: one clean engage kills her instantly.",
                        "If behind: wait for Lux Q to be used before committing.",
                    ],
                },
            ),
        ],
    ),
    (
        "morgana",
        &[
            (
                ANY,
                ScoutSpec {
                    tags: &["Bind", "Anti-engage"],
                    title: "One Q can lose the fight; Black Shield blocks picks.",
                    bullets: &[
                        "Track Black Shield target—don’t waste CC into it.",
                        "Punish when Q is down; she’s vulnerable.",
                    ],
                },
            ),
            (
                "masteryi",
                ScoutSpec {
                    tags: &["Q dodge"],
                    title: "Hold Q to dodge bind; don’t get rooted before you reset.",
                    bullets: &[
                        "If you’re rooted, you usually die—play angles.",
                        "Wait for shield to be used then burst the target.",
                    ],
                },
            ),
        ],
    ),
    (
        "tristana",
        &[
            (
                ANY,
                ScoutSpec {
                    tags: &["Burst", "Peel R"],
                    title: "Charge burst + R can deny your engage.",
                    bullets: &[
                        "Track her jump—if it’s down, she’s very killable.",
                        "Don’t tank fully stacked bomb for free.",
                    ],
                },
            ),
            (
                "masteryi",
                ScoutSpec {
                    tags: &["Target"],
                    title: "Great reset target if you can reach her after jump.",
                    bullets: &[
                        "Force or wait out jump, then commit for kill/reset.",
                        "Be careful: her R can knock you away mid-fight.",
                    ],
                },
            ),
        ],
    ),
    (
        "vayne",
        &[
            (
                ANY,
                ScoutSpec {
                    tags: &["Tank shred"],
                    title: "True damage + tumble makes extended fights dangerous.",
                    bullets: &[
                        "She spikes hard with items—don’t let her free-hit.",
                        "Condemn can ruin engages near walls—watch positioning.",
                    ],
                },
            ),
            (
                "masteryi",
                ScoutSpec {
                    tags: &["Priority"],
                    title: "If you reach her, she dies. The fight is about access.",
                    bullets: &[
                        "Wait for condemn / tumble usage, then go.",
                        "Don’t eat peel CC before you commit.",
                    ],
                },
            ),
        ],
    ),
    (
        "gwen",
        &[
            (
                ANY,
                ScoutSpec {
                    tags: &["Anti-melee"],
                    title: "W denies outside damage; her R turns long fights.",
                    bullets: &[
                        "Fight inside W or wait it out—don’t panic engage into it.",
                        "Avoid long trades when she has stacked Q + R up.",
                    ],
                },
            ),
            (
                "volibear",
                ScoutSpec {
                    tags: &["AP duel"],
                    title: "Respect her all-in—choose short trades and wave control.",
                    bullets: &[
                        "Early MR (Spectre’s/Negatron) pays off if she gets ahead.",
                        "Don’t commit into W unless you can stay on her.",
                    ],
                },
            ),
        ],
    ),
    (
        "kayle",
        &[
            (
                ANY,
                ScoutSpec {
                    tags: &["Scaling"],
                    title: "Weak early, monster later. Deny levels/plates.",
                    bullets: &[
                        "Punish pre-6; after 6 respect ult turning dives.",
                        "Wave control matters: freeze to starve, crash to dive.",
                    ],
                },
            ),
            (
                "volibear",
                ScoutSpec {
                    tags: &["Dive threat"],
                    title: "You can punish her early with wave + dive pressure.",
                    bullets: &[
                        "Push/freeze to deny XP, then threaten dives with jungler.",
                        "Respect ult when diving—bait it, then re-engage.",
                    ],
                },
            ),
        ],
    ),
    (
        "warwick",
        &[
            (
                ANY,
                ScoutSpec {
                    tags: &["Sustain", "All-in"],
                    title: "He wins messy extended fights—don’t coinflip low HP.",
                    bullets: &[
                        "Anti-heal helps once fights start.",
                        "Respect R engage range; he can start for free.",
                    ],
                },
            ),
            (
                "masteryi",
                ScoutSpec {
                    tags: &["Don’t duel"],
                    title: "Avoid fair duels when he has ult + fear ready.",
                    bullets: &[
                        "Play for resets on squishies—don’t get baited into 1v1.",
                        "Punish after he uses R (he’s less sticky).",
                    ],
                },
            ),
        ],
    ),
];

struct ArchetypeGroup {
    keywords: &'static [&'static str],
    tag: &'static str,
    bullet: &'static str,
    /// Extra bullet for specific playable champions.
    extra: &'static [(&'static str, &'static str)],
}

const ARCHETYPES: &[ArchetypeGroup] = &[
    ArchetypeGroup {
        keywords: &[
            "thresh",
            "nautilus",
            "leona",
            "blitzcrank",
            "pyke",
            "rakan",
            "rell",
            "alistar",
        ],
        tag: "Hard engage",
        bullet: "Respect engage angles—don’t walk into their setup.",
        extra: &[("masteryi", "Hold Q for their key CC, then commit after it’s used.")],
    },
    ArchetypeGroup {
        keywords: &["lux", "morgana", "zyra", "xerath", "velkoz", "brand", "vex", "zoe"],
        tag: "Poke / pick",
        bullet: "Play around their main skillshot—miss = punish window.",
        extra: &[("masteryi", "Don’t Q into their CC—wait it out, then go.")],
    },
    ArchetypeGroup {
        keywords: &[
            "mundo", "ornn", "sion", "zac", "rammus", "malphite", "sejuani", "tahm", "ksante",
        ],
        tag: "Tank",
        bullet: "Don’t tunnel early—plan %HP / sustained DPS if needed.",
        extra: &[],
    },
    ArchetypeGroup {
        keywords: &["soraka", "yuumi", "aatrox", "vladimir", "swain", "warwick", "sona", "nami"],
        tag: "Healing",
        bullet: "Anti-heal becomes valuable once fights start.",
        extra: &[],
    },
];

const DEFAULT_BULLET: &str = "Identify their key CC/escape and play around that cooldown.";

const DEFAULT_EXTRA: &[(&str, &str)] = &[
    ("masteryi", "Look for resets: delete a squishy first, then snowball the fight."),
    ("volibear", "Short trades → stack W mark → commit when you control the E zone."),
];

const GENERIC_TITLE: &str = "Quick notes";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoutNote {
    pub champion: String,
    pub tags: Vec<String>,
    pub title: String,
    pub bullets: Vec<String>,
}

fn extra_for(extra: &[(&str, &'static str)], playing: &str) -> Option<&'static str> {
    extra.iter().find(|(key, _)| *key == playing).map(|(_, b)| *b)
}

fn curated(name: &str, playing: &str) -> Option<ScoutSpec> {
    let (_, variants) = SCOUT_MAP.iter().find(|(key, _)| *key == name)?;
    variants
        .iter()
        .find(|(key, _)| *key == playing)
        .or_else(|| variants.iter().find(|(key, _)| *key == ANY))
        .map(|(_, spec)| *spec)
}

fn generic(name: &str, playing: &str) -> (Vec<String>, Vec<String>) {
    let mut tags = Vec::new();
    let mut bullets = Vec::new();

    for group in ARCHETYPES.iter().filter(|g| contains_any(name, g.keywords)) {
        tags.push(group.tag.to_string());
        bullets.push(group.bullet.to_string());
        bullets.extend(extra_for(group.extra, playing).map(str::to_string));
    }

    if bullets.is_empty() {
        bullets.push(DEFAULT_BULLET.to_string());
        bullets.extend(extra_for(DEFAULT_EXTRA, playing).map(str::to_string));
    }

    (tags, bullets)
}

/// Note for one resolved enemy, tailored to the champion being played.
pub fn scout(enemy: &Champion, playing: &str) -> ScoutNote {
    let name = normalize(&enemy.name);
    let playing = normalize(playing);

    match curated(&name, &playing) {
        Some(spec) => ScoutNote {
            champion: enemy.name.clone(),
            tags: spec.tags.iter().map(|t| t.to_string()).collect(),
            title: spec.title.to_string(),
            bullets: spec.bullets.iter().map(|b| b.to_string()).collect(),
        },
        None => {
            let (tags, bullets) = generic(&name, &playing);
            ScoutNote {
                champion: enemy.name.clone(),
                tags,
                title: GENERIC_TITLE.to_string(),
                bullets,
            }
        }
    }
}

pub fn scout_all(enemies: &[Champion], playing: &str) -> Vec<ScoutNote> {
    enemies.iter().map(|e| scout(e, playing)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn champ(name: &str) -> Champion {
        Champion {
            id: name.replace(['.', ' ', '\''], ""),
            name: name.to_string(),
            icon: String::new(),
            tags: Vec::new(),
            attack_range: 125.0,
        }
    }

    #[test]
    fn champion_specific_variant_wins() {
        let note = scout(&champ("Leona"), "masteryi");
        assert_eq!(note.tags, vec!["Patience"]);
        assert_eq!(note.title, "Let Leona press buttons first, then clean up.");
    }

    #[test]
    fn falls_back_to_any_variant() {
        let note = scout(&champ("Leona"), "lux");
        assert_eq!(note.tags, vec!["Hard engage"]);

        let note = scout(&champ("Gwen"), "Master Yi");
        assert_eq!(note.tags, vec!["Anti-melee"]);
        let note = scout(&champ("Gwen"), "Volibear");
        assert_eq!(note.tags, vec!["AP duel"]);
    }

    #[test]
    fn generic_note_stacks_archetypes() {
        let note = scout(&champ("Dr. Mundo"), "belveth");
        assert_eq!(note.title, "Quick notes");
        assert_eq!(note.tags, vec!["Tank"]);

        let note = scout(&champ("Nautilus"), "masteryi");
        assert_eq!(note.tags, vec!["Hard engage"]);
        assert_eq!(note.bullets.len(), 2);
        assert!(note.bullets[1].starts_with("Hold Q"));

        let note = scout(&champ("Nautilus"), "lux");
        assert_eq!(note.bullets.len(), 1);
    }

    #[test]
    fn unknown_archetype_gets_default_bullets() {
        let note = scout(&champ("Garen"), "volibear");
        assert!(note.tags.is_empty());
        assert_eq!(note.bullets[0], DEFAULT_BULLET);
        assert!(note.bullets[1].starts_with("Short trades"));

        let note = scout(&champ("Garen"), "heimerdinger");
        assert_eq!(note.bullets, vec![DEFAULT_BULLET]);
    }

    #[test]
    fn scout_all_keeps_enemy_order() {
        let notes = scout_all(&[champ("Vayne"), champ("Soraka")], "missfortune");
        assert_eq!(notes[0].champion, "Vayne");
        assert_eq!(notes[1].tags, vec!["Healing"]);
    }
}
