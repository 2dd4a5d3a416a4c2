// One rule table per playable champion. Adding a champion means adding a
// `ChampionProfile` here; the evaluator in `recommender` stays untouched.

mod belveth;
mod heimerdinger;
mod lux;
mod master_yi;
mod miss_fortune;
mod volibear;

use super::normalize;
use super::recommender::ChampionProfile;

pub use belveth::BELVETH;
pub use heimerdinger::HEIMERDINGER;
pub use lux::LUX;
pub use master_yi::MASTER_YI;
pub use miss_fortune::MISS_FORTUNE;
pub use volibear::VOLIBEAR;

pub static ALL: &[&ChampionProfile] = &[
    &MASTER_YI,
    &BELVETH,
    &VOLIBEAR,
    &HEIMERDINGER,
    &MISS_FORTUNE,
    &LUX,
];

/// Looks a profile up by key or display label, ignoring case and punctuation.
pub fn find(name: &str) -> Option<&'static ChampionProfile> {
    let wanted = normalize(name);
    ALL.iter()
        .copied()
        .find(|p| p.key == wanted || normalize(p.label) == wanted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::recommender::{
        Cond, ItemStep, Pick, Recommendation, Recommender, Role, ITEM_SLOTS,
    };
    use crate::analysis::resolver::tokenize;
    use crate::analysis::tags::{Classifier, DraftCounts, DraftTags};

    const POOL: &[&str] = &[
        "Ornn", "Sion", "Dr. Mundo", "Leona", "Nautilus", "Malzahar", "Syndra", "Ahri", "Brand",
        "Zed", "Caitlyn", "Jinx", "Darius", "Soraka", "Lulu", "Irelia", "Galio", "Warwick",
    ];

    const LANES: &[&str] = &[
        "",
        "Teemo",
        "Irelia",
        "Kayle",
        "Ornn",
        "Thresh",
        "Leona / Xerath",
        "Lulu",
        "Zyra",
    ];

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn run(profile: &ChampionProfile, enemies: &str, lane: &str) -> (DraftTags, Recommendation) {
        let enemies = tokenize(enemies);
        let lane = crate::analysis::resolver::lane_opponents(lane);
        let tags = Classifier::Keywords.classify(&enemies, lane.first().map(String::as_str));
        let rec = Recommender::recommend(profile, &tags, &enemies, &lane);
        (tags, rec)
    }

    fn flag_grid() -> Vec<DraftTags> {
        (0..64u32)
            .map(|bits| DraftTags {
                tanky: bits & 1 != 0,
                heavy_cc_burst: bits & 2 != 0,
                heavy_ap: bits & 4 != 0,
                heavy_ad: bits & 8 != 0,
                healing: bits & 16 != 0,
                ranged_lane_opponent: bits & 32 != 0,
                counts: DraftCounts::default(),
            })
            .collect()
    }

    fn ends_with_default<T>(rules: Pick<T>) -> bool {
        matches!(rules.last(), Some((Cond::Always, _)))
    }

    #[test]
    fn find_accepts_key_or_label() {
        assert_eq!(find("masteryi").map(|p| p.label), Some("Master Yi"));
        assert_eq!(find("Master Yi").map(|p| p.key), Some("masteryi"));
        assert_eq!(find("Bel'Veth").map(|p| p.key), Some("belveth"));
        assert_eq!(find("MISS FORTUNE").map(|p| p.role), Some(Role::Bottom));
        assert!(find("teemo").is_none());
    }

    #[test]
    fn keys_are_normalized_and_unique() {
        for (i, p) in ALL.iter().enumerate() {
            assert_eq!(p.key, normalize(p.key));
            assert!(ALL[i + 1..].iter().all(|q| q.key != p.key));
        }
    }

    #[test]
    fn six_items_for_every_flag_combination() {
        for profile in ALL {
            for tags in flag_grid() {
                for enemies in [&[][..], &["malzahar", "zed", "warwick", "galio"][..]] {
                    for lane in LANES {
                        let lane = crate::analysis::resolver::lane_opponents(lane);
                        let rec = Recommender::recommend(profile, &tags, &names(enemies), &lane);
                        assert_eq!(rec.items_ordered.len(), ITEM_SLOTS, "{}", profile.key);
                    }
                }
            }
        }
    }

    #[test]
    fn six_items_for_every_small_roster() {
        for profile in ALL {
            for (i, a) in POOL.iter().enumerate() {
                for (j, b) in POOL.iter().enumerate().skip(i) {
                    for c in POOL.iter().skip(j) {
                        let roster = format!("{}, {}, {}", a, b, c);
                        let (_, rec) = run(profile, &roster, "Teemo");
                        assert_eq!(rec.items_ordered.len(), ITEM_SLOTS);
                    }
                }
            }
        }
    }

    #[test]
    fn every_rule_list_has_a_default() {
        for p in ALL {
            assert!(p.headlines.iter().all(|h| ends_with_default(*h)), "{}", p.key);
            assert!(p.starter.iter().all(|s| ends_with_default(*s)), "{}", p.key);
            assert!(ends_with_default(p.fight_rule), "{}", p.key);
            if let Some(tips) = p.wave_tips {
                assert!(ends_with_default(tips), "{}", p.key);
            }
            for step in p.items {
                if let ItemStep::Choose(rules) = step {
                    assert!(ends_with_default(*rules), "{}", p.key);
                }
            }
        }
    }

    #[test]
    fn only_lane_roles_carry_wave_tips() {
        for p in ALL {
            assert_eq!(p.wave_tips.is_some(), p.role.is_lane(), "{}", p.key);
        }
    }

    #[test]
    fn empty_draft_yields_default_recommendation() {
        for p in ALL {
            let (tags, rec) = run(p, "", "");
            assert_eq!(tags, DraftTags::default());
            assert_eq!(rec.champion, p.label);
            assert_eq!(rec.headline_lines.len(), p.headlines.len());
            assert!(rec.fight_rule.is_some());
        }
    }

    #[test]
    fn master_yi_into_three_tanks() {
        let (tags, rec) = run(&MASTER_YI, "Ornn, Sion, Mundo", "");

        assert!(tags.tanky);
        assert!(rec.headline_lines[0].contains("Cut Down"));
        assert_eq!(rec.items_ordered[3].name, "Blade of the Ruined King");
        assert!(rec.items_ordered[3].is_buy_here());
        // Mundo heals
        assert_eq!(rec.items_ordered[5].name, "Mortal Reminder");
    }

    #[test]
    fn master_yi_qss_is_spliced_not_appended() {
        let (_, rec) = run(&MASTER_YI, "Malzahar, Ahri", "");
        let item_names: Vec<_> = rec.items_ordered.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(
            item_names,
            vec![
                "Kraken Slayer",
                "Berserker's Greaves",
                "Guinsoo's Rageblade",
                "QSS",
                "Wit's End",
                "Death's Dance",
            ]
        );
    }

    #[test]
    fn ranged_lane_opponent_alone_drives_top_laners() {
        let (tags, voli) = run(&VOLIBEAR, "", "Teemo");
        assert!(tags.ranged_lane_opponent);
        assert!(voli.headline_lines.iter().any(|l| l.starts_with("START: Doran’s Shield")));
        assert_eq!(voli.wave_tips.unwrap().title, "Survive the poke lane");

        let (_, heimer) = run(&HEIMERDINGER, "", "Teemo");
        assert!(heimer.headline_lines.iter().any(|l| l.starts_with("START: Doran’s Shield")));
        assert_eq!(heimer.details.starter[0], "Doran’s Shield");
        let tips = heimer.wave_tips.unwrap();
        assert_eq!(tips.title, "Turret-nest tempo");
        assert!(tips.bullets[0].starts_with("Slow push behind turrets"));
        assert!(!heimer.details.notes.iter().any(|n| n.contains("Teemo")));
        assert!(!voli.details.notes.iter().any(|n| n.contains("Teemo")));
    }

    #[test]
    fn heavy_cc_without_tanks_waits_for_cc() {
        let (tags, yi) = run(&MASTER_YI, "Leona, Nautilus", "");
        assert!(tags.heavy_cc_burst);
        assert!(!tags.tanky);
        assert!(yi.fight_rule.unwrap().starts_with("FIGHT RULE: Don’t Q in first"));

        let (_, bv) = run(&BELVETH, "Leona, Nautilus", "");
        assert!(bv.fight_rule.unwrap().contains("wait for key CC"));

        let (_, mf) = run(&MISS_FORTUNE, "Leona, Nautilus", "");
        assert!(mf.fight_rule.unwrap().starts_with("FIGHT RULE: Don’t R first"));
    }

    #[test]
    fn heimerdinger_wave_block_follows_lane_bucket() {
        let title = |lane: &str| run(&HEIMERDINGER, "", lane).1.wave_tips.unwrap().title;
        assert_eq!(title("Irelia"), "Anti-dive lane state");
        assert_eq!(title("Nasus"), "Perma-deny plan");
        assert_eq!(title("Garen"), "Turret-nest tempo");
    }

    #[test]
    fn bot_lane_duo_is_read_from_lane_text() {
        let (_, mf) = run(&MISS_FORTUNE, "", "Lulu / Jinx");
        assert!(mf.headline_lines[3].contains("out-sustain"));
        assert_eq!(mf.wave_tips.as_ref().unwrap().title, "Crash timing for plates");
        assert!(mf.details.notes.contains(&"Bot matchup detected: Lulu, Jinx".to_string()));

        let (_, lux) = run(&LUX, "", "Caitlyn, Thresh");
        assert!(lux.headline_lines[3].contains("hook angle"));
        assert_eq!(lux.wave_tips.unwrap().title, "Wave safety vs all-in");
        assert_eq!(
            lux.details.notes.last().map(String::as_str),
            Some("Bot matchup detected: Caitlyn, Thresh")
        );
    }

    #[test]
    fn belveth_into_disengage_keeps_base_notes() {
        let (_, bv) = run(&BELVETH, "Janna, Poppy", "");
        assert!(bv.headline_lines.len() <= 4);
        assert!(!bv.details.notes.iter().any(|n| n.contains("disengage")));
        assert!(bv.details.notes[0].starts_with("Bel’Veth wins by turning skirmishes"));
    }

    #[test]
    fn lux_buys_stasis_into_divers() {
        let (_, rec) = run(&LUX, "Zed, Ahri", "");
        assert_eq!(rec.items_ordered[3].name, "Zhonya’s Hourglass");
        assert!(rec.items_ordered[3].is_buy_here());

        let (_, rec) = run(&LUX, "Ahri", "");
        assert_eq!(rec.items_ordered[3].name, "Horizon Focus");
    }

    #[test]
    fn recommendations_are_idempotent() {
        for p in ALL {
            let first = run(p, "Ornn, Leona, Zed, Soraka", "Teemo");
            let second = run(p, "Ornn, Leona, Zed, Soraka", "Teemo");
            assert_eq!(first, second);
        }
    }

    #[test]
    fn bans_ignore_the_draft() {
        for p in ALL {
            let (_, empty) = run(p, "", "");
            let (_, full) = run(p, "Ornn, Sion, Leona, Nautilus, Soraka", "Teemo");
            assert_eq!(empty.bans, full.bans);
            assert_eq!(empty.bans.len(), 5);
        }
    }
}
