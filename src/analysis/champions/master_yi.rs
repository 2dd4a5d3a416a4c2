use crate::analysis::recommender::{item, noted, ChampionProfile, Cond, ItemStep, Role};

// Point-click lockdown Yi can't Q out of
const QSS_THREATS: &[&str] = &["malzahar", "skarner", "warwick", "lissandra", "mordekaiser"];

pub static MASTER_YI: ChampionProfile = ChampionProfile {
    key: "masteryi",
    label: "Master Yi",
    role: Role::Jungle,
    headlines: &[
        &[
            (Cond::Tanky, "RUNES: Lethal Tempo — Cut Down (2+ tanks / high-HP frontline)"),
            (Cond::Always, "RUNES: Lethal Tempo — Coup de Grace (reset snowball)"),
        ],
        &[
            (
                Cond::Any(&[Cond::HeavyCcBurst, Cond::HeavyAp]),
                "SECONDARY: Resolve (Second Wind/Conditioning) + Unflinching",
            ),
            (
                Cond::Always,
                "SECONDARY: Domination (Treasure Hunter) or Resolve (Conditioning)",
            ),
        ],
        &[
            (
                Cond::HeavyCcBurst,
                "SKILLS: Enemy has burst/CC — consider 1–2 early points in W to survive spikes",
            ),
            (Cond::Always, "SKILLS: Max Q/E as usual; W points are situational"),
        ],
        &[
            (
                Cond::Tanky,
                "TANK TECH: 2+ tanks → BORK right after Guinsoo’s, Terminus next",
            ),
            (
                Cond::Always,
                "TANK TECH: Kraken → Guinsoo’s is enough unless they stack HP/armor",
            ),
        ],
    ],
    items: &[
        ItemStep::Push(item("Kraken Slayer")),
        ItemStep::Choose(&[
            (
                Cond::Any(&[Cond::HeavyCcBurst, Cond::HeavyAp]),
                &[item("Merc Treads")],
            ),
            (Cond::Always, &[item("Berserker's Greaves")]),
        ]),
        ItemStep::Push(noted("Guinsoo's Rageblade", "(on-hit core)")),
        ItemStep::Choose(&[
            (
                Cond::Tanky,
                &[
                    noted("Blade of the Ruined King", "← BUY HERE (2+ tanks: %HP damage)"),
                    noted("Terminus", "(shred for long fights)"),
                ],
            ),
            (
                Cond::HeavyAp,
                &[
                    noted("Wit's End", "(vs AP threats)"),
                    noted("Death's Dance", "(vs burst / survive dives)"),
                ],
            ),
            (
                Cond::Always,
                &[
                    noted("Wit's End", "(good default mixed resist + DPS)"),
                    noted("Death's Dance", "(vs burst / survive dives)"),
                ],
            ),
        ]),
        ItemStep::InsertAt(
            3,
            Cond::Enemy(QSS_THREATS),
            noted("QSS", "← BUY HERE (suppression/lockdown threat)"),
        ),
        ItemStep::Choose(&[
            (
                Cond::Healing,
                &[noted("Mortal Reminder", "(anti-heal — Executioner’s first if needed)")],
            ),
            (Cond::Always, &[noted("Guardian Angel", "(late-fight insurance)")]),
        ]),
    ],
    wave_tips: None,
    fight_rule: &[
        (
            Cond::HeavyCcBurst,
            "FIGHT RULE: Don’t Q in first — hold it for their key CC → commit after it’s used → chain resets off the first squishy",
        ),
        (
            Cond::Always,
            "FIGHT RULE: Look for resets — delete a squishy first, then snowball the fight",
        ),
    ],
    bans: &["Rammus", "Malzahar", "Jax", "Lissandra", "Warwick"],
    runes: &[
        "Precision: Lethal Tempo | Triumph | Legend: Alacrity | Coup de Grace (or Cut Down vs tanks)",
        "Secondary: Resolve (Second Wind/Conditioning) or Domination (Treasure Hunter)",
        "Shards: AS / Adaptive / (Armor or MR depending on comp)",
    ],
    skill_order: "Skill order: Q > E > W (take R whenever available).",
    starter: &[
        &[(Cond::Always, "Jungle item + Refillable")],
        &[(Cond::Always, "Smite + Flash")],
    ],
    situational: &[
        "Vs tanks: Blade of the Ruined King earlier can help.",
        "Vs hard CC: QSS (into Mercurial) can be game-saving.",
        "Wit's End/Death's Dance as needed.",
    ],
    notes: &[
        (Cond::HeavyAp, "Consider an early Wit's End component if AP is chunking you."),
        (
            Cond::Healing,
            "Add anti-heal if needed (Executioner’s later if appropriate).",
        ),
        (
            Cond::Always,
            "Master Yi wins off resets: every kill is a cooldown refund, so pick the first target carefully.",
        ),
    ],
    matchup_note: None,
};
