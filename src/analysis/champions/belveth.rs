use crate::analysis::recommender::{item, noted, ChampionProfile, Cond, ItemSpec, ItemStep, Role};

const LVL1_PICK: &[&str] = &["blitzcrank", "nautilus", "pyke", "thresh", "ashe", "pantheon"];
const CC_LOCKDOWN: &[&str] = &[
    "lissandra", "leona", "nautilus", "skarner", "malzahar", "ashe", "pantheon", "vi",
];
const HEAVY_AUTO_AD: &[&str] = &[
    "jax", "tryndamere", "yasuo", "yone", "vayne", "kogmaw", "kaisa", "tristana",
];
// "this ruins my carry pattern": suppression and point-click lockdown
const QSS_THREATS: &[&str] = &["malzahar", "skarner", "warwick", "lissandra", "vi"];

const WITS_VS_AP: ItemSpec = noted("Wit’s End", "(vs AP threats)");
const DEATHS_DANCE: ItemSpec = noted("Death’s Dance", "(vs burst / survive dives)");

pub static BELVETH: ChampionProfile = ChampionProfile {
    key: "belveth",
    label: "Bel'Veth",
    role: Role::Jungle,
    headlines: &[
        &[(
            Cond::Always,
            "RUNES: Conqueror (default) — Triumph + Alacrity; Coup/Cut Down by enemy HP",
        )],
        &[
            (
                Cond::Any(&[Cond::HeavyCcBurst, Cond::Enemy(LVL1_PICK)]),
                "START: BLUE (safer vs early CC/pick; protect first clear)",
            ),
            (Cond::Always, "START: RED (standard tempo / stronger early skirmish)"),
        ],
        &[
            (
                Cond::HeavyCcBurst,
                "EARLY: Farm to item → avoid forced flips; countergank with E damage reduction",
            ),
            (
                Cond::Always,
                "EARLY: Play for skirmishes around crab/Herald → snowball form + tempo",
            ),
        ],
        &[
            (
                Cond::Tanky,
                "TANK TECH: If 2+ tanks/high HP → consider BORK or Terminus earlier",
            ),
            (
                Cond::Always,
                "TANK TECH: Default Kraken→Stride is fine unless they stack HP/armor",
            ),
        ],
    ],
    items: &[
        ItemStep::Push(item("Kraken Slayer")),
        ItemStep::Choose(&[
            (
                Cond::Any(&[
                    Cond::HeavyCcBurst,
                    Cond::All(&[Cond::HeavyAp, Cond::Enemy(CC_LOCKDOWN)]),
                ]),
                &[item("Merc Treads")],
            ),
            (
                Cond::Any(&[Cond::HeavyAd, Cond::Enemy(HEAVY_AUTO_AD)]),
                &[item("Plated Steelcaps")],
            ),
            (Cond::Always, &[item("Berserker’s Greaves")]),
        ]),
        ItemStep::Push(noted("Stridebreaker", "(stick + tempo for resets)")),
        ItemStep::InsertAt(
            3,
            Cond::Enemy(QSS_THREATS),
            noted("QSS", "← BUY HERE (suppression/lockdown threat)"),
        ),
        ItemStep::Choose(&[
            (Cond::HeavyAp, &[WITS_VS_AP, DEATHS_DANCE]),
            (
                Cond::Always,
                &[
                    DEATHS_DANCE,
                    noted("Wit’s End", "(good default mixed resist + DPS)"),
                ],
            ),
        ]),
        ItemStep::Push(noted("Jak’Sho, The Protean", "(frontline carry in long fights)")),
    ],
    wave_tips: None,
    fight_rule: &[
        (
            Cond::HeavyCcBurst,
            "FIGHT RULE: Don’t enter first — wait for key CC → E through burst → take reset target → chain form/objectives",
        ),
        (
            Cond::Always,
            "FIGHT RULE: Look for 2v2/3v3 first → secure form off coral → convert to Herald/Baron and snowball map",
        ),
    ],
    bans: &["Rammus", "Jax", "Poppy", "Vi", "Warwick"],
    runes: &[
        "Precision: Conqueror | Triumph | Legend: Alacrity | Coup de Grace (or Cut Down vs HP)",
        "Secondary: Inspiration (Magical Footwear + Cosmic Insight) or Resolve if you need durability",
        "Shards: AS / Adaptive / (Armor or MR)",
    ],
    skill_order: "Skill order: Q > E > W (take R whenever available).",
    starter: &[
        &[(Cond::Always, "Jungle item + Refillable")],
        &[(Cond::Always, "Smite + Flash")],
    ],
    situational: &[
        "If heavy suppression/point-click CC: QSS at 3rd–4th slot timing (before midgame fights).",
        "If they stack HP/armor: BORK or Terminus earlier.",
        "If you’re the only engager: lean Jak’Sho/DD sooner and fight slower.",
    ],
    notes: &[
        (
            Cond::Always,
            "Bel’Veth wins by turning skirmishes into objectives (Herald/Baron form).",
        ),
        (
            Cond::HeavyCcBurst,
            "Respect CC chains — your entry timing matters more than your damage.",
        ),
    ],
    matchup_note: None,
};
