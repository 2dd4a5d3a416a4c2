use crate::analysis::recommender::{item, noted, ChampionProfile, Cond, ItemStep, Role, WaveTipsSpec};

const TOP_TANKS: &[&str] = &[
    "ornn", "sion", "mundo", "zac", "malphite", "chogath", "tahm", "shen", "poppy", "ksante",
    "maokai", "galio",
];
const TOP_BRUISERS: &[&str] = &[
    "darius", "sett", "garen", "illaoi", "renekton", "mordekaiser", "aatrox", "olaf", "urgot",
    "jax", "camille", "wukong", "kled", "riven", "fiora", "gwen", "tryndamere", "yone", "yasuo",
    "nasus",
];

const TANK_PATH: Cond = Cond::Any(&[Cond::Tanky, Cond::HeavyCcBurst]);

pub static VOLIBEAR: ChampionProfile = ChampionProfile {
    key: "volibear",
    label: "Volibear",
    role: Role::Top,
    headlines: &[
        &[
            (
                Cond::RangedLane,
                "RUNES: Resolve (Grasp) + Second Wind + Unflinching (stability vs poke)",
            ),
            (Cond::Always, "RUNES: Resolve (Grasp) or Precision (PTA) depending on matchup"),
        ],
        &[
            (
                Cond::RangedLane,
                "START: Doran’s Shield (vs poke) + Second Wind style trading",
            ),
            (Cond::Always, "START: Doran’s Blade (vs melee) for stronger all-ins"),
        ],
        &[
            (TANK_PATH, "BUILD: Tank — frontline their CC/tanks and dive the backline"),
            (Cond::Always, "BUILD: Bruiser — 1 damage item first, then resistances"),
        ],
        &[(
            Cond::Always,
            "LANE RULE: Short trades early; look for all-in windows with Q stun + W mark",
        )],
    ],
    items: &[
        ItemStep::Choose(&[
            (TANK_PATH, &[noted("Sunfire Aegis", "(tank path: burn + waveclear)")]),
            (Cond::Always, &[noted("Riftmaker", "(bruiser path: sustained damage + healing)")]),
        ]),
        ItemStep::Choose(&[
            (
                Cond::Any(&[Cond::HeavyCcBurst, Cond::HeavyAp]),
                &[item("Mercury’s Treads")],
            ),
            (Cond::Always, &[item("Plated Steelcaps")]),
        ]),
        ItemStep::Push(noted("Dead Man’s Plate", "(stickiness to land Q engages)")),
        ItemStep::Choose(&[
            (Cond::HeavyAp, &[noted("Force of Nature", "(vs heavy AP)")]),
            (Cond::HeavyAd, &[noted("Randuin’s Omen", "(vs heavy AD / crit)")]),
            (Cond::Always, &[noted("Spirit Visage", "(MR + amplified healing)")]),
        ]),
        ItemStep::Choose(&[
            (Cond::Healing, &[noted("Thornmail", "(anti-heal vs healing comp)")]),
            (Cond::Always, &[noted("Sterak’s Gage", "(survive focus on dives)")]),
        ]),
        ItemStep::Push(noted("Jak’Sho, The Protean", "(frontline in long fights)")),
    ],
    wave_tips: Some(&[
        (
            Cond::RangedLane,
            WaveTipsSpec {
                title: "Survive the poke lane",
                bullets: &[
                    "Use brush and play for short trades; don’t bleed HP for CS.",
                    "Let the wave sit near your tower so they have to walk up to poke.",
                    "Look for level 3–6 all-in windows when they misstep.",
                ],
            },
        ),
        (
            Cond::Lane(TOP_TANKS),
            WaveTipsSpec {
                title: "Tempo vs tank",
                bullets: &[
                    "Push tempo with short trades and wave control.",
                    "Crash before objectives so you move first (or TP first).",
                    "Win through pressure and objective timing, not always solo kills.",
                ],
            },
        ),
        (
            Cond::Lane(TOP_BRUISERS),
            WaveTipsSpec {
                title: "Cooldown trading vs bruiser",
                bullets: &[
                    "Respect their spikes; trade around your cooldowns.",
                    "Short, disciplined trades, then all-in once you have the advantage.",
                    "Freeze near your tower when even so their all-in walks into your jungler.",
                ],
            },
        ),
        (
            Cond::Always,
            WaveTipsSpec {
                title: "Default lane plan",
                bullets: &[
                    "Short trades early; respect level spikes and track the enemy jungler.",
                    "Commit when you have cooldown advantage.",
                    "Stack a wave before diving so R lands with minions tanking tower shots.",
                ],
            },
        ),
    ]),
    fight_rule: &[
        (
            Cond::HeavyCcBurst,
            "FIGHT RULE: Don’t R in first into stacked CC — wait for key CC, then dive the backline",
        ),
        (
            Cond::Always,
            "FIGHT RULE: R over the frontline onto their carry → Q stun → W mark; disable towers with R when diving",
        ),
    ],
    bans: &["Teemo", "Vayne", "Quinn", "Kennen", "Gwen"],
    runes: &[
        "Resolve: Grasp of the Undying | Demolish | Second Wind | Unflinching",
        "Secondary: Precision (Triumph/Last Stand) or Sorcery for scaling",
        "Shards: AS / Adaptive / (Armor or MR)",
    ],
    skill_order: "Skill order: Q > W > E (take R whenever available).",
    starter: &[
        &[
            (Cond::RangedLane, "Doran’s Shield (vs poke)"),
            (Cond::Always, "Doran’s Blade (vs melee)"),
        ],
        &[(Cond::Always, "Summoners: Flash + Teleport (usually)")],
    ],
    situational: &[
        "If you need stickiness: movement/slow tools help secure Q engages.",
        "If you’re frontlining: prioritize resistances after first damage spike.",
    ],
    notes: &[
        (
            Cond::Healing,
            "If lane/comp has strong healing, plan anti-heal timing.",
        ),
        (
            Cond::HeavyAp,
            "Consider an early MR component if enemy is heavy AP.",
        ),
    ],
    matchup_note: None,
};
