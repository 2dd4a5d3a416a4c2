use crate::analysis::recommender::{item, noted, ChampionProfile, Cond, ItemStep, Role, WaveTipsSpec};

const TOP_RANGED: &[&str] = &["teemo", "quinn", "kennen", "jayce", "gnar", "vayne", "akshan"];
const TOP_POKE: &[&str] = &["teemo", "quinn", "kennen", "jayce", "gnar", "vayne"];
const TOP_DIVERS: &[&str] = &[
    "irelia", "camille", "jax", "riven", "renekton", "olaf", "tryndamere", "sett", "darius",
    "yasuo", "yone",
];
const TOP_SCALING: &[&str] = &[
    "kayle", "nasus", "gangplank", "ornn", "sion", "mundo", "ksante", "vladimir",
];
const ASSASSINS: &[&str] = &["zed", "talon", "naafiri", "khazix", "qiyana", "rengar", "vi"];
const RYLAI_TARGETS: &[&str] = &["darius", "garen", "udyr", "volibear", "sett", "olaf"];
const MR_STACKERS: &[&str] = &["galio", "ornn", "maokai", "zac", "ksante"];

const NEEDS_ZHONYAS: Cond = Cond::Any(&[Cond::HeavyAd, Cond::HeavyCcBurst, Cond::Enemy(ASSASSINS)]);
const SAFE_START: Cond = Cond::Any(&[Cond::Lane(TOP_POKE), Cond::HeavyCcBurst]);

const RANGED_BULLETS: &[&str] = &[
    "Slow push behind turrets; don’t take free poke just to auto the wave.",
    "Crash on cannon wave for a safe reset/ward timing (turrets help you crash reliably).",
    "If you get chunked: stop shoving and let it bounce back—best fights happen when they walk into your setup.",
];

pub static HEIMERDINGER: ChampionProfile = ChampionProfile {
    key: "heimerdinger",
    label: "Heimerdinger",
    role: Role::Top,
    headlines: &[
        &[(
            Cond::Always,
            "RUNES: Summon Aery or Arcane Comet — Manaflow + Transcendence; Scorch into melee",
        )],
        &[
            (SAFE_START, "START: Doran’s Shield (survive poke / don’t get chipped out)"),
            (Cond::Always, "START: Doran’s Ring (lane control + mana)"),
        ],
        &[
            (
                NEEDS_ZHONYAS,
                "STASIS: BUY HERE — early Stopwatch/Seeker’s if they can dive you (Zed/Vi/Kha etc.)",
            ),
            (
                Cond::Always,
                "STASIS: Optional — rush Zhonya only if you’re getting hard-dived",
            ),
        ],
        &[(
            Cond::Always,
            "LANE RULE: Turrets down before trades → hold E to punish engage → slow push + crash with turret setup",
        )],
    ],
    items: &[
        ItemStep::Push(noted("Blackfire Torch", "(core burn spike)")),
        ItemStep::Push(item("Sorcerer’s Shoes")),
        ItemStep::Push(noted("Liandry’s Torment", "(excellent vs HP/frontline)")),
        ItemStep::Choose(&[
            (
                NEEDS_ZHONYAS,
                &[noted("Zhonya’s Hourglass", "(anti-dive / buy time for turrets)")],
            ),
            (
                Cond::Any(&[Cond::Tanky, Cond::Enemy(RYLAI_TARGETS)]),
                &[noted("Rylai’s Crystal Scepter", "(kite + zone control)")],
            ),
            (
                Cond::Always,
                &[noted("Rylai’s Crystal Scepter", "(default utility)")],
            ),
        ]),
        ItemStep::Push(noted("Rabadon’s Deathcap", "(big AP closeout)")),
        ItemStep::Choose(&[
            (
                Cond::Any(&[Cond::Enemy(MR_STACKERS), Cond::Tanky]),
                &[noted("Void Staff", "(if they stack MR)")],
            ),
            (Cond::Always, &[noted("Shadowflame", "(if they don’t stack MR)")]),
        ]),
    ],
    wave_tips: Some(&[
        (
            Cond::Lane(TOP_DIVERS),
            WaveTipsSpec {
                title: "Anti-dive lane state",
                bullets: &[
                    "Keep wave on your side (short lane) so dives are awkward; don’t perma-shove without vision.",
                    "Build a 2-turret nest slightly behind your caster line; hold E for their commit (stun = turn).",
                    "When you do shove: crash a big wave → ward → reset; don’t sit past river with no setup.",
                ],
            },
        ),
        (
            Cond::All(&[Cond::Lane(TOP_RANGED), Cond::Lane(TOP_SCALING)]),
            WaveTipsSpec {
                title: "Perma-deny plan",
                bullets: RANGED_BULLETS,
            },
        ),
        (
            Cond::Lane(TOP_RANGED),
            WaveTipsSpec {
                title: "Turret-nest tempo",
                bullets: RANGED_BULLETS,
            },
        ),
        (
            Cond::Lane(TOP_SCALING),
            WaveTipsSpec {
                title: "Perma-deny plan",
                bullets: &[
                    "Slow push → crash big → freeze the bounce on your side to deny (they can’t farm safely into turrets).",
                    "Punish last-hits with W poke; protect turret health so the lane stays ‘owned.’",
                    "If ahead: stack waves and take plates—your setup makes plate trades favorable.",
                ],
            },
        ),
        (
            Cond::Always,
            WaveTipsSpec {
                title: "Turret-nest tempo",
                bullets: &[
                    "Default: slow push with turrets → crash → take a clean reset/ward timing.",
                    "Don’t randomly auto the wave—control it so fights happen where turrets already exist.",
                    "If jungler is topside: stack a wave and threaten R+Q zone to win the crash/plates.",
                ],
            },
        ),
    ]),
    fight_rule: &[(
        Cond::Always,
        "FIGHT RULE: Don’t walk in first — set turrets, fish for E stun → R+E for picks or R+Q to hold a zone/objective",
    )],
    bans: &["Irelia", "Yasuo", "Nasus", "Syndra", "Olaf"],
    runes: &[
        "Sorcery: Aery/Comet | Manaflow Band | Transcendence | Scorch (or Gathering Storm)",
        "Secondary: Inspiration (Biscuit + Cosmic) or Precision (Presence of Mind) depending on comfort",
        "Shards: Adaptive / Adaptive / Health",
    ],
    skill_order: "Skill order: Q > W > E (take R whenever available).",
    starter: &[
        &[
            (SAFE_START, "Doran’s Shield"),
            (Cond::Always, "Doran’s Ring"),
        ],
        &[(Cond::Always, "Summoners: Flash + Teleport (usually)")],
    ],
    situational: &[
        "If they have multiple divers: Zhonya earlier + play tighter around turret nests.",
        "If enemy stacks MR: Void Staff earlier (4th/5th).",
        "If you need perma-kite: Rylai earlier and use turrets as a slow field.",
    ],
    notes: &[
        (
            Cond::Always,
            "Your power is pre-setup: fights are easiest when you own the space before they arrive.",
        ),
        (
            Cond::Tanky,
            "Burn items (Blackfire/Liandry) are extra valuable vs frontline.",
        ),
    ],
    matchup_note: None,
};
