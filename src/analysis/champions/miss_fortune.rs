use crate::analysis::recommender::{item, noted, ChampionProfile, Cond, ItemStep, Role, WaveTipsSpec};

// Enemy bot-lane support archetypes
const ENGAGE: &[&str] = &[
    "leona", "nautilus", "thresh", "blitzcrank", "rell", "alistar", "rakan", "pyke",
];
const POKE: &[&str] = &["lux", "xerath", "velkoz", "brand", "zyra"];
const ENCHANT: &[&str] = &["lulu", "janna", "nami", "soraka", "milio", "karma", "yuumi"];

const HARD_CC: &[&str] = &[
    "leona", "nautilus", "skarner", "malzahar", "lissandra", "vi", "ashe", "pantheon",
];
// point/click before or after R
const QSS_THREATS: &[&str] = &["malzahar", "skarner", "warwick", "lissandra"];

const VS_ENGAGE: Cond = Cond::Lane(ENGAGE);
const VS_POKE: Cond = Cond::Lane(POKE);

pub static MISS_FORTUNE: ChampionProfile = ChampionProfile {
    key: "missfortune",
    label: "Miss Fortune",
    role: Role::Bottom,
    headlines: &[
        &[(
            Cond::Always,
            "RUNES: Press the Attack (crit/DPS) — lane wins off short trades + Q bounce",
        )],
        &[
            (
                Cond::Any(&[VS_ENGAGE, Cond::HeavyCcBurst]),
                "SECONDARY: Inspiration (Biscuit + Cosmic) or Resolve (Second Wind) if lane is violent",
            ),
            (
                Cond::Always,
                "SECONDARY: Inspiration (Biscuit + Cosmic) for lane control",
            ),
        ],
        &[
            (VS_POKE, "START: Doran’s Shield (anti-poke lane stability)"),
            (Cond::Always, "START: Doran’s Blade (standard pressure)"),
        ],
        &[
            (
                VS_ENGAGE,
                "LANE RULE: Don’t stand in hook/engage range — thin wave, hold Flash, punish missed engage with Q+AA+E",
            ),
            (
                Cond::Lane(ENCHANT),
                "LANE RULE: Trade often before they out-sustain — Q bounce poke + wave control into plate windows",
            ),
            (
                Cond::Always,
                "LANE RULE: Slow push → crash → reset (you want wave control for clean Q bounces + E zones)",
            ),
        ],
    ],
    items: &[
        ItemStep::Push(noted("The Collector", "(snowball + execute for R cleanups)")),
        ItemStep::Choose(&[
            (
                Cond::Any(&[Cond::HeavyCcBurst, Cond::Enemy(HARD_CC)]),
                &[item("Mercury’s Treads")],
            ),
            (Cond::HeavyAd, &[item("Plated Steelcaps")]),
            (Cond::Always, &[item("Berserker’s Greaves")]),
        ]),
        ItemStep::Push(noted("Infinity Edge", "(crit spike — R + autos hurt)")),
        ItemStep::InsertAt(
            3,
            Cond::Enemy(QSS_THREATS),
            noted("QSS", "← BUY HERE (point/click suppression/lockdown)"),
        ),
        ItemStep::Choose(&[
            (
                Cond::Any(&[Cond::Tanky, Cond::HeavyAd]),
                &[noted("Lord Dominik’s Regards", "(vs frontline / armor)")],
            ),
            (
                Cond::Always,
                &[noted("Lord Dominik’s Regards", "(best default 3–4 item damage curve)")],
            ),
        ]),
        ItemStep::Choose(&[
            (
                VS_POKE,
                &[noted("Bloodthirster", "(stabilize vs poke; keep HP for fights)")],
            ),
            (
                Cond::Always,
                &[noted("Bloodthirster", "(shield lets you hold R angles)")],
            ),
        ]),
        ItemStep::Choose(&[
            (
                Cond::Healing,
                &[noted(
                    "Mortal Reminder",
                    "(anti-heal — finish later; consider early Executioner’s)",
                )],
            ),
            (
                Cond::Always,
                &[noted("Rapid Firecannon", "(safer autos to start fights / tag PTA)")],
            ),
        ]),
    ],
    wave_tips: Some(&[
        (
            VS_ENGAGE,
            WaveTipsSpec {
                title: "Keep wave safe vs engage",
                bullets: &[
                    "Levels 1–3: don’t perma-push into hook angles; keep wave near your side so engages are risky for them.",
                    "If they miss key engage: immediately step up for PTA trade and chunk them under your minion wave.",
                    "Crash a cannon wave only when you have vision/HP—otherwise keep the lane short and safe.",
                ],
            },
        ),
        (
            VS_POKE,
            WaveTipsSpec {
                title: "Stabilize vs poke",
                bullets: &[
                    "Let wave come slightly toward you; last-hit more than you shove so you don’t tank free poke in a long lane.",
                    "Use E to break freezes and to set up Q bounce trades (don’t spam it off-CD if mana is tight).",
                    "Crash on cannon wave → reset → return before you lose tempo.",
                ],
            },
        ),
        (
            Cond::Always,
            WaveTipsSpec {
                title: "Crash timing for plates",
                bullets: &[
                    "Default: slow push 1–2 waves → crash big → take recall/ward timing.",
                    "When you have item lead: perma-crash to pressure plates and set up dragon timers.",
                    "If jungle is bot-side: stack wave to force them to choose between CS and fighting in your minion wave.",
                ],
            },
        ),
    ]),
    fight_rule: &[
        (
            Cond::Any(&[Cond::HeavyCcBurst, VS_ENGAGE]),
            "FIGHT RULE: Don’t R first — wait for engage/CC to be used → E slow + R from safe angle → clean up with crit autos",
        ),
        (
            Cond::Always,
            "FIGHT RULE: Use E to set zone → R when targets can’t sidestep/interrupt → then auto to finish",
        ),
    ],
    bans: &["Leona", "Nautilus", "Rammus", "Malphite", "Zac"],
    runes: &[
        "Precision: Press the Attack | Presence of Mind | Legend: Bloodline/Alacrity | Coup de Grace",
        "Secondary: Inspiration (Biscuit + Cosmic) or Resolve (Second Wind) into hard lanes",
        "Shards: AS / Adaptive / (Armor or MR)",
    ],
    skill_order: "Skill order: Q > W > E (take R whenever available).",
    starter: &[
        &[
            (VS_POKE, "Doran’s Shield (anti-poke lane stability)"),
            (Cond::Always, "Doran’s Blade (standard pressure)"),
        ],
        &[(Cond::Always, "Summoners: Flash + Heal (or Cleanse vs hard CC)")],
    ],
    situational: &[
        "If they have hard engage + you’re the wincon: early Stopwatch can save key midgame fights.",
        "If healing is high: Executioner’s early; complete Mortal later.",
        "If you can’t channel R safely: play more auto-focused and use R as follow-up only.",
    ],
    notes: &[(
        Cond::Always,
        "Miss Fortune wins fights off position + timing. Your ult is your nuke—don’t donate it to point-click CC.",
    )],
    matchup_note: Some("Bot matchup detected: "),
};
