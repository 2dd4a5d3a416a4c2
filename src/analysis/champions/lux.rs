use crate::analysis::recommender::{noted, ChampionProfile, Cond, ItemStep, Role, WaveTipsSpec};

// Enemy bot-lane support archetypes
const HOOK: &[&str] = &["thresh", "nautilus", "blitzcrank", "pyke"];
const ENGAGE: &[&str] = &["leona", "rell", "alistar", "rakan"];
const ENCHANT: &[&str] = &["lulu", "janna", "nami", "soraka", "milio", "yuumi", "karma"];
const POKE_MAGES: &[&str] = &["xerath", "velkoz", "brand", "zyra", "lux"];

const DIVERS: &[&str] = &["zed", "talon", "naafiri", "khazix", "qiyana", "rengar", "vi", "nocturne"];

const VS_HOOK: Cond = Cond::Lane(HOOK);
// hook supports are engage supports too
const VS_ENGAGE: Cond = Cond::Any(&[Cond::Lane(ENGAGE), VS_HOOK]);

pub static LUX: ChampionProfile = ChampionProfile {
    key: "lux",
    label: "Lux",
    role: Role::Support,
    headlines: &[
        &[(
            Cond::Always,
            "RUNES: Arcane Comet — Manaflow + Transcendence; Scorch for lane pressure",
        )],
        &[
            (
                Cond::Any(&[VS_ENGAGE, Cond::HeavyCcBurst]),
                "SECONDARY: Inspiration (Biscuit + Cosmic) — survive lanes + spam windows",
            ),
            (
                Cond::Always,
                "SECONDARY: Inspiration (Biscuit + Cosmic) — standard Lux support",
            ),
        ],
        &[(
            Cond::Always,
            "START: World Atlas → upgrade support poke item (play for E poke + Q picks)",
        )],
        &[
            (
                VS_HOOK,
                "LANE RULE: Stand behind minions — never give hook angle; trade only after hook misses",
            ),
            (
                VS_ENGAGE,
                "LANE RULE: Respect all-in timers (lvl 2/3/6) — hold Q defensively, poke with E from max range",
            ),
            (
                Cond::Lane(ENCHANT),
                "LANE RULE: Poke to force pots → look for Q when they step up to shield/heal",
            ),
            (
                Cond::Always,
                "LANE RULE: Own brush + wave edge with E — fish Q when they dodge sideways",
            ),
        ],
    ],
    items: &[
        ItemStep::Push(noted("Zaz'Zak’s Realmspike", "(support poke upgrade)")),
        ItemStep::Push(noted("Sorcerer’s Shoes", "(lane pressure / pick damage)")),
        ItemStep::Push(noted("Imperial Mandate", "(Q/E slow + team follow-up damage)")),
        ItemStep::Choose(&[
            (
                Cond::Any(&[Cond::Enemy(DIVERS), Cond::HeavyCcBurst]),
                &[noted("Zhonya’s Hourglass", "← BUY HERE (divers/CC — survive focus)")],
            ),
            (
                Cond::Always,
                &[noted("Horizon Focus", "(pick damage amplification off Q/slow)")],
            ),
        ]),
        ItemStep::Choose(&[
            (
                Cond::Healing,
                &[noted("Morellonomicon", "(anti-heal — grab Oblivion Orb earlier if needed)")],
            ),
            (
                Cond::Always,
                &[noted("Rabadon’s Deathcap", "(if you’re snowballing/picking constantly)")],
            ),
        ]),
        ItemStep::Choose(&[
            (Cond::Tanky, &[noted("Void Staff", "(if they build MR/frontline)")]),
            (Cond::Always, &[noted("Shadowflame", "(best damage if low MR)")]),
        ]),
    ],
    wave_tips: Some(&[
        (
            VS_ENGAGE,
            WaveTipsSpec {
                title: "Wave safety vs all-in",
                bullets: &[
                    "Don’t perma-shove without vision—getting ganked with no Flash ends lane.",
                    "Use E to thin the wave so you don’t get forced into a giant crash + dive.",
                    "Hold Q for the engager’s commit; if they whiff engage, you get a free counter-trade.",
                ],
            },
        ),
        (
            Cond::Lane(POKE_MAGES),
            WaveTipsSpec {
                title: "Trade space, not HP",
                bullets: &[
                    "Play slightly off-center so you don’t eat double poke; use E to contest brush control.",
                    "Crash timings matter: help your ADC reset on cannon waves so you don’t get trapped low HP.",
                    "Don’t spam E if it costs you lane control—poke only when it also wins space.",
                ],
            },
        ),
        (
            Cond::Always,
            WaveTipsSpec {
                title: "Pick windows off wave",
                bullets: &[
                    "Default: help slow push → crash → use the reset window to ward or roam mid with Q threat.",
                    "Fight around your E zone: make them choose between CS and eating poke.",
                    "When wave is neutral: threaten Q from fog/brush to force them back.",
                ],
            },
        ),
    ]),
    fight_rule: &[
        (
            Cond::Any(&[VS_ENGAGE, Cond::HeavyCcBurst]),
            "FIGHT RULE: Play as 2nd line — Q whoever commits → E zone to slow → R to finish (don’t walk up first)",
        ),
        (
            Cond::Always,
            "FIGHT RULE: Fish Q from fog/angles → layer E slow → R to convert pick into objective",
        ),
    ],
    bans: &["Blitzcrank", "Nautilus", "Leona", "Pyke", "Zed"],
    runes: &[
        "Sorcery: Arcane Comet | Manaflow Band | Transcendence | Scorch",
        "Secondary: Inspiration (Biscuit + Cosmic Insight)",
        "Shards: Adaptive / Adaptive / Health",
    ],
    skill_order: "Skill order: E > Q > W (take R whenever available).",
    starter: &[
        &[(Cond::Always, "World Atlas")],
        &[(Cond::Always, "2x Pots")],
        &[(Cond::Always, "Summoners: Flash + (Ignite/Exhaust) depending on lane")],
    ],
    situational: &[
        "If they hard-dive: Zhonya earlier (even 2nd/3rd) + play tighter to your team.",
        "If your comp needs picks: prioritize Mandate/Horizon-style damage amp.",
        "If they stack MR: Void Staff earlier (4th/5th).",
    ],
    notes: &[(
        Cond::Always,
        "Lux support wins by owning space with E and converting one Q into a pick → objective.",
    )],
    matchup_note: Some("Bot matchup detected: "),
};
