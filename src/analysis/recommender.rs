// Shared evaluator for the per-champion rule tables in `champions/`.
//
// Every champion is a `ChampionProfile`: static data made of conditions and
// canned text. `Recommender::recommend` walks a profile against one draft and
// produces a `Recommendation`. No profile carries code of its own.

use serde::Serialize;

use super::tags::DraftTags;
use super::{contains_any, normalize};

/// Annotation prefix that marks an item as bought earlier than its slot.
pub const BUY_HERE: &str = "← BUY HERE";

/// Every recommendation shows exactly this many items.
pub const ITEM_SLOTS: usize = 6;

const FLEX_SLOT: ItemSpec = noted("Flex slot", "(situational: adapt to the game)");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Role {
    Jungle,
    Top,
    Bottom,
    Support,
}

impl Role {
    /// Laning roles get wave tips and can be shown from a lane opponent alone.
    pub fn is_lane(self) -> bool {
        !matches!(self, Role::Jungle)
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Jungle => "Jungle",
            Role::Top => "Top",
            Role::Bottom => "Bot",
            Role::Support => "Support",
        }
    }
}

/// Predicate over one draft.
#[derive(Debug, Clone, Copy)]
pub enum Cond {
    Always,
    Tanky,
    HeavyCcBurst,
    HeavyAp,
    HeavyAd,
    Healing,
    RangedLane,
    /// Any enemy name contains any of the keywords.
    Enemy(&'static [&'static str]),
    /// Any lane opponent contains any of the keywords.
    Lane(&'static [&'static str]),
    Not(&'static Cond),
    Any(&'static [Cond]),
    All(&'static [Cond]),
}

/// Ordered alternatives; the first matching condition wins.
pub type Pick<T> = &'static [(Cond, T)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemSpec {
    pub name: &'static str,
    pub note: Option<&'static str>,
}

pub const fn item(name: &'static str) -> ItemSpec {
    ItemSpec { name, note: None }
}

pub const fn noted(name: &'static str, note: &'static str) -> ItemSpec {
    ItemSpec {
        name,
        note: Some(note),
    }
}

#[derive(Debug, Clone, Copy)]
pub enum ItemStep {
    /// Always appended.
    Push(ItemSpec),
    /// Appends the item group of the first matching branch.
    Choose(Pick<&'static [ItemSpec]>),
    /// Spliced in at a fixed index (clamped to the list end) when the condition holds.
    InsertAt(usize, Cond, ItemSpec),
}

#[derive(Debug, Clone, Copy)]
pub struct WaveTipsSpec {
    pub title: &'static str,
    pub bullets: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct ChampionProfile {
    pub key: &'static str,
    pub label: &'static str,
    pub role: Role,
    pub headlines: &'static [Pick<&'static str>],
    pub items: &'static [ItemStep],
    /// Lane roles only.
    pub wave_tips: Option<Pick<WaveTipsSpec>>,
    pub fight_rule: Pick<&'static str>,
    pub bans: &'static [&'static str],
    pub runes: &'static [&'static str],
    pub skill_order: &'static str,
    pub starter: &'static [Pick<&'static str>],
    pub situational: &'static [&'static str],
    /// Every matching note is kept, in order.
    pub notes: &'static [(Cond, &'static str)],
    /// Prefix of a note naming the lane opponents, added when any are given.
    pub matchup_note: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderedItem {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl OrderedItem {
    pub fn is_buy_here(&self) -> bool {
        self.note.as_deref().is_some_and(|n| n.starts_with(BUY_HERE))
    }
}

impl From<ItemSpec> for OrderedItem {
    fn from(spec: ItemSpec) -> Self {
        OrderedItem {
            name: spec.name.to_string(),
            note: spec.note.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WaveTips {
    pub title: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendationDetails {
    pub runes: Vec<String>,
    pub skill_order: String,
    pub starter: Vec<String>,
    pub situational: Vec<String>,
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub champion: String,
    pub headline_lines: Vec<String>,
    pub items_ordered: Vec<OrderedItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fight_rule: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wave_tips: Option<WaveTips>,
    pub bans: Vec<String>,
    #[serde(skip)]
    pub details: RecommendationDetails,
}

/// One draft as the rule tables see it: tags plus normalized names.
struct Draft<'a> {
    tags: &'a DraftTags,
    enemies: Vec<String>,
    lane: Vec<String>,
}

impl Cond {
    fn holds(&self, draft: &Draft) -> bool {
        let t = draft.tags;
        match self {
            Cond::Always => true,
            Cond::Tanky => t.tanky,
            Cond::HeavyCcBurst => t.heavy_cc_burst,
            Cond::HeavyAp => t.heavy_ap,
            Cond::HeavyAd => t.heavy_ad,
            Cond::Healing => t.healing,
            Cond::RangedLane => t.ranged_lane_opponent,
            Cond::Enemy(keys) => draft.enemies.iter().any(|e| contains_any(e, keys)),
            Cond::Lane(keys) => draft.lane.iter().any(|l| contains_any(l, keys)),
            Cond::Not(inner) => !inner.holds(draft),
            Cond::Any(conds) => conds.iter().any(|c| c.holds(draft)),
            Cond::All(conds) => conds.iter().all(|c| c.holds(draft)),
        }
    }
}

fn pick<T: Copy>(rules: Pick<T>, draft: &Draft) -> Option<T> {
    rules.iter().find(|(cond, _)| cond.holds(draft)).map(|(_, v)| *v)
}

fn pick_lines(lines: &[Pick<&'static str>], draft: &Draft) -> Vec<String> {
    lines
        .iter()
        .filter_map(|rules| pick(rules, draft))
        .map(str::to_string)
        .collect()
}

fn build_items(steps: &[ItemStep], draft: &Draft) -> Vec<OrderedItem> {
    let mut items: Vec<ItemSpec> = Vec::with_capacity(ITEM_SLOTS + 1);

    for step in steps {
        match step {
            ItemStep::Push(spec) => items.push(*spec),
            ItemStep::Choose(rules) => {
                if let Some(group) = pick(rules, draft) {
                    items.extend_from_slice(group);
                }
            }
            ItemStep::InsertAt(index, cond, spec) => {
                if cond.holds(draft) {
                    items.insert((*index).min(items.len()), *spec);
                }
            }
        }
    }

    items.truncate(ITEM_SLOTS);
    while items.len() < ITEM_SLOTS {
        items.push(FLEX_SLOT);
    }
    items.into_iter().map(OrderedItem::from).collect()
}

pub struct Recommender;

impl Recommender {
    /// Pure function of its inputs. Empty enemy and lane lists still produce
    /// the default branch of every rule.
    pub fn recommend(
        profile: &ChampionProfile,
        tags: &DraftTags,
        enemies: &[String],
        lane_opponents: &[String],
    ) -> Recommendation {
        let draft = Draft {
            tags,
            enemies: enemies.iter().map(|e| normalize(e)).collect(),
            lane: lane_opponents
                .iter()
                .map(|l| normalize(l))
                .filter(|l| !l.is_empty())
                .collect(),
        };

        let items_ordered = build_items(profile.items, &draft);

        let wave_tips = if profile.role.is_lane() {
            profile
                .wave_tips
                .and_then(|rules| pick(rules, &draft))
                .map(|w| WaveTips {
                    title: w.title.to_string(),
                    bullets: w.bullets.iter().map(|b| b.to_string()).collect(),
                })
        } else {
            None
        };

        let mut notes: Vec<String> = profile
            .notes
            .iter()
            .filter(|(cond, _)| cond.holds(&draft))
            .map(|(_, text)| text.to_string())
            .collect();
        let lane_names: Vec<&str> = lane_opponents
            .iter()
            .map(|l| l.trim())
            .filter(|l| !l.is_empty())
            .collect();
        if let Some(prefix) = profile.matchup_note.filter(|_| !lane_names.is_empty()) {
            notes.push(format!("{}{}", prefix, lane_names.join(", ")));
        }

        Recommendation {
            champion: profile.label.to_string(),
            headline_lines: pick_lines(profile.headlines, &draft),
            fight_rule: pick(profile.fight_rule, &draft).map(str::to_string),
            wave_tips,
            bans: profile.bans.iter().map(|b| b.to_string()).collect(),
            details: RecommendationDetails {
                runes: profile.runes.iter().map(|r| r.to_string()).collect(),
                skill_order: profile.skill_order.to_string(),
                starter: pick_lines(profile.starter, &draft),
                situational: profile.situational.iter().map(|s| s.to_string()).collect(),
                notes,
            },
            items_ordered,
        }
    }
}

/// Whether a UI should show recommendations at all. Recommendations are
/// always computed; this only gates their display.
pub fn should_display(has_enemy_team: bool, role: Role, lane_text: &str) -> bool {
    has_enemy_team || (role.is_lane() && !lane_text.trim().is_empty())
}
