use crate::analysis::recommender::{ChampionProfile, OrderedItem, Recommendation};
use crate::analysis::scout::ScoutNote;
use crate::analysis::normalize;
use crate::analysis::tags::DraftTags;
use crate::reference::{ReferenceData, RosterOrigin};
use colored::*;
use tabled::{settings::Style, Table, Tabled};

pub const PLACEHOLDER: &str = "Enter at least one enemy champion to see recommendations.";

#[derive(Tabled)]
struct ItemRow {
    #[tabled(rename = "#")]
    slot: String,
    item: String,
    note: String,
}

#[derive(Tabled)]
struct ProfileRow {
    key: String,
    champion: String,
    role: String,
    icon: String,
}

fn item_rows(items: &[OrderedItem]) -> Vec<ItemRow> {
    items
        .iter()
        .enumerate()
        .map(|(idx, it)| {
            let note = it.note.clone().unwrap_or_default();
            let (item, note) = if it.is_buy_here() {
                (it.name.bold().yellow().to_string(), note.yellow().bold().to_string())
            } else {
                (it.name.clone(), note.dimmed().to_string())
            };
            ItemRow {
                slot: format!("{}", idx + 1),
                item,
                note,
            }
        })
        .collect()
}

fn section(title: &str) {
    println!("\n{}", title.bold().yellow());
}

pub fn display_recommendation(rec: &Recommendation, tags: &DraftTags, show_details: bool) {
    println!("\n{}", format!("🎮 {} — draft plan", rec.champion).bold().cyan());
    println!("{}", "=".repeat(60).cyan());

    let pills = tags.pills(true);
    if pills.is_empty() {
        println!("{}", "No standout threats detected".dimmed());
    } else {
        let rendered: Vec<String> = pills
            .iter()
            .map(|p| format!("[{}]", p).magenta().to_string())
            .collect();
        println!("{}", rendered.join(" "));
    }
    println!();

    for line in &rec.headline_lines {
        println!("  {}", line);
    }

    section("Build order");
    let mut table = Table::new(item_rows(&rec.items_ordered));
    table.with(Style::rounded());
    println!("{}", table);

    if let Some(rule) = &rec.fight_rule {
        println!("\n{}", rule.bold().red());
    }

    if let Some(tips) = &rec.wave_tips {
        section(&format!("🌊 Wave: {}", tips.title));
        for bullet in &tips.bullets {
            println!("  • {}", bullet);
        }
    }

    section("Suggested bans");
    println!("  {}", rec.bans.join(", "));

    if show_details {
        let d = &rec.details;
        section("Runes");
        for line in &d.runes {
            println!("  • {}", line);
        }
        println!("  {}", d.skill_order.dimmed());

        section("Start");
        for line in &d.starter {
            println!("  • {}", line);
        }

        section("Situational");
        for line in &d.situational {
            println!("  • {}", line);
        }

        if !d.notes.is_empty() {
            section("Notes");
            for line in &d.notes {
                println!("  • {}", line);
            }
        }
    }

    println!();
}

pub fn display_unmatched(tokens: &[String]) {
    if tokens.is_empty() {
        return;
    }
    display_warning(&format!("Not recognized: {}", tokens.join(", ")));
}

pub fn display_placeholder() {
    println!("{}", PLACEHOLDER.dimmed());
}

pub fn display_scout_notes(notes: &[ScoutNote]) {
    if notes.is_empty() {
        return;
    }

    println!("\n{}", "🔎 Enemy notes".bold().cyan());
    println!("{}", "=".repeat(60).cyan());

    for note in notes {
        let tags: Vec<String> = note.tags.iter().map(|t| format!("[{}]", t)).collect();
        println!("\n{} {}", note.champion.bold(), tags.join(" ").magenta());
        println!("  {}", note.title.italic());
        for bullet in &note.bullets {
            println!("  • {}", bullet);
        }
    }
    println!();
}

pub fn display_profiles(profiles: &[&ChampionProfile], reference: &ReferenceData) {
    println!("\n{}", "🎮 Supported champions".bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());

    let rows: Vec<ProfileRow> = profiles
        .iter()
        .map(|p| {
            let icon = reference
                .version
                .as_deref()
                .and_then(|v| {
                    reference
                        .champions
                        .iter()
                        .find(|c| normalize(&c.id) == p.key)
                        .map(|c| c.icon_url(v))
                })
                .unwrap_or_else(|| "-".to_string());
            ProfileRow {
                key: p.key.to_string(),
                champion: p.label.to_string(),
                role: p.role.label().to_string(),
                icon,
            }
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);

    let origin = match reference.origin {
        RosterOrigin::Fetched => "fetched from Data Dragon",
        RosterOrigin::Cached => "from cache",
        RosterOrigin::Fallback => "from cache (refresh failed)",
        RosterOrigin::Empty => "unavailable",
    };
    match &reference.version {
        Some(version) => display_info(&format!(
            "Champion data: patch {}, {} champions, {}",
            version,
            reference.champions.len(),
            origin
        )),
        None => display_info(&format!("Champion data: {}", origin)),
    }
    println!();
}

pub fn display_coach_reply(text: &str) {
    println!("\n{}", "🧠 Coach".bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());
    println!("{}\n", text);
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_warning(message: &str) {
    eprintln!("{} {}", "⚠️".yellow(), message.yellow());
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_rows_keep_order_and_annotations() {
        colored::control::set_override(false);
        let items = vec![
            OrderedItem {
                name: "Kraken Slayer".to_string(),
                note: None,
            },
            OrderedItem {
                name: "QSS".to_string(),
                note: Some("← BUY HERE (lockdown)".to_string()),
            },
        ];

        let rows = item_rows(&items);

        assert_eq!(rows[0].slot, "1");
        assert_eq!(rows[0].note, "");
        assert_eq!(rows[1].item, "QSS");
        assert_eq!(rows[1].note, "← BUY HERE (lockdown)");
    }
}
