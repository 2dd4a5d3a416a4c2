mod analysis;
mod api;
mod cache;
mod coach;
mod config;
mod display;
mod error;
mod reference;

use analysis::champions;
use analysis::recommender::{should_display, ChampionProfile, Recommendation, Recommender};
use analysis::resolver::{lane_opponents, resolve, tokenize, Resolution};
use analysis::scout::scout_all;
use analysis::tags::{Classifier, DraftTags};
use analysis::traits::TraitMap;
use anyhow::Context;
use api::client::DataDragonClient;
use api::openai::OpenAiBackend;
use cache::ChampionCache;
use clap::{Args, Parser, Subcommand, ValueEnum};
use coach::context::CoachContext;
use coach::proxy::{handle, CoachRequest, COACH_UNAVAILABLE};
use config::Config;
use display::output::{
    display_coach_reply, display_error, display_placeholder, display_profiles,
    display_recommendation, display_scout_notes, display_success, display_unmatched,
    display_warning,
};
use error::AppError;
use indicatif::ProgressBar;
use reference::{load_reference, RefreshPolicy, ReferenceData};
use std::time::Duration;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "Draft Coach")]
#[command(about = "Draft-phase build and strategy suggestions for League of Legends", long_about = None)]
struct Cli {
    /// Log diagnostics to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Recommend runes, items and a game plan against an enemy draft
    Recommend {
        #[command(flatten)]
        draft: DraftArgs,

        /// Show per-enemy scouting notes
        #[arg(long)]
        scout: bool,

        /// Print the coach context as JSON instead of tables
        #[arg(long)]
        json: bool,

        /// Skip runes, starter and situational details
        #[arg(long)]
        brief: bool,
    },
    /// Ask the coach a free-form question about the current draft
    Coach {
        #[command(flatten)]
        draft: DraftArgs,

        /// Question for the coach
        #[arg(short, long)]
        message: String,

        /// Screenshot URL (repeatable, at most 3 are sent)
        #[arg(long = "image")]
        images: Vec<String>,
    },
    /// List supported champions and the state of the champion data
    Champions {
        #[command(flatten)]
        data: DataArgs,
    },
}

#[derive(Args, Debug)]
struct DataArgs {
    /// Never touch the network; use cached champion data only
    #[arg(long)]
    offline: bool,

    /// Refetch champion data even if the cache is current
    #[arg(long, conflicts_with = "offline")]
    refresh: bool,
}

#[derive(Args, Debug)]
struct DraftArgs {
    /// Champion you are playing (masteryi, belveth, volibear, heimerdinger, missfortune, lux)
    #[arg(short, long)]
    champion: String,

    /// Enemy champions, comma or newline separated
    #[arg(short, long, default_value = "")]
    enemies: String,

    /// Lane opponent(s); bot lane takes two, e.g. "Leona / Caitlyn"
    #[arg(short, long, default_value = "")]
    lane: String,

    /// How enemy names become draft tags
    #[arg(long, value_enum, default_value_t = ClassifierKind::Traits)]
    classifier: ClassifierKind,

    #[command(flatten)]
    data: DataArgs,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum ClassifierKind {
    Traits,
    Keywords,
}

/// Everything derived from one draft.
struct DraftAnalysis {
    profile: &'static ChampionProfile,
    resolution: Resolution,
    enemies: Vec<String>,
    lane: Vec<String>,
    tags: DraftTags,
    recommendation: Recommendation,
}

impl DraftAnalysis {
    fn coach_context(&self) -> CoachContext {
        CoachContext::new(
            self.profile,
            &self.enemies,
            &self.lane,
            &self.tags,
            &self.recommendation,
        )
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;

    match cli.command {
        Command::Recommend {
            draft,
            scout,
            json,
            brief,
        } => run_recommend(&config, &draft, scout, json, brief),
        Command::Coach {
            draft,
            message,
            images,
        } => run_coach(&config, &draft, message, images),
        Command::Champions { data } => {
            let reference = load_champion_data(&config, &data);
            display_profiles(champions::ALL, &reference);
            Ok(())
        }
    }
}

fn load_champion_data(config: &Config, data: &DataArgs) -> ReferenceData {
    let cache = ChampionCache::new(&config.cache_dir);
    let client = DataDragonClient::new();
    let policy = RefreshPolicy {
        ttl: config.cache_ttl,
        offline: data.offline,
        force_refresh: data.refresh,
    };

    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Loading champion data...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let reference = load_reference(&cache, &client, &policy);

    spinner.finish_and_clear();
    if let Some(advisory) = &reference.advisory {
        display_warning(advisory);
    }
    debug!(
        cache = %cache.path().display(),
        origin = ?reference.origin,
        champions = reference.champions.len(),
        "champion data ready"
    );
    reference
}

fn analyze(draft: &DraftArgs, reference: &ReferenceData) -> Result<DraftAnalysis, AppError> {
    let profile = champions::find(&draft.champion)
        .ok_or_else(|| AppError::UnknownChampion(draft.champion.clone()))?;

    let resolution = resolve(&draft.enemies, &reference.champions);
    let lane = lane_opponents(&draft.lane);

    // Without champion data nothing resolves; classify the raw tokens instead.
    let enemies = if reference.is_empty() {
        tokenize(&draft.enemies)
    } else {
        resolution.names()
    };

    let trait_map;
    let classifier = match draft.classifier {
        ClassifierKind::Traits if !reference.is_empty() => {
            trait_map = TraitMap::build(&reference.champions);
            Classifier::Traits(&trait_map)
        }
        ClassifierKind::Traits => {
            warn!("no champion data for the trait classifier, using keywords");
            Classifier::Keywords
        }
        ClassifierKind::Keywords => Classifier::Keywords,
    };

    let tags = classifier.classify(&enemies, lane.first().map(String::as_str));
    let recommendation = Recommender::recommend(profile, &tags, &enemies, &lane);

    Ok(DraftAnalysis {
        profile,
        resolution,
        enemies,
        lane,
        tags,
        recommendation,
    })
}

fn run_recommend(
    config: &Config,
    draft: &DraftArgs,
    scout: bool,
    json: bool,
    brief: bool,
) -> anyhow::Result<()> {
    let reference = load_champion_data(config, &draft.data);
    let analysis = analyze(draft, &reference)?;

    if json {
        let context = analysis.coach_context().to_value()?;
        let pretty = serde_json::to_string_pretty(&context).context("Failed to render context")?;
        println!("{}", pretty);
        return Ok(());
    }

    display_unmatched(&analysis.resolution.unmatched);

    if !should_display(!analysis.enemies.is_empty(), analysis.profile.role, &draft.lane) {
        display_placeholder();
        return Ok(());
    }

    display_recommendation(&analysis.recommendation, &analysis.tags, !brief);

    if scout {
        display_scout_notes(&scout_all(&analysis.resolution.matched, analysis.profile.key));
    }
    Ok(())
}

fn run_coach(
    config: &Config,
    draft: &DraftArgs,
    message: String,
    images: Vec<String>,
) -> anyhow::Result<()> {
    let api_key = config.require_api_key()?;
    let reference = load_champion_data(config, &draft.data);
    let analysis = analyze(draft, &reference)?;

    let request = CoachRequest {
        message,
        context: analysis.coach_context().to_value()?,
        images,
    };
    let body = serde_json::to_value(&request).context("Failed to build coach request")?;
    let backend = OpenAiBackend::new(api_key, &config.coach_model, &config.coach_api_url);

    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Asking the coach...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    let response = handle("POST", &body, &backend);
    spinner.finish_and_clear();

    match response.text() {
        Some(text) if response.is_ok() => {
            display_coach_reply(text);
            display_success(&format!("Coached as {}", analysis.profile.label));
            Ok(())
        }
        _ => {
            debug!(status = response.status, body = %response.body, "coach request failed");
            anyhow::bail!(COACH_UNAVAILABLE)
        }
    }
}
