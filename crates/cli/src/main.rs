use anyhow::{Context as AnyhowContext, Result};
use clap::{Args, Parser, Subcommand};
use directory_index::{build_index, IndexedDirectory};
use directory_model::{UserId, UserRecord};
use directory_rank::{rank_top, suggest_strangers};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

mod fetch;
mod output;

use fetch::{fetch_users, load_users_file, resolve_users_url};
use output::{
    render_detail, render_list, render_overview, render_top, DetailOutput, ListOutput, ListedUser,
    OverviewOutput, TopOutput,
};

#[derive(Parser)]
#[command(name = "directory")]
#[command(about = "Browse a user directory with friend suggestions", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Users endpoint (overrides DIRECTORY_USERS_URL)
    #[arg(long, global = true)]
    url: Option<String>,

    /// Read the user list from a local JSON file instead of the endpoint
    #[arg(long, global = true)]
    input: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors (stdout is reserved for output)
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List every user in the directory
    List(ListArgs),

    /// Show one user: friends plus non-friend suggestions
    Show(ShowArgs),

    /// Show the most-referenced users
    Top(TopArgs),

    /// Full overview: name list plus the most-referenced panel
    Overview(OverviewArgs),
}

#[derive(Args)]
struct ListArgs {
    /// Output JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct ShowArgs {
    /// User id to show
    id: UserId,

    /// Number of non-friend suggestions
    #[arg(long, default_value_t = 3)]
    suggest: usize,

    /// Seed for reproducible suggestions
    #[arg(long)]
    seed: Option<u64>,

    /// Output JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct TopArgs {
    /// Number of names to show
    #[arg(long, default_value_t = 3)]
    count: usize,

    /// Output JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct OverviewArgs {
    /// Number of names in the most-referenced panel
    #[arg(long, default_value_t = 3)]
    count: usize,

    /// Output JSON instead of text
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // JSON mode keeps stdout clean for parsing, so logs drop to warnings.
    let json_output = match &cli.command {
        Commands::List(args) => args.json,
        Commands::Show(args) => args.json,
        Commands::Top(args) => args.json,
        Commands::Overview(args) => args.json,
    };

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet || json_output {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let records = load_records(&cli).await?;
    let directory = build_index(&records).context("Failed to index the user list")?;

    match &cli.command {
        Commands::List(args) => run_list(&records, &directory, args),
        Commands::Show(args) => run_show(&directory, args),
        Commands::Top(args) => run_top(&directory, args),
        Commands::Overview(args) => run_overview(&records, &directory, args),
    }
}

async fn load_records(cli: &Cli) -> Result<Vec<UserRecord>> {
    let records = if let Some(path) = &cli.input {
        load_users_file(path)?
    } else {
        let url = resolve_users_url(cli.url.as_deref());
        fetch_users(&url).await?
    };
    log::debug!("Loaded {} user records", records.len());
    Ok(records)
}

fn run_list(records: &[UserRecord], directory: &IndexedDirectory, args: &ListArgs) -> Result<()> {
    let out = ListOutput {
        users: listed_users(records),
        stats: directory.stats.clone(),
    };
    emit(args.json, &out, render_list(&out))
}

fn run_show(directory: &IndexedDirectory, args: &ShowArgs) -> Result<()> {
    let profile = directory
        .index
        .get(args.id)
        .with_context(|| format!("Unknown user id {}", args.id))?;

    let friends = resolve_names(directory, &profile.friends)?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let sampled = suggest_strangers(&directory.index, args.id, args.suggest, &mut rng);
    let suggestions = resolve_names(directory, &sampled)?;

    let out = DetailOutput {
        id: args.id,
        name: profile.name.clone(),
        friends,
        suggestions,
    };
    emit(args.json, &out, render_detail(&out))
}

fn run_top(directory: &IndexedDirectory, args: &TopArgs) -> Result<()> {
    let out = TopOutput {
        top: rank_top(&directory.references, args.count),
    };
    emit(args.json, &out, render_top(&out))
}

fn run_overview(
    records: &[UserRecord],
    directory: &IndexedDirectory,
    args: &OverviewArgs,
) -> Result<()> {
    let out = OverviewOutput {
        users: listed_users(records),
        top: rank_top(&directory.references, args.count),
        stats: directory.stats.clone(),
    };
    emit(args.json, &out, render_overview(&out))
}

/// Name list in source order, as the reference UI rendered it.
fn listed_users(records: &[UserRecord]) -> Vec<ListedUser> {
    records
        .iter()
        .map(|record| ListedUser {
            id: record.id,
            name: record.name.clone(),
        })
        .collect()
}

fn resolve_names(directory: &IndexedDirectory, ids: &[UserId]) -> Result<Vec<String>> {
    ids.iter()
        .map(|&id| {
            directory
                .index
                .name_of(id)
                .map(str::to_string)
                .with_context(|| format!("User id {id} missing from the index"))
        })
        .collect()
}

fn emit<T: serde::Serialize>(json: bool, payload: &T, text: String) -> Result<()> {
    if json {
        let rendered =
            serde_json::to_string_pretty(payload).context("Failed to serialize output")?;
        println!("{rendered}");
    } else {
        print!("{text}");
    }
    Ok(())
}
