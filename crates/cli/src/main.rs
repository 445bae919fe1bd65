// ABOUTME: CLI for normalizing saved KenPom pages with hoops-kenpom.
// ABOUTME: Reads HTML from files or stdin, runs one endpoint normalizer and prints JSON.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, ValueEnum};
use hoops_kenpom::{Endpoint, FanMatchSummary, GameMetric, Records, Scraper, TableSpec};
use hoops_tables::{extract_with_headers, indexed_headers, locate_table, ranked_headers, Html};
use serde_json::{json, Value};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Page {
    Ratings,
    Teams,
    Efficiency,
    FourFactors,
    TeamStats,
    PointDistribution,
    Height,
    HomeCourt,
    ProgramRatings,
    Arenas,
    Referees,
    GameAttributes,
    Trends,
    PlayerStats,
    Schedule,
    ScoutingReport,
    Fanmatch,
    /// Any table, keyed by its own header row.
    Table,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum HeaderStyle {
    /// Repeated labels get their column position appended.
    Indexed,
    /// Repeated labels are the rank of the column before them.
    Ranked,
}

/// Normalize saved KenPom pages and output JSON.
#[derive(Parser, Debug)]
#[command(name = "hoops")]
#[command(about = "Normalize KenPom HTML pages into JSON records", long_about = None)]
struct Args {
    /// Page type of the input HTML.
    #[arg(value_enum)]
    page: Page,

    /// Local HTML files. Use "-" to read one page from stdin.
    targets: Vec<String>,

    /// Season the page belongs to (the year the season ends). Defaults to the latest layout.
    #[arg(long)]
    season: Option<u16>,

    /// Read the defensive view of team stats.
    #[arg(long, default_value_t = false)]
    defense: bool,

    /// Game attributes sort metric (excitement, tension, dominance, comeback, fanmatch, upsets, busts).
    #[arg(long)]
    metric: Option<GameMetric>,

    /// Read conference-only scouting report values.
    #[arg(long, default_value_t = false)]
    conference_only: bool,

    /// CSS selector of the table to read, overriding the page default.
    #[arg(long)]
    selector: Option<String>,

    /// Which matching table to read.
    #[arg(long)]
    index: Option<usize>,

    /// Header naming for the raw table page.
    #[arg(long, value_enum, default_value_t = HeaderStyle::Indexed)]
    headers: HeaderStyle,

    /// Print FanMatch summary counts instead of the games.
    #[arg(long, default_value_t = false)]
    summary: bool,

    /// Print the page URL for the options instead of parsing anything.
    #[arg(long, default_value_t = false)]
    print_url: bool,

    /// Team name for team page URLs.
    #[arg(long)]
    team: Option<String>,

    /// Output compact JSON instead of pretty.
    #[arg(long, default_value_t = false)]
    compact: bool,

    /// Log debug output to stderr.
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

impl Args {
    fn endpoint(&self) -> Option<Endpoint> {
        let endpoint = match self.page {
            Page::Ratings | Page::Teams => Endpoint::Ratings,
            Page::Efficiency => Endpoint::Efficiency,
            Page::FourFactors => Endpoint::FourFactors,
            Page::TeamStats => Endpoint::TeamStats {
                defense: self.defense,
            },
            Page::PointDistribution => Endpoint::PointDistribution,
            Page::Height => Endpoint::Height,
            Page::HomeCourt => Endpoint::HomeCourt,
            Page::ProgramRatings => Endpoint::ProgramRatings,
            Page::Arenas => Endpoint::Arenas,
            Page::Referees => Endpoint::Referees,
            Page::GameAttributes => Endpoint::GameAttributes {
                metric: self.metric.unwrap_or_default(),
            },
            Page::Trends => Endpoint::Trends,
            Page::PlayerStats => Endpoint::PlayerStats,
            Page::Schedule => Endpoint::Schedule,
            Page::ScoutingReport => Endpoint::ScoutingReport {
                conference_only: self.conference_only,
            },
            Page::Fanmatch => Endpoint::FanMatch,
            Page::Table => return None,
        };
        Some(endpoint)
    }

    fn table_override(&self) -> Option<TableSpec> {
        if self.selector.is_none() && self.index.is_none() {
            return None;
        }
        let selector = self.selector.clone().unwrap_or_else(|| "table".to_string());
        Some(TableSpec::new(selector).index(self.index.unwrap_or(0)))
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    init_logging(args.verbose);

    let endpoint = args.endpoint();
    if let (Some(endpoint), Some(season)) = (endpoint, args.season) {
        if let Some(first) = endpoint.first_season() {
            if season < first {
                tracing::warn!(%endpoint, season, first, "season predates the page; using the oldest layout");
            }
        }
    }

    let mut builder = Scraper::builder();
    if let Some(season) = args.season {
        builder = builder.season(season);
    }
    if let Some(table) = args.table_override() {
        builder = builder.table(table);
    }
    let scraper = builder.build();

    if args.print_url {
        let endpoint = endpoint.ok_or_else(|| anyhow!("the raw table page has no URL"))?;
        let url = match (endpoint, &args.team) {
            (Endpoint::Schedule | Endpoint::ScoutingReport { .. }, Some(team)) => {
                scraper.team_url(team)?
            }
            (Endpoint::Schedule | Endpoint::ScoutingReport { .. }, None) => {
                bail!("--team is required for team page URLs")
            }
            _ => scraper.url(&endpoint)?,
        };
        println!("{}", url);
        return Ok(ExitCode::SUCCESS);
    }

    if args.targets.is_empty() {
        bail!("at least one target is required");
    }
    if args.summary && args.page != Page::Fanmatch {
        bail!("--summary is only valid for fanmatch pages");
    }

    let mut results = Vec::new();
    for target in &args.targets {
        match load_html(target).and_then(|html| run(&args, &scraper, endpoint, &html)) {
            Ok(records) => results.push(json!({
                "target": target,
                "ok": true,
                "records": records,
                "error": null
            })),
            Err(err) => {
                tracing::debug!(path = %target, error = %err, "target failed");
                results.push(json!({
                    "target": target,
                    "ok": false,
                    "records": null,
                    "error": format!("{:#}", err)
                }))
            }
        }
    }

    let parsed = results
        .iter()
        .filter(|r| r.get("ok").and_then(|v| v.as_bool()) == Some(true))
        .count();
    let failed = results.len() - parsed;

    // A single successful target prints its records directly; anything else
    // gets an envelope with per-target status.
    let output = match results.as_slice() {
        [only] if failed == 0 => only.get("records").cloned().unwrap_or(Value::Null),
        _ => json!({
            "pages": results,
            "total_pages": results.len(),
            "parsed": parsed,
            "failed": failed
        }),
    };

    if args.compact {
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("{}", serde_json::to_string_pretty(&output)?);
    }

    Ok(if failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

fn run(args: &Args, scraper: &Scraper, endpoint: Option<Endpoint>, html: &str) -> Result<Value> {
    let Some(endpoint) = endpoint else {
        return raw_table(args, html);
    };
    if args.page == Page::Teams {
        return Ok(serde_json::to_value(scraper.teams(html)?)?);
    }

    let records = scraper.parse(&endpoint, html)?;
    tracing::debug!(%endpoint, records = records.len(), "parsed page");

    if args.summary {
        if let Records::FanMatch(games) = &records {
            return Ok(serde_json::to_value(FanMatchSummary::from_games(games))?);
        }
    }
    Ok(serde_json::to_value(&records)?)
}

fn raw_table(args: &Args, html: &str) -> Result<Value> {
    let doc = Html::parse_document(html);
    let spec = args.table_override().unwrap_or_default();
    let table = locate_table(&doc, &spec)?;
    let headers = match args.headers {
        HeaderStyle::Indexed => indexed_headers(table),
        HeaderStyle::Ranked => ranked_headers(table),
    };
    Ok(serde_json::to_value(extract_with_headers(table, &headers))?)
}

fn load_html(target: &str) -> Result<String> {
    if target == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }

    let path = PathBuf::from(target);
    if !path.exists() {
        return Err(anyhow!("file not found: {}", target));
    }
    fs::read_to_string(&path).with_context(|| format!("reading {}", target))
}
