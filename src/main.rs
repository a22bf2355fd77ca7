use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use ga_query::config::get_config;
use ga_query::logging::init_logging;
use ga_query::{shortcuts, Client, QueryBuilder, StaticToken};
use std::process;

#[derive(Parser)]
#[command(name = "ga-query")]
#[command(about = "Run Google Analytics core reporting queries from the command line")]
#[command(version)]
struct Cli {
    /// Analytics view (profile) id
    #[arg(long, env = "GA_VIEW_ID")]
    view: String,

    /// Account email
    #[arg(long, env = "GA_EMAIL")]
    email: String,

    /// Account password
    #[arg(long, env = "GA_PASSWORD", hide_env_values = true)]
    password: String,

    /// Pre-obtained API token
    #[arg(long, env = "GA_TOKEN", hide_env_values = true)]
    token: String,

    /// Dimension to group by (repeatable)
    #[arg(long = "dimension")]
    dimensions: Vec<String>,

    /// Metric to report (repeatable)
    #[arg(long = "metric")]
    metrics: Vec<String>,

    /// Filter expression (repeatable)
    #[arg(long = "filter")]
    filters: Vec<String>,

    /// Shortcut name such as weekly or visitors (repeatable)
    #[arg(long = "shortcut")]
    shortcuts: Vec<String>,

    #[arg(long)]
    segment: Option<String>,

    #[arg(long)]
    sort: Option<String>,

    /// Start date (YYYY-MM-DD or a relative value like 30daysAgo)
    #[arg(long)]
    start: Option<String>,

    /// End date (YYYY-MM-DD or a relative value like today)
    #[arg(long)]
    end: Option<String>,

    /// Maximum rows to return
    #[arg(long)]
    results: Option<u32>,

    /// 1-based index of the first row
    #[arg(long)]
    index: Option<u32>,

    /// Ask the API for pretty-printed JSON
    #[arg(long)]
    pretty: bool,

    /// Print the request parameters instead of sending the query
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let config = get_config();
    let _guard = init_logging(&config.logging, &config.paths.log_directory);

    if let Err(e) = run(cli).await {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = get_config();
    let mut client = Client::from_config(&cli.view, &config.api)?;
    client
        .login(&StaticToken::new(&cli.token), &cli.email, &cli.password)
        .await?;

    let query = configure(client.query()?, &cli)?;

    if cli.dry_run {
        for (key, value) in query.query_pairs()? {
            println!("{}={}", key, value);
        }
        return Ok(());
    }

    let report = query.get().await.context("GA query failed")?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn configure(mut query: QueryBuilder, cli: &Cli) -> Result<QueryBuilder> {
    for name in &cli.shortcuts {
        query = if shortcuts::dimension(name).is_some() {
            query.dimension_shortcut(name)?
        } else {
            query
                .metric_shortcut(name)
                .with_context(|| format!("Unknown shortcut: {}", name))?
        };
    }
    for dimension in &cli.dimensions {
        query = query.dimension(dimension.as_str());
    }
    for metric in &cli.metrics {
        query = query.metric(metric.as_str());
    }
    for filter in &cli.filters {
        query = query.filter(filter.as_str());
    }
    if let Some(segment) = &cli.segment {
        query = query.segment(segment.as_str());
    }
    if let Some(sort) = &cli.sort {
        query = query.sort(sort.as_str());
    }
    if let Some(start) = &cli.start {
        query = query.start(start.as_str());
    }
    if let Some(end) = &cli.end {
        query = query.end(end.as_str());
    }
    if let Some(results) = cli.results {
        query = query.results(results);
    }
    if let Some(index) = cli.index {
        query = query.index(index);
    }
    Ok(query.pretty(cli.pretty))
}
