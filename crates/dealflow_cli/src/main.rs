//! Command-line front end over `dealflow_core`.
//!
//! # Responsibility
//! - Expose each dashboard view and exporter as a subcommand.
//! - Seed a fresh store per invocation; nothing persists between runs.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use dealflow_core::views::diligence::{
    resolve_deal, submit_evidence, DiligenceTab, EvidenceDraft,
};
use dealflow_core::views::home::MorningBrief;
use dealflow_core::views::inbox::{complete_task, inbox_rows, InboxSummary, TaskFilter};
use dealflow_core::views::network::{Layout, NetworkGraph, NetworkStats};
use dealflow_core::views::palette::{commands, filter_commands};
use dealflow_core::views::pipeline::{
    move_deal, pipeline_columns, sectors, MoveDirection, MoveOutcome, PipelineFilter,
    SectorFilter,
};
use dealflow_core::views::portfolio::{filter_portfolio, PortfolioFilter, PortfolioSummary};
use dealflow_core::views::route::Route;
use dealflow_core::{
    default_log_level, init_logging, investment_memo, lp_report, EvidenceType, LogConfig,
    ScoreBand, Store,
};
use log::info;
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "dealflow", version, about = "Venture deal tracking from the terminal")]
struct Cli {
    /// trace|debug|info|warn|error
    #[arg(long, global = true, env = "DEALFLOW_LOG_LEVEL")]
    log_level: Option<String>,
    /// Absolute directory for rolling log files; logging is off when unset,
    /// and `--log-level` alone only produces a warning.
    #[arg(long, global = true, env = "DEALFLOW_LOG_DIR")]
    log_dir: Option<PathBuf>,
    /// Print records as JSON. Accepted by pipeline, diligence, evidence,
    /// inbox and portfolio; rejected elsewhere.
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Morning brief: top tasks, runway alerts, recent deals.
    Brief,
    /// Pipeline columns.
    Pipeline {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, default_value = "all")]
        sector: String,
    },
    /// Move a deal one stage right.
    Advance { deal_id: String },
    /// Move a deal one stage left.
    Retreat { deal_id: String },
    /// Diligence overview for one deal (first deal when omitted).
    Diligence { deal_id: Option<String> },
    /// Fill in the evidence form for a deal. The result is not attached.
    Evidence {
        deal_id: String,
        #[arg(long, default_value = "note")]
        kind: String,
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        content: String,
        #[arg(long, default_value = "")]
        url: String,
        /// Comma-separated.
        #[arg(long, default_value = "")]
        tags: String,
    },
    /// Task inbox.
    Inbox {
        #[arg(long, default_value = "all")]
        filter: String,
        #[arg(long, default_value = "")]
        search: String,
    },
    /// Mark a task completed.
    Complete { task_id: String },
    /// Portfolio table and headline figures.
    Portfolio {
        #[arg(long, default_value = "all")]
        filter: String,
    },
    /// Network nodes, edges and resolved connections.
    Network {
        /// Reproducible placement; random when omitted.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Command palette search.
    Palette { query: String },
    /// Resolve a navigation path.
    Route { path: String },
    /// Export an investment memo for one deal.
    Memo {
        deal_id: String,
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
    /// Export the LP report.
    LpReport {
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
}

type CliResult = Result<(), Box<dyn Error>>;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        let level = cli
            .log_level
            .clone()
            .unwrap_or_else(|| default_log_level().to_string());
        if let Err(err) = init_logging(&LogConfig::new(level, log_dir.clone())) {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    } else if let Some(level) = &cli.log_level {
        eprintln!("warning: --log-level `{level}` ignored; logging is off without --log-dir");
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult {
    let mut store = Store::seeded();
    let json = cli.json;
    if json && !supports_json(&cli.command) {
        let name = command_name(&cli.command);
        return Err(format!("--json is not supported by `{name}`").into());
    }
    info!("event=cli_command module=cli command={}", command_name(&cli.command));

    match cli.command {
        Command::Brief => print_brief(&store),
        Command::Pipeline { search, sector } => {
            let filter = PipelineFilter {
                search,
                sector: SectorFilter::parse(&sector),
            };
            print_pipeline(&store, &filter, json)
        }
        Command::Advance { deal_id } => {
            print_move(&mut store, &deal_id, MoveDirection::Advance)
        }
        Command::Retreat { deal_id } => {
            print_move(&mut store, &deal_id, MoveDirection::Retreat)
        }
        Command::Diligence { deal_id } => print_diligence(&store, deal_id.as_deref(), json),
        Command::Evidence {
            deal_id,
            kind,
            title,
            content,
            url,
            tags,
        } => {
            let deal = store
                .deal(&deal_id)
                .ok_or_else(|| format!("deal not found: {deal_id}"))?;
            let kind = EvidenceType::parse(&kind)
                .ok_or_else(|| format!("unknown evidence type `{kind}`"))?;
            let draft = EvidenceDraft {
                kind,
                title,
                content,
                url,
                tags,
            };
            let created_at = today().format("%Y-%m-%d").to_string();
            let evidence = submit_evidence(deal, draft, created_at)?;
            println!("{}", serde_json::to_string_pretty(&evidence)?);
            println!("evidence was not attached to deal {deal_id}");
            Ok(())
        }
        Command::Inbox { filter, search } => {
            let filter = TaskFilter::parse(&filter)
                .ok_or_else(|| format!("unknown task filter `{filter}`"))?;
            print_inbox(&store, filter, &search, json)
        }
        Command::Complete { task_id } => {
            let outcome = complete_task(&mut store, &task_id)?;
            println!("task {task_id}: {}", outcome.as_str());
            Ok(())
        }
        Command::Portfolio { filter } => {
            let filter = PortfolioFilter::parse(&filter)
                .ok_or_else(|| format!("unknown portfolio filter `{filter}`"))?;
            print_portfolio(&store, filter, json)
        }
        Command::Network { seed } => {
            let layout = seed.map_or(Layout::Random, Layout::Seeded);
            print_network(&store, layout);
            Ok(())
        }
        Command::Palette { query } => {
            let all = commands(&store.state().deals, &store.state().people);
            for command in filter_commands(&all, &query) {
                println!(
                    "[{}] {} -> {}",
                    command.category.label(),
                    command.name,
                    command.route
                );
            }
            Ok(())
        }
        Command::Route { path } => {
            let route = Route::parse(&path).ok_or_else(|| format!("unknown route `{path}`"))?;
            println!("{route:?}");
            Ok(())
        }
        Command::Memo { deal_id, out_dir } => {
            let deal = store
                .deal(&deal_id)
                .ok_or_else(|| format!("deal not found: {deal_id}"))?;
            let path = investment_memo(deal, today()).save_to(&out_dir)?;
            println!("{}", path.display());
            Ok(())
        }
        Command::LpReport { out_dir } => {
            let path = lp_report(&store.state().portfolio, today()).save_to(&out_dir)?;
            println!("{}", path.display());
            Ok(())
        }
    }
}

fn command_name(command: &Command) -> &'static str {
    match command {
        Command::Brief => "brief",
        Command::Pipeline { .. } => "pipeline",
        Command::Advance { .. } => "advance",
        Command::Retreat { .. } => "retreat",
        Command::Diligence { .. } => "diligence",
        Command::Evidence { .. } => "evidence",
        Command::Inbox { .. } => "inbox",
        Command::Complete { .. } => "complete",
        Command::Portfolio { .. } => "portfolio",
        Command::Network { .. } => "network",
        Command::Palette { .. } => "palette",
        Command::Route { .. } => "route",
        Command::Memo { .. } => "memo",
        Command::LpReport { .. } => "lp-report",
    }
}

fn supports_json(command: &Command) -> bool {
    matches!(
        command,
        Command::Pipeline { .. }
            | Command::Diligence { .. }
            | Command::Evidence { .. }
            | Command::Inbox { .. }
            | Command::Portfolio { .. }
    )
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

fn score_marker(band: ScoreBand) -> &'static str {
    match band {
        ScoreBand::Favorable => "+",
        ScoreBand::Neutral => "~",
        ScoreBand::Unfavorable => "-",
    }
}

fn print_brief(store: &Store) -> CliResult {
    let state = store.state();
    let brief = MorningBrief::build(&state.deals, &state.tasks);

    println!("Priority tasks");
    for task in &brief.priority_tasks {
        println!("  [{}] {} (due {})", task.priority.as_str(), task.title, task.due_date);
    }
    println!("Runway alerts");
    if brief.runway_alerts.is_empty() {
        println!("  none");
    }
    for deal in &brief.runway_alerts {
        println!("  {}: {} months", deal.name, deal.runway);
    }
    println!("Recent deals");
    for deal in &brief.recent_deals {
        println!("  {} ({}) {}", deal.name, deal.stage.label(), deal.last_update);
    }
    Ok(())
}

fn print_pipeline(store: &Store, filter: &PipelineFilter, json: bool) -> CliResult {
    let deals = &store.state().deals;
    let columns = pipeline_columns(deals, filter);
    if json {
        let grouped: Vec<_> = columns
            .iter()
            .map(|column| {
                serde_json::json!({
                    "stage": column.stage,
                    "deals": column.deals,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&grouped)?);
        return Ok(());
    }

    println!("Sectors: all, {}", sectors(deals).join(", "));
    for column in columns {
        println!("{} ({})", column.stage.label(), column.deals.len());
        for deal in column.deals {
            println!(
                "  {} {} [{}] score={} {}",
                deal.id,
                deal.name,
                deal.sector,
                deal.score,
                score_marker(deal.score_band())
            );
        }
    }
    Ok(())
}

fn print_move(store: &mut Store, deal_id: &str, direction: MoveDirection) -> CliResult {
    match move_deal(store, deal_id, direction)? {
        MoveOutcome::Moved(stage) => println!("deal {deal_id} moved to {}", stage.label()),
        MoveOutcome::AtBoundary(stage) => {
            println!("deal {deal_id} stays in {}: no further stage", stage.label())
        }
    }
    Ok(())
}

fn print_diligence(store: &Store, deal_id: Option<&str>, json: bool) -> CliResult {
    let Some(deal) = resolve_deal(&store.state().deals, deal_id) else {
        println!("No Deal Selected");
        return Ok(());
    };
    if json {
        println!("{}", serde_json::to_string_pretty(deal)?);
        return Ok(());
    }

    let tabs: Vec<&str> = DiligenceTab::ALL.iter().map(|tab| tab.label()).collect();
    println!("{} | {}", deal.name, tabs.join(" | "));
    println!("  {}", deal.description);
    println!(
        "  stage={} status={} score={} runway={}{}",
        deal.stage,
        deal.status.as_str(),
        deal.score,
        deal.runway,
        if deal.has_runway_alert() { " (alert)" } else { "" }
    );
    println!("  founders: {}", deal.founders.join(", "));
    println!(
        "  revenue={} growth={} customers={}",
        deal.metrics.revenue, deal.metrics.growth, deal.metrics.customers
    );
    println!("  evidence ({}):", deal.evidence.len());
    for evidence in &deal.evidence {
        println!(
            "    [{}] {} #{}",
            evidence.kind.as_str(),
            evidence.title,
            evidence.tags.join(" #")
        );
    }
    Ok(())
}

fn print_inbox(store: &Store, filter: TaskFilter, search: &str, json: bool) -> CliResult {
    let state = store.state();
    let rows = inbox_rows(&state.tasks, &state.deals, filter, search);
    if json {
        let tasks: Vec<_> = rows.iter().map(|row| row.task).collect();
        println!("{}", serde_json::to_string_pretty(&tasks)?);
        return Ok(());
    }
    let summary = InboxSummary::build(&state.tasks);
    println!(
        "pending={} high_priority={} completed={}",
        summary.pending, summary.high_priority_pending, summary.completed
    );
    for row in rows {
        println!(
            "{} [{}] {} {} -> {} ({}){}",
            if row.task.completed { "x" } else { " " },
            row.task.priority.as_str(),
            row.task.kind.as_str(),
            row.task.title,
            row.task.assignee,
            row.task.due_date,
            row.deal_name
                .map(|name| format!(" / {name}"))
                .unwrap_or_default()
        );
    }
    Ok(())
}

fn print_portfolio(store: &Store, filter: PortfolioFilter, json: bool) -> CliResult {
    let portfolio = &store.state().portfolio;
    let rows = filter_portfolio(portfolio, filter);
    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }
    let summary = PortfolioSummary::build(portfolio);
    println!(
        "total={} active={} at_risk={} invested=${:.1}M",
        summary.total, summary.active, summary.at_risk, summary.total_investment_m
    );
    for company in rows {
        println!(
            "  {} [{}] inv={} val={} own={} arr={} growth={} runway={}m{}",
            company.name,
            company.status.as_str(),
            company.investment,
            company.valuation,
            company.ownership,
            company.metrics.arr,
            company.metrics.growth,
            company.metrics.runway,
            if company.has_runway_alert() { " (alert)" } else { "" }
        );
    }
    Ok(())
}

fn print_network(store: &Store, layout: Layout) {
    let state = store.state();
    let graph = NetworkGraph::build(&state.people, &state.deals, layout);
    let stats = NetworkStats::build(&state.people, &state.deals);
    println!(
        "people={} companies={} connections={}",
        stats.people, stats.companies, stats.connections
    );
    for (index, node) in graph.nodes().iter().enumerate() {
        println!(
            "{index} {:?} {} ({:.0}, {:.0}) -> {}",
            node.kind,
            node.name,
            node.x,
            node.y,
            graph.connection_names(index).join(", ")
        );
    }
    for edge in graph.edges() {
        println!("edge {} -- {}", edge.from, edge.to);
    }
}
