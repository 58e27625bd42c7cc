//! subtrack CLI
//!
//! One launch is one linear pass: open the snapshot store, load the current
//! generation from the JSON feed, diff against the stored snapshot,
//! overwrite the snapshot, render the requested lists.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use subtrack_core::db::open_db;
use subtrack_core::{
    default_log_level, init_logging, load_feed_or_empty, LaunchOutcome, SqliteSubscriberRepository,
    Subscriber, SyncService,
};

#[derive(Debug, Parser)]
#[command(name = "subtrack")]
#[command(version, about = "Track subscriber churn between launches", long_about = None)]
struct Cli {
    /// Path to the JSON feed holding the current subscriber list.
    #[arg(long, default_value = "mock.json")]
    feed: PathBuf,

    /// Path to the snapshot database.
    #[arg(long, default_value = "subtrack.db")]
    db: PathBuf,

    /// Which list to render.
    #[arg(long, value_enum, default_value_t = ListKind::All)]
    show: ListKind,

    /// Log level (trace|debug|info|warn|error).
    #[arg(long, default_value = default_log_level())]
    log_level: String,

    /// Absolute directory for rotated log files; logs go to stderr when omitted.
    #[arg(long)]
    log_dir: Option<String>,
}

/// Selectable lists, the segmented-control analog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ListKind {
    Current,
    New,
    Unsubscribed,
    All,
}

fn main() {
    let cli = Cli::parse();

    if let Err(message) = init_logging(&cli.log_level, cli.log_dir.as_deref()) {
        eprintln!("Error: {message}");
        std::process::exit(1);
    }

    // Store open failure is the one fatal path; everything after it
    // degrades to empty lists with a log line.
    let conn = match open_db(&cli.db) {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("Error: cannot open snapshot store `{}`: {err}", cli.db.display());
            std::process::exit(1);
        }
    };
    let repo = match SqliteSubscriberRepository::try_new(&conn) {
        Ok(repo) => repo,
        Err(err) => {
            eprintln!("Error: snapshot store `{}` is unusable: {err}", cli.db.display());
            std::process::exit(1);
        }
    };

    let current = load_feed_or_empty(&cli.feed);
    let outcome = SyncService::new(repo).reconcile(current);

    render(&outcome, cli.show);

    if !outcome.persisted {
        eprintln!("warning: snapshot overwrite failed; next launch compares against stale data");
    }
}

fn render(outcome: &LaunchOutcome, show: ListKind) {
    match show {
        ListKind::Current => render_section("Current", &outcome.current),
        ListKind::New => render_section("New", &outcome.new),
        ListKind::Unsubscribed => render_section("Unsubscribed", &outcome.unsubscribed),
        ListKind::All => {
            render_section("Current", &outcome.current);
            println!();
            render_section("New", &outcome.new);
            println!();
            render_section("Unsubscribed", &outcome.unsubscribed);
        }
    }
}

fn render_section(title: &str, subscribers: &[Subscriber]) {
    println!("{title} ({})", subscribers.len());
    for subscriber in subscribers {
        println!("{}", subscriber.display_line());
    }
}
