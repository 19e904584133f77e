//! docfind: search a plain-text document the way the add-in searches a Word
//! body and print the first page of results.
//!
//! Usage: docfind <file|-> <query> [--match-case] [--json]
//!
//! `-` searches the built-in sample agreement. `--json` prints the result
//! page as a JSON snapshot instead of text lines.

mod logging;

use docfind::kernel::services::adapters::{ensure_settings_file, load_settings};
use docfind::kernel::sample::SAMPLE_PARAGRAPHS;
use docfind::kernel::{NoticeLevel, SearchResultsSnapshot};
use docfind::{MemoryDocument, SearchController, SearchSettings};
use std::process::ExitCode;
use std::sync::Arc;

struct Args {
    source: String,
    query: String,
    match_case: bool,
    json: bool,
}

fn parse_args() -> Option<Args> {
    let mut positional = Vec::new();
    let mut match_case = false;
    let mut json = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--match-case" | "-c" => match_case = true,
            "--json" => json = true,
            _ => positional.push(arg),
        }
    }
    let mut positional = positional.into_iter();
    let source = positional.next()?;
    let query = positional.collect::<Vec<_>>().join(" ");
    Some(Args {
        source,
        query,
        match_case,
        json,
    })
}

fn load_document(source: &str) -> std::io::Result<MemoryDocument> {
    if source == "-" {
        return Ok(MemoryDocument::from_paragraphs(
            SAMPLE_PARAGRAPHS.iter().copied(),
        ));
    }
    let text = std::fs::read_to_string(source)?;
    Ok(MemoryDocument::from_text(&text))
}

fn build_runtime() -> std::io::Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .or_else(|e| {
            tracing::error!(
                error = %e,
                "Failed to create multi-thread tokio runtime, falling back to current-thread"
            );
            tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
        })
}

fn print_snapshot(snapshot: &SearchResultsSnapshot<'_>) {
    println!(
        "{} match(es) for \"{}\"{}",
        snapshot.total,
        snapshot.query,
        if snapshot.match_case { " (match case)" } else { "" }
    );
    for entry in &snapshot.entries {
        let w = &entry.window;
        let matched = format!("[{}]", w.matched);
        let line = [w.before.as_str(), matched.as_str(), w.after.as_str()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        println!("  {:>2}. {}", entry.index + 1, line);
    }
    if snapshot.page_count > 1 {
        println!("  page {} of {}", snapshot.page + 1, snapshot.page_count);
    }
}

fn main() -> ExitCode {
    let logging_guard = logging::init();

    let Some(args) = parse_args() else {
        eprintln!("usage: docfind <file|-> <query> [--match-case] [--json]");
        return ExitCode::from(2);
    };

    if let Err(e) = ensure_settings_file() {
        tracing::warn!(error = %e, "cannot write default settings");
    }
    let settings = load_settings().unwrap_or_else(SearchSettings::default);

    let document = match load_document(&args.source) {
        Ok(doc) => Arc::new(doc),
        Err(e) => {
            eprintln!("docfind: {}: {}", args.source, e);
            return ExitCode::FAILURE;
        }
    };

    let runtime = match build_runtime() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("docfind: cannot start runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut failed = false;
    runtime.block_on(async {
        let mut controller =
            SearchController::new(tokio::runtime::Handle::current(), document, settings);
        controller.set_match_case(args.match_case);
        controller.set_query(&args.query);
        controller.search_now();
        controller.settle().await;

        for notice in controller.take_notices() {
            failed |= notice.level == NoticeLevel::Error;
            match &notice.description {
                Some(description) => eprintln!("{}: {}", notice.title, description),
                None => eprintln!("{}", notice.title),
            }
        }
        let snapshot = controller.snapshot();
        if args.json {
            match serde_json::to_string_pretty(&snapshot) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    eprintln!("docfind: cannot encode results: {}", e);
                    failed = true;
                }
            }
        } else if snapshot.total > 0 {
            print_snapshot(&snapshot);
        }
    });

    if failed {
        if let Some(guard) = &logging_guard {
            eprintln!("details in {}", guard.log_dir().display());
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
