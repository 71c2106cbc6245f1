//! Terminal card browser.
//!
//! Loads the first page on start, then reads commands from stdin:
//!
//! - `more` (or an empty line) loads the next page
//! - `/text` filters the loaded cards by name, `/` alone clears the filter
//! - `quit` exits
//!
//! ```text
//! RUST_LOG=card_catalog=debug cargo run --example browse
//! ```

use card_catalog::{
    card_line, CatalogConfig, CatalogController, HttpPageFetcher, PageOutcome, Record, RenderSink,
    Trigger, TriggerOutcome, Visibility,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Keeps painted cards so visibility updates can be redrawn.
#[derive(Default)]
struct TerminalSink {
    painted: Vec<Record>,
}

impl RenderSink for TerminalSink {
    fn on_page_appended(&mut self, records: &[Record]) {
        for record in records {
            println!("  {}", card_line(record));
        }
        self.painted.extend_from_slice(records);
    }

    fn on_visibility_update(&mut self, visibility: &Visibility) {
        if visibility.all_hidden {
            println!("  (no cards found)");
            return;
        }
        for record in &self.painted {
            if visibility.is_visible(&record.id) {
                println!("  {}", card_line(record));
            }
        }
        if !visibility.paging_enabled {
            println!("  (clear the search with `/` to load more)");
        }
    }

    fn on_busy_changed(&mut self, busy: bool) {
        if busy {
            println!("loading...");
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer())
        .init();

    let config = CatalogConfig::from_env()?;
    let fetcher = HttpPageFetcher::new(&config);
    let mut catalog = CatalogController::new(fetcher, TerminalSink::default(), config.page_size)?;

    if let Err(err) = catalog.start().await {
        eprintln!("could not load cards: {err}");
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        let trigger = match line {
            "quit" | "exit" => break,
            "" | "more" => Trigger::PageRequested,
            query if query.starts_with('/') => Trigger::QueryChanged(query[1..].to_string()),
            other => {
                eprintln!("unknown command: {other}");
                continue;
            }
        };
        match catalog.handle(trigger).await {
            Ok(TriggerOutcome::Page(PageOutcome::Appended { skipped, .. })) => {
                if !skipped.is_empty() {
                    println!("  ({} duplicate cards skipped)", skipped.len());
                }
                if catalog.is_exhausted() {
                    println!("  (no more cards upstream)");
                }
            }
            Ok(_) => {}
            Err(err) => eprintln!("{err}"),
        }
    }

    Ok(())
}
