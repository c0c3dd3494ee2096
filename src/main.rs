use std::io::{self, BufRead, Write};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use starsky::{run_command, status_text, ChangeNotifier, Config, Control, SnapshotCache, Sky};

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            eprintln!("Optional: STARSKY_CAPACITY (default: 10)");
            eprintln!("Optional: STARSKY_SNAPSHOT (JSON array of stars)");
            std::process::exit(1);
        }
    };

    tracing::info!("Starting starsky");
    tracing::info!("Capacity: {}", config.capacity);

    // The host keeps the last snapshot and echoes each one to stdout
    let cache = SnapshotCache::new();
    let host = cache.clone();
    let mut sky = Sky::from_config(&config, move |snapshot: &str| {
        host.on_stars_changed(snapshot);
        println!("{}", snapshot);
    });

    if let Some(saved) = config.snapshot.as_deref() {
        match sky.restore(saved) {
            Ok(Some(report)) => tracing::info!("Restored {} stars", report.summary.total),
            Ok(None) => {}
            Err(e) => eprintln!("Restore error: {}", e),
        }
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                tracing::error!("Failed to read command: {}", e);
                break;
            }
        };

        match run_command(&mut sky, &cache, &line) {
            Ok(Control::Continue) => {}
            Ok(Control::Print(text)) => println!("{}", text),
            Ok(Control::Warn(text)) => eprintln!("{}", text),
            Ok(Control::Quit) => break,
            Err(e) => eprintln!("Error: {}", e),
        }

        if let Err(e) = io::stdout().flush() {
            tracing::warn!("Failed to flush stdout: {}", e);
        }
    }

    tracing::info!("{}", status_text(sky.len()));
}
