mod args;
mod signal;

use std::io;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use pointwise::demo::{functional_demo, DemoReport};
use pointwise::session::Automaton;
use pointwise::Point;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use crate::args::{Action, Cmd};

/// How the interactive session ended.
enum Finish {
    Completed,
    Interrupted,
}

/// JSON document printed by `demo`.
#[derive(Serialize)]
struct DemoOutput {
    version: &'static str,
    points: usize,
    demo: DemoReport,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cmd.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let started = Instant::now();
    let outcome = match cmd.action.unwrap_or(Action::Session) {
        Action::Session => session(!cmd.no_banner).await,
        Action::Demo { points } => demo(points).map(|()| Finish::Completed),
    };
    eprintln!("Elapsed: {:.2} s", started.elapsed().as_secs_f64());

    if let Finish::Interrupted = outcome? {
        // The session thread may still block on stdin; leave without joining it.
        std::process::exit(0);
    }
    Ok(())
}

async fn session(banner: bool) -> Result<Finish> {
    if banner {
        println!("{}", "=".repeat(50));
        println!("POINTWISE {}: 2D point transformations", pointwise::VERSION);
        println!("{}", "=".repeat(50));
    }
    tracing::info!("session start");

    let worker = tokio::task::spawn_blocking(|| {
        let mut automaton = Automaton::new(io::stdin().lock(), io::stdout());
        automaton.run()
    });

    tokio::select! {
        joined = worker => {
            joined
                .context("session thread panicked")?
                .context("console I/O failed")?;
            Ok(Finish::Completed)
        }
        interrupted = signal::wait_for_interrupt() => {
            interrupted.context("installing signal handlers")?;
            println!("\n\nSession interrupted by user.");
            Ok(Finish::Interrupted)
        }
    }
}

fn demo(points: Vec<Point>) -> Result<()> {
    tracing::info!(points = points.len(), "demo");
    let report = functional_demo(&points).context("running the functional demo")?;
    let doc = DemoOutput {
        version: pointwise::VERSION,
        points: points.len(),
        demo: report,
    };
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
