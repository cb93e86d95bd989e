use std::path::{Path, PathBuf};

use clap::Parser;
use gungi::{GameEngine, Seat};
use referee::{replay_script, GameScript, ReplayReport};
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// Paths to game script JSON files
    #[clap(num_args(1..), value_delimiter = ' ')]
    scripts: Vec<PathBuf>,

    /// End a replay at the first rejected action instead of skipping it
    #[arg(short, long, default_value_t = false)]
    stop_on_illegal: bool,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let mut any_rejected = false;
    for path in &args.scripts {
        let script = GameScript::from_file(path)?;
        let mut engine = GameEngine::new();
        let report = replay_script(&mut engine, &script, args.stop_on_illegal);
        any_rejected |= !report.rejected.is_empty();
        summarize(path, &engine, &report);
    }

    if any_rejected {
        std::process::exit(1);
    }
    Ok(())
}

fn summarize(path: &Path, engine: &GameEngine, report: &ReplayReport) {
    info!(
        script = %path.display(),
        applied = report.applied,
        rejected = report.rejected.len(),
        phase = ?engine.phase(),
        "replay finished"
    );
    for seat in [Seat::One, Seat::Two] {
        let player = engine.player(seat);
        let on_board = player.pieces().filter(|(_, p)| p.is_placed()).count();
        let in_hand = player.hand().count();
        info!(?seat, on_board, in_hand, "final holdings");
    }
    for (idx, err) in &report.rejected {
        info!(idx = *idx, "rejected action");
        let mut err_dyn = err as &dyn std::error::Error;
        while let Some(src_err) = err_dyn.source() {
            info!("{}", err_dyn);
            err_dyn = src_err;
        }
        info!("{}", err_dyn);
    }
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().event_format(format))
        .with(filter)
        .init();
}
