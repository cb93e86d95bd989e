use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use gungi::{Action, GameEngine, IllegalAction};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// A recorded game: the ordered action list a replay feeds to the engine.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameScript {
    pub actions: Vec<Action>,
}

impl GameScript {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        if !path.is_file() {
            anyhow::bail!("Script '{}' does not exist", path.display());
        }
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }
}

/// The outcome of replaying one script.
pub struct ReplayReport {
    /// Actions the engine accepted.
    pub applied: usize,
    /// Rejected actions, with their position in the script.
    pub rejected: Vec<(usize, IllegalAction)>,
}

/// Replays a script against the engine, action by action.
///
/// A rejected action leaves the engine unchanged; the replay either skips
/// it or, with `stop_on_illegal`, ends there.
pub fn replay_script(
    engine: &mut GameEngine,
    script: &GameScript,
    stop_on_illegal: bool,
) -> ReplayReport {
    let mut report = ReplayReport {
        applied: 0,
        rejected: Vec::new(),
    };
    for (idx, &action) in script.actions.iter().enumerate() {
        match engine.apply(action) {
            Ok(()) => {
                debug!(idx, ?action, "action applied");
                report.applied += 1;
            }
            Err(err) => {
                warn!(idx, ?action, %err, "action rejected");
                report.rejected.push((idx, err));
                if stop_on_illegal {
                    break;
                }
            }
        }
    }
    report
}
