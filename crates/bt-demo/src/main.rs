//! Guard agent driven by a behavior tree, one update per simulation step.
mod guard;

use anyhow::Result;
use bt_engine::{BehaviorTree, TreeConfig};
use guard::Guard;

/// Step at which an intruder walks into the corridor.
const INTRUDER_STEP: u32 = 4;
const STEPS: u32 = 12;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut tree = BehaviorTree::builder()
        .config(TreeConfig::from_env())
        .context(Guard::new(vec![0, 4, 8]))
        .root(guard::behavior())
        .build()?;

    for step in 1..=STEPS {
        if step == INTRUDER_STEP {
            tree.context_mut().intruder = Some(10);
        }

        let status = tree.update();
        let guard = tree.context();
        tracing::info!(
            step,
            %status,
            position = guard.position,
            stamina = guard.stamina,
            alarm = guard.alarm,
            "guard updated"
        );
    }

    let guard = tree.into_context();
    tracing::info!(caught = guard.caught, "simulation finished");
    Ok(())
}
