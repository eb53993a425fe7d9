use anyhow::Result;

use fwtools::hooks::{self, Action};

/// Entry point for the build system's pre-action step. A failing action
/// exits non-zero so the host build aborts the target.
pub fn run(target: &str) -> Result<()> {
    match hooks::pre_action(target) {
        Some(Action::Cpplint) => super::lint::run(),
        None => {
            println!("No pre-action registered for '{target}'.");
            Ok(())
        }
    }
}
