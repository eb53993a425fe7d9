//! Pre-build hooks and the fixed cpplint invocation they run.

use std::path::Path;
use std::process::Command;

use anyhow::{Result, bail};
use walkdir::WalkDir;

pub const CPPLINT_PROGRAM: &str = "cpplint";

/// Fixed cpplint command line; the filter set and path globs are not
/// user-configurable.
pub const CPPLINT_ARGS: &[&str] = &[
    "--filter=-build/include_subdir,-runtime/int",
    "--recursive",
    "src/*",
    "include/*",
];

const LINT_ROOTS: &[&str] = &["src", "include"];
const LINT_EXTENSIONS: &[&str] = &["c", "cc", "cpp", "h", "hpp"];

/// Actions a build target can register as pre-actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Cpplint,
}

// Targets guarded by a pre-action. The bluetooth object fronts the whole
// lint pass so style runs once per build, not once per file.
const PRE_ACTIONS: &[(&str, Action)] = &[("bluetooth.cpp.o", Action::Cpplint)];

/// Look up the pre-action registered for an object target, if any.
pub fn pre_action(target: &str) -> Option<Action> {
    PRE_ACTIONS.iter().copied().find(|(t, _)| *t == target).map(|(_, action)| action)
}

pub fn cpplint_command() -> Command {
    let mut cmd = Command::new(CPPLINT_PROGRAM);
    cmd.args(CPPLINT_ARGS);
    cmd
}

/// Count the C/C++ sources cpplint will see under the lint roots.
///
/// Errors if a root is missing, since cpplint's own glob failure is opaque.
pub fn count_lintable_files(base: &Path) -> Result<usize> {
    let mut total = 0usize;

    for root in LINT_ROOTS {
        let dir = base.join(root);
        if !dir.is_dir() {
            bail!("lint root '{root}' not found; run from the project root");
        }

        total += WalkDir::new(&dir)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| {
                e.path()
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| LINT_EXTENSIONS.contains(&ext))
            })
            .count();
    }

    Ok(total)
}
