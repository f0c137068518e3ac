// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Opening build output in the user's browser.

use crate::runner::{ProcessRunner, RunnerResult, ToolCommand};
use std::path::Path;

/// Command that opens `target` with the platform's default handler.
pub fn opener_command(target: &Path, cwd: &Path) -> ToolCommand {
    let target = target.to_string_lossy().into_owned();

    #[cfg(target_os = "macos")]
    {
        ToolCommand::new("open", cwd).args([target])
    }
    #[cfg(target_os = "windows")]
    {
        ToolCommand::new("cmd", cwd).args(["/C".to_string(), "start".to_string(), String::new(), target])
    }
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        ToolCommand::new("xdg-open", cwd).args([target])
    }
}

/// Opens `target` (a file or URL) in the browser.
///
/// A relative `target` is resolved against `cwd`. The opener is spawned and
/// not waited for.
pub fn open(runner: &mut dyn ProcessRunner, target: &Path, cwd: &Path) -> RunnerResult<()> {
    tracing::info!("Opening {}", target.display());
    runner.spawn(&opener_command(target, cwd))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opener_command_targets_file() {
        let cmd = opener_command(Path::new("/tmp/docs/index.html"), Path::new("/tmp"));
        assert_eq!(cmd.args.last().map(String::as_str), Some("/tmp/docs/index.html"));
        assert_eq!(cmd.cwd, Path::new("/tmp"));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_linux_uses_xdg_open() {
        let cmd = opener_command(Path::new("index.html"), Path::new("."));
        assert_eq!(cmd.program, "xdg-open");
    }
}
