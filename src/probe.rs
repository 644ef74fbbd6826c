use crate::error::{Error, Result};
use indicatif::ProgressBar;
use std::process::Command;
use std::time::Duration;

/// Build a `hw-probe` invocation, wrapped in sudo unless already root.
/// The collect step keeps the caller's environment (`sudo -E`) so proxy
/// settings survive for hw-probe's upload.
fn probe_command(args: &[&str], preserve_env: bool) -> Command {
    if nix::unistd::geteuid().is_root() {
        let mut cmd = Command::new("hw-probe");
        cmd.args(args);
        return cmd;
    }

    let mut cmd = Command::new("sudo");
    if preserve_env {
        cmd.arg("-E");
    }
    cmd.arg("hw-probe").args(args);
    cmd
}

/// Run the probe collection (`hw-probe -probe`). Stdio is inherited so the
/// tool's own progress output stays visible on the bench terminal.
pub fn collect() -> Result<()> {
    let status = probe_command(&["-probe"], true)
        .status()
        .map_err(|source| Error::ToolSpawn {
            tool: "hw-probe -probe".to_string(),
            source,
        })?;

    if !status.success() {
        return Err(Error::ToolStatus {
            tool: "hw-probe -probe".to_string(),
            status,
        });
    }
    Ok(())
}

/// Capture the verbose probe report (`hw-probe --show --verbose`).
/// The output is captured, so a stderr spinner covers the wait; it draws
/// nothing when stderr is not a terminal.
pub fn show_verbose() -> Result<Vec<u8>> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Reading hardware report...");
    spinner.enable_steady_tick(Duration::from_millis(80));

    let output = probe_command(&["--show", "--verbose"], false).output();
    spinner.finish_and_clear();

    let output = output.map_err(|source| Error::ToolSpawn {
        tool: "hw-probe --show".to_string(),
        source,
    })?;

    if !output.status.success() {
        return Err(Error::ToolStatus {
            tool: "hw-probe --show".to_string(),
            status: output.status,
        });
    }
    Ok(output.stdout)
}
