use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "hwgrab",
    about = "Collect a numbered hw-probe report for a device model",
    version
)]
pub struct Cli {
    /// Device model the report is for (e.g. T480, latitude-5400)
    #[arg(value_name = "MODEL", required_unless_present = "completions")]
    pub model: Option<String>,

    /// Use this config file instead of the system/user ones
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Generate shell completions (auto-detected if no shell is given)
    #[arg(long, value_name = "SHELL")]
    pub completions: Option<Option<Shell>>,
}

/// Print shell completions to stdout.
pub fn print_completions(shell: Option<Shell>) {
    let shell = shell.or_else(Shell::from_env).unwrap_or_else(|| {
        eprintln!(
            "Could not detect shell. Specify one: hwgrab --completions bash|zsh|fish|elvish|powershell"
        );
        std::process::exit(1);
    });
    clap_complete::generate(shell, &mut Cli::command(), "hwgrab", &mut std::io::stdout());
}
