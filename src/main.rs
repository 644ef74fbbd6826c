use anyhow::Result;
use clap::Parser;
use clap::error::ErrorKind;
use hwgrab::cli::{self, Cli};
use hwgrab::{collect, config};
use std::path::Path;

fn main() -> Result<()> {
    // Usage errors exit 1; --help and --version are not errors.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => std::process::exit(0),
                _ => std::process::exit(1),
            }
        }
    };

    if let Some(shell) = cli.completions {
        cli::print_completions(shell);
        return Ok(());
    }

    // Unreachable while clap requires MODEL whenever --completions is absent.
    let Some(model) = cli.model else {
        anyhow::bail!("missing MODEL argument");
    };

    let config = config::load(cli.config.as_ref());
    collect::run(Path::new("."), &model, &config)?;

    Ok(())
}
