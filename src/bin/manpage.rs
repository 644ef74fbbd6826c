use clap::CommandFactory;
use std::io;
use std::path::Path;

fn main() -> io::Result<()> {
    let out_dir = Path::new("man");
    std::fs::create_dir_all(out_dir)?;

    clap_mangen::generate_to(hwgrab::cli::Cli::command(), out_dir)?;

    for entry in std::fs::read_dir(out_dir)? {
        println!("Generated {}", entry?.path().display());
    }

    Ok(())
}
