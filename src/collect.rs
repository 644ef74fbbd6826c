use crate::config::GrabConfig;
use crate::error::{Error, Result};
use crate::report::{self, ReportFile};
use crate::{launch, power, probe, version};
use colored::Colorize;
use std::io::Write;
use std::path::Path;

/// Everything that leaves the process during a collection run goes through
/// this trait so the assembly sequence can be tested against a recording
/// mock.
trait CollectOps {
    fn enumerate_power_devices(&mut self) -> Result<Vec<String>>;
    fn probe_collect(&mut self) -> Result<()>;
    fn probe_show(&mut self) -> Result<Vec<u8>>;
    fn power_status(&mut self, device: &str) -> Result<Vec<u8>>;
    fn launch_detached(&mut self, command: &str) -> Result<()>;
}

struct SystemOps;

impl CollectOps for SystemOps {
    fn enumerate_power_devices(&mut self) -> Result<Vec<String>> {
        power::enumerate_devices()
    }

    fn probe_collect(&mut self) -> Result<()> {
        probe::collect()
    }

    fn probe_show(&mut self) -> Result<Vec<u8>> {
        probe::show_verbose()
    }

    fn power_status(&mut self, device: &str) -> Result<Vec<u8>> {
        power::device_info(device)
    }

    fn launch_detached(&mut self, command: &str) -> Result<()> {
        launch::spawn_detached(command)
    }
}

/// Collect a full report for `model` into the next numbered file under
/// `dir`, then start the operator GUIs and print the result.
pub fn run(dir: &Path, model: &str, config: &GrabConfig) -> Result<()> {
    let mut ops = SystemOps;
    run_with_ops(dir, model, config, &mut ops)
}

fn run_with_ops(
    dir: &Path,
    model: &str,
    config: &GrabConfig,
    ops: &mut impl CollectOps,
) -> Result<()> {
    let highest = version::scan_highest(dir, model)?;
    if highest.is_none() {
        println!("{}", fresh_model_notice(model));
    }
    let next = version::next_version(model, highest)?;
    let filename = version::format_filename(model, next);

    // The only fatal step: without the file there is nothing to collect into.
    let file = ReportFile::create(dir, &filename)?;

    // Battery lookup is silent best-effort: no upower or no internal battery
    // just means the report gets no battery section.
    let devices = ops.enumerate_power_devices().unwrap_or_default();
    let battery = power::find_battery(&devices);

    if let Err(e) = ops.probe_collect() {
        warn(&e);
    }

    match ops.probe_show() {
        Ok(output) => {
            if let Err(e) = file.append(&output) {
                warn(&e);
            }
        }
        Err(e) => warn(&e),
    }

    if let Err(e) = file.append(&report::section_separator()) {
        warn(&e);
    }

    if let Some(device) = battery {
        match ops.power_status(device) {
            Ok(output) => {
                if let Err(e) = file.append(&output) {
                    warn(&e);
                }
            }
            Err(e) => warn(&e),
        }
    }

    if let Err(e) = ops.launch_detached(&config.launch.snapshot) {
        warn(&e);
    }
    if let Err(e) = ops.launch_detached(&config.launch.settings) {
        warn(&e);
    }

    let contents = match file.read_back() {
        Ok(bytes) => Some(bytes),
        Err(e) => {
            warn(&e);
            None
        }
    };
    write_summary(&mut std::io::stdout(), contents.as_deref(), &filename);

    Ok(())
}

fn fresh_model_notice(model: &str) -> String {
    format!(
        "No files found containing '{}' - will create {}-001",
        model,
        model.to_uppercase()
    )
}

/// Print the finished report and the confirmation line. Every write is
/// best-effort: the report file is already on disk, and a closed stdout
/// must not panic the run.
fn write_summary(out: &mut impl Write, contents: Option<&[u8]>, filename: &str) {
    if let Some(bytes) = contents {
        let _ = out.write_all(bytes);
        let _ = out.write_all(b"\n");
    }
    let _ = writeln!(out, "{} {}", "Created:".green().bold(), filename);
}

fn warn(err: &Error) {
    eprintln!("{} {}", "warning:".yellow().bold(), err);
}
