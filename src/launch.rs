use crate::error::{Error, Result};

/// Start a GUI helper as a detached background process. The child handle is
/// dropped unawaited; the helper outlives this process.
pub fn spawn_detached(command: &str) -> Result<()> {
    match std::process::Command::new(command).spawn() {
        Ok(_child) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(Error::ToolMissing(command.to_string()))
        }
        Err(source) => Err(Error::ToolSpawn {
            tool: command.to_string(),
            source,
        }),
    }
}
