//! Shell command execution exposed through the bridge.

use std::process::Command;

use serde::Serialize;

/// Captured output of a finished shell command.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct BashOutput {
	/// Captured standard output, lossily decoded as UTF-8.
	pub stdout: String,
	/// Captured standard error, lossily decoded as UTF-8.
	pub stderr: String,
}

/// Runs `command` through the system shell and waits for it to exit.
///
/// Blocks the calling thread for the full lifetime of the subprocess, with
/// no timeout and no cancellation; a hung command hangs all further bridge
/// calls. A command that cannot be spawned yields empty output.
pub fn run_bash(command: &str) -> BashOutput {
	tracing::debug!(command, "running shell command");

	let output = shell_command(command).output();

	match output {
		Ok(output) => BashOutput {
			stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
			stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
		},
		Err(error) => {
			tracing::warn!(command, %error, "failed to spawn shell command");
			BashOutput::default()
		}
	}
}

#[cfg(not(windows))]
fn shell_command(command: &str) -> Command {
	let mut cmd = Command::new("sh");
	cmd.arg("-c").arg(command);
	cmd
}

#[cfg(windows)]
fn shell_command(command: &str) -> Command {
	let mut cmd = Command::new("cmd");
	cmd.arg("/C").arg(command);
	cmd
}
