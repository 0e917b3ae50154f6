//! Shell error types.

use thiserror::Error;

/// Result type for shell operations.
pub type Result<T> = std::result::Result<T, ShellError>;

/// Errors raised by the shell.
///
/// Bridge misuse never panics the process: decode failures become rejected
/// promises on the calling page, and toolkit-level failures surface only
/// during startup.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ShellError {
	/// Window could not be created.
	#[error("failed to create window: {0}")]
	WindowCreation(String),

	/// WebView could not be created.
	#[error("failed to create webview: {0}")]
	WebViewCreation(String),

	/// Bridge request named an operation outside the fixed vocabulary.
	#[error("unknown bridge command: {0}")]
	UnknownCommand(String),

	/// Bridge request payload did not match the operation's arguments.
	#[error("invalid bridge arguments: {0}")]
	InvalidArguments(String),

	/// Bridge request body was not a valid message.
	#[error("invalid bridge message: {0}")]
	InvalidMessage(String),
}
