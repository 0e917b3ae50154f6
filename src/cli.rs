//! Command-line argument parsing.

use clap::{ArgAction, Parser};

use crate::config::{self, StackingOrder, WindowConfig};

/// BAT command-line surface.
///
/// `-h/--help` and `-v/--version` print text and exit 0. Everything else
/// resolves into a [`WindowConfig`].
#[derive(Debug, Parser)]
#[command(name = "bat", version, about = "Minimal desktop web-shell", disable_version_flag = true)]
pub struct Cli {
	/// Displays version information.
	#[arg(short = 'v', long = "version", action = ArgAction::Version)]
	version: Option<bool>,

	/// Sets the window title on start.
	#[arg(short, long, default_value = config::DEFAULT_TITLE)]
	pub title: String,

	/// Sets the BAT window size.
	#[arg(short, long, value_name = "WxH", default_value = "800x600")]
	pub size: String,

	/// The path to the document you want BAT to load.
	#[arg(short, long, value_name = "path/to/file.html", default_value = config::DEFAULT_DOCUMENT)]
	pub document: String,

	/// Starts BAT with an undecorated window.
	#[arg(short, long)]
	pub undecorate: bool,

	/// If TOP is provided the window is kept on top of all other windows;
	/// if BOTTOM is provided it stays behind all of them.
	#[arg(short, long, value_name = "TOP|BOTTOM", value_enum)]
	pub most: Option<StackingOrder>,

	/// Starts BAT in debug mode.
	#[arg(long)]
	pub debug: bool,
}

impl Cli {
	/// Resolves the parsed arguments into a window configuration.
	pub fn window_config(&self) -> WindowConfig {
		let (width, height) = config::parse_size(&self.size);
		WindowConfig {
			title: self.title.clone(),
			width,
			height,
			document_url: config::resolve_document(&self.document),
			decorated: !self.undecorate,
			stacking: self.most,
			debug: self.debug,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_cli_defaults() {
		// Act
		let cli = Cli::try_parse_from(["bat"]).unwrap();

		// Assert
		assert_eq!(cli.title, "BAT");
		assert_eq!(cli.size, "800x600");
		assert_eq!(cli.document, "~/.bat/welcome.html");
		assert!(!cli.undecorate);
		assert!(cli.most.is_none());
		assert!(!cli.debug);
	}

	#[rstest]
	fn test_cli_size_option_applies_to_config() {
		// Arrange
		let cli = Cli::try_parse_from(["bat", "--size", "640x480"]).unwrap();

		// Act
		let config = cli.window_config();

		// Assert
		assert_eq!((config.width, config.height), (640, 480));
	}

	#[rstest]
	fn test_cli_malformed_size_falls_back_to_default() {
		// Arrange
		let cli = Cli::try_parse_from(["bat", "--size", "bogus"]).unwrap();

		// Act
		let config = cli.window_config();

		// Assert
		assert_eq!((config.width, config.height), (800, 600));
	}

	#[rstest]
	fn test_cli_undecorate_flag() {
		// Act
		let cli = Cli::try_parse_from(["bat", "-u"]).unwrap();

		// Assert
		assert!(!cli.window_config().decorated);
	}

	#[rstest]
	#[case("TOP", StackingOrder::Top)]
	#[case("BOTTOM", StackingOrder::Bottom)]
	fn test_cli_most_option(#[case] value: &str, #[case] expected: StackingOrder) {
		// Act
		let cli = Cli::try_parse_from(["bat", "--most", value]).unwrap();

		// Assert
		assert_eq!(cli.most, Some(expected));
	}

	#[rstest]
	fn test_cli_most_rejects_unknown_value() {
		// Act
		let result = Cli::try_parse_from(["bat", "--most", "MIDDLE"]);

		// Assert
		assert!(result.is_err());
	}

	#[rstest]
	fn test_cli_title_short_option() {
		// Act
		let cli = Cli::try_parse_from(["bat", "-t", "My App"]).unwrap();

		// Assert
		assert_eq!(cli.window_config().title, "My App");
	}

	#[rstest]
	fn test_cli_http_document_kept_verbatim() {
		// Arrange
		let cli = Cli::try_parse_from(["bat", "-d", "https://example.com"]).unwrap();

		// Act
		let config = cli.window_config();

		// Assert
		assert_eq!(config.document_url, "https://example.com");
	}
}
