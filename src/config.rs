//! Window configuration and startup-value resolution.

use std::path::Path;

use clap::ValueEnum;

/// Default window title.
pub const DEFAULT_TITLE: &str = "BAT";

/// Default window width in pixels.
pub const DEFAULT_WIDTH: u32 = 800;

/// Default window height in pixels.
pub const DEFAULT_HEIGHT: u32 = 600;

/// Default document loaded when `--document` is not given.
pub const DEFAULT_DOCUMENT: &str = "~/.bat/welcome.html";

/// Stacking order forced on the window at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "UPPER")]
pub enum StackingOrder {
	/// Keep the window above all other windows.
	Top,
	/// Keep the window behind all other windows.
	Bottom,
}

/// Resolved startup parameters controlling the single application window.
///
/// Built once from the CLI. Read-only afterwards except the title, the
/// geometry and the debug flag, which bridge operations may change at the
/// loaded document's request.
#[derive(Debug, Clone)]
pub struct WindowConfig {
	/// Window title.
	pub title: String,

	/// Window width in pixels.
	pub width: u32,

	/// Window height in pixels.
	pub height: u32,

	/// Fully resolved document URL (`http...` or `file://...`).
	pub document_url: String,

	/// Whether the window carries decorations (title bar, borders).
	pub decorated: bool,

	/// Stacking order forced at startup, if any.
	pub stacking: Option<StackingOrder>,

	/// Whether debug mode starts enabled.
	pub debug: bool,
}

impl Default for WindowConfig {
	fn default() -> Self {
		Self {
			title: DEFAULT_TITLE.to_string(),
			width: DEFAULT_WIDTH,
			height: DEFAULT_HEIGHT,
			document_url: DEFAULT_DOCUMENT.to_string(),
			decorated: true,
			stacking: None,
			debug: false,
		}
	}
}

/// Parses a `WxH` size specification.
///
/// Both components must parse as positive integers; any malformed value
/// falls back to the documented 800x600 default with a warning.
pub fn parse_size(spec: &str) -> (u32, u32) {
	match try_parse_size(spec) {
		Some(size) => size,
		None => {
			tracing::warn!(
				size = %spec,
				"malformed window size, falling back to {DEFAULT_WIDTH}x{DEFAULT_HEIGHT}"
			);
			(DEFAULT_WIDTH, DEFAULT_HEIGHT)
		}
	}
}

fn try_parse_size(spec: &str) -> Option<(u32, u32)> {
	let (width, height) = spec.split_once('x')?;
	let width = width.trim().parse::<u32>().ok()?;
	let height = height.trim().parse::<u32>().ok()?;
	if width == 0 || height == 0 {
		return None;
	}
	Some((width, height))
}

/// Resolves a document argument into a loadable URL.
///
/// Values already starting with `http` are used verbatim. Absolute paths
/// get a `file://` prefix, a leading `~` expands to the home directory,
/// and everything else is resolved against `cwd`. No existence check is
/// performed; a missing file surfaces as a load failure in the webview.
pub fn resolve_document_url(input: &str, cwd: &Path, home: Option<&Path>) -> String {
	if input.starts_with("http") {
		return input.to_string();
	}

	if let Some(rest) = input.strip_prefix('~') {
		if let Some(home) = home {
			return format!("file://{}{}", home.display(), rest);
		}
	}

	if input.starts_with('/') {
		return format!("file://{input}");
	}

	format!("file://{}/{}", cwd.display(), input)
}

/// Resolves a document argument against the process environment.
pub fn resolve_document(input: &str) -> String {
	let cwd = std::env::current_dir().unwrap_or_default();
	let home = std::env::var_os("HOME").map(std::path::PathBuf::from);
	resolve_document_url(input, &cwd, home.as_deref())
}
