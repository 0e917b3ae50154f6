//! Window management using tao.

use serde::Deserialize;
use tao::dpi::{LogicalSize, PhysicalPosition, PhysicalSize};
use tao::event_loop::EventLoopWindowTarget;
use tao::window::{Fullscreen, Window, WindowBuilder};

use crate::config::{StackingOrder, WindowConfig};
use crate::error::{Result, ShellError};

/// Window flag vocabulary reachable from the bridge.
///
/// Decoded once at the IPC boundary; names outside this set reject the
/// calling promise instead of being silently dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WindowFlag {
	/// Strip window decorations.
	Undecorated,
	/// Keep the window behind all other windows.
	BottomMost,
	/// Keep the window above all other windows.
	TopMost,
	/// Remove the minimize button.
	RemoveMinimize,
	/// Remove the maximize button.
	RemoveMaximize,
	/// Remove the close button.
	RemoveClose,
}

/// Window state vocabulary reachable from the bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WindowState {
	Maximized,
	Minimized,
	Fullscreen,
	/// Focus the window.
	Activate,
	/// Leave fullscreen/maximized/minimized.
	Restored,
}

/// Owns the single application window.
pub struct WindowManager {
	window: Window,
}

impl WindowManager {
	/// Creates the window from the startup configuration.
	///
	/// Applies, in order: title, initial size, decoration (with a
	/// transparent background when undecorated) and stacking order. The
	/// window is visible immediately; the document loads into it once the
	/// webview is attached.
	pub fn new<T>(event_loop: &EventLoopWindowTarget<T>, config: &WindowConfig) -> Result<Self> {
		let mut builder = WindowBuilder::new()
			.with_title(&config.title)
			.with_inner_size(LogicalSize::new(config.width, config.height))
			.with_decorations(config.decorated)
			.with_transparent(!config.decorated);

		match config.stacking {
			Some(StackingOrder::Top) => builder = builder.with_always_on_top(true),
			Some(StackingOrder::Bottom) => builder = builder.with_always_on_bottom(true),
			None => {}
		}

		let window = builder
			.build(event_loop)
			.map_err(|e| ShellError::WindowCreation(e.to_string()))?;

		Ok(Self { window })
	}

	/// Returns a reference to the underlying tao Window.
	pub fn window(&self) -> &Window {
		&self.window
	}

	/// Resizes the window to the given pixel dimensions.
	pub fn resize(&self, width: u32, height: u32) {
		self.window.set_inner_size(PhysicalSize::new(width, height));
	}

	/// Returns the window's current inner size in pixels.
	pub fn inner_size(&self) -> (u32, u32) {
		let size = self.window.inner_size();
		(size.width, size.height)
	}

	/// Moves the window so its outer frame starts at `(left, top)`.
	pub fn set_position(&self, left: i32, top: i32) {
		self.window.set_outer_position(PhysicalPosition::new(left, top));
	}

	/// Returns the window's outer position, `(0, 0)` when unavailable.
	pub fn position(&self) -> (i32, i32) {
		match self.window.outer_position() {
			Ok(position) => (position.x, position.y),
			Err(error) => {
				tracing::warn!(%error, "window position unavailable");
				(0, 0)
			}
		}
	}

	/// Returns the cursor position in screen coordinates, `(0, 0)` when
	/// unavailable.
	pub fn cursor_position(&self) -> (i32, i32) {
		match self.window.cursor_position() {
			Ok(position) => (position.x as i32, position.y as i32),
			Err(error) => {
				tracing::warn!(%error, "cursor position unavailable");
				(0, 0)
			}
		}
	}

	/// Moves the system cursor to `(x, y)` in screen coordinates.
	pub fn set_cursor_position(&self, x: i32, y: i32) {
		// set_cursor_position takes window coordinates; translate from the
		// screen coordinates the bridge exposes.
		let origin = match self.window.inner_position() {
			Ok(origin) => origin,
			Err(error) => {
				tracing::warn!(%error, "window origin unavailable, cannot move cursor");
				return;
			}
		};
		if let Err(error) = self
			.window
			.set_cursor_position(PhysicalPosition::new(x - origin.x, y - origin.y))
		{
			tracing::warn!(%error, "failed to move cursor");
		}
	}

	/// Returns the size of the monitor the window is on, `(0, 0)` when no
	/// monitor can be determined.
	pub fn screen_size(&self) -> (u32, u32) {
		match self.window.current_monitor() {
			Some(monitor) => {
				let size = monitor.size();
				(size.width, size.height)
			}
			None => (0, 0),
		}
	}

	/// Sets the window title.
	pub fn set_title(&self, title: &str) {
		self.window.set_title(title);
	}

	/// Sets whether the window is visible.
	pub fn set_visible(&self, visible: bool) {
		self.window.set_visible(visible);
	}

	/// Applies a window flag.
	pub fn apply_flag(&self, flag: WindowFlag) {
		match flag {
			WindowFlag::Undecorated => self.window.set_decorations(false),
			WindowFlag::BottomMost => self.window.set_always_on_bottom(true),
			WindowFlag::TopMost => self.window.set_always_on_top(true),
			WindowFlag::RemoveMinimize => self.window.set_minimizable(false),
			WindowFlag::RemoveMaximize => self.window.set_maximizable(false),
			WindowFlag::RemoveClose => self.window.set_closable(false),
		}
	}

	/// Applies a window state.
	pub fn apply_state(&self, state: WindowState) {
		match state {
			WindowState::Maximized => self.window.set_maximized(true),
			WindowState::Minimized => self.window.set_minimized(true),
			WindowState::Fullscreen => {
				self.window.set_fullscreen(Some(Fullscreen::Borderless(None)));
			}
			WindowState::Activate => self.window.set_focus(),
			WindowState::Restored => {
				self.window.set_fullscreen(None);
				self.window.set_maximized(false);
				self.window.set_minimized(false);
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	#[case("UNDECORATED", WindowFlag::Undecorated)]
	#[case("BOTTOM_MOST", WindowFlag::BottomMost)]
	#[case("TOP_MOST", WindowFlag::TopMost)]
	#[case("REMOVE_MINIMIZE", WindowFlag::RemoveMinimize)]
	#[case("REMOVE_MAXIMIZE", WindowFlag::RemoveMaximize)]
	#[case("REMOVE_CLOSE", WindowFlag::RemoveClose)]
	fn test_window_flag_decodes_full_vocabulary(#[case] name: &str, #[case] expected: WindowFlag) {
		// Act
		let flag: WindowFlag = serde_json::from_value(json!(name)).unwrap();

		// Assert
		assert_eq!(flag, expected);
	}

	#[rstest]
	fn test_window_flag_rejects_unknown_name() {
		// Act
		let result = serde_json::from_value::<WindowFlag>(json!("NOT_A_REAL_FLAG"));

		// Assert
		assert!(result.is_err());
	}

	#[rstest]
	#[case("MAXIMIZED", WindowState::Maximized)]
	#[case("MINIMIZED", WindowState::Minimized)]
	#[case("FULLSCREEN", WindowState::Fullscreen)]
	#[case("ACTIVATE", WindowState::Activate)]
	#[case("RESTORED", WindowState::Restored)]
	fn test_window_state_decodes_full_vocabulary(#[case] name: &str, #[case] expected: WindowState) {
		// Act
		let state: WindowState = serde_json::from_value(json!(name)).unwrap();

		// Assert
		assert_eq!(state, expected);
	}

	#[rstest]
	fn test_window_state_rejects_lowercase_name() {
		// Act
		let result = serde_json::from_value::<WindowState>(json!("maximized"));

		// Assert
		assert!(result.is_err());
	}
}
