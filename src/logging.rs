//! Tracing setup and the process-wide debug switch.
//!
//! The bridge's `setDebugMode`/`getDebugMode` operations are backed by a
//! reloadable level filter: toggling debug mode swaps the subscriber
//! filter between info- and debug-level output at runtime.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry, reload};

/// Runtime handle on the debug-logging state.
///
/// Owned by the bridge context; there is exactly one per process and it is
/// only touched from the event-loop thread.
pub struct DebugSwitch {
	enabled: bool,
	reload: Option<reload::Handle<EnvFilter, Registry>>,
}

impl DebugSwitch {
	/// Creates a switch that tracks state without driving a subscriber.
	///
	/// Used by tests; `init` produces the connected one.
	pub fn new(enabled: bool) -> Self {
		Self { enabled, reload: None }
	}

	/// Returns whether debug mode is enabled.
	pub fn enabled(&self) -> bool {
		self.enabled
	}

	/// Enables or disables debug mode, reloading the log filter.
	pub fn set(&mut self, enabled: bool) {
		self.enabled = enabled;
		if let Some(handle) = &self.reload {
			if let Err(error) = handle.reload(filter_for(enabled)) {
				tracing::warn!(%error, "failed to update log filter");
			}
		}
	}
}

fn filter_for(debug: bool) -> EnvFilter {
	let directive = if debug { "debug" } else { "info" };
	EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive))
}

/// Installs the global subscriber and returns the connected debug switch.
pub fn init(debug: bool) -> DebugSwitch {
	let (filter, handle) = reload::Layer::new(filter_for(debug));
	tracing_subscriber::registry()
		.with(filter)
		.with(tracing_subscriber::fmt::layer())
		.init();
	DebugSwitch { enabled: debug, reload: Some(handle) }
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_debug_switch_tracks_state() {
		// Arrange
		let mut switch = DebugSwitch::new(false);
		assert!(!switch.enabled());

		// Act
		switch.set(true);

		// Assert
		assert!(switch.enabled());

		// Act: persists until toggled back
		switch.set(false);

		// Assert
		assert!(!switch.enabled());
	}
}
