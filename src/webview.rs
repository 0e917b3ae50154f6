//! WebView management using wry.

use std::path::PathBuf;

use tao::event_loop::EventLoopProxy;
use tao::window::Window;
use wry::{WebContext, WebView, WebViewBuilder};

use crate::app::ShellEvent;
use crate::bridge::BRIDGE_INIT_SCRIPT;
use crate::config::WindowConfig;
use crate::error::{Result, ShellError};

/// Manages the WebView instance attached to the window.
pub struct WebViewManager {
	webview: WebView,
	// Keeps the browsing context (and its local-storage directory) alive
	// for the lifetime of the webview.
	_web_context: WebContext,
}

impl WebViewManager {
	/// Creates the webview and loads the configured document.
	///
	/// Local storage persists under a fixed temp-dir path. The bridge init
	/// script is injected before document load, and every IPC request body
	/// is forwarded to the event loop untouched; decoding happens there.
	/// Devtools are always built in, since wry cannot enable them after
	/// construction; `--debug` and `inspectElement()` only open the view.
	pub fn new(
		window: &Window,
		config: &WindowConfig,
		proxy: EventLoopProxy<ShellEvent>,
	) -> Result<Self> {
		let mut web_context = WebContext::new(Some(local_storage_path()));

		let webview = WebViewBuilder::with_web_context(&mut web_context)
			.with_initialization_script(BRIDGE_INIT_SCRIPT)
			.with_ipc_handler(move |request| {
				if proxy.send_event(ShellEvent::Ipc(request.into_body())).is_err() {
					tracing::warn!("event loop closed, dropping bridge request");
				}
			})
			.with_devtools(true)
			.with_transparent(!config.decorated)
			.with_url(&config.document_url)
			.build(window)
			.map_err(|e| ShellError::WebViewCreation(e.to_string()))?;

		Ok(Self { webview, _web_context: web_context })
	}

	/// Opens the developer tools window for the current page.
	pub fn open_devtools(&self) {
		self.webview.open_devtools();
	}

	/// Delivers a serialized bridge response back into the page.
	pub fn deliver_response(&self, response: &str) {
		let script = format!("window.BAT._handleResponse({response});");
		if let Err(error) = self.webview.evaluate_script(&script) {
			tracing::warn!(%error, "failed to deliver bridge response");
		}
	}
}

fn local_storage_path() -> PathBuf {
	std::env::temp_dir().join("bat-shell")
}
