//! Application lifecycle: window, webview and event loop glue.

use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoopBuilder};

use crate::bridge::{self, BridgeContext};
use crate::config::WindowConfig;
use crate::logging::DebugSwitch;
use crate::webview::WebViewManager;
use crate::window::WindowManager;

/// Events posted to the event loop from outside it.
#[derive(Debug)]
pub enum ShellEvent {
	/// A raw bridge request body from the webview IPC channel.
	Ipc(String),
}

/// The shell application.
pub struct ShellApp {
	config: WindowConfig,
	args: Vec<String>,
	debug: DebugSwitch,
}

impl ShellApp {
	/// Creates the application from resolved startup state.
	pub fn new(config: WindowConfig, args: Vec<String>, debug: DebugSwitch) -> Self {
		Self { config, args, debug }
	}

	/// Runs the application event loop.
	///
	/// This method blocks and never returns. All bridge requests are
	/// dispatched here, synchronously, on the loop thread; `runBash` can
	/// therefore stall every later request until its subprocess exits.
	pub fn run(self) -> ! {
		let Self { config, args, debug } = self;

		let event_loop = EventLoopBuilder::<ShellEvent>::with_user_event().build();

		let window_manager =
			WindowManager::new(&event_loop, &config).expect("failed to create window");
		let webview_manager =
			WebViewManager::new(window_manager.window(), &config, event_loop.create_proxy())
				.expect("failed to create webview");

		if config.debug {
			webview_manager.open_devtools();
		}

		tracing::info!(url = %config.document_url, "document loading, entering event loop");

		let mut context = BridgeContext::new(args, debug);

		#[allow(deprecated)] // tao run() API
		event_loop.run(move |event, _target, control_flow| {
			*control_flow = ControlFlow::Wait;

			match event {
				Event::WindowEvent { event: WindowEvent::CloseRequested, .. } => {
					*control_flow = ControlFlow::Exit;
				}
				Event::UserEvent(ShellEvent::Ipc(raw)) => {
					let response =
						bridge::handle_raw(&raw, &mut context, &window_manager, &webview_manager);
					webview_manager.deliver_response(&response);

					if context.close_requested {
						window_manager.set_visible(false);
						*control_flow = ControlFlow::Exit;
					}
				}
				_ => {}
			}
		})
	}
}
