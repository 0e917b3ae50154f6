//! Native bridge between the loaded document and the host.
//!
//! The loaded page talks to the host through a single `window.BAT` global
//! injected before document load. Every call posts one JSON message
//! `{command, payload, request_id}` over the webview IPC channel; the host
//! decodes it into the closed [`BridgeCommand`] vocabulary, executes it
//! synchronously on the event-loop thread, and resolves the calling
//! promise with the correlated `{success, data, error, request_id}`
//! response.

pub mod fs;
pub mod process;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, ShellError};
use crate::logging::DebugSwitch;
use crate::webview::WebViewManager;
use crate::window::{WindowFlag, WindowManager, WindowState};

/// A message received from the loaded document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpcMessage {
	/// The operation name.
	pub command: String,
	/// The operation arguments.
	#[serde(default)]
	pub payload: Value,
	/// Request ID for correlating the response.
	#[serde(default)]
	pub request_id: Option<String>,
}

/// A response sent back to the loaded document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpcResponse {
	/// Whether the operation succeeded.
	pub success: bool,
	/// The response data (if successful).
	#[serde(skip_serializing_if = "Option::is_none")]
	pub data: Option<Value>,
	/// Error message (if failed).
	#[serde(skip_serializing_if = "Option::is_none")]
	pub error: Option<String>,
	/// The request ID this response is for.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub request_id: Option<String>,
}

impl IpcResponse {
	/// Creates a successful response with data.
	pub fn success(data: impl Serialize) -> Self {
		Self {
			success: true,
			data: Some(serde_json::to_value(data).unwrap_or(Value::Null)),
			error: None,
			request_id: None,
		}
	}

	/// Creates a successful response without data.
	pub fn ok() -> Self {
		Self { success: true, data: None, error: None, request_id: None }
	}

	/// Creates an error response.
	pub fn error(message: impl Into<String>) -> Self {
		Self { success: false, data: None, error: Some(message.into()), request_id: None }
	}

	/// Sets the request ID for this response.
	pub fn with_request_id(mut self, id: impl Into<String>) -> Self {
		self.request_id = Some(id.into());
		self
	}
}

/// Two-field size value returned by the geometry getters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SizeReply {
	pub width: u32,
	pub height: u32,
}

/// Two-field position value returned by the geometry getters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PositionReply {
	pub left: i32,
	pub top: i32,
}

/// Host-side state the bridge may read or mutate.
///
/// Explicit replacement for the process-wide globals of older web-shells:
/// owned by the event loop for the process lifetime and handed to every
/// dispatch.
pub struct BridgeContext {
	/// Original process argument list, captured at startup.
	pub args: Vec<String>,
	/// Debug-logging switch.
	pub debug: DebugSwitch,
	/// Set by `closeWindow`; the event loop exits once the response has
	/// been delivered.
	pub close_requested: bool,
}

impl BridgeContext {
	/// Creates the context from startup state.
	pub fn new(args: Vec<String>, debug: DebugSwitch) -> Self {
		Self { args, debug, close_requested: false }
	}
}

/// The fixed operation vocabulary reachable from the loaded document.
#[derive(Debug, Clone, PartialEq)]
pub enum BridgeCommand {
	CloseWindow,
	Resize { width: u32, height: u32 },
	SetWindowFlags(WindowFlag),
	SetWindowState(WindowState),
	GetWindowSize,
	GetScreenSize,
	GetWindowPosition,
	SetWindowPosition { left: i32, top: i32 },
	GetMousePosition,
	SetMousePosition { x: i32, y: i32 },
	SetWindowTitle(String),
	WriteFile { path: String, content: String },
	ReadFile { path: String },
	InspectElement,
	RunBash(String),
	Argv,
	SetDebugMode(bool),
	GetDebugMode,
	GetDirname,
	Debug(String),
}

#[derive(Deserialize)]
struct SizeArgs {
	width: u32,
	height: u32,
}

#[derive(Deserialize)]
struct PositionArgs {
	left: i32,
	top: i32,
}

#[derive(Deserialize)]
struct CursorArgs {
	x: i32,
	y: i32,
}

#[derive(Deserialize)]
struct FlagArgs {
	flag: WindowFlag,
}

#[derive(Deserialize)]
struct StateArgs {
	state: WindowState,
}

#[derive(Deserialize)]
struct TitleArgs {
	title: String,
}

#[derive(Deserialize)]
struct WriteFileArgs {
	path: String,
	content: String,
}

#[derive(Deserialize)]
struct ReadFileArgs {
	path: String,
}

#[derive(Deserialize)]
struct RunBashArgs {
	command: String,
}

#[derive(Deserialize)]
struct DebugModeArgs {
	enabled: bool,
}

#[derive(Deserialize)]
struct MessageArgs {
	message: String,
}

fn args<T: DeserializeOwned>(payload: &Value) -> Result<T> {
	serde_json::from_value(payload.clone()).map_err(|e| ShellError::InvalidArguments(e.to_string()))
}

impl BridgeCommand {
	/// Decodes a raw message into the closed command vocabulary.
	///
	/// Unknown operation names and malformed payloads (including flag or
	/// state names outside their vocabularies) are rejected here, before
	/// any host state is touched.
	pub fn decode(message: &IpcMessage) -> Result<Self> {
		match message.command.as_str() {
			"closeWindow" => Ok(Self::CloseWindow),
			"resize" => {
				let SizeArgs { width, height } = args(&message.payload)?;
				Ok(Self::Resize { width, height })
			}
			"setWindowFlags" => {
				let FlagArgs { flag } = args(&message.payload)?;
				Ok(Self::SetWindowFlags(flag))
			}
			"setWindowState" => {
				let StateArgs { state } = args(&message.payload)?;
				Ok(Self::SetWindowState(state))
			}
			"getWindowSize" => Ok(Self::GetWindowSize),
			"getScreenSize" => Ok(Self::GetScreenSize),
			"getWindowPosition" => Ok(Self::GetWindowPosition),
			"setWindowPosition" => {
				let PositionArgs { left, top } = args(&message.payload)?;
				Ok(Self::SetWindowPosition { left, top })
			}
			"getMousePosition" => Ok(Self::GetMousePosition),
			"setMousePosition" => {
				let CursorArgs { x, y } = args(&message.payload)?;
				Ok(Self::SetMousePosition { x, y })
			}
			"setWindowTitle" => {
				let TitleArgs { title } = args(&message.payload)?;
				Ok(Self::SetWindowTitle(title))
			}
			"writeFile" => {
				let WriteFileArgs { path, content } = args(&message.payload)?;
				Ok(Self::WriteFile { path, content })
			}
			"readFile" => {
				let ReadFileArgs { path } = args(&message.payload)?;
				Ok(Self::ReadFile { path })
			}
			"inspectElement" => Ok(Self::InspectElement),
			"runBash" => {
				let RunBashArgs { command } = args(&message.payload)?;
				Ok(Self::RunBash(command))
			}
			"argv" => Ok(Self::Argv),
			"setDebugMode" => {
				let DebugModeArgs { enabled } = args(&message.payload)?;
				Ok(Self::SetDebugMode(enabled))
			}
			"getDebugMode" => Ok(Self::GetDebugMode),
			"getDirname" => Ok(Self::GetDirname),
			"debug" => {
				let MessageArgs { message } = args(&message.payload)?;
				Ok(Self::Debug(message))
			}
			other => Err(ShellError::UnknownCommand(other.to_string())),
		}
	}
}

/// Executes one decoded command against the host.
///
/// Each operation is a direct forward to the toolkit, the filesystem or a
/// subprocess; composite return values are constructed fresh per call.
pub fn execute(
	command: BridgeCommand,
	ctx: &mut BridgeContext,
	window: &WindowManager,
	webview: &WebViewManager,
) -> IpcResponse {
	match command {
		BridgeCommand::CloseWindow => {
			tracing::debug!("closing window");
			ctx.close_requested = true;
			IpcResponse::ok()
		}
		BridgeCommand::Resize { width, height } => {
			tracing::debug!(width, height, "resizing window");
			window.resize(width, height);
			IpcResponse::ok()
		}
		BridgeCommand::SetWindowFlags(flag) => {
			tracing::debug!(?flag, "setting window flag");
			window.apply_flag(flag);
			IpcResponse::ok()
		}
		BridgeCommand::SetWindowState(state) => {
			tracing::debug!(?state, "setting window state");
			window.apply_state(state);
			IpcResponse::ok()
		}
		BridgeCommand::GetWindowSize => {
			let (width, height) = window.inner_size();
			IpcResponse::success(SizeReply { width, height })
		}
		BridgeCommand::GetScreenSize => {
			let (width, height) = window.screen_size();
			IpcResponse::success(SizeReply { width, height })
		}
		BridgeCommand::GetWindowPosition => {
			let (left, top) = window.position();
			IpcResponse::success(PositionReply { left, top })
		}
		BridgeCommand::SetWindowPosition { left, top } => {
			tracing::debug!(left, top, "setting window position");
			window.set_position(left, top);
			IpcResponse::ok()
		}
		BridgeCommand::GetMousePosition => {
			let (left, top) = window.cursor_position();
			IpcResponse::success(PositionReply { left, top })
		}
		BridgeCommand::SetMousePosition { x, y } => {
			tracing::debug!(x, y, "setting mouse position");
			window.set_cursor_position(x, y);
			IpcResponse::ok()
		}
		BridgeCommand::SetWindowTitle(title) => {
			tracing::debug!(title = %title, "setting window title");
			window.set_title(&title);
			IpcResponse::ok()
		}
		BridgeCommand::WriteFile { path, content } => {
			fs::write_file(&path, &content);
			IpcResponse::ok()
		}
		BridgeCommand::ReadFile { path } => IpcResponse::success(fs::read_file(&path)),
		BridgeCommand::InspectElement => {
			tracing::debug!("opening inspector");
			webview.open_devtools();
			IpcResponse::ok()
		}
		BridgeCommand::RunBash(shell_command) => {
			IpcResponse::success(process::run_bash(&shell_command))
		}
		BridgeCommand::Argv => IpcResponse::success(&ctx.args),
		BridgeCommand::SetDebugMode(enabled) => {
			tracing::debug!(enabled, "setting debug mode");
			ctx.debug.set(enabled);
			IpcResponse::ok()
		}
		BridgeCommand::GetDebugMode => IpcResponse::success(ctx.debug.enabled()),
		BridgeCommand::GetDirname => {
			let dirname = match std::env::current_dir() {
				Ok(path) => path.display().to_string(),
				Err(error) => {
					tracing::warn!(%error, "current directory unavailable");
					String::new()
				}
			};
			IpcResponse::success(dirname)
		}
		BridgeCommand::Debug(message) => {
			tracing::info!(target: "bat_shell::page", "{message}");
			IpcResponse::ok()
		}
	}
}

/// Handles one raw IPC request body and returns the serialized response.
pub fn handle_raw(
	raw: &str,
	ctx: &mut BridgeContext,
	window: &WindowManager,
	webview: &WebViewManager,
) -> String {
	let response = match serde_json::from_str::<IpcMessage>(raw) {
		Ok(message) => {
			let request_id = message.request_id.clone();
			let response = match BridgeCommand::decode(&message) {
				Ok(command) => execute(command, ctx, window, webview),
				Err(error) => {
					tracing::warn!(command = %message.command, %error, "rejecting bridge request");
					IpcResponse::error(error.to_string())
				}
			};
			match request_id {
				Some(id) => response.with_request_id(id),
				None => response,
			}
		}
		Err(error) => {
			tracing::warn!(%error, "unparseable bridge request");
			IpcResponse::error(ShellError::InvalidMessage(error.to_string()).to_string())
		}
	};

	serde_json::to_string(&response)
		.unwrap_or_else(|_| r#"{"success":false,"error":"failed to serialize response"}"#.to_string())
}

/// JavaScript injected before document load; defines `window.BAT`.
pub const BRIDGE_INIT_SCRIPT: &str = r#"
(function () {
    const pending = new Map();
    let nextRequestId = 0;

    function invoke(command, payload) {
        return new Promise((resolve, reject) => {
            const requestId = String(++nextRequestId);
            pending.set(requestId, { resolve, reject });
            window.ipc.postMessage(JSON.stringify({
                command: command,
                payload: payload || {},
                request_id: requestId
            }));
        });
    }

    window.BAT = {
        closeWindow: () => invoke('closeWindow'),
        resize: (width, height) => invoke('resize', { width, height }),
        setWindowFlags: (flag) => invoke('setWindowFlags', { flag }),
        setWindowState: (state) => invoke('setWindowState', { state }),
        getWindowSize: () => invoke('getWindowSize'),
        getScreenSize: () => invoke('getScreenSize'),
        getWindowPosition: () => invoke('getWindowPosition'),
        setWindowPosition: (left, top) => invoke('setWindowPosition', { left, top }),
        getMousePosition: () => invoke('getMousePosition'),
        setMousePosition: (x, y) => invoke('setMousePosition', { x, y }),
        setWindowTitle: (title) => invoke('setWindowTitle', { title }),
        writeFile: (path, content) => invoke('writeFile', { path, content }),
        readFile: (path) => invoke('readFile', { path }),
        inspectElement: () => invoke('inspectElement'),
        runBash: (command) => invoke('runBash', { command }),
        argv: () => invoke('argv'),
        setDebugMode: (enabled) => invoke('setDebugMode', { enabled }),
        getDebugMode: () => invoke('getDebugMode'),
        getDirname: () => invoke('getDirname'),
        debug: (message) => invoke('debug', { message }),

        _handleResponse: function (response) {
            const data = typeof response === 'string' ? JSON.parse(response) : response;
            const entry = pending.get(data.request_id);
            if (!entry) {
                return;
            }
            pending.delete(data.request_id);
            if (data.success) {
                entry.resolve(data.data);
            } else {
                entry.reject(new Error(data.error || 'bridge call failed'));
            }
        }
    };
})();
"#;
