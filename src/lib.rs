//! BAT - a minimal desktop web-shell.
//!
//! BAT embeds a system webview inside a single native window and exposes a
//! small native-capability bridge (window control, file I/O, process
//! execution, cursor control) to the loaded document as a `window.BAT`
//! global. The whole program is glue: the CLI produces a [`WindowConfig`],
//! the window host applies it once, and every subsequent interaction is a
//! bridge call forwarded one-to-one to the underlying toolkit.
//!
//! # Usage
//!
//! ```bash
//! bat --document index.html --size 1024x768 --title "My App"
//! ```
//!
//! From the loaded page:
//!
//! ```js
//! await BAT.resize(500, 400);
//! const { width, height } = await BAT.getWindowSize();
//! const { stdout } = await BAT.runBash("uname -a");
//! ```

pub mod app;
pub mod bridge;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod webview;
pub mod window;

pub use app::ShellApp;
pub use bridge::{BridgeCommand, BridgeContext, IpcMessage, IpcResponse};
pub use cli::Cli;
pub use config::{StackingOrder, WindowConfig};
pub use error::{Result, ShellError};
