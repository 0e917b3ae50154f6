//! Wire-level tests for the bridge message surface.
//!
//! These exercise the exact JSON shapes the injected `window.BAT` script
//! produces, through the public decode/response API, plus the filesystem
//! and process contracts reachable without a live window.

use bat_shell::bridge::{BridgeCommand, IpcMessage, IpcResponse, fs, process};
use rstest::rstest;
use serde_json::json;

#[rstest]
fn test_wire_message_decodes_into_command() {
	// Arrange: verbatim body as posted by the init script
	let raw = r#"{"command":"resize","payload":{"width":500,"height":400},"request_id":"7"}"#;

	// Act
	let message: IpcMessage = serde_json::from_str(raw).unwrap();
	let command = BridgeCommand::decode(&message).unwrap();

	// Assert
	assert_eq!(command, BridgeCommand::Resize { width: 500, height: 400 });
	assert_eq!(message.request_id.as_deref(), Some("7"));
}

#[rstest]
fn test_wire_message_without_payload_decodes_nullary_command() {
	// Arrange
	let raw = r#"{"command":"getWindowSize","request_id":"3"}"#;

	// Act
	let message: IpcMessage = serde_json::from_str(raw).unwrap();
	let command = BridgeCommand::decode(&message).unwrap();

	// Assert
	assert_eq!(command, BridgeCommand::GetWindowSize);
}

#[rstest]
fn test_unknown_flag_never_reaches_dispatch() {
	// Arrange
	let raw = r#"{"command":"setWindowFlags","payload":{"flag":"NOT_A_REAL_FLAG"}}"#;

	// Act
	let message: IpcMessage = serde_json::from_str(raw).unwrap();
	let result = BridgeCommand::decode(&message);

	// Assert
	assert!(result.is_err());
}

#[rstest]
fn test_response_wire_shape_round_trips() {
	// Arrange
	let response = IpcResponse::success(json!({"width": 640, "height": 480})).with_request_id("9");

	// Act
	let raw = serde_json::to_string(&response).unwrap();
	let parsed: IpcResponse = serde_json::from_str(&raw).unwrap();

	// Assert
	assert!(parsed.success);
	assert_eq!(parsed.data, Some(json!({"width": 640, "height": 480})));
	assert_eq!(parsed.request_id.as_deref(), Some("9"));
	assert!(!raw.contains("error"));
}

#[rstest]
fn test_error_response_omits_data_field() {
	// Act
	let raw = serde_json::to_string(&IpcResponse::error("unknown bridge command: nope")).unwrap();

	// Assert
	assert!(raw.contains(r#""success":false"#));
	assert!(!raw.contains("data"));
}

#[rstest]
fn test_write_file_read_file_round_trip() {
	// Arrange
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("note.txt");
	let path = path.to_str().unwrap();

	// Act
	fs::write_file(path, "hello");

	// Assert
	assert_eq!(fs::read_file(path), "hello");
}

#[rstest]
fn test_read_file_missing_path_yields_empty_string() {
	// Act & Assert: open failure is indistinguishable from an empty file
	assert_eq!(fs::read_file("/no/such/file.txt"), "");
}

#[rstest]
fn test_run_bash_blocks_until_exit_and_captures_output() {
	// Act
	let output = process::run_bash("printf start; sleep 0.1; printf done");

	// Assert: both writes observed, so the call waited for the subprocess
	assert_eq!(output.stdout, "startdone");
}
