//! File operations exposed through the bridge.
//!
//! Failure behavior is part of the bridge contract: a failed write is a
//! silent no-op and a failed read returns an empty string, with the cause
//! visible only in the diagnostic log. Callers cannot distinguish an empty
//! file from an unreadable one. Any path reachable by the process owner is
//! accessible to the loaded document.

/// Writes `content` to `path`, creating or truncating the file.
pub fn write_file(path: &str, content: &str) {
	tracing::debug!(path, "writing file");
	if let Err(error) = std::fs::write(path, content) {
		tracing::warn!(path, %error, "cannot write file");
	}
}

/// Reads the full text content of `path`, or `""` if it cannot be opened.
pub fn read_file(path: &str) -> String {
	tracing::debug!(path, "reading file");
	match std::fs::read_to_string(path) {
		Ok(content) => content,
		Err(error) => {
			tracing::warn!(path, %error, "cannot open file");
			String::new()
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_write_then_read_round_trip() {
		// Arrange
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("x.txt");
		let path = path.to_str().unwrap();

		// Act
		write_file(path, "hello");
		let content = read_file(path);

		// Assert
		assert_eq!(content, "hello");
	}

	#[rstest]
	fn test_read_nonexistent_path_returns_empty_string() {
		// Act
		let content = read_file("/nonexistent/definitely/missing.txt");

		// Assert
		assert_eq!(content, "");
	}

	#[rstest]
	fn test_write_to_unwritable_path_is_silent() {
		// Arrange: a directory is not a writable file target
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().to_str().unwrap().to_string();

		// Act & Assert: no panic, no signal
		write_file(&path, "content");
	}

	#[rstest]
	fn test_write_truncates_existing_content() {
		// Arrange
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("x.txt");
		let path = path.to_str().unwrap();
		write_file(path, "a much longer original content");

		// Act
		write_file(path, "short");

		// Assert
		assert_eq!(read_file(path), "short");
	}
}
