//! BAT process bootstrap.

use clap::Parser;

use bat_shell::cli::Cli;
use bat_shell::{ShellApp, logging};

fn main() {
	let cli = Cli::parse();
	let debug = logging::init(cli.debug);

	// Captured before any bridge call can observe them.
	let args: Vec<String> = std::env::args().collect();

	let config = cli.window_config();
	tracing::info!(
		title = %config.title,
		width = config.width,
		height = config.height,
		url = %config.document_url,
		"starting BAT"
	);

	ShellApp::new(config, args, debug).run()
}
