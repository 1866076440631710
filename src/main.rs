// SPDX-License-Identifier: MPL-2.0
use std::process::ExitCode;
use svg_recolor::app::App;
use svg_recolor::cli;
use tracing::Level;

fn main() -> ExitCode {
    let cli = match cli::parse_env() {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Run with --help for usage.");
            return ExitCode::from(2);
        }
    };

    let level = if cli.options.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let mut app = App::new(cli.options.config_dir);
    let mut stdout = std::io::stdout().lock();
    match app.run(cli.command, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
