//=========================================================================
// Crazy Golf Debugger — Binary
//
// Opens the debugger window on the built-in golf course. Log output is
// controlled through `RUST_LOG` (default: info).
//
//=========================================================================

use std::process::ExitCode;

use crazy_golf::DebuggerBuilder;
use log::error;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match DebuggerBuilder::new().build().run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Debugger failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
