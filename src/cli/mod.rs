//! Command-line front end.

mod context;
mod error;
mod flags;
mod prompts;
mod quiet;

pub use context::Context;
pub use error::CliError;
pub use flags::CliFlags;

use crate::exits;

/// Run CLI. Returns the process exit code.
pub fn run(args: Vec<String>) -> i32 {
    let result = Context::new(args).and_then(|mut ctx| ctx.run());

    match result {
        Ok(()) => exits::SUCCESS,
        Err(CliError::Usage(e)) => {
            let _ = e.print();
            CliError::Usage(e).exit_code()
        }
        Err(e) => {
            prompts::error(&format!("Error: {e}"));
            e.exit_code()
        }
    }
}
