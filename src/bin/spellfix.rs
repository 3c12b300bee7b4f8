//! Spellfix CLI binary.

use clap::Parser;
use spellfix::cli::{args::SpellfixArgs, commands::execute};
use spellfix::error::EXIT_USER_QUIT;
use spellfix::session::SessionOutcome;
use std::process;

fn main() {
    // Parse command line arguments using clap; a bad argument count exits
    // with clap's usage code before any file I/O.
    let args = SpellfixArgs::parse();

    match execute(args) {
        Ok(SessionOutcome::Completed) => {}
        Ok(SessionOutcome::Aborted) => {
            eprintln!("Discarding changes");
            process::exit(EXIT_USER_QUIT);
        }
        Err(e) => {
            eprintln!("{e}");
            process::exit(e.exit_code());
        }
    }
}
