//! Command implementation for the spellfix CLI.

use std::io::{self, BufRead, Write};

use crate::cli::args::SpellfixArgs;
use crate::dictionary::Dictionary;
use crate::error::Result;
use crate::persist;
use crate::session::{
    AnsiHighlighter, CorrectionSession, Highlighter, PlainHighlighter, SessionOutcome,
};
use crate::text::LineStore;

/// Run a full spellcheck over stdin/stdout.
pub fn execute(args: SpellfixArgs) -> Result<SessionOutcome> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    if args.no_color {
        execute_with_io(&args, stdin.lock(), stdout.lock(), PlainHighlighter)
    } else {
        execute_with_io(&args, stdin.lock(), stdout.lock(), AnsiHighlighter)
    }
}

/// Run a full spellcheck with injected streams.
///
/// Loads the text and dictionary, validates and sorts the dictionary before
/// any scanning, runs the correction session, and persists only when the
/// session completes. Integration tests drive this directly with in-memory
/// streams.
pub fn execute_with_io<R, W, H>(
    args: &SpellfixArgs,
    input: R,
    mut output: W,
    highlighter: H,
) -> Result<SessionOutcome>
where
    R: BufRead,
    W: Write,
    H: Highlighter,
{
    let mut store = LineStore::load(&args.text_file)?;

    let mut dictionary = Dictionary::load(&args.dictionary_file)?;
    dictionary.validate()?;
    dictionary.sort();

    let outcome =
        CorrectionSession::new(&mut store, &mut dictionary, input, &mut output, highlighter)
            .run()?;

    if outcome == SessionOutcome::Completed {
        let backup = persist::backup_path(&args.text_file);
        writeln!(output, "Spellcheck complete.")?;
        writeln!(
            output,
            "Backing up {} to {}",
            args.text_file.display(),
            backup.display()
        )?;
        writeln!(output, "Writing updated {}", args.text_file.display())?;
        persist::backup_and_persist(&store, &args.text_file)?;
    }

    Ok(outcome)
}
