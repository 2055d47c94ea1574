//! Simple line-mode game
//!
//! Reads one submission per line from stdin; no TUI.

use crate::game::{Outcome, Session, SessionEvent};
use crate::output::{write_accepted, write_rejection, write_root_word, write_used_words};
use crate::wordlists::{DictionaryOracle, WordSource};
use anyhow::Result;
use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

/// Run the line-mode game on stdin and stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<W, D>(session: &mut Session<W, D>) -> Result<()>
where
    W: WordSource,
    D: DictionaryOracle,
{
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_simple_with(session, stdin.lock(), &mut stdout)
}

/// Run the line-mode game over arbitrary input and output
///
/// Commands: `:new` deals a new root word, `:words` lists used words, `:quit` exits.
/// Anything else is submitted as a word. End of input also exits.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple_with<W, D, R, O>(
    session: &mut Session<W, D>,
    input: R,
    out: &mut O,
) -> Result<()>
where
    W: WordSource,
    D: DictionaryOracle,
    R: BufRead,
    O: Write,
{
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                 Word Scramble - Line Mode                    ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Make as many words as you can from the root word's letters.")?;
    writeln!(out, "Each letter can be used once; words need at least 3 letters.\n")?;
    writeln!(out, "Commands: ':new' for a new word, ':words' to list, ':quit' to exit")?;
    writeln!(out, "On a rejected word: {}", session.config().policy)?;

    // Restarts can happen inside attempt_word, so learn about new roots from events
    let dealt: Rc<RefCell<Option<String>>> = Rc::new(RefCell::new(Some(
        session.root_word().to_string(),
    )));
    let sink = Rc::clone(&dealt);
    let observer = session.subscribe(move |event: &SessionEvent<'_>| {
        if let SessionEvent::Started { root } = event {
            *sink.borrow_mut() = Some((*root).to_string());
        }
    });

    let played = play_lines(session, input, out, &dealt);
    session.unsubscribe(observer);
    played?;

    writeln!(out, "\n👋 Thanks for playing! Final score: {}\n", session.score())?;
    Ok(())
}

fn play_lines<W, D, R, O>(
    session: &mut Session<W, D>,
    input: R,
    out: &mut O,
    dealt: &RefCell<Option<String>>,
) -> Result<()>
where
    W: WordSource,
    D: DictionaryOracle,
    R: BufRead,
    O: Write,
{
    let mut lines = input.lines();
    loop {
        if let Some(root) = dealt.borrow_mut().take() {
            write_root_word(out, &root)?;
        }

        write!(out, "Word: ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let line = line?;

        match line.trim() {
            ":quit" | ":q" => break,
            ":new" | ":n" => {
                session.start_game();
            }
            ":words" | ":w" => write_used_words(out, session.used_words(), session.score())?,
            submission => match session.attempt_word(submission) {
                Outcome::Ignored => {}
                Outcome::Accepted {
                    word,
                    points,
                    score,
                } => write_accepted(out, &word, points, score)?,
                Outcome::Rejected {
                    rejection,
                    restarted,
                } => {
                    write_rejection(out, &rejection)?;
                    if restarted {
                        writeln!(out, "Starting over with a new word.")?;
                    }
                }
            },
        }
    }
    Ok(())
}
