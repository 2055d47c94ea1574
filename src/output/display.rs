//! Display functions for game events and command results

use super::formatters::{spaced_root, used_word_line};
use crate::commands::CheckReport;
use crate::game::{Outcome, Rejection};
use colored::Colorize;
use std::io::{self, Write};

/// Announce a freshly dealt root word
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_root_word(out: &mut impl Write, root: &str) -> io::Result<()> {
    writeln!(out, "\n{}", "─".repeat(60).cyan())?;
    writeln!(
        out,
        "Root word: {}",
        spaced_root(root).bright_yellow().bold()
    )?;
    writeln!(out, "{}", "─".repeat(60).cyan())
}

/// Report an accepted word
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_accepted(out: &mut impl Write, word: &str, points: u32, score: u32) -> io::Result<()> {
    writeln!(
        out,
        "{} {} {}",
        "✓".green().bold(),
        word.bright_white().bold(),
        format!("+{points} (score: {score})").green()
    )
}

/// Show a rejection the way an alert would: title, then message
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_rejection(out: &mut impl Write, rejection: &Rejection) -> io::Result<()> {
    writeln!(out, "{} {}", "✗".red().bold(), rejection.title.red().bold())?;
    for line in rejection.message.lines() {
        writeln!(out, "  {line}")?;
    }
    Ok(())
}

/// List used words, most recent first, each with its length
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_used_words(out: &mut impl Write, words: &[String], score: u32) -> io::Result<()> {
    if words.is_empty() {
        writeln!(out, "{}", "No words yet.".bright_black())?;
    } else {
        for word in words {
            writeln!(out, "  {}", used_word_line(word))?;
        }
    }
    writeln!(out, "Score: {}", score.to_string().bright_cyan().bold())
}

/// Print the result of a batch check
pub fn print_check_report(report: &CheckReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "CHECKING AGAINST:".bright_cyan().bold(),
        report.root.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    for (input, outcome) in &report.entries {
        match outcome {
            Outcome::Ignored => println!("{} {}", "·".bright_black(), "(blank)".bright_black()),
            Outcome::Accepted { word, points, .. } => {
                println!(
                    "{} {:<16} {}",
                    "✓".green().bold(),
                    word,
                    format!("+{points}").green()
                );
            }
            Outcome::Rejected { rejection, .. } => {
                println!(
                    "{} {:<16} {}",
                    "✗".red().bold(),
                    input,
                    rejection.title.red()
                );
            }
        }
    }

    println!(
        "\n📊 Accepted {} of {} words, final score {}",
        report.accepted_count(),
        report.entries.len(),
        report.score.to_string().bright_yellow().bold()
    );
}
