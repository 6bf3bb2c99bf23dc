//! Console presenter

use super::formatters::{create_progress_bar, format_alphabet, format_attempt};
use crate::core::{RemainingAlphabet, Word};
use crate::game::{AbortReason, Attempt, GameError, Presenter, RoundOutcome, SessionStats};
use colored::Colorize;
use std::io::{self, Write};

/// Presenter that writes colored text to any writer
pub struct ConsolePresenter<W: Write> {
    out: W,
}

impl<W: Write> ConsolePresenter<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the presenter and return the writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl ConsolePresenter<io::Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Presenter for ConsolePresenter<W> {
    fn render_attempts(
        &mut self,
        history: &[Attempt],
        remaining: &RemainingAlphabet,
    ) -> io::Result<()> {
        writeln!(self.out)?;
        for (i, attempt) in history.iter().enumerate() {
            writeln!(
                self.out,
                "  {} {}",
                format!("{}.", i + 1).bright_black(),
                format_attempt(attempt)
            )?;
        }

        // A solved board needs no hints
        if !history.last().is_some_and(|a| a.feedback.is_solved()) {
            writeln!(
                self.out,
                "\n  {} {}",
                "Letters left:".bright_black(),
                format_alphabet(remaining)
            )?;
        }
        self.out.flush()
    }

    fn render_outcome(&mut self, outcome: RoundOutcome, target: &Word) -> io::Result<()> {
        writeln!(self.out)?;
        match outcome {
            RoundOutcome::Win { attempts } => {
                let praise = match attempts {
                    1 => "🏆 Hole in one!",
                    2 => "⭐ Magnificent!",
                    3 => "💫 Splendid!",
                    4 => "✨ Great job!",
                    5 => "👍 Nice work!",
                    _ => "😅 Phew!",
                };
                writeln!(self.out, "{}", praise.bright_yellow().bold())?;
                writeln!(
                    self.out,
                    "Congratulations! The word was {} ({} {}).",
                    target.text().bright_green().bold(),
                    attempts,
                    if attempts == 1 { "guess" } else { "guesses" }
                )?;
            }
            RoundOutcome::Loss => {
                writeln!(
                    self.out,
                    "Better luck next time, the word was {}!",
                    target.text().bright_cyan().bold()
                )?;
            }
        }
        self.out.flush()
    }

    fn render_rejection(&mut self, error: &GameError) -> io::Result<()> {
        writeln!(self.out, "{} {error}.", "❌".red())?;
        self.out.flush()
    }

    fn render_aborted(&mut self, reason: AbortReason) -> io::Result<()> {
        let message = match reason {
            AbortReason::InvalidLengthSelection => "Two strikes and you're out. Round over.",
            AbortReason::InvalidGuessLength => "You can't follow directions! Round over.",
            AbortReason::NoUnusedWordAvailable => {
                "Out of fresh words of that length. Enter R at the next prompt to reset the dictionary."
            }
            AbortReason::InputClosed => "Input closed. Round abandoned.",
        };
        writeln!(self.out, "{}", message.red().bold())?;
        self.out.flush()
    }

    fn render_summary(&mut self, stats: &SessionStats) -> io::Result<()> {
        writeln!(self.out, "\n{}", "═".repeat(50).cyan())?;
        writeln!(self.out, " {} ", "SESSION SUMMARY".bright_cyan().bold())?;
        writeln!(self.out, "{}", "═".repeat(50).cyan())?;

        writeln!(self.out, "   Rounds won:     {}", stats.rounds_won.to_string().green())?;
        writeln!(self.out, "   Rounds lost:    {}", stats.rounds_lost.to_string().red())?;
        writeln!(self.out, "   Rounds aborted: {}", stats.rounds_aborted)?;
        writeln!(self.out, "   Win rate:       {:.0}%", stats.win_rate())?;

        if stats.rounds_won > 0 {
            writeln!(self.out, "\n📈 {}", "Guess distribution:".bright_cyan().bold())?;
            for (attempts, &count) in stats.guess_distribution.iter().enumerate().skip(1) {
                let bar = create_progress_bar(count, stats.rounds_won, 30);
                writeln!(self.out, "   {attempts:>2}: {} {count}", bar.green())?;
            }
        }

        writeln!(self.out, "\n👋 Thanks for playing!")?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback;

    fn output<F: FnOnce(&mut ConsolePresenter<Vec<u8>>) -> io::Result<()>>(f: F) -> String {
        colored::control::set_override(false);
        let mut presenter = ConsolePresenter::new(Vec::new());
        f(&mut presenter).unwrap();
        String::from_utf8(presenter.into_inner()).unwrap()
    }

    fn attempt(guess: &str, target: &str) -> Attempt {
        let guess = Word::new(guess).unwrap();
        let feedback = Feedback::evaluate(&guess, &Word::new(target).unwrap()).unwrap();
        Attempt { guess, feedback }
    }

    #[test]
    fn attempts_show_history_and_alphabet() {
        let history = vec![attempt("crane", "allow"), attempt("lolly", "allow")];
        let mut remaining = RemainingAlphabet::full();
        for a in &history {
            remaining.apply(&a.guess, &a.feedback);
        }

        let text = output(|p| p.render_attempts(&history, &remaining));
        assert!(text.contains("1. C R A N E"));
        assert!(text.contains("2. L O L L Y   🟨🟨🟩⬜⬜"));
        assert!(text.contains("Letters left: A B D F"));
        assert!(text.contains("V W X Z\n"));
    }

    #[test]
    fn solved_board_hides_alphabet() {
        let history = vec![attempt("allow", "allow")];
        let text = output(|p| p.render_attempts(&history, &RemainingAlphabet::full()));
        assert!(!text.contains("Letters left"));
    }

    #[test]
    fn outcome_names_target() {
        let target = Word::new("allow").unwrap();

        let text = output(|p| p.render_outcome(RoundOutcome::Win { attempts: 3 }, &target));
        assert!(text.contains("Congratulations! The word was ALLOW (3 guesses)."));

        let text = output(|p| p.render_outcome(RoundOutcome::Loss, &target));
        assert!(text.contains("Better luck next time, the word was ALLOW!"));
    }

    #[test]
    fn rejection_and_abort_messages() {
        let text = output(|p| p.render_rejection(&GameError::UnknownWord("XYZZY".into())));
        assert!(text.contains("'XYZZY' isn't in our dictionary."));

        let text = output(|p| p.render_aborted(AbortReason::InvalidLengthSelection));
        assert!(text.contains("Two strikes and you're out."));
    }

    #[test]
    fn summary_shows_distribution() {
        let stats = SessionStats {
            rounds_won: 2,
            rounds_lost: 1,
            rounds_aborted: 0,
            guess_distribution: vec![0, 0, 0, 2],
        };
        let text = output(|p| p.render_summary(&stats));
        assert!(text.contains("Rounds won:     2"));
        assert!(text.contains("Win rate:       67%"));
        assert!(text.contains(" 3: ██████████████████████████████ 2"));
    }
}
