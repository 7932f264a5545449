//! Interactive review of stale records.
//!
//! The operator answers one prompt per record. Answers are read as
//! whitespace-separated tokens, so several may be typed on one line.

use crate::error::Result;
use crate::output::Formatter;
use crate::{EXIT_OK, EXIT_QUIT};
use credsweep_domain::{CredentialRecord, SecretStore};
use credsweep_janitor::{DisposalOutcome, Disposer};
use std::collections::VecDeque;
use std::fmt::Display;
use std::io::{BufRead, Write};

const PROMPT: &str = "Delete entry? (Y)es (N)o (A)ll (Q)uit (V)iew: ";

/// One operator answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewCommand {
    /// Delete the current record
    Yes,
    /// Keep the current record
    No,
    /// Delete the current record and every remaining one without asking
    All,
    /// Stop the session
    Quit,
    /// Print the current record's secret value and stop
    View,
}

impl ReviewCommand {
    /// Parse a token; only a single letter (either case) is accepted.
    pub fn parse(token: &str) -> Option<Self> {
        let mut chars = token.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return None;
        };

        match c.to_ascii_lowercase() {
            'y' => Some(ReviewCommand::Yes),
            'n' => Some(ReviewCommand::No),
            'a' => Some(ReviewCommand::All),
            'q' => Some(ReviewCommand::Quit),
            'v' => Some(ReviewCommand::View),
            _ => None,
        }
    }
}

/// Whether the operator is still being asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReviewMode {
    /// Each record gets a prompt
    #[default]
    Prompting,
    /// `All` was answered; remaining records are deleted unasked
    Escalated,
}

/// Position of a session within its record list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReviewState {
    /// Current mode
    pub mode: ReviewMode,
    /// Zero-based index of the record being reviewed
    pub current_index: usize,
    /// Number of records in the session
    pub total: usize,
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Every record was visited
    Completed,
    /// The operator quit
    Quit,
    /// The operator asked to view a secret value
    Revealed,
    /// Input ran out before the walk finished
    InputClosed,
}

/// Result of a review session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewReport {
    /// How the session ended
    pub outcome: SessionOutcome,
    /// Names deleted, in order
    pub deleted: Vec<String>,
    /// Records the operator kept
    pub skipped: usize,
    /// Deletes the store refused
    pub failed: usize,
}

impl ReviewReport {
    fn new() -> Self {
        Self {
            outcome: SessionOutcome::Completed,
            deleted: Vec::new(),
            skipped: 0,
            failed: 0,
        }
    }

    /// Process exit status for this outcome.
    pub fn exit_code(&self) -> i32 {
        match self.outcome {
            SessionOutcome::Quit => EXIT_QUIT,
            _ => EXIT_OK,
        }
    }

    /// One-line tally.
    pub fn summary(&self) -> String {
        format!(
            "Deleted {}, skipped {}, failed {}",
            self.deleted.len(),
            self.skipped,
            self.failed
        )
    }
}

/// Whitespace-separated tokens pulled lazily from a line reader.
struct Tokens<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(input: R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or `None` once input is exhausted.
    fn next_token(&mut self) -> Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }
}

/// Drives the prompt-and-act loop over stale records.
pub struct ReviewSession<'a, S, R, W> {
    store: &'a mut S,
    tokens: Tokens<R>,
    out: W,
    formatter: Formatter,
    disposer: Disposer,
    state: ReviewState,
}

impl<'a, S, R, W> ReviewSession<'a, S, R, W>
where
    S: SecretStore,
    S::Error: Display,
    R: BufRead,
    W: Write,
{
    /// Create a session reading answers from `input` and writing to `out`.
    pub fn new(store: &'a mut S, input: R, out: W, formatter: Formatter) -> Self {
        Self {
            store,
            tokens: Tokens::new(input),
            out,
            formatter,
            disposer: Disposer::new(),
            state: ReviewState::default(),
        }
    }

    /// Current state.
    pub fn state(&self) -> ReviewState {
        self.state
    }

    /// Walk `records` in order.
    pub fn run(&mut self, records: &[CredentialRecord]) -> Result<ReviewReport> {
        let mut report = ReviewReport::new();
        self.state = ReviewState {
            total: records.len(),
            ..ReviewState::default()
        };

        for (index, record) in records.iter().enumerate() {
            self.state.current_index = index;
            writeln!(self.out)?;
            writeln!(self.out, "[{}/{}]", index + 1, self.state.total)?;
            writeln!(self.out, "{}", self.formatter.record_line(record))?;

            if self.state.mode == ReviewMode::Escalated {
                self.delete(record, &mut report)?;
                continue;
            }

            match self.prompt()? {
                None => {
                    writeln!(self.out)?;
                    report.outcome = SessionOutcome::InputClosed;
                    break;
                }
                Some(ReviewCommand::Yes) => self.delete(record, &mut report)?,
                Some(ReviewCommand::No) => report.skipped += 1,
                Some(ReviewCommand::All) => {
                    tracing::info!(remaining = records.len() - index, "Deleting all remaining");
                    self.state.mode = ReviewMode::Escalated;
                    self.delete(record, &mut report)?;
                }
                Some(ReviewCommand::Quit) => {
                    writeln!(self.out, "Terminating...")?;
                    report.outcome = SessionOutcome::Quit;
                    return Ok(report);
                }
                Some(ReviewCommand::View) => {
                    self.reveal(record)?;
                    report.outcome = SessionOutcome::Revealed;
                    return Ok(report);
                }
            }
        }

        writeln!(self.out)?;
        writeln!(self.out, "{}", self.formatter.info(&report.summary()))?;
        Ok(report)
    }

    /// Prompt until a valid answer arrives or input ends.
    fn prompt(&mut self) -> Result<Option<ReviewCommand>> {
        loop {
            write!(self.out, "{PROMPT}")?;
            self.out.flush()?;

            let Some(token) = self.tokens.next_token()? else {
                return Ok(None);
            };
            if let Some(command) = ReviewCommand::parse(&token) {
                return Ok(Some(command));
            }
            tracing::debug!(token = %token, "Unrecognized answer");
        }
    }

    fn delete(&mut self, record: &CredentialRecord, report: &mut ReviewReport) -> Result<()> {
        writeln!(self.out, "Deleting")?;
        let outcome = self.disposer.dispose(&mut *self.store, record);
        let line = match &outcome {
            DisposalOutcome::Deleted { name } => self.formatter.success(&format!("Deleted {name}")),
            DisposalOutcome::Failed { name, error } => {
                self.formatter.error(&format!("Error deleting {name} : {error}"))
            }
        };
        writeln!(self.out, "{line}")?;

        if outcome.is_deleted() {
            report.deleted.push(outcome.name().to_string());
        } else {
            report.failed += 1;
        }
        Ok(())
    }

    /// Print the record's value; a failed read is reported and not fatal.
    fn reveal(&mut self, record: &CredentialRecord) -> Result<()> {
        match self.store.read_value(&record.name, record.kind) {
            Ok(value) => {
                writeln!(self.out, "Value:")?;
                writeln!(self.out, "{}", String::from_utf8_lossy(&value))?;
            }
            Err(e) => {
                tracing::warn!(name = %record.name, error = %e, "Failed to read credential");
                writeln!(
                    self.out,
                    "{}",
                    self.formatter
                        .error(&format!("Error reading {} : {e}", record.name))
                )?;
            }
        }
        Ok(())
    }
}
