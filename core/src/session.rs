//! Per-page session state.
//!
//! One [`Session`] is owned by the root component. It tracks the selected
//! file, the run status and the last result, and decides which async
//! completions still apply.
//!
//! ```text
//!            select(Some)             begin_run              finish_run
//!   Idle ──────────────────▶ FileSelected ──────▶ Running ──────────────▶ Succeeded / Failed
//!    ▲                            ▲                                          │
//!    └──── select(None) ──────────┴─────────── select / begin_run ◀──────────┘
//! ```

use std::fmt;

use crate::error::RunError;
use crate::models::{FileHandle, PreviewTable, ResultBlob, RunOutput, RunStatus};

/// Identifies the run a completion belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunTicket {
    generation: u64,
}

/// Handed out by [`Session::begin_run`].
#[derive(Debug, Clone)]
pub struct RunStart<F> {
    pub ticket: RunTicket,
    /// File to submit.
    pub file: F,
    /// Download href of the result this run replaces. Revoke it.
    pub revoked: Option<String>,
}

/// Whether a completion was applied to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    /// A newer selection or run superseded this one; nothing changed.
    Stale,
}

/// A successful result shown to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletedRun {
    pub blob: ResultBlob,
    pub table: PreviewTable,
    pub download_href: Option<String>,
}

/// Selection, run status and last result of one page.
#[derive(Debug, Clone)]
pub struct Session<F> {
    file: Option<F>,
    status: RunStatus,
    result: Option<CompletedRun>,
    generation: u64,
}

impl<F> Default for Session<F> {
    fn default() -> Self {
        Self {
            file: None,
            status: RunStatus::Idle,
            result: None,
            generation: 0,
        }
    }
}

impl<F: FileHandle + Clone> Session<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> RunStatus {
        self.status
    }

    pub fn status_message(&self) -> &'static str {
        self.status.message()
    }

    pub fn file(&self) -> Option<&F> {
        self.file.as_ref()
    }

    pub fn result(&self) -> Option<&CompletedRun> {
        self.result.as_ref()
    }

    pub fn preview(&self) -> Option<&PreviewTable> {
        self.result.as_ref().map(|result| &result.table)
    }

    pub fn download_href(&self) -> Option<&str> {
        self.result
            .as_ref()
            .and_then(|result| result.download_href.as_deref())
    }

    /// Run is possible with a file selected and nothing in flight.
    pub fn can_run(&self) -> bool {
        self.file.is_some() && !self.status.is_running()
    }

    /// Replace the selection and drop everything derived from the old one.
    ///
    /// Returns the previous download href so the caller can revoke it.
    pub fn select(&mut self, file: Option<F>) -> Option<String> {
        self.generation += 1;

        match &file {
            Some(file) => log::info!("File selected: {}", file.file_name()),
            None => log::debug!("Selection cleared"),
        }

        self.status = if file.is_some() {
            RunStatus::FileSelected
        } else {
            RunStatus::Idle
        };
        self.file = file;
        self.take_result()
    }

    /// Start a run with the current file.
    ///
    /// Returns `None` without touching state when [`Self::can_run`] is false.
    pub fn begin_run(&mut self) -> Option<RunStart<F>> {
        if !self.can_run() {
            return None;
        }
        let file = self.file.clone()?;

        self.generation += 1;
        self.status = RunStatus::Running;
        log::info!("Run #{} started for {}", self.generation, file.file_name());

        Some(RunStart {
            ticket: RunTicket {
                generation: self.generation,
            },
            file,
            revoked: self.take_result(),
        })
    }

    /// Apply the outcome of the run identified by `ticket`.
    pub fn finish_run(
        &mut self,
        ticket: RunTicket,
        outcome: Result<RunOutput, RunError>,
    ) -> Completion {
        if !self.is_current(ticket) {
            log::warn!(
                "Discarding result of run #{} (current is #{})",
                ticket.generation,
                self.generation
            );
            return Completion::Stale;
        }

        match outcome {
            Ok(output) => {
                log::info!(
                    "Run #{} succeeded: {} bytes, {} data rows",
                    ticket.generation,
                    output.blob.len(),
                    output.table.rows.len()
                );
                self.result = Some(CompletedRun {
                    blob: output.blob,
                    table: output.table,
                    download_href: None,
                });
                self.status = RunStatus::Succeeded;
            }
            Err(e) => {
                log::error!("Run #{} failed: {}", ticket.generation, e);
                self.result = None;
                self.status = RunStatus::Failed;
            }
        }

        Completion::Applied
    }

    /// Mark the run identified by `ticket` as failed after it completed.
    ///
    /// Used when the result cannot be offered, e.g. the download URL could
    /// not be created. Drops the result and returns its href, if any, for
    /// revocation. A stale ticket changes nothing.
    pub fn fail_run(&mut self, ticket: RunTicket, reason: impl fmt::Display) -> Option<String> {
        if !self.is_current(ticket) {
            log::warn!(
                "Ignoring failure of run #{} (current is #{}): {}",
                ticket.generation,
                self.generation,
                reason
            );
            return None;
        }

        log::error!("Run #{} failed: {}", ticket.generation, reason);
        self.status = RunStatus::Failed;
        self.take_result()
    }

    /// Attach the download href for the result of `ticket`.
    ///
    /// Hands the href back when it cannot be attached (stale ticket or no
    /// result), so the caller can revoke it. A previously attached href is
    /// handed back as well.
    pub fn attach_download(&mut self, ticket: RunTicket, href: String) -> Option<String> {
        if !self.is_current(ticket) {
            return Some(href);
        }
        match self.result.as_mut() {
            Some(result) => result.download_href.replace(href),
            None => Some(href),
        }
    }

    fn is_current(&self, ticket: RunTicket) -> bool {
        ticket.generation == self.generation
    }

    fn take_result(&mut self) -> Option<String> {
        self.result
            .take()
            .and_then(|result| result.download_href)
    }
}
