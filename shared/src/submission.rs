//! State of one screen's upload: the chosen file, whether a request is in
//! flight, and how the last request ended.
//!
//! ```text
//! Idle --select_file--> Idle(file) --begin--> Pending --settle--> Settled
//!   ^                                                               |
//!   +------------------------- select_file / begin -----------------+
//! ```

use crate::error::ApiError;
use crate::models::Tier;

/// How the last request ended. Holding both in one slot keeps them exclusive.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome<T> {
    Success(T),
    Failure(String),
}

/// Issued by [`UploadState::begin`]; carries the file to send and identifies
/// the request its settlement belongs to.
#[derive(Clone, Debug, PartialEq)]
pub struct Ticket<F> {
    pub generation: u64,
    pub file: F,
}

#[derive(Clone, Debug)]
pub struct UploadState<F, T> {
    file: Option<F>,
    pending: bool,
    outcome: Option<Outcome<T>>,
    generation: u64,
    successes: u64,
    detached: bool,
}

impl<F, T> Default for UploadState<F, T> {
    fn default() -> Self {
        Self {
            file: None,
            pending: false,
            outcome: None,
            generation: 0,
            successes: 0,
            detached: false,
        }
    }
}

impl<F: Clone, T> UploadState<F, T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the file. Never submits and leaves the last outcome on screen.
    pub fn select_file(&mut self, file: F) {
        self.file = Some(file);
    }

    pub fn can_submit(&self) -> bool {
        self.file.is_some() && !self.pending
    }

    /// Starts a request if one is allowed. `None` means nothing may be dispatched.
    pub fn begin(&mut self) -> Option<Ticket<F>> {
        if !self.can_submit() {
            return None;
        }
        let file = self.file.clone()?;
        self.outcome = None;
        self.pending = true;
        self.generation += 1;
        Some(Ticket {
            generation: self.generation,
            file,
        })
    }

    /// Records the result of the request identified by `generation`.
    /// Returns false when the settlement is stale and was dropped.
    pub fn settle(&mut self, generation: u64, result: Result<T, ApiError>) -> bool {
        if self.detached {
            log::debug!("Discarding response for request {} after unmount", generation);
            return false;
        }
        if !self.pending || generation != self.generation {
            log::debug!(
                "Dropping settlement for request {} (current {}, pending {})",
                generation,
                self.generation,
                self.pending
            );
            return false;
        }
        self.pending = false;
        self.outcome = Some(match result {
            Ok(value) => {
                self.successes += 1;
                Outcome::Success(value)
            }
            Err(err) => Outcome::Failure(err.message()),
        });
        true
    }
}

impl<F, T> UploadState<F, T> {
    pub fn file(&self) -> Option<&F> {
        self.file.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn outcome(&self) -> Option<&Outcome<T>> {
        self.outcome.as_ref()
    }

    pub fn last_result(&self) -> Option<&T> {
        match &self.outcome {
            Some(Outcome::Success(value)) => Some(value),
            _ => None,
        }
    }

    pub fn last_error(&self) -> Option<&str> {
        match &self.outcome {
            Some(Outcome::Failure(message)) => Some(message),
            _ => None,
        }
    }

    /// Number of successful settlements so far.
    pub fn successes(&self) -> u64 {
        self.successes
    }

    /// Marks the owning screen as gone. Every later settlement is dropped.
    pub fn detach(&mut self) {
        self.detached = true;
    }
}

/// DIY tab selection. A choice only holds for the result it was made on;
/// every new successful result starts over at [`Tier::Easy`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TierSelection {
    tier: Tier,
    revision: u64,
}

impl TierSelection {
    pub fn select(&mut self, tier: Tier, revision: u64) {
        self.tier = tier;
        self.revision = revision;
    }

    pub fn current(&self, revision: u64) -> Tier {
        if self.revision == revision {
            self.tier
        } else {
            Tier::Easy
        }
    }
}
