//! Sequential password gates.
//!
//! An ordered list of independent challenges unlocks UI sections one at a
//! time: challenge *i+1* is only presented once challenge *i* is open. Flags
//! are monotonic; nothing in this module ever locks a gate again.

use serde::{Deserialize, Serialize};

/// One password challenge. The secret is opaque configuration, shipped in a
/// data asset rather than source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateChallenge {
    pub id: String,
    pub secret: String,
}

/// The ordered challenge list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateConfig {
    pub gates: Vec<GateChallenge>,
}

impl GateConfig {
    /// Parse a gate configuration from its JSON asset.
    ///
    /// # Errors
    ///
    /// Returns the underlying serde error when the asset is malformed.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }
}

/// Outcome of one password submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateAttempt {
    /// The answer matched; the flag for this stage is now set.
    Accepted,
    /// The answer did not match; show an error and re-prompt.
    Rejected,
    /// The stage was already open; nothing changed.
    AlreadyOpen,
    /// No such stage in the configuration.
    OutOfRange,
}

/// Monotonic per-session unlock flags, one per configured challenge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateProgress {
    flags: Vec<bool>,
}

impl GateProgress {
    #[must_use]
    pub fn new(gate_count: usize) -> Self {
        Self {
            flags: vec![false; gate_count],
        }
    }

    /// Whether the flag for `stage` is set.
    #[must_use]
    pub fn is_open(&self, stage: usize) -> bool {
        self.flags.get(stage).copied().unwrap_or(false)
    }

    /// First stage that is still locked, or `None` when everything is open.
    /// This is the only challenge the UI presents.
    #[must_use]
    pub fn next_locked(&self, config: &GateConfig) -> Option<usize> {
        (0..config.len()).find(|&stage| !self.is_open(stage))
    }

    #[must_use]
    pub fn all_open(&self, config: &GateConfig) -> bool {
        self.next_locked(config).is_none()
    }

    /// Compare `answer` to the stage's secret, trimmed and case-insensitive.
    /// A match sets the flag; flags are never cleared.
    pub fn submit(&mut self, config: &GateConfig, stage: usize, answer: &str) -> GateAttempt {
        let Some(challenge) = config.gates.get(stage) else {
            return GateAttempt::OutOfRange;
        };
        if self.flags.len() < config.len() {
            self.flags.resize(config.len(), false);
        }
        if self.flags[stage] {
            return GateAttempt::AlreadyOpen;
        }
        if answer.trim().eq_ignore_ascii_case(challenge.secret.trim()) {
            self.flags[stage] = true;
            GateAttempt::Accepted
        } else {
            GateAttempt::Rejected
        }
    }
}
