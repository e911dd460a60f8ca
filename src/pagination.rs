//! Pagination State
//!
//! Offset cursor and load phase for the store feed, plus the retry policy
//! applied to each page request.

use serde::Deserialize;

use crate::error::LoadError;

/// Where the feed is in its load cycle
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadPhase {
    /// Trigger visible, next click loads a page
    #[default]
    Active,
    /// A page request is in flight
    Loading,
    /// Server returned an empty page; terminal
    Exhausted,
    /// Last request failed after all retries; next click retries
    Failed(String),
}

impl LoadPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadPhase::Active => "active",
            LoadPhase::Loading => "loading",
            LoadPhase::Exhausted => "exhausted",
            LoadPhase::Failed(_) => "failed",
        }
    }
}

/// Offset cursor owned by one feed
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Pagination {
    offset: u32,
    phase: LoadPhase,
}

impl Pagination {
    pub fn new(starting_count: u32) -> Self {
        Self {
            offset: starting_count,
            phase: LoadPhase::Active,
        }
    }

    /// Validate a starting count coming from JavaScript
    pub fn from_count(raw: f64) -> Result<Self, LoadError> {
        if !raw.is_finite() || raw.fract() != 0.0 {
            return Err(LoadError::InvalidOffset(format!("{} is not an integer", raw)));
        }
        if raw < 0.0 {
            return Err(LoadError::InvalidOffset(format!("{} is negative", raw)));
        }
        if raw > u32::MAX as f64 {
            return Err(LoadError::InvalidOffset(format!("{} is too large", raw)));
        }
        Ok(Self::new(raw as u32))
    }

    /// Validate a starting count read from a data attribute
    pub fn parse(raw: &str) -> Result<Self, LoadError> {
        let value: i64 = raw
            .trim()
            .parse()
            .map_err(|_| LoadError::InvalidOffset(format!("{:?} is not an integer", raw)))?;
        let count = u32::try_from(value).map_err(|_| {
            LoadError::InvalidOffset(format!("{} is out of range", value))
        })?;
        Ok(Self::new(count))
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    pub fn is_exhausted(&self) -> bool {
        self.phase == LoadPhase::Exhausted
    }

    /// Claim the next request. Returns the offset to ask for, or `None`
    /// while a request is in flight or once the feed is exhausted.
    pub fn begin(&mut self) -> Option<u32> {
        match self.phase {
            LoadPhase::Loading | LoadPhase::Exhausted => None,
            LoadPhase::Active | LoadPhase::Failed(_) => {
                self.phase = LoadPhase::Loading;
                Some(self.offset)
            }
        }
    }

    /// Record a successful page of `received` products
    pub fn complete(&mut self, received: usize) {
        let received = u32::try_from(received).unwrap_or(u32::MAX);
        self.offset = self.offset.saturating_add(received);
        self.phase = if received == 0 {
            LoadPhase::Exhausted
        } else {
            LoadPhase::Active
        };
    }

    /// Record a failed request; the offset stays where it was
    pub fn fail(&mut self, error: &LoadError) {
        if self.phase != LoadPhase::Exhausted {
            self.phase = LoadPhase::Failed(error.to_string());
        }
    }
}

/// Bounded exponential backoff for page requests
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RetryPolicy {
    /// Total attempts including the first one
    pub max_attempts: u32,
    pub initial_delay_ms: u32,
    pub max_delay_ms: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay_ms: 500,
            max_delay_ms: 4_000,
        }
    }
}

impl RetryPolicy {
    /// Single attempt, no waiting
    pub fn none() -> Self {
        Self {
            max_attempts: 1,
            initial_delay_ms: 0,
            max_delay_ms: 0,
        }
    }

    /// Delay before retry number `retry` (1-based), doubling each time
    pub fn delay_before(&self, retry: u32) -> u32 {
        let factor = 1u32.checked_shl(retry.saturating_sub(1)).unwrap_or(u32::MAX);
        self.initial_delay_ms
            .saturating_mul(factor)
            .min(self.max_delay_ms)
    }
}
