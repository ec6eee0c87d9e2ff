//! Record expiry
//!
//! A store request carries one of three expiry forms. Before anything reaches
//! the backend the form is resolved against the current time into an
//! [`ExpiryPlan`]: keep forever, expire after a TTL, or delete right away.
//!
//! The duration form is named "sliding" by older cache APIs, but the TTL is
//! fixed at write time and never renewed on read.

use crate::constants::MIN_TTL_MILLIS;
use chrono::{DateTime, TimeDelta, Utc};
use std::time::Duration;

/// Expiry requested by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Expiry {
    /// The record never expires
    #[default]
    Never,
    /// The record expires at an absolute point in time
    At(DateTime<Utc>),
    /// The record expires once the duration has elapsed after the write
    After(TimeDelta),
}

/// What the backend must do with a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryPlan {
    /// Store without TTL
    Persist,
    /// Store with the given TTL (never shorter than one millisecond)
    ExpireIn(Duration),
    /// The deadline has already passed: delete instead of storing
    Evict,
}

impl Expiry {
    /// Resolve the expiry against `now`
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::{TimeDelta, Utc};
    /// use rcache_domain::{Expiry, ExpiryPlan};
    ///
    /// let now = Utc::now();
    /// let past = Expiry::At(now - TimeDelta::seconds(1));
    /// assert_eq!(past.plan_at(now), ExpiryPlan::Evict);
    /// ```
    pub fn plan_at(&self, now: DateTime<Utc>) -> ExpiryPlan {
        match *self {
            Self::Never => ExpiryPlan::Persist,
            Self::At(deadline) => plan_remaining(deadline.signed_duration_since(now)),
            Self::After(ttl) => plan_remaining(ttl),
        }
    }

    /// Resolve the expiry against the system clock
    pub fn plan(&self) -> ExpiryPlan {
        self.plan_at(Utc::now())
    }
}

fn plan_remaining(remaining: TimeDelta) -> ExpiryPlan {
    if remaining <= TimeDelta::zero() {
        return ExpiryPlan::Evict;
    }
    match remaining.to_std() {
        Ok(ttl) => ExpiryPlan::ExpireIn(ttl.max(Duration::from_millis(MIN_TTL_MILLIS))),
        Err(_) => ExpiryPlan::Evict,
    }
}

impl ExpiryPlan {
    /// TTL to hand to the backend, `None` for persistent records
    pub fn ttl(&self) -> Option<Duration> {
        match self {
            Self::ExpireIn(ttl) => Some(*ttl),
            Self::Persist | Self::Evict => None,
        }
    }
}

impl From<DateTime<Utc>> for Expiry {
    fn from(deadline: DateTime<Utc>) -> Self {
        Self::At(deadline)
    }
}

impl From<TimeDelta> for Expiry {
    fn from(ttl: TimeDelta) -> Self {
        Self::After(ttl)
    }
}

impl From<Duration> for Expiry {
    fn from(ttl: Duration) -> Self {
        Self::After(TimeDelta::from_std(ttl).unwrap_or(TimeDelta::MAX))
    }
}

/// Whole milliseconds of a TTL, never below the backend minimum
pub fn ttl_millis(ttl: Duration) -> u64 {
    u64::try_from(ttl.as_millis())
        .unwrap_or(u64::MAX)
        .max(MIN_TTL_MILLIS)
}
