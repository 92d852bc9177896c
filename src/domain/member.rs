use crate::error::{MembershipError, Result};
use chrono::{DateTime, TimeDelta, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a member record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(pub u64);

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for MemberId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Amount offered for a renewal.
///
/// No sign or scale rules are enforced here: whether an amount is acceptable
/// is the payment verifier's decision.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentAmount(Decimal);

impl PaymentAmount {
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl From<Decimal> for PaymentAmount {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl fmt::Display for PaymentAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A strictly positive number of days to extend a subscription by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenewalPeriod(TimeDelta);

impl RenewalPeriod {
    pub fn new(days: i64) -> Result<Self> {
        match TimeDelta::try_days(days) {
            Some(delta) if days > 0 => Ok(Self(delta)),
            _ => Err(MembershipError::InvalidRenewalPeriod(days)),
        }
    }

    pub fn days(&self) -> i64 {
        self.0.num_days()
    }

    pub fn as_delta(&self) -> TimeDelta {
        self.0
    }
}

impl TryFrom<i64> for RenewalPeriod {
    type Error = MembershipError;

    fn try_from(days: i64) -> Result<Self> {
        Self::new(days)
    }
}

/// A subscriber record.
///
/// `is_active` is only cleared by the deactivation sweep; it is not derived
/// from `subscription_end` on read. A lapsed member may therefore still be
/// flagged active until the next sweep. Use [`Member::is_expired_at`] when the
/// real-time answer matters.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Member {
    /// The unique identifier for the member.
    pub id: MemberId,
    /// Display label. Not unique.
    pub name: String,
    /// Authoritative "currently active" flag.
    #[serde(rename = "active")]
    pub is_active: bool,
    /// When the current paid period lapses.
    pub subscription_end: DateTime<Utc>,
}

impl Member {
    pub fn new(id: MemberId, name: impl Into<String>, subscription_end: DateTime<Utc>) -> Self {
        Self {
            id,
            name: name.into(),
            is_active: true,
            subscription_end,
        }
    }

    /// Pushes `subscription_end` forward by `period`, starting from the
    /// existing end so unused paid time is kept.
    pub fn extend_subscription(&mut self, period: RenewalPeriod) -> Result<()> {
        let new_end = self
            .subscription_end
            .checked_add_signed(period.as_delta())
            .ok_or_else(|| {
                MembershipError::ValidationError(format!(
                    "subscription end out of range for member {}",
                    self.id
                ))
            })?;
        self.subscription_end = new_end;
        Ok(())
    }

    /// Clears the active flag.
    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    /// True when the paid period ended strictly before `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.subscription_end < now
    }

    /// True when the sweep should act on this member: still flagged active but
    /// already past its end. Already-inactive members are skipped so repeated
    /// sweeps stay silent.
    pub fn is_due_for_deactivation(&self, now: DateTime<Utc>) -> bool {
        self.is_active && self.is_expired_at(now)
    }
}
