use crate::domain::member::MemberId;
use crate::domain::ports::{ClockBox, MemberStoreBox, SystemClock};
use crate::error::{MembershipError, Result};

/// Answers whether a member is currently flagged active.
pub struct MembershipStatusChecker {
    member_store: MemberStoreBox,
    clock: ClockBox,
}

impl MembershipStatusChecker {
    pub fn new(member_store: MemberStoreBox) -> Self {
        Self {
            member_store,
            clock: Box::new(SystemClock),
        }
    }

    pub fn with_clock(mut self, clock: ClockBox) -> Self {
        self.clock = clock;
        self
    }

    /// Returns the stored active flag.
    ///
    /// This is the flag as last written by the deactivation sweep; a member
    /// whose subscription lapsed since then still reports `true`.
    pub async fn is_active(&self, member_id: MemberId) -> Result<bool> {
        let member = self
            .member_store
            .get(member_id)
            .await?
            .ok_or(MembershipError::MemberNotFound(member_id))?;
        Ok(member.is_active)
    }

    /// Compares the subscription end against the clock instead of the flag.
    pub async fn is_subscription_current(&self, member_id: MemberId) -> Result<bool> {
        let member = self
            .member_store
            .get(member_id)
            .await?
            .ok_or(MembershipError::MemberNotFound(member_id))?;
        Ok(!member.is_expired_at(self.clock.now()))
    }
}
