use crate::domain::member::{MemberId, PaymentAmount, RenewalPeriod};
use crate::domain::ports::{ClockBox, MemberStoreBox, NotifierBox, PaymentVerifierBox, SystemClock};
use crate::error::{MembershipError, Result};
use tracing::{debug, info, warn};

/// Sent once to a member after a successful renewal.
pub const RENEWAL_CONFIRMATION_MESSAGE: &str = "Your subscription has been renewed successfully.";

/// Sent once to a member when the sweep deactivates them.
pub const EXPIRY_NOTICE_MESSAGE: &str = "Your subscription has expired.";

/// Outcome of one deactivation sweep.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SweepReport {
    /// Number of members examined.
    pub scanned: usize,
    /// Members deactivated by this sweep, in the order they were processed.
    pub deactivated: Vec<MemberId>,
}

/// Runs subscription renewals and the expiry sweep.
///
/// Business negatives (a non-positive period, a declined payment) come back
/// as `Ok(false)`. An unknown member id on renewal is a caller error and comes
/// back as [`MembershipError::ValidationError`]. Collaborator failures are
/// propagated unchanged and never retried.
pub struct RenewalService {
    member_store: MemberStoreBox,
    payment_verifier: PaymentVerifierBox,
    notifier: NotifierBox,
    clock: ClockBox,
}

impl RenewalService {
    /// Creates a new `RenewalService` reading time from the system clock.
    ///
    /// # Arguments
    ///
    /// * `member_store` - Where members are read from and written back to.
    /// * `payment_verifier` - Confirms renewal payments.
    /// * `notifier` - Receives renewal and expiry messages.
    pub fn new(
        member_store: MemberStoreBox,
        payment_verifier: PaymentVerifierBox,
        notifier: NotifierBox,
    ) -> Self {
        Self {
            member_store,
            payment_verifier,
            notifier,
            clock: Box::new(SystemClock),
        }
    }

    pub fn with_clock(mut self, clock: ClockBox) -> Self {
        self.clock = clock;
        self
    }

    /// Extends a member's subscription by `days` once the payment verifies.
    ///
    /// The new end is counted from the member's existing `subscription_end`,
    /// not from now, so renewing early keeps the remaining term. A positive
    /// `days` too large to apply is an error, reported before the payment
    /// verifier is called.
    pub async fn renew_subscription(
        &self,
        member_id: MemberId,
        amount: PaymentAmount,
        days: i64,
    ) -> Result<bool> {
        if days <= 0 {
            debug!(member = %member_id, days, "Rejecting renewal with non-positive period");
            return Ok(false);
        }

        let mut member = self
            .member_store
            .get(member_id)
            .await?
            .ok_or_else(|| MembershipError::member_not_found(member_id))?;

        // The extension is computed on the fetched copy before any payment is
        // verified; nothing is persisted if the payment is then declined.
        let period = RenewalPeriod::new(days).inspect_err(|e| {
            warn!(member = %member_id, "Renewal period not representable: {}", e);
        })?;
        member.extend_subscription(period).inspect_err(|e| {
            warn!(member = %member_id, "Renewal rejected: {}", e);
        })?;

        if !self.payment_verifier.verify(member_id, amount).await? {
            info!(member = %member_id, %amount, "Payment not verified, renewal declined");
            return Ok(false);
        }

        let new_end = member.subscription_end;
        self.member_store.update(member).await?;

        // The update stays persisted even if the notification fails.
        self.notifier
            .send(RENEWAL_CONFIRMATION_MESSAGE, member_id)
            .await?;

        info!(
            member = %member_id,
            days = period.days(),
            subscription_end = %new_end,
            "Subscription renewed"
        );
        Ok(true)
    }

    /// Deactivates every active member whose subscription ended before now.
    ///
    /// Members are handled one at a time: decide, update, notify. Members that
    /// are already inactive are skipped, so a repeated sweep sends nothing new.
    pub async fn deactivate_expired_members(&self) -> Result<SweepReport> {
        let now = self.clock.now();
        let members = self.member_store.all_members().await?;
        let mut report = SweepReport {
            scanned: members.len(),
            deactivated: Vec::new(),
        };

        for mut member in members {
            if !member.is_due_for_deactivation(now) {
                continue;
            }

            let member_id = member.id;
            member.deactivate();
            self.member_store.update(member).await?;
            self.notifier.send(EXPIRY_NOTICE_MESSAGE, member_id).await?;
            debug!(member = %member_id, "Member deactivated");
            report.deactivated.push(member_id);
        }

        info!(
            scanned = report.scanned,
            deactivated = report.deactivated.len(),
            "Deactivation sweep finished"
        );
        Ok(report)
    }
}
