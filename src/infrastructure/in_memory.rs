use crate::domain::member::{Member, MemberId, PaymentAmount};
use crate::domain::ports::{Clock, MemberStore, Notifier, PaymentVerifier};
use crate::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

/// A thread-safe in-memory store for members.
///
/// Uses `Arc<RwLock<HashMap<MemberId, Member>>>` to allow shared concurrent access.
/// Cloning shares the underlying map, so one clone can back a service while
/// another reads the final state.
#[derive(Default, Clone)]
pub struct InMemoryMemberStore {
    members: Arc<RwLock<HashMap<MemberId, Member>>>,
}

impl InMemoryMemberStore {
    /// Creates a new, empty in-memory member store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MemberStore for InMemoryMemberStore {
    async fn get(&self, member_id: MemberId) -> Result<Option<Member>> {
        let members = self.members.read().await;
        Ok(members.get(&member_id).cloned())
    }

    /// Returns members ordered by id.
    async fn all_members(&self) -> Result<Vec<Member>> {
        let members = self.members.read().await;
        let mut all: Vec<Member> = members.values().cloned().collect();
        all.sort_by_key(|m| m.id);
        Ok(all)
    }

    async fn update(&self, member: Member) -> Result<()> {
        let mut members = self.members.write().await;
        members.insert(member.id, member);
        Ok(())
    }

    async fn insert(&self, member: Member) -> Result<()> {
        let mut members = self.members.write().await;
        members.insert(member.id, member);
        Ok(())
    }
}

/// Accepts any payment at or above a fixed minimum.
#[derive(Debug, Clone, Copy)]
pub struct ThresholdPaymentVerifier {
    minimum: Decimal,
}

impl ThresholdPaymentVerifier {
    pub fn new(minimum: Decimal) -> Self {
        Self { minimum }
    }
}

#[async_trait]
impl PaymentVerifier for ThresholdPaymentVerifier {
    async fn verify(&self, _member_id: MemberId, amount: PaymentAmount) -> Result<bool> {
        Ok(amount.value() >= self.minimum)
    }
}

/// Emits each notification as a `tracing` event.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn send(&self, message: &str, member_id: MemberId) -> Result<()> {
        info!(member = %member_id, "Notification: {}", message);
        Ok(())
    }
}

/// A clock pinned to one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self(now)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
