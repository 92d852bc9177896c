use super::member::{Member, MemberId, PaymentAmount};
use crate::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Lookup and persistence of member records.
///
/// Members are handed out and taken back by value: callers mutate their own
/// copy and pass it to [`MemberStore::update`] explicitly.
#[async_trait]
pub trait MemberStore: Send + Sync {
    async fn get(&self, member_id: MemberId) -> Result<Option<Member>>;
    async fn all_members(&self) -> Result<Vec<Member>>;
    async fn update(&self, member: Member) -> Result<()>;
    /// Creates a record. Only used when seeding a store; the services never
    /// create members.
    async fn insert(&self, member: Member) -> Result<()>;
}

/// Confirms that a member paid a given amount.
#[async_trait]
pub trait PaymentVerifier: Send + Sync {
    async fn verify(&self, member_id: MemberId, amount: PaymentAmount) -> Result<bool>;
}

/// Delivers a message associated with a member.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, message: &str, member_id: MemberId) -> Result<()>;
}

/// Source of "now" for expiry decisions.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

pub type MemberStoreBox = Box<dyn MemberStore>;
pub type PaymentVerifierBox = Box<dyn PaymentVerifier>;
pub type NotifierBox = Box<dyn Notifier>;
pub type ClockBox = Box<dyn Clock>;

pub type MemberStoreFactory = Box<dyn Fn() -> MemberStoreBox + Send + Sync>;

/// Wall-clock time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
