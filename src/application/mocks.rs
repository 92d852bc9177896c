use crate::domain::member::{Member, MemberId, PaymentAmount};
use crate::domain::ports::{MemberStore, Notifier, PaymentVerifier};
use crate::error::{MembershipError, Result};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

// ════════════════════════════════════════════════════════════════════════════
// Recording doubles. Each is `Clone` over shared state so a test can hand one
// copy to a service and keep another to inspect calls afterwards.
// ════════════════════════════════════════════════════════════════════════════

#[derive(Default)]
struct StoreState {
    members: BTreeMap<MemberId, Member>,
    get_calls: usize,
    all_calls: usize,
    updates: Vec<Member>,
}

#[derive(Clone, Default)]
pub struct MockMemberStore {
    state: Arc<Mutex<StoreState>>,
}

impl MockMemberStore {
    pub fn with_members(members: impl IntoIterator<Item = Member>) -> Self {
        let store = Self::default();
        {
            let mut state = store.state.lock().unwrap();
            for member in members {
                state.members.insert(member.id, member);
            }
        }
        store
    }

    pub fn member(&self, id: MemberId) -> Option<Member> {
        self.state.lock().unwrap().members.get(&id).cloned()
    }

    pub fn get_calls(&self) -> usize {
        self.state.lock().unwrap().get_calls
    }

    pub fn all_calls(&self) -> usize {
        self.state.lock().unwrap().all_calls
    }

    pub fn updates(&self) -> Vec<Member> {
        self.state.lock().unwrap().updates.clone()
    }
}

#[async_trait]
impl MemberStore for MockMemberStore {
    async fn get(&self, member_id: MemberId) -> Result<Option<Member>> {
        let mut state = self.state.lock().unwrap();
        state.get_calls += 1;
        Ok(state.members.get(&member_id).cloned())
    }

    async fn all_members(&self) -> Result<Vec<Member>> {
        let mut state = self.state.lock().unwrap();
        state.all_calls += 1;
        Ok(state.members.values().cloned().collect())
    }

    async fn update(&self, member: Member) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.updates.push(member.clone());
        state.members.insert(member.id, member);
        Ok(())
    }

    async fn insert(&self, member: Member) -> Result<()> {
        self.state.lock().unwrap().members.insert(member.id, member);
        Ok(())
    }
}

#[derive(Clone)]
pub struct MockPaymentVerifier {
    approve: bool,
    calls: Arc<Mutex<Vec<(MemberId, PaymentAmount)>>>,
}

impl MockPaymentVerifier {
    pub fn approving() -> Self {
        Self {
            approve: true,
            calls: Arc::default(),
        }
    }

    pub fn declining() -> Self {
        Self {
            approve: false,
            calls: Arc::default(),
        }
    }

    pub fn calls(&self) -> Vec<(MemberId, PaymentAmount)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PaymentVerifier for MockPaymentVerifier {
    async fn verify(&self, member_id: MemberId, amount: PaymentAmount) -> Result<bool> {
        self.calls.lock().unwrap().push((member_id, amount));
        Ok(self.approve)
    }
}

#[derive(Clone, Default)]
pub struct MockNotifier {
    sent: Arc<Mutex<Vec<(String, MemberId)>>>,
    fail_send: bool,
}

impl MockNotifier {
    pub fn failing() -> Self {
        Self {
            sent: Arc::default(),
            fail_send: true,
        }
    }

    pub fn sent(&self) -> Vec<(String, MemberId)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for MockNotifier {
    async fn send(&self, message: &str, member_id: MemberId) -> Result<()> {
        if self.fail_send {
            return Err(MembershipError::InternalError(Box::new(
                std::io::Error::other("Simulated notification failure"),
            )));
        }
        self.sent
            .lock()
            .unwrap()
            .push((message.to_string(), member_id));
        Ok(())
    }
}
