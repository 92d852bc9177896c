//! Application layer containing the membership lifecycle orchestration.
//!
//! `MembershipStatusChecker` answers "is this member active?", and
//! `RenewalService` runs renewals and the expiry sweep. Both receive their
//! collaborators as boxed ports at construction time and await each call in
//! turn, so every decision for one member completes before the next begins.

pub mod renewal;
pub mod status;

#[cfg(test)]
pub(crate) mod mocks;
