//! In-memory state store for pending OTPs and blocked numbers
//!
//! The store owns the two maps the policy layer operates on. It lives for
//! the lifetime of the process and is shared via `Arc`; a restart clears
//! all OTP and block state.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::entities::otp_record::{BlockEntry, OtpRecord};

/// Owned state store keyed by mobile number
///
/// The map locks are only held for individual reads and writes. Callers
/// that span a provider round-trip serialize per number through
/// [`OtpStore::number_guard`] instead, so operations on different numbers
/// never contend.
#[derive(Default)]
pub struct OtpStore {
    /// Pending OTPs keyed by mobile number
    pending: Mutex<HashMap<String, OtpRecord>>,
    /// Blocked numbers keyed by mobile number
    blocked: Mutex<HashMap<String, BlockEntry>>,
    /// Per-number guards serializing send/verify for the same number
    guards: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl OtpStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Guard serializing operations on a single number. Lock the returned
    /// mutex for the whole send/verify call, including the provider
    /// round-trip.
    pub async fn number_guard(&self, phone: &str) -> Arc<Mutex<()>> {
        let mut guards = self.guards.lock().await;
        guards
            .entry(phone.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Drop the guard entry for a number with no pending record and no
    /// block left, so the guard map stays bounded by active numbers.
    /// Callers must have released their guard handle first.
    pub async fn release_guard_if_idle(&self, phone: &str) {
        if self.pending.lock().await.contains_key(phone) {
            return;
        }
        if self.blocked.lock().await.contains_key(phone) {
            return;
        }
        let mut guards = self.guards.lock().await;
        // Anything above 1 means another task still holds the guard; new
        // handles are only cloned out under the `guards` lock we hold here.
        if let Some(guard) = guards.get(phone) {
            if Arc::strong_count(guard) == 1 {
                guards.remove(phone);
            }
        }
    }

    /// Store a pending OTP, replacing any prior record for the number
    pub async fn put_pending(&self, phone: &str, record: OtpRecord) {
        self.pending.lock().await.insert(phone.to_string(), record);
    }

    pub async fn get_pending(&self, phone: &str) -> Option<OtpRecord> {
        self.pending.lock().await.get(phone).cloned()
    }

    pub async fn remove_pending(&self, phone: &str) -> Option<OtpRecord> {
        self.pending.lock().await.remove(phone)
    }

    /// Record a failed attempt against the pending OTP; returns the updated
    /// attempt count, or `None` when no record exists for the number
    pub async fn increment_attempts(&self, phone: &str) -> Option<u32> {
        let mut pending = self.pending.lock().await;
        pending.get_mut(phone).map(|record| {
            record.attempts += 1;
            record.attempts
        })
    }

    pub async fn put_block(&self, phone: &str, entry: BlockEntry) {
        self.blocked.lock().await.insert(phone.to_string(), entry);
    }

    pub async fn get_block(&self, phone: &str) -> Option<BlockEntry> {
        self.blocked.lock().await.get(phone).cloned()
    }

    pub async fn remove_block(&self, phone: &str) {
        self.blocked.lock().await.remove(phone);
    }
}
