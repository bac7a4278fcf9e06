//! In-memory principal store for tests
//!
//! Compiled for this crate's unit tests and, via the `test-support`
//! feature, for downstream test suites.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, RwLock};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::store::{PrincipalStore, StoreError};
use crate::types::{Principal, Role};

#[derive(Default)]
pub struct MockPrincipalStore {
    principals: RwLock<HashMap<Uuid, Principal>>,
    failure: Mutex<Option<StoreError>>,
    latency: Mutex<Option<Duration>>,
    lookups: AtomicUsize,
    completed: AtomicUsize,
}

impl MockPrincipalStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, principal: Principal) {
        self.principals
            .write()
            .expect("mock store lock poisoned")
            .insert(principal.id, principal);
    }

    /// Insert a fresh principal and return a copy of it
    pub fn add_user(&self, role: Role, active: bool) -> Principal {
        let id = Uuid::new_v4();
        let now = Utc::now();
        let principal = Principal {
            id,
            name: format!("Test User {}", &id.simple().to_string()[..8]),
            email: format!("test_{}@mural.test", id.simple()),
            role,
            active,
            created_at: now,
            updated_at: now,
        };
        self.insert(principal.clone());
        principal
    }

    pub fn remove(&self, id: Uuid) {
        self.principals
            .write()
            .expect("mock store lock poisoned")
            .remove(&id);
    }

    pub fn set_active(&self, id: Uuid, active: bool) {
        if let Some(p) = self
            .principals
            .write()
            .expect("mock store lock poisoned")
            .get_mut(&id)
        {
            p.active = active;
        }
    }

    pub fn set_role(&self, id: Uuid, role: Role) {
        if let Some(p) = self
            .principals
            .write()
            .expect("mock store lock poisoned")
            .get_mut(&id)
        {
            p.role = role;
        }
    }

    /// Make every subsequent lookup fail (or succeed again with `None`)
    pub fn fail_with(&self, failure: Option<StoreError>) {
        *self.failure.lock().expect("mock store lock poisoned") = failure;
    }

    /// Delay every subsequent lookup
    pub fn set_latency(&self, latency: Option<Duration>) {
        *self.latency.lock().expect("mock store lock poisoned") = latency;
    }

    /// Lookups started
    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    /// Lookups that ran to completion
    pub fn completed_lookups(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PrincipalStore for MockPrincipalStore {
    async fn find_principal(&self, id: Uuid) -> Result<Option<Principal>, StoreError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);

        let latency = *self.latency.lock().expect("mock store lock poisoned");
        if let Some(latency) = latency {
            tokio::time::sleep(latency).await;
        }

        let failure = self
            .failure
            .lock()
            .expect("mock store lock poisoned")
            .clone();

        let result = match failure {
            Some(err) => Err(err),
            None => Ok(self
                .principals
                .read()
                .expect("mock store lock poisoned")
                .get(&id)
                .cloned()),
        };

        self.completed.fetch_add(1, Ordering::SeqCst);
        result
    }
}
