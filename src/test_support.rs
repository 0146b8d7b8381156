//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::service::{HealthStatus, ServiceError, SummaryService};

/// A service that answers every call with the same canned reply and
/// records the texts it was sent.
pub struct FakeService {
    reply: Result<Option<String>, ServiceError>,
    calls: Mutex<Vec<String>>,
}

impl FakeService {
    pub fn replying(reply: Result<Option<String>, ServiceError>) -> Self {
        Self {
            reply,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl SummaryService for FakeService {
    fn endpoint(&self) -> &str {
        "http://fake.test"
    }

    async fn summarize(&self, text: &str) -> Result<Option<String>, ServiceError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(text.to_string());
        }
        self.reply.clone()
    }

    async fn health(&self) -> Result<HealthStatus, ServiceError> {
        Ok(HealthStatus {
            status: "OK".to_string(),
            message: None,
        })
    }
}

/// Creates a test App whose service never gets called.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(Arc::new(FakeService::replying(Ok(None))))
}
