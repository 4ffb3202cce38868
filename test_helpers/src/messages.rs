//! Generators for distinct error messages.
//!
//! Tests that check ordering or identity need messages that cannot collide,
//! so each call yields a value no earlier call in the process has produced.
//!
//! # Examples
//!
//! ```
//! use outcome_test_helpers::messages;
//!
//! let batch = messages::message_batch(3);
//! assert_eq!(batch.len(), 3);
//! assert_ne!(batch.first(), batch.last());
//! ```

use std::process;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT: AtomicU64 = AtomicU64::new(0);

/// Returns a message unique within this test process.
#[must_use]
pub fn unique_message() -> String {
    let serial = NEXT.fetch_add(1, Ordering::Relaxed);
    format!("error-{}-{serial:08}", process::id())
}

/// Returns `count` unique messages in generation order.
#[must_use]
pub fn message_batch(count: usize) -> Vec<String> {
    (0..count).map(|_| unique_message()).collect()
}
