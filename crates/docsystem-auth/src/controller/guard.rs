//! In-flight request guard.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use docsystem_core::error::AppError;
use docsystem_core::result::AppResult;

/// Marks one request as in flight; the flag is cleared on drop, so every
/// exit path of an operation resets it exactly once.
#[derive(Debug)]
pub struct LoadingGuard {
    flag: Arc<AtomicBool>,
}

impl LoadingGuard {
    /// Claim the flag, or fail with `Conflict` if a request is already running.
    pub fn acquire(flag: &Arc<AtomicBool>) -> AppResult<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| AppError::conflict("Запрос уже выполняется, дождитесь ответа"))?;
        Ok(Self {
            flag: Arc::clone(flag),
        })
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
