use std::sync::atomic::{AtomicBool, Ordering};

/// Guard against duplicate submission of one form instance.
///
/// ## State machine / 状态机
///
/// ```text
/// Unlocked --try_lock()--> Locked
/// Locked   --unlock()----> Unlocked
/// ```
///
/// `try_lock` is a compare-and-swap, so two submits polled concurrently on
/// the same view cannot both acquire it.
#[derive(Debug, Default)]
pub struct FormLock {
    locked: AtomicBool,
}

impl FormLock {
    /// A fresh form is unlocked only after its first render; start locked.
    pub fn locked() -> Self {
        Self {
            locked: AtomicBool::new(true),
        }
    }

    pub fn is_locked(&self) -> bool {
        self.locked.load(Ordering::SeqCst)
    }

    /// Returns `true` if this call took the lock.
    pub fn try_lock(&self) -> bool {
        self.locked
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }

    pub fn unlock(&self) {
        self.locked.store(false, Ordering::SeqCst);
    }
}
