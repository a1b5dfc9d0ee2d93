// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::{Arc, MutexGuard, PoisonError};

pub type StdMutex<T> = std::sync::Mutex<T>;

pub type SafeBool = Arc<StdMutex<bool>>;

/// Application level result type, used by binaries and the logging setup.
pub type CommonResult<T> = miette::Result<T>;

/// Liveness flag shared between a handle and the task it controls. The task checks it
/// (while holding the lock) right before every side effect, and the handle flips it
/// (while holding the same lock) to stop the task.
pub type SafeLiveness = Arc<StdMutex<Liveness>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Liveness {
    /// The task may mutate its state and notify its sink.
    Running,
    /// The handle was stopped. The task must not produce any more side effects.
    Stopped,
}

impl Liveness {
    #[must_use]
    pub fn new_safe() -> SafeLiveness { Arc::new(StdMutex::new(Liveness::Running)) }

    #[must_use]
    pub fn is_running(&self) -> bool { matches!(self, Liveness::Running) }
}

/// Locks the mutex, recovering the guard if a sink panicked while holding it. The data
/// behind these locks is a plain flag, so a poisoned lock still holds a valid value.
pub fn lock_safe<T>(mutex: &StdMutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_liveness_starts_running() {
        let safe_liveness = Liveness::new_safe();
        assert!(lock_safe(&safe_liveness).is_running());
    }

    #[test]
    fn test_lock_safe_recovers_from_poison() {
        let safe_liveness = Liveness::new_safe();
        let clone = safe_liveness.clone();
        let result = std::thread::spawn(move || {
            let _guard = clone.lock().unwrap();
            panic!("poison the lock");
        })
        .join();
        assert!(result.is_err());

        assert!(safe_liveness.is_poisoned());
        *lock_safe(&safe_liveness) = Liveness::Stopped;
        assert_eq!(*lock_safe(&safe_liveness), Liveness::Stopped);
    }
}
