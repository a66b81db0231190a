use std::sync::atomic::AtomicU32;

/// Futex-style blocking facility: park a thread until a watched word changes,
/// wake one parked thread.
///
/// Implementations must uphold the standard futex contract: a wake prepared
/// before the word is changed and issued after it is never lost to a `wait`
/// that began before the change. `wait` may return spuriously; callers
/// re-check the word in a loop.
pub trait Futex {
    /// Captured by `prepare_wake` before the word is mutated, consumed by
    /// `wake_one` after.
    type WakeToken;

    /// Block the calling thread while the value at `word` equals `expected`.
    fn wait(word: &AtomicU32, expected: u32);

    /// Capture whatever `wake_one` needs to wake waiters on `word`.
    fn prepare_wake(word: &AtomicU32) -> Self::WakeToken;

    /// Wake at most one thread blocked in `wait` on the associated word.
    fn wake_one(token: Self::WakeToken);
}

/// The platform futex, via `atomic-wait` (FUTEX_WAIT/WAKE on Linux,
/// `__ulock` on macOS, WaitOnAddress on Windows).
pub struct SysFutex;

impl Futex for SysFutex {
    // `atomic_wait::wake_one` takes a raw pointer: the waited-on word may
    // already be gone by the time the wake is issued.
    type WakeToken = *const AtomicU32;

    fn wait(word: &AtomicU32, expected: u32) {
        atomic_wait::wait(word, expected);
    }

    fn prepare_wake(word: &AtomicU32) -> Self::WakeToken {
        word
    }

    fn wake_one(token: Self::WakeToken) {
        atomic_wait::wake_one(token);
    }
}
