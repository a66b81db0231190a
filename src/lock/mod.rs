pub mod futex;
pub mod mutex;
pub mod ticket;

pub use futex::{Futex, SysFutex};
pub use mutex::RawMutex;
pub use ticket::RawTicketLock;

/// Contract: between a successful `lock`/`try_lock` and the paired `unlock`,
/// no other caller passes `lock` or succeeds in `try_lock`. Unlocking a lock
/// that is not held, or locking recursively from the holder, violates the
/// contract and is not detected.
pub unsafe trait RawLock {
    fn new() -> Self;

    /// Non-blocking: try locking once. If succeeding, return true, or false.
    fn try_lock(&self) -> bool;

    /// Blocking: get locking or wait until getting locking
    fn lock(&self);

    /// Release lock
    fn unlock(&self);
}
