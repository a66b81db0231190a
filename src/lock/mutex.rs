use std::{
    marker::PhantomData,
    sync::atomic::{AtomicU32, Ordering},
};

use super::futex::{Futex, SysFutex};
use super::RawLock;

const UNLOCKED: u32 = 0;
const LOCKED: u32 = 1;
const CONTENDED: u32 = 2;

/// Three-state blocking mutex.
///
/// The state word is `UNLOCKED`, `LOCKED` (held, nobody waiting observed) or
/// `CONTENDED` (held, somebody waiting or about to). The futex is touched
/// only once `CONTENDED` is ever reached, so uncontended `lock`/`unlock`
/// pairs stay in user space.
///
/// A waiter publishes `CONTENDED` with an atomic swap before it blocks, and
/// `unlock` decides whether to wake from the value the same word held before
/// its decrement. A decrement that sees `CONTENDED` is therefore ordered
/// after the waiter's publication and always issues its wake, so the wake
/// cannot be lost to a waiter that registered earlier.
pub struct RawMutex<F: Futex = SysFutex> {
    state: AtomicU32,
    _futex: PhantomData<F>,
}

unsafe impl<F: Futex> RawLock for RawMutex<F> {
    fn new() -> Self {
        Self {
            state: AtomicU32::new(UNLOCKED),
            _futex: PhantomData,
        }
    }

    fn try_lock(&self) -> bool {
        self.state
            .compare_exchange(UNLOCKED, LOCKED, Ordering::Acquire, Ordering::Relaxed)
            .is_ok()
    }

    fn lock(&self) {
        if self.state.swap(LOCKED, Ordering::Acquire) == UNLOCKED {
            return;
        }

        // Contended: overclaim to CONTENDED so the holder's unlock knows to
        // wake us, then sleep until the word moves off CONTENDED.
        while self.state.swap(CONTENDED, Ordering::Acquire) != UNLOCKED {
            F::wait(&self.state, CONTENDED);
        }
    }

    fn unlock(&self) {
        // Previous value LOCKED: nobody waits, the word is now UNLOCKED and
        // no futex call is made.
        if self.state.fetch_sub(1, Ordering::Release) == CONTENDED {
            let token = F::prepare_wake(&self.state);
            self.state.store(UNLOCKED, Ordering::Release);
            F::wake_one(token);
        }
    }
}
