use std::{
    cell::UnsafeCell,
    ops::{Deref, DerefMut},
};

use crate::lock::{RawLock, RawMutex, RawTicketLock};

/// Safe API for mutual exclusion: binds a value to a lock so the value is
/// only reachable through a live [`OwnerRef`].
///
/// ```
/// use mxp::mutexed::Mutexed;
///
/// let apples: Mutexed<Vec<&str>> = Mutexed::new(Vec::new());
///
/// {
///     let mut owner_ref = apples.acquire();
///     owner_ref.push("gala");
/// } // <- ownership released
///
/// assert_eq!(apples.acquire().len(), 1);
/// ```
pub struct Mutexed<T, L: RawLock = RawMutex> {
    lock: L,
    data: UnsafeCell<T>,
}

pub type Mutex<T> = Mutexed<T, RawMutex>;
pub type TicketMutex<T> = Mutexed<T, RawTicketLock>;

unsafe impl<T: Send, L: RawLock + Send> Send for Mutexed<T, L> {}
unsafe impl<T: Send, L: RawLock + Sync> Sync for Mutexed<T, L> {}

/// Scoped exclusive reference to the value inside a [`Mutexed`].
///
/// Not clonable; may be moved. Dropping it, on any exit path, releases the
/// lock exactly once.
pub struct OwnerRef<'s, T, L: RawLock> {
    owner: &'s Mutexed<T, L>,
}

unsafe impl<'s, T: Send, L: RawLock + Sync> Send for OwnerRef<'s, T, L> {}
unsafe impl<'s, T: Send + Sync, L: RawLock + Sync> Sync for OwnerRef<'s, T, L> {}

impl<T, L: RawLock> Mutexed<T, L> {
    pub fn new(data: T) -> Self {
        Self {
            lock: L::new(),
            data: UnsafeCell::new(data),
        }
    }

    /// Blocks until exclusive ownership is obtained.
    pub fn acquire(&self) -> OwnerRef<'_, T, L> {
        self.lock.lock();

        OwnerRef { owner: self }
    }

    /// Non-blocking variant: `None` if the lock is held right now.
    pub fn try_acquire(&self) -> Option<OwnerRef<'_, T, L>> {
        if self.lock.try_lock() {
            Some(OwnerRef { owner: self })
        } else {
            None
        }
    }
}

impl<'s, T, L: RawLock> Deref for OwnerRef<'s, T, L> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        unsafe { &*self.owner.data.get() }
    }
}

impl<'s, T, L: RawLock> DerefMut for OwnerRef<'s, T, L> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        unsafe { &mut *self.owner.data.get() }
    }
}

impl<'s, T, L: RawLock> Drop for OwnerRef<'s, T, L> {
    fn drop(&mut self) {
        self.owner.lock.unlock();
    }
}
