use std::{
    sync::atomic::{AtomicUsize, Ordering},
    sync::Barrier,
    thread,
};

use rand::Rng;

use mxp::lock::RawLock;
use mxp::mutexed::Mutexed;

pub fn test_counter_concurrent_lock<L: Sync + RawLock>(num_threads: usize, num_iters: u64) {
    let counter: Mutexed<u64, L> = Mutexed::new(0);

    thread::scope(|scope| {
        for _ in 0..num_threads {
            scope.spawn(|| {
                for _ in 0..num_iters {
                    let mut owner_ref = counter.acquire();
                    *owner_ref += 1;
                }
            });
        }
    });

    assert_eq!(*counter.acquire(), num_threads as u64 * num_iters);
}

// Same as above, but holding the lock across a reschedule now and then so
// the blocking paths actually run.
pub fn test_jittered_counter_concurrent_lock<L: Sync + RawLock>(num_threads: usize, num_iters: u64) {
    let counter: Mutexed<u64, L> = Mutexed::new(0);

    thread::scope(|scope| {
        for _ in 0..num_threads {
            scope.spawn(|| {
                let mut rng = rand::thread_rng();

                for _ in 0..num_iters {
                    let mut owner_ref = counter.acquire();
                    let value = *owner_ref;

                    if rng.gen_range(0..4) == 0 {
                        thread::yield_now();
                    }

                    *owner_ref = value + 1;
                }
            });
        }
    });

    assert_eq!(*counter.acquire(), num_threads as u64 * num_iters);
}

// Termination is the assertion: a lost wakeup hangs the test.
pub fn test_ping_pong_lock<L: Sync + RawLock>(num_iters: u64) {
    let lock = L::new();

    thread::scope(|scope| {
        for _ in 0..2 {
            scope.spawn(|| {
                for _ in 0..num_iters {
                    lock.lock();
                    lock.unlock();
                }
            });
        }
    });
}

pub fn test_try_lock_race<L: Sync + RawLock>(num_threads: usize) {
    let lock = L::new();
    let start = Barrier::new(num_threads);
    let tried = Barrier::new(num_threads);
    let acquired = AtomicUsize::new(0);

    thread::scope(|scope| {
        for _ in 0..num_threads {
            scope.spawn(|| {
                start.wait();

                let holding = lock.try_lock();
                if holding {
                    acquired.fetch_add(1, Ordering::Relaxed);
                }

                // Everybody has tried before the winner lets go.
                tried.wait();

                if holding {
                    lock.unlock();
                }
            });
        }
    });

    assert_eq!(acquired.load(Ordering::Relaxed), 1);

    assert!(lock.try_lock());
    lock.unlock();
}
