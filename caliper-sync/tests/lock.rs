use std::sync::Arc;
use std::time::{Duration, Instant};

use caliper_sync::Lock;

#[test]
fn lock_serializes_increments() {
    let lock = Arc::new(Lock::new(0u64));
    let mut handles = Vec::new();
    for _ in 0..4 {
        let lock = Arc::clone(&lock);
        handles.push(std::thread::spawn(move || {
            for _ in 0..1000 {
                *lock.lock() += 1;
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(*lock.lock(), 4000);
}

#[test]
fn try_lock_respects_a_held_guard() {
    let lock = Lock::new(3);
    let guard = lock.lock();
    assert!(lock.try_lock().is_none());
    drop(guard);
    assert_eq!(*lock.try_lock().unwrap(), 3);
}

#[test]
fn lock_when_returns_once_the_flag_is_set() {
    let lock = Arc::new(Lock::new(0));
    let setter = {
        let lock = Arc::clone(&lock);
        std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(50));
            *lock.lock() = 1;
        })
    };
    let guard = lock.lock_when(|v| *v == 1);
    assert_eq!(*guard, 1);
    drop(guard);
    setter.join().unwrap();
}

#[test]
fn lock_when_passes_immediately_when_already_true() {
    let lock = Lock::new(5);
    let guard = lock.lock_when(|v| *v == 5);
    assert_eq!(*guard, 5);
}

#[test]
fn lock_when_timeout_expiry_releases_the_lock() {
    let lock = Lock::new(0);
    let started = Instant::now();
    let guard = lock.lock_when_timeout(|v| *v == 1, Duration::from_millis(100));
    assert!(guard.is_none());
    assert!(started.elapsed() >= Duration::from_millis(100));
    // The failed acquisition must not leave the lock held.
    assert!(lock.try_lock().is_some());
}

#[test]
fn lock_when_timeout_succeeds_before_the_deadline() {
    let lock = Arc::new(Lock::new(0));
    let setter = {
        let lock = Arc::clone(&lock);
        std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(50));
            *lock.lock() = 1;
        })
    };
    let guard = lock.lock_when_timeout(|v| *v == 1, Duration::from_secs(5));
    assert_eq!(*guard.expect("flag set well before the deadline"), 1);
    setter.join().unwrap();
}

#[test]
fn await_when_wakes_on_another_guards_release() {
    let lock = Arc::new(Lock::new(0));
    let mut guard = lock.lock();
    let setter = {
        let lock = Arc::clone(&lock);
        std::thread::spawn(move || {
            *lock.lock() = 1;
        })
    };
    // The wait releases the lock, letting the setter in.
    guard.await_when(|v| *v == 1);
    assert_eq!(*guard, 1);
    drop(guard);
    setter.join().unwrap();
}

#[test]
fn await_when_timeout_expiry_keeps_the_guard() {
    let lock = Lock::new(0);
    let mut guard = lock.lock();
    let held = guard.await_when_timeout(|v| *v == 1, Duration::from_millis(50));
    assert!(!held);
    // Still holding: the payload stays writable through this guard.
    *guard = 7;
    drop(guard);
    assert_eq!(*lock.lock(), 7);
}
