use std::sync::Arc;
use std::time::{Duration, Instant};

use caliper_sync::SharedLock;

#[test]
fn write_then_read_round_trip() {
    let lock = SharedLock::new(0);
    *lock.write() = 5;
    assert_eq!(*lock.read(), 5);
}

#[test]
fn try_acquisitions_respect_held_guards() {
    let lock = SharedLock::new(0);

    let write = lock.write();
    assert!(lock.try_read().is_none());
    assert!(lock.try_write().is_none());
    drop(write);

    let read = lock.read();
    assert!(lock.try_write().is_none());
    assert!(lock.try_read().is_some());
    drop(read);
}

#[test]
fn readers_share_the_lock() {
    let lock = SharedLock::new(9);
    let first = lock.read();
    let second = lock.read();
    assert_eq!(*first, 9);
    assert_eq!(*second, 9);
}

#[test]
fn read_when_returns_once_a_writer_sets_the_flag() {
    let lock = Arc::new(SharedLock::new(0));
    let writer = {
        let lock = Arc::clone(&lock);
        std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(50));
            *lock.write() = 1;
        })
    };
    let guard = lock.read_when(|v| *v == 1);
    assert_eq!(*guard, 1);
    drop(guard);
    writer.join().unwrap();
}

#[test]
fn read_when_timeout_expiry_leaves_the_lock_free() {
    let lock = SharedLock::new(0);
    let started = Instant::now();
    let guard = lock.read_when_timeout(|v| *v == 1, Duration::from_millis(100));
    assert!(guard.is_none());
    assert!(started.elapsed() >= Duration::from_millis(100));
    assert!(lock.try_write().is_some());
}

#[test]
fn read_when_timeout_succeeds_before_the_deadline() {
    let lock = Arc::new(SharedLock::new(0));
    let writer = {
        let lock = Arc::clone(&lock);
        std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(50));
            *lock.write() = 1;
        })
    };
    let guard = lock.read_when_timeout(|v| *v == 1, Duration::from_secs(5));
    assert_eq!(*guard.expect("flag set well before the deadline"), 1);
    writer.join().unwrap();
}
