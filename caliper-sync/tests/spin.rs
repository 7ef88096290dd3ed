use std::sync::Arc;

use caliper_sync::SpinLock;

#[test]
fn spinlock_serializes_increments() {
    let lock = Arc::new(SpinLock::new(0u64));
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
fn guard_release_lets_the_next_acquisition_through() {
    let lock = SpinLock::new(1);
    {
        let mut guard = lock.lock();
        *guard += 1;
    }
    assert_eq!(*lock.lock(), 2);
}
