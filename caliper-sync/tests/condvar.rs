use std::sync::Arc;
use std::time::{Duration, Instant};

use caliper_sync::{CondVar, Lock};

#[test]
fn signal_wakes_a_looping_waiter() {
    let lock = Arc::new(Lock::new(false));
    let ready = Arc::new(CondVar::new());
    let waker = {
        let lock = Arc::clone(&lock);
        let ready = Arc::clone(&ready);
        std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(50));
            let mut flag = lock.lock();
            *flag = true;
            ready.signal();
        })
    };
    let mut flag = lock.lock();
    while !*flag {
        ready.wait(&mut flag);
    }
    drop(flag);
    waker.join().unwrap();
}

#[test]
fn wait_timeout_runs_out_without_a_signal() {
    let lock = Lock::new(0);
    let ready = CondVar::new();
    let deadline = Instant::now() + Duration::from_millis(100);
    let mut flag = lock.lock();
    // Spurious wakeups are allowed, so loop until the deadline is spent.
    while *flag != 1 {
        let now = Instant::now();
        if now >= deadline {
            break;
        }
        ready.wait_timeout(&mut flag, deadline - now);
    }
    assert_eq!(*flag, 0);
    assert!(Instant::now() >= deadline);
}

#[test]
fn broadcast_wakes_every_waiter() {
    let lock = Arc::new(Lock::new(false));
    let ready = Arc::new(CondVar::new());
    let mut waiters = Vec::new();
    for _ in 0..3 {
        let lock = Arc::clone(&lock);
        let ready = Arc::clone(&ready);
        waiters.push(std::thread::spawn(move || {
            let mut flag = lock.lock();
            while !*flag {
                ready.wait(&mut flag);
            }
        }));
    }
    std::thread::sleep(Duration::from_millis(50));
    *lock.lock() = true;
    ready.broadcast();
    for waiter in waiters {
        waiter.join().unwrap();
    }
}
