use std::sync::Arc;
use std::time::{Duration, Instant};

use caliper_sync::BoundedQueue;

#[test]
fn gets_come_out_in_fifo_order() {
    let queue = BoundedQueue::new(4);
    queue.put(1);
    queue.put(2);
    queue.put(3);
    assert_eq!(queue.len(), 3);
    assert_eq!(queue.get(), 1);
    assert_eq!(queue.get(), 2);
    assert_eq!(queue.get(), 3);
    assert!(queue.is_empty());
}

#[test]
fn get_blocks_until_something_is_put() {
    let queue = Arc::new(BoundedQueue::new(1));
    let producer = {
        let queue = Arc::clone(&queue);
        std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(50));
            queue.put(42);
        })
    };
    let started = Instant::now();
    assert_eq!(queue.get(), 42);
    assert!(started.elapsed() >= Duration::from_millis(25));
    producer.join().unwrap();
}

#[test]
fn put_blocks_while_the_queue_is_full() {
    let queue = Arc::new(BoundedQueue::new(1));
    queue.put(1);
    let consumer = {
        let queue = Arc::clone(&queue);
        std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(50));
            assert_eq!(queue.get(), 1);
            assert_eq!(queue.get(), 2);
        })
    };
    let started = Instant::now();
    queue.put(2);
    assert!(started.elapsed() >= Duration::from_millis(25));
    consumer.join().unwrap();
}
