use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use fixedpool::{PoolError, ThreadPool, ThreadPoolBuilder};

#[test]
fn test_basic_pool() {
    let mut pool = ThreadPool::new(2).unwrap();
    let handle = pool.spawn(|| 42).unwrap();
    assert_eq!(handle.join().unwrap(), 42);
    pool.shutdown().unwrap();
}

#[test]
fn test_builder_defaults_to_logical_cpu_count() {
    let pool = ThreadPoolBuilder::new().build().unwrap();
    assert_eq!(pool.worker_count(), num_cpus::get());
}

#[test]
fn test_results_follow_submission_order() {
    // 8 delayed squares on 4 workers: results come back indexed by handle
    // order, and the batch takes about two delay rounds rather than eight.
    fn square_slowly(i: u64) -> u64 {
        thread::sleep(Duration::from_millis(200));
        i * i
    }

    let mut pool = ThreadPool::new(4).unwrap();

    let start = Instant::now();
    let handles: Vec<_> = (0..8)
        .map(|i| pool.spawn(move || square_slowly(i)).unwrap())
        .collect();
    let results: Vec<u64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let elapsed = start.elapsed();

    assert_eq!(results, vec![0, 1, 4, 9, 16, 25, 36, 49]);
    assert!(elapsed >= Duration::from_millis(400));
    assert!(
        elapsed < Duration::from_millis(1200),
        "expected parallel execution, batch took {:?}",
        elapsed
    );

    pool.shutdown().unwrap();
}

#[test]
fn test_completion_order_is_not_submission_order() {
    let mut pool = ThreadPool::new(2).unwrap();
    let order = Arc::new(Mutex::new(Vec::new()));

    let slow_order = Arc::clone(&order);
    let slow = pool
        .spawn(move || {
            thread::sleep(Duration::from_millis(300));
            slow_order.lock().unwrap().push("slow");
        })
        .unwrap();

    let fast_order = Arc::clone(&order);
    let fast = pool
        .spawn(move || {
            fast_order.lock().unwrap().push("fast");
        })
        .unwrap();

    fast.join().unwrap();
    slow.join().unwrap();
    pool.shutdown().unwrap();

    assert_eq!(*order.lock().unwrap(), vec!["fast", "slow"]);
}

#[test]
fn test_panicking_task_does_not_shrink_the_pool() {
    let mut pool = ThreadPool::new(1).unwrap();

    let bad = pool.spawn(|| -> () { panic!("boom") }).unwrap();
    match bad.join() {
        Err(PoolError::TaskPanicked(msg)) => assert!(msg.contains("boom")),
        other => panic!("expected TaskPanicked, got {:?}", other),
    }

    // The single worker survived the panic and still runs tasks.
    let good = pool.spawn(|| 7).unwrap();
    assert_eq!(good.join().unwrap(), 7);
    pool.shutdown().unwrap();
}

#[test]
fn test_try_join_polls_without_blocking() {
    let mut pool = ThreadPool::new(1).unwrap();
    let handle = pool
        .spawn(|| {
            thread::sleep(Duration::from_millis(300));
            5
        })
        .unwrap();

    assert!(handle.try_join().is_none());
    thread::sleep(Duration::from_millis(600));
    assert_eq!(handle.try_join().unwrap().unwrap(), 5);
    pool.shutdown().unwrap();
}

#[test]
fn test_submissions_from_multiple_threads() {
    let pool = ThreadPool::new(4).unwrap();
    let total = Arc::new(AtomicUsize::new(0));

    thread::scope(|s| {
        for _ in 0..4 {
            let pool = &pool;
            let total = Arc::clone(&total);
            s.spawn(move || {
                let handles: Vec<_> = (0..25)
                    .map(|_| {
                        let total = Arc::clone(&total);
                        pool.spawn(move || {
                            total.fetch_add(1, Ordering::SeqCst);
                        })
                        .unwrap()
                    })
                    .collect();
                for handle in handles {
                    handle.join().unwrap();
                }
            });
        }
    });

    assert_eq!(total.load(Ordering::SeqCst), 100);
}
