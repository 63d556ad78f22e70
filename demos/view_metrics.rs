use fixedpool::metrics::{AtomicMetricsCollector, ThreadPoolMetrics};
use fixedpool::{log_metrics, ThreadPoolBuilder};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn main() {
    // Create metrics and collector
    let metrics = Arc::new(ThreadPoolMetrics::new());
    let collector = Arc::new(AtomicMetricsCollector::new(metrics.clone()));

    let mut pool = ThreadPoolBuilder::new()
        .num_threads(4)
        .with_metrics_collector(collector)
        .build()
        .unwrap();

    // Spawn a monitoring thread to display live updates
    let running = Arc::new(AtomicBool::new(true));
    let metrics_clone = metrics.clone();
    let running_clone = running.clone();
    let monitor_handle = thread::spawn(move || {
        while running_clone.load(Ordering::Acquire) {
            println!("\n--- Metrics ---");
            log_metrics!(metrics_clone);
            thread::sleep(Duration::from_millis(80));
        }
    });

    let handles: Vec<_> = (0..10)
        .map(|_| {
            pool.spawn(move || thread::sleep(Duration::from_millis(100)))
                .unwrap()
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
    pool.shutdown().unwrap();

    // Stop the monitoring thread
    running.store(false, Ordering::Release);
    monitor_handle.join().unwrap();

    println!("\n--- Final Metrics ---");
    log_metrics!(metrics);
}
