use std::sync::Arc;

use fixedpool::metrics::{AtomicMetricsCollector, ThreadPoolMetrics};
use fixedpool::ThreadPoolBuilder;

#[test]
fn test_metrics_reconcile_after_shutdown() {
    let metrics = Arc::new(ThreadPoolMetrics::new());
    let collector = Arc::new(AtomicMetricsCollector::new(metrics.clone()));

    let mut pool = ThreadPoolBuilder::new()
        .num_threads(4)
        .with_metrics_collector(collector)
        .build()
        .unwrap();

    assert_eq!(metrics.snapshot().active_workers, 4);

    let handles: Vec<_> = (0..10).map(|i| pool.spawn(move || i * 2).unwrap()).collect();
    for handle in handles {
        handle.join().unwrap();
    }

    // Workers are joined by shutdown, so every hook has fired by the time
    // the counters are read.
    pool.shutdown().unwrap();

    let snapshot = metrics.snapshot();
    assert_eq!(snapshot.completed_tasks, 10);
    assert_eq!(snapshot.queued_tasks, 0);
    assert_eq!(snapshot.running_tasks, 0);
    assert_eq!(snapshot.active_workers, 0);
}
