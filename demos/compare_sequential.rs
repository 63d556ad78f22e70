use std::thread;
use std::time::{Duration, Instant};

use fixedpool::{run_sequential, BoxedJob, ThreadPoolBuilder};

/// A task that takes time to execute.
fn slow_square(i: u64) -> u64 {
    thread::sleep(Duration::from_secs(1));
    println!("Task executed by {:?}", thread::current().id());
    i * i
}

fn main() {
    let num_tasks: u64 = 8;
    println!("Number of tasks: {}", num_tasks);

    // Sequential execution on the main thread.
    let seq_start = Instant::now();
    let jobs: Vec<BoxedJob> = (0..num_tasks)
        .map(|i| {
            Box::new(move || {
                let _ = slow_square(i);
            }) as BoxedJob
        })
        .collect();
    run_sequential(jobs);
    println!(
        "Time taken without thread pool: {:.2?}",
        seq_start.elapsed()
    );

    // The same batch through a pool of 4 workers: roughly ceil(8/4) seconds.
    let mut pool = ThreadPoolBuilder::new().num_threads(4).build().unwrap();

    let pool_start = Instant::now();
    let handles: Vec<_> = (0..num_tasks)
        .map(|i| pool.spawn(move || slow_square(i)).unwrap())
        .collect();

    let squares: Vec<u64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    pool.shutdown().unwrap();

    println!("Squares: {:?}", squares);
    println!("Time taken with thread pool: {:.2?}", pool_start.elapsed());
}
