fn main() {
    let mut pool = fixedpool::ThreadPoolBuilder::new()
        .num_threads(4)
        .build()
        .unwrap();
    let handle = pool
        .spawn(|| {
            println!("Hello from the thread pool!");
            10
        })
        .unwrap();
    let res = handle.join().unwrap();
    println!("Result from task: {}", res);
    pool.shutdown().unwrap();
}
