use fixedpool::{submit, ThreadPoolBuilder};

fn add(a: i32, b: i32) -> i32 {
    a + b
}

fn main() {
    let mut pool = ThreadPoolBuilder::new().num_threads(4).build().unwrap();

    let plain = submit!(pool, || println!("Task without arguments")).unwrap();
    let bound = submit!(pool, add, 40, 2).unwrap();

    plain.join().unwrap();
    println!("add(40, 2) = {}", bound.join().unwrap());
    pool.shutdown().unwrap();
}
