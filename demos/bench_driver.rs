use ordsearch_rs::{OrderedIndex, SkipList, SplayTree};
use std::env;
use std::process;
use std::time::Instant;

/// Insert/find workload over one ordered structure.
///
/// Usage: cargo run --release --example bench_driver -- <splay|skip> [n] [k] [rounds] [seed]
///
/// Inserts the even numbers 0, 2, ..., 2(k·n − 1), then runs `rounds`
/// batches of lookups over 0..n and sums the keys that were hit.
fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args.len() > 6 {
        eprintln!("Usage: {} <splay|skip> [n] [k] [rounds] [seed]", args[0]);
        process::exit(1);
    }

    let n = parse_arg(&args, 2, 10_000);
    let k = parse_arg(&args, 3, 4);
    let rounds = parse_arg(&args, 4, 10);
    let seed = parse_arg(&args, 5, 42);

    match args[1].as_str() {
        "splay" => {
            let mut tree = SplayTree::new();
            run(&mut tree, n, k, rounds);
            let stats = tree.stats();
            println!("Height: {}", stats.height);
            println!("Comparisons: {}", stats.comparisons);
            println!("Rotations: {}", stats.rotations);
        }
        "skip" => {
            let mut list = SkipList::with_seed(seed);
            run(&mut list, n, k, rounds);
            let stats = list.stats();
            println!("Height: {}", stats.height);
            println!("Nodes: {}", stats.nodes);
        }
        other => {
            eprintln!("Unknown structure \"{}\" (expected splay or skip).", other);
            process::exit(1);
        }
    }
}

fn parse_arg(args: &[String], index: usize, default: u64) -> u64 {
    match args.get(index) {
        None => default,
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            eprintln!("Argument {} must be a non-negative integer, got \"{}\".", index, raw);
            process::exit(1);
        }),
    }
}

fn run<I: OrderedIndex<u64>>(index: &mut I, n: u64, k: u64, rounds: u64) {
    let start = Instant::now();
    for i in 0..k * n {
        index.insert(2 * i);
    }
    let inserted = start.elapsed();

    let start = Instant::now();
    let mut sum = 0u64;
    for _ in 0..rounds {
        for q in 0..n {
            if index.lookup(&q) == Some(&q) {
                sum += q;
            }
        }
    }
    let searched = start.elapsed();

    println!("\n=== Workload ===");
    println!("Values inserted: {}", index.len());
    println!("Insert time: {:.2?}", inserted);
    println!("Lookups: {}", rounds * n);
    println!("Lookup time: {:.2?}", searched);
    println!("Sum of hits: {}", sum);
}
