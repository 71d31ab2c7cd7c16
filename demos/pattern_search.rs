use ordsearch_rs::{Strategy, SuffixTrie};
use std::env;
use std::fs;
use std::io::{self, BufRead};
use std::process;
use std::time::Instant;

/// Substring search over a text file.
///
/// Usage: cargo run --example pattern_search -- <strategy> <filename>
///
/// The pattern is read from the first line of standard input. Strategies:
/// brute-force, kmp, boyer-moore, suffix-trie. Prints the match offset in
/// bytes, or -1.
fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 3 {
        eprintln!("Usage: {} <strategy> <filename>", args[0]);
        process::exit(1);
    }

    let strategy: Strategy = args[1].parse().unwrap_or_else(|err| {
        eprintln!("{}", err);
        process::exit(1);
    });

    let filename = &args[2];
    let text = fs::read(filename).unwrap_or_else(|_| {
        eprintln!("File \"{}\" not found.", filename);
        process::exit(1);
    });

    let mut pattern = String::new();
    if io::stdin().lock().read_line(&mut pattern).is_err() {
        eprintln!("Error reading pattern from standard input");
        process::exit(1);
    }
    let pattern = pattern.trim_end_matches(&['\r', '\n'][..]).as_bytes();

    let offset = match strategy {
        Strategy::SuffixTrie => {
            // Construction and search are timed separately
            let start = Instant::now();
            let trie = SuffixTrie::new(text.iter().copied());
            println!("Construction time: {:.2?} ({} nodes)", start.elapsed(), trie.node_count());

            let start = Instant::now();
            let offset = trie.search(pattern);
            println!("Search time: {:.2?}", start.elapsed());
            offset
        }
        other => {
            let start = Instant::now();
            let offset = other.search(&text, pattern);
            println!("Search time: {:.2?}", start.elapsed());
            offset
        }
    };

    match offset {
        Some(offset) => println!("{}", offset),
        None => println!("-1"),
    }
}
