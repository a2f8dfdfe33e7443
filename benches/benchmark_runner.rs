/// Benchmark runner for the graph copy/merge engines.
///
/// Compares the recursive clone engine against the explicit-worklist
/// variant, and times deep merge on the same shapes.

extern crate graphcopy;

use std::time::{Duration, Instant};

use graphcopy::ds::operations::clone::{clone_value, clone_value_iterative};
use graphcopy::ds::operations::merge::merge;
use graphcopy::ds::operations::test_and_comparison::deep_equal;
use graphcopy::ds::record::RecordData;
use graphcopy::ds::sequence::SequenceData;
use graphcopy::ds::value::{NumberType, Value};

fn int(n: i64) -> Value {
    Value::Number(NumberType::Integer(n))
}

/// A record of `width` keys, each holding a sequence of `width` integers.
fn wide_graph(width: usize) -> Value {
    let root = RecordData::new_ref();
    for i in 0..width {
        let elements: Vec<Value> = (0..width).map(|j| int((i * j) as i64)).collect();
        root.borrow_mut().set(
            format!("key{}", i),
            Value::Sequence(SequenceData::ref_from_elements(elements)),
        );
    }
    Value::Record(root)
}

/// A chain of `depth` single-key records ending in a leaf.
fn deep_graph(depth: usize) -> Value {
    let mut value = int(0);
    for _ in 0..depth {
        value = Value::Record(RecordData::ref_from_entries(vec![(
            "down".to_string(),
            value,
        )]));
    }
    value
}

/// A record whose entries all alias one shared subtree. Kept acyclic:
/// deep-merging a cyclic source into a fresh target is the unguarded
/// hazard the merge engine documents.
fn aliased_graph(width: usize) -> Value {
    let shared = RecordData::ref_from_entries(vec![("v".to_string(), int(1))]);
    let root = RecordData::new_ref();
    for i in 0..width {
        root.borrow_mut()
            .set(format!("key{}", i), Value::Record(shared.clone()));
    }
    Value::Record(root)
}

fn run_clone_benchmark(graph: &Value, iterations: u32) -> Duration {
    let start = Instant::now();
    for _ in 0..iterations {
        let _ = clone_value(graph);
    }
    start.elapsed()
}

fn run_clone_iterative_benchmark(graph: &Value, iterations: u32) -> Duration {
    let start = Instant::now();
    for _ in 0..iterations {
        let _ = clone_value_iterative(graph);
    }
    start.elapsed()
}

fn run_merge_benchmark(graph: &Value, iterations: u32) -> Duration {
    let start = Instant::now();
    for _ in 0..iterations {
        let _ = merge(true, Value::Record(RecordData::new_ref()), &[graph.clone()]);
    }
    start.elapsed()
}

fn main() {
    println!("=======================================================");
    println!("  graphcopy - Clone/Merge Engine Benchmarks");
    println!("  Recursive Clone vs Worklist Clone vs Deep Merge");
    println!("=======================================================\n");

    let benchmarks: Vec<(&str, Value, u32)> = vec![
        ("Wide graph (50x50)", wide_graph(50), 200),
        ("Wide graph (100x100)", wide_graph(100), 50),
        ("Deep chain (1K levels)", deep_graph(1_000), 200),
        ("Aliased graph (1K keys)", aliased_graph(1_000), 200),
    ];

    println!(
        "{:<30} {:>14} {:>14} {:>14}",
        "Benchmark", "Recursive", "Worklist", "Deep Merge"
    );
    println!("{}", "-".repeat(74));

    let mut total_recursive = Duration::ZERO;
    let mut total_worklist = Duration::ZERO;
    let mut total_merge = Duration::ZERO;

    for (name, graph, iterations) in &benchmarks {
        let recursive_dur = run_clone_benchmark(graph, *iterations);
        let worklist_dur = run_clone_iterative_benchmark(graph, *iterations);
        let merge_dur = run_merge_benchmark(graph, *iterations);
        total_recursive += recursive_dur;
        total_worklist += worklist_dur;
        total_merge += merge_dur;

        println!(
            "{:<30} {:>12.2?} {:>12.2?} {:>12.2?}",
            name, recursive_dur, worklist_dur, merge_dur
        );
    }

    println!("{}", "-".repeat(74));
    println!(
        "{:<30} {:>12.2?} {:>12.2?} {:>12.2?}",
        "TOTAL", total_recursive, total_worklist, total_merge
    );

    // Verify correctness
    println!("\n=======================================================");
    println!("  Correctness Verification");
    println!("=======================================================\n");

    for (name, graph, _) in &benchmarks {
        let recursive = clone_value(graph);
        let worklist = clone_value_iterative(graph);
        let ok = deep_equal(&recursive, graph) && deep_equal(&recursive, &worklist);
        println!("{:<30} {}", name, if ok { "OK" } else { "MISMATCH" });
    }
}
