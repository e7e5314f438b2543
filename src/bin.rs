use std::io;
use std::io::Write;

use heapvis::render::write_tree;
use heapvis::{MaxHeap, Snapshot, SortDirection, Style};

fn print_tree(snapshot: Snapshot<'_, i32>) {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_tree(&mut out, &snapshot).unwrap();
    writeln!(out).unwrap();
}

pub fn run_scenario(
    title: &str,
    color: &str,
    values: Vec<i32>,
    changes: &[(usize, i32)],
    removals: usize,
) {
    let mut heap = MaxHeap::with_style(Style::new(color, title));
    heap.set_hook(print_tree);
    heap.extend(values);
    for &(position, value) in changes {
        heap.change_priority(position, value).unwrap();
    }
    for _ in 0..removals {
        heap.remove_max().unwrap();
    }
    match heap.peek_max() {
        Ok(max) => println!("{}: maximum after removals = {}", title, max),
        Err(_) => println!("{}: heap drained", title),
    }
}

pub fn heap_sort_example() {
    let mut heap = MaxHeap::with_style(Style::new("skyblue", "heap sort"));
    heap.extend(vec![3, 1, 4, 1, 5, 9, 2, 6]);
    heap.set_hook(print_tree);
    heap.sort(SortDirection::Descending);
    println!("sorted: {:?}", heap.values());
}

pub fn main() {
    run_scenario(
        "teste 1",
        "#ffcc00",
        vec![10, 5, 20, 1, 15, 30, 25],
        &[(3, 50), (1, 8)],
        3,
    );
    run_scenario("teste 2", "#ccf0f0", (1..=10).collect(), &[(4, 15), (8, 3)], 5);
    run_scenario(
        "teste 3",
        "#ffacff",
        vec![50, 40, 30, 20, 10, 5, 3],
        &[(2, 60), (5, 1)],
        3,
    );
    run_scenario(
        "teste 4",
        "#aaffaf",
        vec![13, 26, 19, 17, 24, 31, 22, 11, 8, 20, 5, 27, 18],
        &[(7, 35), (10, 12)],
        4,
    );
    heap_sort_example();
}
