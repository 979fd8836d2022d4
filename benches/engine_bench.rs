//! Performance benchmarks for key handling
//!
//! Run with: cargo bench --bench engine_bench

use calculator_mcp::engine::CalculatorEngine;
use calculator_mcp::keypad::Key;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn parse_keys(labels: &[&str]) -> Vec<Key> {
    labels.iter().map(|label| label.parse().unwrap()).collect()
}

fn run(engine: &mut CalculatorEngine, keys: &[Key]) {
    for key in keys {
        match *key {
            Key::Power => {
                engine.toggle_power();
            }
            Key::Digit(token) => {
                engine.append_digit(token);
            }
            Key::Operator(op) => {
                let _ = engine.choose_operator(op);
            }
            Key::Equals => {
                let _ = engine.compute();
            }
            Key::Clear => {
                engine.clear();
            }
            Key::Backspace => {
                engine.backspace();
            }
        }
    }
}

fn bench_key_sequences(c: &mut Criterion) {
    let mut group = c.benchmark_group("key_sequences");

    let cases = vec![
        ("chain", parse_keys(&["AC", "5", "+", "3", "*", "2", "="])),
        (
            "long_operand",
            parse_keys(&["AC", "1", "2", "3", "4", "5", "6", "7", "8", "9", ".", "0", "1", "←", "="]),
        ),
        ("divide_by_zero", parse_keys(&["AC", "9", "/", "0", "="])),
    ];

    for (name, keys) in cases {
        group.bench_with_input(BenchmarkId::from_parameter(name), &keys, |b, keys| {
            b.iter(|| {
                let mut engine = CalculatorEngine::new();
                run(&mut engine, black_box(keys));
                black_box(engine.display().len())
            });
        });
    }

    group.finish();
}

fn bench_key_parsing(c: &mut Criterion) {
    let labels = ["AC", "7", ".", "×", "=", "C", "←"];
    c.bench_function("parse_labels", |b| {
        b.iter(|| {
            for label in labels {
                black_box(label.parse::<Key>().ok());
            }
        });
    });
}

criterion_group!(benches, bench_key_sequences, bench_key_parsing);
criterion_main!(benches);
