//! Benchmarks for suffix-tree construction and full interpolation.
//!
//! The localized press-{0} sentences are the canonical workload: four
//! related inputs with one long shared stem and several short ones, which
//! exercises the splitter's recursion as well as the blender.

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use textfade::interpolate;
use textfade::suffix_tree::SuffixTree;

const LOCALES: [&str; 4] = [
    "Press {0} to continue",
    "Appuyez sur {0} pour continuer",
    "Premi {0} per continuare",
    "Presiona {0} para continuar",
];

fn to_points(s: &str) -> Vec<u32> {
    s.chars().map(u32::from).collect()
}

fn bench_suffix_tree(c: &mut Criterion) {
    let sequences: Vec<Vec<u32>> = LOCALES.iter().map(|s| to_points(s)).collect();

    c.bench_function("suffix_tree_build", |b| {
        b.iter(|| SuffixTree::build(black_box(&sequences)));
    });

    let tree = SuffixTree::build(&sequences);
    c.bench_function("suffix_tree_lcs", |b| {
        b.iter(|| black_box(&tree).longest_common_substring());
    });
}

fn bench_interpolate(c: &mut Criterion) {
    let pair = [(LOCALES[0], 0.5), (LOCALES[1], 0.5)];
    c.bench_function("interpolate_pair", |b| {
        b.iter(|| interpolate(black_box(&pair)));
    });

    let four: Vec<(&str, f64)> = LOCALES.iter().map(|&s| (s, 0.25)).collect();
    c.bench_function("interpolate_four_locales", |b| {
        b.iter(|| interpolate(black_box(&four)));
    });

    // Weight sweep, as an animation driver would issue it.
    c.bench_function("interpolate_weight_sweep", |b| {
        b.iter(|| {
            for step in 0..=10 {
                let t = f64::from(step) / 10.0;
                let inputs = [(LOCALES[0], 1.0 - t), (LOCALES[1], t)];
                black_box(interpolate(&inputs));
            }
        });
    });
}

criterion_group!(benches, bench_suffix_tree, bench_interpolate);
criterion_main!(benches);
