//! Criterion benchmarks for name resolution.
//!
//! `apply_name` runs once per card construction, so it sits on the host's
//! card-creation hot path.  These benchmarks cover each precedence layer plus
//! the miss case against a table of realistic size.
//!
//! Run with:
//! ```bash
//! cargo bench --package card-rename-core --bench resolve_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use card_rename_core::{apply_name, detects_keyword, BatchRule, CardRef, Configuration, RenameTable};

/// Builds a configuration with `n` ID-keyed entries and an enabled batch rule.
fn make_config(n: usize) -> Configuration {
    let renames: RenameTable = (0..n)
        .map(|i| (format!("Card_{i}"), format!("卡牌{i}")))
        .chain([("Defend".to_string(), "防御".to_string())])
        .collect();
    Configuration {
        batch_rule: BatchRule {
            enabled: true,
            prefix: "铁壁".to_string(),
            suffix: String::new(),
        },
        renames,
    }
}

fn bench_apply_name_layers(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply_name");
    let cfg = make_config(500);

    let cases = [
        ("id_match", CardRef::new("Card_250", Some("Card"))),
        ("name_match", CardRef::new("Defend_R", Some("Defend"))),
        ("batch_rule", CardRef::new("Anger", Some("Anger"))),
        ("no_original_name", CardRef::new("Anger", None)),
    ];

    for (label, card) in cases {
        group.bench_with_input(BenchmarkId::from_parameter(label), &card, |b, card| {
            b.iter(|| apply_name(black_box(&cfg), black_box(*card)))
        });
    }
    group.finish();
}

fn bench_detects_keyword(c: &mut Criterion) {
    c.bench_function("detects_keyword/latin_miss", |b| {
        b.iter(|| detects_keyword(black_box("Iron Wave of the Ancients")))
    });
    c.bench_function("detects_keyword/cjk_hit", |b| {
        b.iter(|| detects_keyword(black_box("完美打击")))
    });
}

criterion_group!(benches, bench_apply_name_layers, bench_detects_keyword);
criterion_main!(benches);
