// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `understory_shadow`.

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use understory_shadow::{
    RuleVariant, ShadowFormatter, ShadowState, hex_to_rgb, rules_panel, rules_text,
};

fn sample() -> ShadowState {
    ShadowState {
        horizontal_offset: 5,
        vertical_offset: 10,
        blur_radius: 15,
        spread_radius: 0,
        color: "#336699".into(),
        opacity: 0.5,
        inset: false,
    }
}

fn editor(displays: usize) -> ShadowFormatter<String, String> {
    let mut editor = ShadowFormatter::new(String::new());
    for variant in RuleVariant::ALL.into_iter().cycle().take(displays) {
        editor.add_display(variant, String::new());
    }
    editor.initialize(sample());
    editor
}

fn bench_rule(c: &mut Criterion) {
    let mut group = c.benchmark_group("shadow/rule");

    group.bench_function("hex_to_rgb", |b| {
        b.iter(|| hex_to_rgb(black_box("#1A2B3C")));
    });

    let state = sample();
    group.bench_function("render", |b| {
        b.iter(|| black_box(&state).rule());
    });

    group.finish();
}

fn bench_input_events(c: &mut Criterion) {
    let mut group = c.benchmark_group("shadow/update_from_input");

    // A slider drag is a burst of events for one field; every event fans out
    // to every display.
    let drag: Vec<String> = (-50..=50).map(|px| px.to_string()).collect();
    for displays in [1_usize, 3, 12] {
        group.bench_with_input(
            BenchmarkId::new("slider_drag", displays),
            &displays,
            |b, &displays| {
                b.iter_batched(
                    || editor(displays),
                    |mut editor| {
                        for raw in &drag {
                            editor.update_from_input("horizontal", raw);
                        }
                        black_box(editor);
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.bench_function("unknown_name", |b| {
        let mut editor = editor(3);
        b.iter(|| editor.update_from_input(black_box("border"), black_box("4")));
    });

    group.finish();
}

fn bench_copy(c: &mut Criterion) {
    let editor = editor(3);
    c.bench_function("shadow/copy_panel", |b| {
        b.iter(|| {
            let panel = rules_panel(
                editor
                    .displays()
                    .map(|(variant, text)| (variant, text.as_str())),
            );
            rules_text(black_box(&panel))
        });
    });
}

criterion_group!(benches, bench_rule, bench_input_events, bench_copy);
criterion_main!(benches);
