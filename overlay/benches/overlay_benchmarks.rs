//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Benchmarks for block compositing and dialog rendering

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use modalix_overlay::{Block, Dialog, overlay_centered};
use std::hint::black_box;

fn styled_screen(cols: usize, rows: usize) -> Block {
    let row = format!("\x1b[38;2;135;169;135m{}\x1b[0m", "x".repeat(cols));
    Block::from_rows(vec![row; rows])
}

// Benchmark compositing a dialog-sized box over terminal-sized screens
fn bench_overlay_centered(c: &mut Criterion) {
    let mut group = c.benchmark_group("overlay_centered");

    for (cols, rows) in [(80, 24), (160, 48), (320, 96)].iter() {
        let background = styled_screen(*cols, *rows);
        let foreground = Block::from_rows(vec!["#".repeat(cols / 4); rows / 4]);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{cols}x{rows}")),
            &(background, foreground),
            |b, (background, foreground)| {
                b.iter(|| {
                    let result = overlay_centered(black_box(background), black_box(foreground));
                    black_box(result);
                });
            },
        );
    }
    group.finish();
}

// Benchmark rendering the dialog box alone
fn bench_dialog_render(c: &mut Criterion) {
    c.bench_function("dialog_render", |b| {
        let dialog = Dialog::new("Are you sure?", "This cannot be undone. y/n").with_size(80, 24);
        b.iter(|| {
            let block = black_box(&dialog).render();
            black_box(block);
        });
    });
}

// Benchmark the full render-and-composite path
fn bench_dialog_compose_over(c: &mut Criterion) {
    c.bench_function("dialog_compose_over", |b| {
        let background = styled_screen(80, 24).to_string();
        let dialog = Dialog::new("Are you sure?", "This cannot be undone. y/n").with_size(80, 24);
        b.iter(|| {
            let frame = black_box(&dialog).compose_over(black_box(background.as_str()));
            black_box(frame);
        });
    });
}

criterion_group!(
    benches,
    bench_overlay_centered,
    bench_dialog_render,
    bench_dialog_compose_over,
);
criterion_main!(benches);
