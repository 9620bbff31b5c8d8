use chart_core::{ChartOptions, ChartRenderer, Record};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn synthetic(n: usize) -> Vec<Record> {
    (0..n)
        .map(|i| {
            let year = 1994 + (i % 22) as i32;
            let minutes = 36 + (i % 4);
            let seconds = (i * 7) % 60;
            let doping = if i % 3 == 0 { "Alleged" } else { "" };
            Record::new(year, format!("{minutes}:{seconds:02}"), doping)
        })
        .collect()
}

fn bench_scene(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_scene");
    for &n in &[35usize, 10_000usize] {
        let records = synthetic(n);
        let renderer = ChartRenderer::new(ChartOptions::default());
        group.bench_function(format!("records_{n}"), |b| {
            b.iter(|| {
                let chart = renderer.render(records.clone());
                black_box(chart.to_svg_string());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_scene);
criterion_main!(benches);
