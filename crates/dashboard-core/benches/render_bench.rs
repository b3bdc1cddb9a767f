use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dashboard_core::{render_html, Dashboard, RenderOptions};

fn bench_render(c: &mut Criterion) {
    let dashboard = Dashboard::sample();
    let opts = RenderOptions::default();
    c.bench_function("render_sample_page", |b| {
        b.iter(|| black_box(render_html(black_box(&dashboard), &opts).unwrap()))
    });
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
