use bone_viz::config::PlotConfig;
use bone_viz::geometry::{Pyramid, PyramidSize};
use bone_viz::math::quaternion_to_rotation_matrix;
use bone_viz::plot::render;
use bone_viz::{build_figure, BONE_POSES};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::DVec3;

/// Benchmark: quaternion conversion plus pyramid construction for one pose
fn bench_pyramid_build(c: &mut Criterion) {
    let pose = BONE_POSES[3];
    let position = DVec3::from_array(pose.position);

    c.bench_function("pyramid_build", |b| {
        b.iter(|| {
            let rotation = quaternion_to_rotation_matrix(black_box(pose.orientation));
            black_box(Pyramid::new(black_box(position), rotation, PyramidSize::default()).faces())
        })
    });
}

/// Benchmark: full software rasterization of the figure at several sizes
fn bench_render(c: &mut Criterion) {
    let figure = build_figure(&PlotConfig::default(), &BONE_POSES);
    let mut group = c.benchmark_group("render");

    for (width, height) in [(320u32, 240u32), (800, 600), (1920, 1080)] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{width}x{height}")),
            &(width, height),
            |b, &(w, h)| b.iter(|| black_box(render(&figure, w, h))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_pyramid_build, bench_render);
criterion_main!(benches);
