use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ellipsy::clipper::ClipSpaceClipper;
use ellipsy::collision::{gather_potential_colliders, Collider};
use ellipsy::geometry::{Polygon, Ray, Vertex};
use ellipsy::math::{Vec2, Vec3, Vec4};
use ellipsy::scene::RoomBuilder;

const RADIUS: Vec3 = Vec3::new(15.0, 30.0, 15.0);

fn rays() -> [(&'static str, Ray); 3] {
    [
        (
            "fall",
            Ray::new(Vec3::new(0.0, 100.0, 0.0), Vec3::new(0.0, -1000.0, 0.0)),
        ),
        (
            "slide",
            Ray::new(Vec3::new(0.0, 100.0, 0.0), Vec3::new(100.0, -1000.0, 0.0)),
        ),
        (
            "corner",
            Ray::new(Vec3::new(400.0, 40.0, 400.0), Vec3::new(500.0, -50.0, 500.0)),
        ),
    ]
}

fn benchmark_collide(c: &mut Criterion) {
    let mut group = c.benchmark_group("collide");

    let collider = Collider::default();
    let polygons = RoomBuilder::demo().build();

    for (name, ray) in rays() {
        group.bench_with_input(BenchmarkId::new("stop", name), &ray, |b, ray| {
            b.iter(|| collider.collide_and_stop(RADIUS, black_box(&polygons), black_box(ray)));
        });

        group.bench_with_input(BenchmarkId::new("slide", name), &ray, |b, ray| {
            b.iter(|| {
                collider.collide_and_slide(RADIUS, black_box(&polygons), black_box(ray), true)
            });
        });

        group.bench_with_input(BenchmarkId::new("broadphase_slide", name), &ray, |b, ray| {
            b.iter(|| {
                let near = gather_potential_colliders(black_box(&polygons), ray, RADIUS);
                collider.collide_and_slide(RADIUS, &near, black_box(ray), true)
            });
        });
    }

    group.finish();
}

fn benchmark_clip(c: &mut Criterion) {
    let mut group = c.benchmark_group("clip");

    let clipper = ClipSpaceClipper::new();

    // Grid of quads sweeping across the right and near planes
    let quads: Vec<Polygon> = (0..20)
        .flat_map(|row| {
            (0..20).map(move |col| {
                let x = col as f32 * 0.2 - 1.0;
                let z = row as f32 * 0.1 - 0.5;
                Polygon::new(
                    [(0.0, 0.0), (0.0, 0.5), (0.5, 0.5), (0.5, 0.0)]
                        .into_iter()
                        .map(|(dx, dy)| {
                            Vertex::from_clip(
                                Vec4::new(x + dx * 2.0, dy - 0.25, z + dx, 1.0),
                                Vec2::new(dx, dy),
                            )
                        })
                        .collect(),
                )
            })
        })
        .collect();

    group.bench_function("400_quads", |b| {
        b.iter(|| {
            quads
                .iter()
                .filter_map(|q| clipper.clip_polygon(black_box(q)))
                .count()
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_collide, benchmark_clip);
criterion_main!(benches);
