use ellipsy::prelude::*;

#[derive(Default)]
struct Bounds {
    polygons: usize,
    out_of_view: usize,
    min_vertices: usize,
}

impl PolygonSink for Bounds {
    fn submit(&mut self, vertices: &[ProjectedVertex]) {
        self.polygons += 1;
        if self.min_vertices == 0 || vertices.len() < self.min_vertices {
            self.min_vertices = vertices.len();
        }
        let slack = 0.5;
        let outside = vertices.iter().any(|v| {
            v.screen.x < 320.0 - 320.0 * 0.98 - slack
                || v.screen.x > 320.0 + 320.0 * 0.98 + slack
                || v.screen.y < 240.0 - 240.0 * 0.70 - slack
                || v.screen.y > 240.0 + 240.0 * 0.70 + slack
                || v.screen.z <= 0.0
        });
        if outside {
            self.out_of_view += 1;
        }
    }
}

#[test]
fn every_room_polygon_is_accounted_for() {
    let polygons = RoomBuilder::demo().build();
    let viewport = Viewport::new(640, 480).widescreen(true);
    let mut pipeline = Pipeline::new(viewport, Projection::default());
    let camera = ViewerCamera::new(0.3, -0.1);
    let eye = Vec3::new(0.0, 57.0, -400.0);

    let mut sink = Bounds::default();
    let stats = pipeline.render(&polygons, &camera, eye, &mut sink);

    assert_eq!(
        stats.submitted + stats.backface_culled + stats.offscreen_culled + stats.clip_rejected,
        polygons.len()
    );
    assert_eq!(sink.polygons, stats.submitted);
    assert!(stats.submitted > 0);
    // Standing inside the room, the floor and far wall straddle the view.
    assert!(stats.clipped > 0);
    assert_eq!(sink.out_of_view, 0);
    assert!(sink.min_vertices >= 3);
}

#[test]
fn both_projections_submit_the_same_polygons() {
    let polygons = RoomBuilder::demo().build();
    let camera = ViewerCamera::new(-0.7, 0.2);
    let eye = Vec3::new(100.0, 57.0, 0.0);

    let mut counts = Vec::new();
    for kind in [ProjectionKind::Blinn, ProjectionKind::Direct3D] {
        let mut pipeline = Pipeline::new(
            Viewport::new(640, 480).widescreen(true),
            Projection::default().with_kind(kind),
        );
        let mut sink = Bounds::default();
        counts.push(pipeline.render(&polygons, &camera, eye, &mut sink));
        assert_eq!(sink.out_of_view, 0);
    }
    assert_eq!(counts[0].submitted, counts[1].submitted);
    assert_eq!(counts[0].offscreen_culled, counts[1].offscreen_culled);
}
