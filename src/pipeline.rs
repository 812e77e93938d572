//! Per-frame polygon pipeline.
//!
//! World polygons go through back-face culling, the world-to-clip
//! transform, outcode screening, the clip-space clipper and finally the
//! perspective divide into screen space. What comes out is handed to a
//! [`PolygonSink`]; rasterising it is the sink's business.

use log::trace;

use crate::camera::ViewerCamera;
use crate::clipper::{classify, ClipSpaceClipper, Visibility};
use crate::geometry::Polygon;
use crate::math::{Mat4, Vec2, Vec3, Vec4};
use crate::projection::Projection;

/// A vertex after the perspective divide.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ProjectedVertex {
    /// Screen x and y in pixels, and `1/w` in z.
    pub screen: Vec3,
    /// Texture coordinate, pre-divided by `w` when perspective correction is
    /// on.
    pub texture: Vec2,
}

/// Receives every polygon that survives the pipeline.
pub trait PolygonSink {
    fn submit(&mut self, vertices: &[ProjectedVertex]);
}

/// Output surface size and the fraction of it the view fills.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub x_scale: f32,
    pub y_scale: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(640, 480)
    }
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            x_scale: 0.98,
            y_scale: 0.98,
        }
    }

    /// Letterboxed variant that leaves bands above and below the view.
    pub fn widescreen(mut self, enabled: bool) -> Self {
        self.y_scale = if enabled { 0.70 } else { 0.98 };
        self
    }

    pub fn aspect_ratio(&self) -> f32 {
        (self.width as f32 * self.x_scale) / (self.height as f32 * self.y_scale)
    }

    fn center(&self) -> (f32, f32) {
        (self.width as f32 / 2.0, self.height as f32 / 2.0)
    }
}

/// Polygon counts for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub submitted: usize,
    pub backface_culled: usize,
    pub offscreen_culled: usize,
    /// Polygons that went through the clipper, whatever the outcome.
    pub clipped: usize,
    /// Polygons the clipper reduced to nothing.
    pub clip_rejected: usize,
}

/// Transforms, clips and projects polygons for one viewpoint at a time.
#[derive(Debug, Clone)]
pub struct Pipeline {
    viewport: Viewport,
    projection: Projection,
    clipper: ClipSpaceClipper,
    pub backface_culling: bool,
    pub perspective_correct: bool,
    projected: Vec<ProjectedVertex>,
}

impl Pipeline {
    pub fn new(viewport: Viewport, mut projection: Projection) -> Self {
        projection.set_aspect_ratio(viewport.aspect_ratio());
        Self {
            viewport,
            projection,
            clipper: ClipSpaceClipper::new(),
            backface_culling: true,
            perspective_correct: true,
            projected: Vec::new(),
        }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// World-to-clip matrix for an eye at `eye` looking along `camera`.
    pub fn view_projection(&self, camera: &ViewerCamera, eye: Vec3) -> Mat4 {
        self.projection.matrix() * camera.view_matrix(eye)
    }

    /// Runs every polygon through the pipeline into `sink`.
    pub fn render(
        &mut self,
        polygons: &[Polygon],
        camera: &ViewerCamera,
        eye: Vec3,
        sink: &mut dyn PolygonSink,
    ) -> FrameStats {
        let view_projection = self.view_projection(camera, eye);
        let mut stats = FrameStats::default();

        for polygon in polygons {
            let Some(plane) = polygon.plane() else {
                continue;
            };
            if self.backface_culling && plane.distance(eye) < 0.0 {
                stats.backface_culled += 1;
                continue;
            }

            let mut transformed = polygon.clone();
            for v in transformed.vertices_mut() {
                v.clip = view_projection * Vec4::from_vec3(v.world, 1.0);
            }

            match classify(&transformed) {
                Visibility::Outside => {
                    stats.offscreen_culled += 1;
                    continue;
                }
                Visibility::Partial => {
                    stats.clipped += 1;
                    if !self.clipper.clip_in_place(&mut transformed) {
                        stats.clip_rejected += 1;
                        continue;
                    }
                }
                Visibility::Inside => {}
            }

            self.project(&transformed);
            sink.submit(&self.projected);
            stats.submitted += 1;
        }

        trace!("frame: {stats:?}");
        stats
    }

    fn project(&mut self, polygon: &Polygon) {
        let (cx, cy) = self.viewport.center();
        let Viewport {
            x_scale, y_scale, ..
        } = self.viewport;

        self.projected.clear();
        self.projected.extend(polygon.vertices().iter().map(|v| {
            let ow = 1.0 / v.clip.w;
            let texture = if self.perspective_correct {
                v.texture * ow
            } else {
                v.texture
            };
            ProjectedVertex {
                screen: Vec3::new(
                    cx + v.clip.x * ow * cx * x_scale,
                    cy - v.clip.y * ow * cy * y_scale,
                    ow,
                ),
                texture,
            }
        }));
    }
}
