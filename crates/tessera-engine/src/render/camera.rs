use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec4};

use crate::coords::Vec3;
use crate::geometry::PyramidParams;

/// Fixed perspective camera. Model space is +Z up.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    /// Looks at the middle of the pyramid from above one base corner, far
    /// enough back that the whole shape fits in view.
    pub fn framing(params: &PyramidParams) -> Self {
        let extent = params
            .height
            .abs()
            .max(params.base_width_x.abs())
            .max(params.base_width_y.abs())
            .max(1.0);

        let target = params.center() + Vec3::new(0.0, 0.0, params.height * 0.5);
        let eye = target + Vec3::new(1.4, -1.8, 1.2) * extent;

        Self {
            eye,
            target,
            up: Vec3::new(0.0, 0.0, 1.0),
            fov_y: 45f32.to_radians(),
            near: extent * 0.01,
            far: extent * 20.0,
        }
    }

    /// Projection times view, for wgpu's `[0, 1]` clip depth.
    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye.into(), self.target.into(), self.up.into());
        let proj = Mat4::perspective_rh(self.fov_y, aspect, self.near, self.far);
        proj * view
    }

    /// Projects a model-space point to normalized device coordinates.
    pub fn project(&self, aspect: f32, point: Vec3) -> Vec3 {
        let clip: Vec4 = self.view_proj(aspect) * glam::Vec3::from(point).extend(1.0);
        let ndc = clip.truncate() / clip.w;
        Vec3::new(ndc.x, ndc.y, ndc.z)
    }
}

/// Camera uniform as laid out in `vertex_color.wgsl`.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(crate) struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    pub(crate) fn new(camera: &Camera, aspect: f32) -> Self {
        Self {
            view_proj: camera.view_proj(aspect).to_cols_array_2d(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::build_pyramid;

    fn inside_clip(p: Vec3) -> bool {
        p.x.abs() <= 1.0 && p.y.abs() <= 1.0 && (0.0..=1.0).contains(&p.z)
    }

    #[test]
    fn target_projects_to_screen_center() {
        let params = PyramidParams::default();
        let cam = Camera::framing(&params);
        let ndc = cam.project(16.0 / 9.0, cam.target);
        assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5, "{ndc:?}");
    }

    #[test]
    fn framing_keeps_every_corner_in_view() {
        for params in [
            PyramidParams::default(),
            PyramidParams::new(5.0, 100.0, -40.0, 3.0, 30.0, 2.0),
            PyramidParams::new(-8.0, 0.0, 0.0, 0.0, 4.0, 4.0),
        ] {
            let cam = Camera::framing(&params);
            for &p in &build_pyramid(&params).positions {
                assert!(inside_clip(cam.project(1.0, p)), "{params:?} {p:?}");
            }
        }
    }

    #[test]
    fn degenerate_pyramid_still_has_usable_camera() {
        let cam = Camera::framing(&PyramidParams::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0));
        assert!(cam.near > 0.0 && cam.far > cam.near);
        assert!(cam.view_proj(1.0).is_finite());
    }
}
