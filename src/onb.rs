use crate::aliases::Vec3;

/// Orthonormal basis {u, v, w}.
pub struct Onb {
    axis: [Vec3; 3],
}

/// A unit vector always has at least one component below sqrt(1/3), so the
/// seed axis chosen against that bound can never be near-parallel to w.
const SQRT_ONE_THIRD: f32 = 0.577_350_3;

impl Onb {
    /// Build an orthonormal basis around a given w direction.
    /// `w_dir` is not required to be normalized.
    pub fn build_from_w(w_dir: &Vec3) -> Self {
        let w = w_dir.normalize();
        let seed = if w[0].abs() < SQRT_ONE_THIRD {
            Vec3::new(1.0, 0.0, 0.0)
        } else if w[1].abs() < SQRT_ONE_THIRD {
            Vec3::new(0.0, 1.0, 0.0)
        } else {
            Vec3::new(0.0, 0.0, 1.0)
        };
        let v = w.cross(&seed).normalize();
        let u = v.cross(&w);
        Onb { axis: [u, v, w] }
    }
    pub fn u(&self) -> &Vec3 {
        &self.axis[0]
    }
    pub fn v(&self) -> &Vec3 {
        &self.axis[1]
    }
    pub fn w(&self) -> &Vec3 {
        &self.axis[2]
    }
    pub fn local_to_global_vec(&self, uvw: &Vec3) -> Vec3 {
        uvw[0] * self.u() + uvw[1] * self.v() + uvw[2] * self.w()
    }
}
