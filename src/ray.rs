use crate::aliases::Vec3;

/// A ray owned by the integrator for the lifetime of one path; a scatter
/// event rewrites origin and direction in place for the next bounce.
#[derive(Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3, // unit length
}

impl Ray {
    pub fn new(origin: &Vec3, direction: &Vec3) -> Self {
        Ray {
            origin: *origin,
            direction: *direction,
        }
    }
    pub fn evaluate(&self, t: f32) -> Vec3 {
        self.origin + t * self.direction
    }
}
