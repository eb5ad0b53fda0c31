use crate::aliases::Vec3;
use crate::material::Material;
use crate::ray::Ray;

/// Surface interaction found by intersection testing. The normal is the
/// outward geometric normal, unit length; which side the ray arrived from
/// is resolved later by the scatter engine.
pub struct HitRecord<'m> {
    pub t: f32,
    pub point: Vec3,
    pub normal: Vec3,
    pub material: &'m Material,
}

pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Material,
}

impl Sphere {
    pub fn new(center: &Vec3, radius: f32, material: Material) -> Self {
        debug_assert!(radius > 0.0);
        Sphere {
            center: *center,
            radius,
            material,
        }
    }

    /// Nearest intersection parameter in the open interval (t_min, t_max).
    fn hit_parameter(&self, ray: &Ray, t_min: f32, t_max: f32) -> Option<f32> {
        let oc = ray.origin - self.center;
        let a = ray.direction.dot(&ray.direction);
        let b = oc.dot(&ray.direction);
        let c = oc.dot(&oc) - self.radius * self.radius;
        let disc = b * b - a * c;
        if disc <= 0.0 {
            return None;
        }
        let disc_rt = disc.sqrt();
        let t = (-b - disc_rt) / a;
        if t_min < t && t < t_max {
            return Some(t);
        }
        let t = (-b + disc_rt) / a;
        if t_min < t && t < t_max {
            return Some(t);
        }
        None
    }

    pub fn hit(&self, ray: &Ray, t_min: f32, t_max: f32) -> Option<HitRecord> {
        self.hit_parameter(ray, t_min, t_max).map(|t| {
            let point = ray.evaluate(t);
            HitRecord {
                t,
                point,
                normal: (point - self.center) / self.radius,
                material: &self.material,
            }
        })
    }
}

/// Backdrop for rays that leave the scene, blended by ray elevation.
pub struct Sky {
    pub horizon: Vec3,
    pub zenith: Vec3,
}

impl Sky {
    pub fn black() -> Sky {
        Sky {
            horizon: Vec3::new(0.0, 0.0, 0.0),
            zenith: Vec3::new(0.0, 0.0, 0.0),
        }
    }

    pub fn color(&self, ray: &Ray) -> Vec3 {
        let t = 0.5 * (ray.direction.normalize()[1] + 1.0);
        (1.0 - t) * self.horizon + t * self.zenith
    }
}

pub struct Scene {
    pub spheres: Vec<Sphere>,
    pub sky: Sky,
}

impl Scene {
    /// Closest hit across the whole scene, if any.
    pub fn hit(&self, ray: &Ray, t_min: f32, t_max: f32) -> Option<HitRecord> {
        let mut closest = t_max;
        let mut record = None;
        for sphere in &self.spheres {
            if let Some(hit) = sphere.hit(ray, t_min, closest) {
                closest = hit.t;
                record = Some(hit);
            }
        }
        record
    }
}
