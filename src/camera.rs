use crate::aliases::{RandGen, Vec3};
use crate::ray::Ray;
use crate::sampling;
use rand::Rng;
use std::f32::consts::PI;

/// Thin-lens camera. A zero lens radius gives a pinhole.
pub struct Camera {
    lower_left_corner: Vec3,
    horizontal: Vec3,
    vertical: Vec3,
    origin: Vec3,
    lens_radius: f32,
    u: Vec3, // unit vector directing right
    v: Vec3, // unit vector directing up
}

impl Camera {
    pub fn new(
        look_from: &Vec3,
        look_at: &Vec3,
        view_up: &Vec3,
        vfov: f32,   // vertical field of view in degrees
        aspect: f32, // width over height
        lens_radius: f32,
        focus_dist: f32,
    ) -> Self {
        let theta = vfov * PI / 180.0;
        let half_height = (theta * 0.5).tan();
        let half_width = aspect * half_height;
        let origin = *look_from;
        let w = (look_from - look_at).normalize();
        let u = view_up.cross(&w).normalize();
        let v = w.cross(&u);
        let lower_left_corner = origin - focus_dist * (half_width * u + half_height * v + w);
        Camera {
            lower_left_corner,
            horizontal: u * 2.0 * focus_dist * half_width,
            vertical: v * 2.0 * focus_dist * half_height,
            origin,
            lens_radius,
            u,
            v,
        }
    }

    /// Primary ray through film coordinates (s, t) in [0,1]^2, jittered over
    /// the lens aperture. The returned direction is unit length.
    pub fn get_ray(&self, s: f32, t: f32, rng: &mut RandGen) -> Ray {
        let lens = self.lens_radius * sampling::uniform_disc(rng.gen(), rng.gen());
        let offset = lens.x * self.u + lens.y * self.v;
        let direction = (self.lower_left_corner + s * self.horizontal + t * self.vertical
            - self.origin
            - offset)
            .normalize();
        Ray::new(&(self.origin + offset), &direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aliases::RandGen;
    use rand::SeedableRng;

    fn pinhole() -> Camera {
        Camera::new(
            &Vec3::new(0.0, 0.0, 0.0),
            &Vec3::new(0.0, 0.0, -1.0),
            &Vec3::new(0.0, 1.0, 0.0),
            90.0,
            1.0,
            0.0,
            1.0,
        )
    }

    #[test]
    fn center_ray_points_at_the_look_target() {
        let camera = pinhole();
        let mut rng = RandGen::seed_from_u64(79);
        let ray = camera.get_ray(0.5, 0.5, &mut rng);
        assert!((ray.origin - Vec3::new(0.0, 0.0, 0.0)).norm() < 1e-6);
        assert!((ray.direction - Vec3::new(0.0, 0.0, -1.0)).norm() < 1e-5);
    }

    #[test]
    fn film_corners_span_the_field_of_view() {
        let camera = pinhole();
        let mut rng = RandGen::seed_from_u64(83);
        // 90 degree vertical fov at aspect 1 puts the corners one focus
        // length out in every direction.
        let lower_left = camera.get_ray(0.0, 0.0, &mut rng);
        let expected = Vec3::new(-1.0, -1.0, -1.0).normalize();
        assert!((lower_left.direction - expected).norm() < 1e-5);
        let upper_right = camera.get_ray(1.0, 1.0, &mut rng);
        let expected = Vec3::new(1.0, 1.0, -1.0).normalize();
        assert!((upper_right.direction - expected).norm() < 1e-5);
    }

    #[test]
    fn lens_rays_stay_unit_length_and_inside_the_aperture() {
        let camera = Camera::new(
            &Vec3::new(0.0, 1.0, 4.0),
            &Vec3::new(0.0, 0.0, 0.0),
            &Vec3::new(0.0, 1.0, 0.0),
            40.0,
            1.5,
            0.2,
            4.0,
        );
        let mut rng = RandGen::seed_from_u64(89);
        for _ in 0..200 {
            let ray = camera.get_ray(0.5, 0.5, &mut rng);
            assert!((ray.direction.norm() - 1.0).abs() < 1e-5);
            // Aperture origins stay within the lens radius of the pivot.
            assert!((ray.origin - Vec3::new(0.0, 1.0, 4.0)).norm() <= 0.2 + 1e-5);
        }
    }
}
