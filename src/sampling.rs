use crate::aliases::{Vec2, Vec3};
use crate::onb::Onb;
use std::f32::consts::PI;

/// Cosine-weighted unit direction in the hemisphere around `normal`.
///
/// Importance-samples the Lambertian lobe: the polar angle has density
/// cos(theta)/pi, so a diffuse Monte-Carlo estimator needs no explicit
/// cosine factor.
/// * `normal` - must be unit length.
/// * `xi1`, `xi2` - independent uniforms in [0,1).
pub fn cosine_hemisphere(normal: &Vec3, xi1: f32, xi2: f32) -> Vec3 {
    let up = xi1.sqrt(); // cos(theta)
    let over = (1.0 - up * up).sqrt(); // sin(theta)
    let around = 2.0 * PI * xi2;
    let basis = Onb::build_from_w(normal);
    basis.local_to_global_vec(&Vec3::new(around.cos() * over, around.sin() * over, up))
}

/// Unit direction distributed uniformly over the full sphere, for isotropic
/// in-scattering inside a medium.
/// * `xi1`, `xi2` - independent uniforms in [0,1).
pub fn uniform_sphere(xi1: f32, xi2: f32) -> Vec3 {
    let theta = 2.0 * PI * xi1;
    let phi = (2.0 * xi2 - 1.0).acos();
    // Renormalize to absorb the drift of the trigonometric round trip.
    Vec3::new(phi.sin() * theta.sin(), phi.sin() * theta.cos(), phi.cos()).normalize()
}

/// Uniform point on the unit disc via the polar map (no rejection loop).
/// * `xi1`, `xi2` - independent uniforms in [0,1).
pub fn uniform_disc(xi1: f32, xi2: f32) -> Vec2 {
    let r = xi1.sqrt();
    let phi = 2.0 * PI * xi2;
    Vec2::new(r * phi.cos(), r * phi.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aliases::RandGen;
    use rand::{Rng, SeedableRng};

    #[test]
    fn cosine_hemisphere_stays_in_hemisphere() {
        const SAMPLE_CNT: usize = 2000;
        let normals = [
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::new(1.0, 1.0, 1.0).normalize(),
            Vec3::new(-0.3, 0.8, 0.1).normalize(),
        ];
        let mut rng = RandGen::seed_from_u64(7);
        for normal in &normals {
            for _ in 0..SAMPLE_CNT {
                let dir = cosine_hemisphere(normal, rng.gen(), rng.gen());
                assert!((dir.norm() - 1.0).abs() < 1e-4);
                assert!(dir.dot(normal) >= -1e-6);
            }
        }
    }

    #[test]
    fn cosine_hemisphere_is_cosine_weighted() {
        // Under the density cos(theta)/pi the expected cosine is 2/3.
        const SAMPLE_CNT: usize = 200_000;
        let normal = Vec3::new(0.0, 1.0, 0.0);
        let mut rng = RandGen::seed_from_u64(11);
        let mut sum = 0.0f64;
        for _ in 0..SAMPLE_CNT {
            sum += cosine_hemisphere(&normal, rng.gen(), rng.gen()).dot(&normal) as f64;
        }
        let mean = sum / SAMPLE_CNT as f64;
        println!("[cosine_hemisphere_is_cosine_weighted] mean cosine: {}", mean);
        assert!((mean - 2.0 / 3.0).abs() < 0.01);
    }

    #[test]
    fn cosine_hemisphere_zero_sample_lies_in_tangent_plane() {
        let normal = Vec3::new(0.0, 1.0, 0.0);
        let dir = cosine_hemisphere(&normal, 0.0, 0.0);
        assert!((dir.norm() - 1.0).abs() < 1e-6);
        assert!(dir.dot(&normal).abs() < 1e-6);
    }

    #[test]
    fn uniform_sphere_is_balanced() {
        const SAMPLE_CNT: usize = 100_000;
        let mut rng = RandGen::seed_from_u64(13);
        let mut mean = Vec3::new(0.0, 0.0, 0.0);
        let mut upper = 0usize;
        for _ in 0..SAMPLE_CNT {
            let dir = uniform_sphere(rng.gen(), rng.gen());
            assert!((dir.norm() - 1.0).abs() < 1e-5);
            mean += dir;
            if dir[2] > 0.0 {
                upper += 1;
            }
        }
        mean /= SAMPLE_CNT as f32;
        assert!(mean.norm() < 0.02);
        let upper_fraction = upper as f32 / SAMPLE_CNT as f32;
        assert!((upper_fraction - 0.5).abs() < 0.02);
    }

    #[test]
    fn uniform_disc_stays_in_disc() {
        const SAMPLE_CNT: usize = 100_000;
        let mut rng = RandGen::seed_from_u64(17);
        let mut radius_sum = 0.0f64;
        for _ in 0..SAMPLE_CNT {
            let p = uniform_disc(rng.gen(), rng.gen());
            let r = p.norm();
            assert!(r <= 1.0 + 1e-6);
            radius_sum += r as f64;
        }
        // Mean radius of the uniform disc is 2/3.
        let mean = radius_sum / SAMPLE_CNT as f64;
        assert!((mean - 2.0 / 3.0).abs() < 0.01);
    }
}
