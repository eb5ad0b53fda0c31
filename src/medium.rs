use crate::aliases::Vec3;
use crate::ray::Ray;
use crate::sampling;

/// Homogeneous participating medium filling the inside of a surface.
///
/// Absorption is per channel, scattering is isotropic with a scalar reduced
/// coefficient. A zeroed medium behaves exactly like vacuum.
#[derive(Clone, Copy, Debug)]
pub struct MediumProperties {
    /// Per-channel absorption coefficient, in inverse scene units.
    pub absorption: Vec3,
    /// Reduced scattering coefficient sigma_s'.
    pub reduced_scattering: f32,
}

impl MediumProperties {
    pub fn new(absorption: &Vec3, reduced_scattering: f32) -> MediumProperties {
        MediumProperties {
            absorption: *absorption,
            reduced_scattering,
        }
    }

    pub fn vacuum() -> MediumProperties {
        MediumProperties {
            absorption: Vec3::new(0.0, 0.0, 0.0),
            reduced_scattering: 0.0,
        }
    }

    pub fn is_vacuum(&self) -> bool {
        self.reduced_scattering <= 0.0 && self.absorption.max() <= 0.0
    }

    /// Beer-Lambert transmission over `distance`, per channel.
    pub fn transmission(&self, distance: f32) -> Vec3 {
        self.absorption.map(|a| (-a * distance).exp())
    }

    /// Free-path length sampled from the exponential distribution with rate
    /// `reduced_scattering`.
    /// * `xi` - uniform in [0,1).
    pub fn scatter_distance(&self, xi: f32) -> f32 {
        debug_assert!(self.reduced_scattering > 0.0);
        -(1.0 - xi).ln() / self.reduced_scattering
    }
}

/// Advances a ray through `medium` toward a surface `depth` units away.
///
/// Either the ray scatters in the volume before reaching the surface, in
/// which case its origin moves to the scattering point, its direction is
/// redrawn uniformly over the sphere, `depth` shrinks to the distance
/// actually traveled and the function returns true, or the ray reaches the
/// surface and false is returned. In both cases `unabsorbed` is attenuated
/// by the transmission over the traveled distance.
/// * `xi_distance`, `xi1`, `xi2` - independent uniforms in [0,1).
pub fn scatter_and_absorb(
    ray: &mut Ray,
    depth: &mut f32,
    medium: &MediumProperties,
    unabsorbed: &mut Vec3,
    xi_distance: f32,
    xi1: f32,
    xi2: f32,
) -> bool {
    if medium.is_vacuum() {
        return false;
    }
    if medium.reduced_scattering > 0.0 {
        let distance = medium.scatter_distance(xi_distance);
        if distance < *depth {
            *unabsorbed = unabsorbed.component_mul(&medium.transmission(distance));
            let origin = ray.evaluate(distance);
            *ray = Ray::new(&origin, &sampling::uniform_sphere(xi1, xi2));
            *depth = distance;
            return true;
        }
    }
    *unabsorbed = unabsorbed.component_mul(&medium.transmission(*depth));
    false
}
