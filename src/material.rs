use crate::aliases::Vec3;
use crate::medium::MediumProperties;

/// Surface description as a bundle of independent capabilities rather than a
/// class hierarchy. The scatter engine resolves the capabilities in a fixed
/// priority order: reflective first, then refractive, else diffuse.
#[derive(Clone, Copy, Debug)]
pub struct Material {
    /// Diffuse albedo, also the tint of a mirror reflection.
    pub color: Vec3,
    /// Tint applied to rays crossing a dielectric boundary.
    pub specular_color: Vec3,
    /// Radiance scale of an emitter, zero for ordinary surfaces.
    pub emittance: f32,
    pub reflective: bool,
    pub refractive: bool,
    /// Only meaningful when `refractive` is set; must be positive.
    pub index_of_refraction: f32,
    /// Medium filling the inside of a closed refractive object.
    pub interior: MediumProperties,
}

impl Material {
    pub fn diffuse(color: &Vec3) -> Material {
        Material {
            color: *color,
            specular_color: Vec3::new(1.0, 1.0, 1.0),
            emittance: 0.0,
            reflective: false,
            refractive: false,
            index_of_refraction: 1.0,
            interior: MediumProperties::vacuum(),
        }
    }

    pub fn mirror(color: &Vec3) -> Material {
        Material {
            color: *color,
            specular_color: Vec3::new(1.0, 1.0, 1.0),
            emittance: 0.0,
            reflective: true,
            refractive: false,
            index_of_refraction: 1.0,
            interior: MediumProperties::vacuum(),
        }
    }

    pub fn glass(specular_color: &Vec3, index_of_refraction: f32) -> Material {
        Material {
            color: Vec3::new(1.0, 1.0, 1.0),
            specular_color: *specular_color,
            emittance: 0.0,
            reflective: false,
            refractive: true,
            index_of_refraction,
            interior: MediumProperties::vacuum(),
        }
    }

    /// Glass whose interior absorbs or scatters light on the way through.
    pub fn tinted_glass(
        specular_color: &Vec3,
        index_of_refraction: f32,
        interior: MediumProperties,
    ) -> Material {
        Material {
            color: Vec3::new(1.0, 1.0, 1.0),
            specular_color: *specular_color,
            emittance: 0.0,
            reflective: false,
            refractive: true,
            index_of_refraction,
            interior,
        }
    }

    pub fn light(color: &Vec3, emittance: f32) -> Material {
        Material {
            color: *color,
            specular_color: Vec3::new(1.0, 1.0, 1.0),
            emittance,
            reflective: false,
            refractive: false,
            index_of_refraction: 1.0,
            interior: MediumProperties::vacuum(),
        }
    }

    pub fn emitted(&self) -> Vec3 {
        self.emittance * self.color
    }
}
