use bounce::aliases::Vec3;
use bounce::bsdf::ScatterConfig;
use bounce::camera::Camera;
use bounce::material::Material;
use bounce::medium::MediumProperties;
use bounce::random;
use bounce::scene::{Scene, Sky, Sphere};
use itertools::iproduct;
use rand::Rng;
use std::path::Path;
use std::sync::mpsc::channel;
use std::sync::mpsc::Sender;
use std::time::{Duration, Instant};

const MAX_DEPTH: u32 = 50;

struct ColorSum {
    nx: i32,
    ny: i32,
    pub count: i32,
    pub sum: Vec<Vec3>,
}

impl ColorSum {
    pub fn zero(nx: i32, ny: i32) -> Self {
        ColorSum {
            nx,
            ny,
            count: 0,
            sum: vec![Vec3::new(0.0, 0.0, 0.0); (nx as usize) * (ny as usize)],
        }
    }
    pub fn replace_zero(&mut self) -> ColorSum {
        let (x, y) = (self.nx, self.ny);
        std::mem::replace(self, ColorSum::zero(x, y))
    }
    /// Accumulates one sample, dropping non-finite colors so a stray NaN
    /// cannot poison the whole pixel.
    pub fn add_sample(&mut self, index: usize, color: &Vec3) {
        if color.iter().all(|c| c.is_finite()) {
            self.sum[index] += *color;
        }
    }
    pub fn add(&mut self, rhs: ColorSum) {
        debug_assert_eq!((self.nx, self.ny), (rhs.nx, rhs.ny));
        self.count += rhs.count;
        for i in 0..((self.nx as usize) * (self.ny as usize)) {
            self.sum[i] += rhs.sum[i];
        }
    }
    pub fn save_png(&self, prefix: &str, elapsed_time: &Duration) {
        debug_assert!(self.count > 0);
        let mut buffer: Vec<u8> = vec![0; (self.nx as usize) * (self.ny as usize) * 4];
        for idx in 0..((self.nx as usize) * (self.ny as usize)) {
            let col = self.sum[idx] / self.count as f32;
            for c in 0..3 {
                // Gamma 2.0 before quantization.
                buffer[idx * 4 + c] = (255.99 * col[c].max(0.0).sqrt().min(1.0)) as u8;
            }
            buffer[idx * 4 + 3] = 255;
        }
        let _ = image::save_buffer(
            &Path::new(&format!(
                "{}{}rays{}secs.png",
                prefix,
                self.count,
                elapsed_time.as_secs()
            )),
            buffer.as_slice(),
            self.nx as u32,
            self.ny as u32,
            image::ColorType::Rgba8,
        );
    }
}

fn trace_rays(
    nx: i32,
    ny: i32,
    ns: i32,
    thread_index: i32,
    scene: &Scene,
    camera: &Camera,
    report_interval: i32,
    tx: Sender<ColorSum>,
) {
    let config = ScatterConfig::default();
    let mut color_sum = ColorSum::zero(nx, ny);
    for s in 0..ns {
        // Sample indices are disjoint across threads, so every path in the
        // frame gets its own random stream.
        let sample_index = (thread_index * ns + s) as u32;
        for (i, j) in iproduct!(0..nx, 0..ny) {
            let mut rng = random::path_rng((i + j * nx) as u32, sample_index);
            let u = (i as f32 + rng.gen::<f32>()) / nx as f32;
            let v = (j as f32 + rng.gen::<f32>()) / ny as f32;
            let ray = camera.get_ray(u, v, &mut rng);
            let col = bounce::calc_color(&ray, scene, &config, MAX_DEPTH, &mut rng);
            let idx = (i + (ny - j - 1) * nx) as usize;
            color_sum.add_sample(idx, &col);
        }
        color_sum.count += 1;
        if color_sum.count % report_interval == 0 {
            tx.send(color_sum.replace_zero()).unwrap();
        }
    }
    tx.send(color_sum.replace_zero()).unwrap();
}

fn build_scene() -> Scene {
    let mut spheres = Vec::new();
    // Ground.
    spheres.push(Sphere::new(
        &Vec3::new(0.0, -1000.0, 0.0),
        1000.0,
        Material::diffuse(&Vec3::new(0.5, 0.5, 0.5)),
    ));
    // Key light.
    spheres.push(Sphere::new(
        &Vec3::new(-4.0, 7.0, 2.0),
        2.0,
        Material::light(&Vec3::new(1.0, 0.95, 0.85), 12.0),
    ));
    spheres.push(Sphere::new(
        &Vec3::new(-2.2, 1.0, 0.0),
        1.0,
        Material::diffuse(&Vec3::new(0.75, 0.25, 0.2)),
    ));
    spheres.push(Sphere::new(
        &Vec3::new(0.0, 1.0, 0.0),
        1.0,
        Material::mirror(&Vec3::new(0.9, 0.9, 0.9)),
    ));
    spheres.push(Sphere::new(
        &Vec3::new(2.2, 1.0, 0.0),
        1.0,
        Material::glass(&Vec3::new(0.98, 0.98, 0.98), 1.5),
    ));
    spheres.push(Sphere::new(
        &Vec3::new(1.1, 0.45, 1.8),
        0.45,
        Material::tinted_glass(
            &Vec3::new(1.0, 1.0, 1.0),
            1.5,
            MediumProperties::new(&Vec3::new(0.1, 0.6, 1.2), 0.0),
        ),
    ));
    Scene {
        spheres,
        sky: Sky {
            horizon: Vec3::new(1.0, 1.0, 1.0),
            zenith: Vec3::new(0.5, 0.7, 1.0),
        },
    }
}

fn build_camera(aspect: f32) -> Camera {
    Camera::new(
        &Vec3::new(0.0, 2.0, 8.0),
        &Vec3::new(0.0, 1.0, 0.0),
        &Vec3::new(0.0, 1.0, 0.0),
        40.0,
        aspect,
        0.05,
        8.1,
    )
}

fn main() {
    let start_time = Instant::now();
    const IMAGE_WIDTH: i32 = 400;
    const IMAGE_HEIGHT: i32 = 300;
    const RAYS_PER_PIXEL: i32 = 256;
    const THREAD_CNT: i32 = 4;
    const REPORT_INTERVAL: i32 = 64;
    const FILE_PATH_PREFIX: &str = "renders/image_";
    let aspect = IMAGE_WIDTH as f32 / IMAGE_HEIGHT as f32;
    if get_output_dir_if_exists(Path::new(FILE_PATH_PREFIX)).is_none() {
        println!(
            "Wrong FILE_PATH_PREFIX (directory does not exist): {}",
            FILE_PATH_PREFIX
        );
        std::process::exit(1);
    }
    if RAYS_PER_PIXEL % THREAD_CNT != 0 {
        println!("RAYS_PER_PIXEL must be divisible by THREAD_CNT.");
        std::process::exit(1);
    }
    if REPORT_INTERVAL % THREAD_CNT != 0 {
        println!("REPORT_INTERVAL must be divisible by THREAD_CNT.");
        std::process::exit(1);
    }
    println!(
        "FILE_PATH_PREFIX: {}, IMAGE_WIDTH: {}, IMAGE_HEIGHT: {}, RAYS_PER_PIXEL: {}, THREAD_CNT: {}",
        FILE_PATH_PREFIX, IMAGE_WIDTH, IMAGE_HEIGHT, RAYS_PER_PIXEL, THREAD_CNT
    );
    let scene = build_scene();
    let camera = build_camera(aspect);
    println!(
        "Scene constructed. ({:.3} secs elapsed)",
        duration_to_secs(&start_time.elapsed())
    );
    let rays_per_thread = RAYS_PER_PIXEL / THREAD_CNT;

    crossbeam::scope(|scope| {
        let scene = &scene;
        let camera = &camera;
        let (tx, cx) = channel::<ColorSum>();
        let mut opt_tx = Some(tx);
        let mut threads = Vec::new();
        for thread_index in 0..THREAD_CNT {
            let tx = opt_tx.as_ref().unwrap().clone();
            let th = scope.spawn(move |_| {
                trace_rays(
                    IMAGE_WIDTH,
                    IMAGE_HEIGHT,
                    rays_per_thread,
                    thread_index,
                    scene,
                    camera,
                    REPORT_INTERVAL / THREAD_CNT,
                    tx,
                );
            });
            threads.push(th);
        }
        // The save thread exits once every sender is gone, so the spare
        // handle must be dropped before joining it.
        opt_tx.take();
        let save_thread = scope.spawn(move |_| {
            let mut current = ColorSum::zero(IMAGE_WIDTH, IMAGE_HEIGHT);
            let mut cnt = 0;
            loop {
                if let Ok(res) = cx.recv() {
                    current.add(res);
                    cnt += 1;
                    if cnt % THREAD_CNT == 0 {
                        let elapsed_time = start_time.elapsed();
                        current.save_png(FILE_PATH_PREFIX, &elapsed_time);
                    }
                } else {
                    break;
                }
            }
        });
        for th in threads {
            th.join().unwrap();
        }
        save_thread.join().unwrap();
    })
    .unwrap();
    println!(
        "Completed. ({:.3} secs elapsed)",
        duration_to_secs(&start_time.elapsed()),
    );
}

fn get_output_dir_if_exists(path: &Path) -> Option<&Path> {
    path.parent()
        .and_then(|dir| if dir.is_dir() { Some(dir) } else { None })
}

fn duration_to_secs(dur: &Duration) -> f32 {
    dur.as_secs() as f32 + dur.subsec_millis() as f32 * 0.001
}
