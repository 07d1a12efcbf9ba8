use std::time::SystemTime;

use pbd::config::SimConfig;
use pbd::simulation::Simulation;
use rand::Rng;

// 3d chassis under periodic random pokes, reports wall time
// relative to the simulated frame budget
fn main() {
	let mut rng = rand::thread_rng();
	let cfg = SimConfig::<3>::default();
	let frame_micros = cfg.frame_micros;
	let mut sim = Simulation::new(cfg);
	let mut grabbed: Option<usize> = None;
	let start = SystemTime::now();
	let frames = 10000;
	for f in 0..frames {
		match f % 120 {
			0 => {
				let index = rng.gen_range(0..sim.particle_len());
				let mut target = sim.particle_pos(index).unwrap();
				target[0] += rng.gen_range(-0.6..0.6);
				target[1] += rng.gen_range(-0.6..0.6);
				sim.begin_drag(index, target).unwrap();
				grabbed = Some(index);
			}
			60 => {
				if let Some(index) = grabbed.take() {
					sim.end_drag(index).unwrap();
				}
			}
			_ => {}
		}
		sim.step();
	}
	let time = frames as f32 * frame_micros as f32;
	let duration = SystemTime::now().duration_since(start).unwrap().as_micros();
	eprintln!("{:.3}%", duration as f32 / time * 1e2);
}
