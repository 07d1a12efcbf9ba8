use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use pbd::bounds::BoundBox;
use pbd::config::SimConfig;
use pbd::controller_message::ControllerMessage;
use pbd::error::SimError;
use pbd::simulation::Simulation;
use pbd::V2;
use protocol::user_event::UserEvent;

fn positions(sim: &Simulation<2>) -> Vec<V2> {
	(0..sim.particle_len())
		.map(|i| sim.particle_pos(i).unwrap())
		.collect()
}

fn rest_lengths(sim: &Simulation<2>) -> Vec<f32> {
	(0..sim.constraint_len())
		.map(|i| sim.constraint_rest_length(i).unwrap())
		.collect()
}

// spokes are the constraints touching the center particle
fn spoke_ids(sim: &Simulation<2>) -> Vec<usize> {
	let center = sim.particle_len() - 1;
	sim.pr_model()
		.constraints
		.iter()
		.filter(|c| c.particles.contains(&center))
		.map(|c| c.id)
		.collect()
}

#[test]
fn reset_restores_initial_geometry() {
	let cfg = SimConfig::<2>::default();
	let mut sim = Simulation::new(cfg.clone());
	let fresh = Simulation::new(cfg);

	for _ in 0..300 {
		sim.step();
	}
	let center = sim.particle_len() - 1;
	let target = sim.particle_pos(center).unwrap() + V2::new(0.8, 0.5);
	sim.begin_drag(center, target).unwrap();
	for _ in 0..100 {
		sim.update_drag(center, target).unwrap();
		sim.step();
	}
	sim.end_drag(center).unwrap();
	for _ in 0..100 {
		sim.step();
	}

	sim.reset();
	assert_eq!(positions(&sim), positions(&fresh));
	assert_eq!(rest_lengths(&sim), rest_lengths(&fresh));
}

#[test]
fn chassis_settles_on_floor() {
	let cfg = SimConfig::<2>::default();
	let floor = -2.0 + cfg.particle_radius;
	let mut sim = Simulation::new(cfg);
	for _ in 0..2500 {
		sim.step();
	}
	let ps = positions(&sim);
	// relaxation may leave a small residual below the clamp line
	for p in ps.iter() {
		assert!(p[1] >= floor - 0.05, "below floor: {}", p[1]);
	}
	let min_y = ps.iter().map(|p| p[1]).fold(f32::INFINITY, f32::min);
	assert!(min_y <= floor + 0.05, "still airborne: {}", min_y);
	// nearly at rest
	for i in 0..sim.particle_len() {
		let before = sim.particle_pos(i).unwrap();
		sim.step();
		let after = sim.particle_pos(i).unwrap();
		assert!((after - before).magnitude() < 1e-2);
	}
}

#[test]
fn sustained_drag_leaves_permanent_dent() {
	let mut sim = Simulation::new(SimConfig::<2>::default());
	for _ in 0..800 {
		sim.step();
	}
	let spokes = spoke_ids(&sim);
	assert_eq!(spokes.len(), 4);
	let before = rest_lengths(&sim);

	let center = sim.particle_len() - 1;
	let target = sim.particle_pos(center).unwrap() + V2::new(0.6, 0.3);
	sim.begin_drag(center, target).unwrap();
	for _ in 0..150 {
		sim.update_drag(center, target).unwrap();
		sim.step();
	}
	sim.end_drag(center).unwrap();
	for _ in 0..300 {
		sim.step();
	}

	let after = rest_lengths(&sim);
	let dent: f32 = spokes
		.iter()
		.map(|&i| (after[i] - before[i]).abs())
		.fold(0., f32::max);
	assert!(dent > 0.02, "no plastic drift on spokes: {}", dent);
}

#[test]
fn identical_runs_stay_identical() {
	let mut a = Simulation::new(SimConfig::<2>::default());
	let mut b = Simulation::new(SimConfig::<2>::default());
	let drive = |sim: &mut Simulation<2>| {
		for f in 0..500 {
			if f == 100 {
				sim.begin_drag(0, V2::new(-2., 0.)).unwrap();
			}
			if f == 200 {
				sim.end_drag(0).unwrap();
			}
			sim.step();
		}
	};
	drive(&mut a);
	drive(&mut b);
	assert_eq!(positions(&a), positions(&b));
	assert_eq!(rest_lengths(&a), rest_lengths(&b));
}

#[test]
fn interaction_rejects_bad_handles() {
	let mut sim = Simulation::new(SimConfig::<2>::default());
	let count = sim.particle_len();
	assert_eq!(
		sim.begin_drag(count, V2::zeros()),
		Err(SimError::ParticleOutOfBounds {
			index: count,
			count,
		})
	);
	assert_eq!(
		sim.update_drag(0, V2::zeros()),
		Err(SimError::NotControlled(0))
	);
	assert!(sim.particle_pos(count).is_err());
	assert!(sim.constraint_ends(sim.constraint_len()).is_err());
}

#[test]
fn run_thread_pauses_and_hangs_up() {
	let (tx, rx) = mpsc::channel();
	let (ctrl_tx, ctrl_rx) = mpsc::channel::<ControllerMessage<2>>();
	let handle = thread::spawn(move || {
		let cfg = SimConfig::<2>::default()
			.with_bounds(BoundBox::new([-4., -2.], [4., 2.]))
			.with_frame_micros(2000);
		let mut sim = Simulation::new(cfg).with_paused();
		sim.run_thread(tx, ctrl_rx);
	});
	// paused after the first frame
	let UserEvent::Update(model, info) = rx.recv().unwrap();
	assert_eq!(info.particle_len, 5);
	assert_eq!(info.constraint_len, 10);
	assert_eq!(model.particles.len(), 5);
	assert_eq!(model.particles[&0].pos.len(), 2);
	assert!(rx.recv_timeout(Duration::from_millis(100)).is_err());

	// single-step produces exactly one frame
	ctrl_tx.send(ControllerMessage::FrameForward).unwrap();
	let UserEvent::Update(_, _) = rx.recv().unwrap();
	assert!(rx.recv_timeout(Duration::from_millis(100)).is_err());

	// bad handles are logged, not fatal
	ctrl_tx
		.send(ControllerMessage::ControlParticle(99, [0., 0.]))
		.unwrap();
	ctrl_tx.send(ControllerMessage::Reset).unwrap();
	ctrl_tx.send(ControllerMessage::TogglePause).unwrap();
	let UserEvent::Update(_, _) = rx.recv().unwrap();
	drop(rx);
	handle.join().unwrap();
}
