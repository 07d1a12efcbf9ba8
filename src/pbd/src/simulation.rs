use std::sync::mpsc::{Receiver, Sender};
use std::time::{Duration, SystemTime};

use crate::chassis::ChassisModel;
use crate::collision;
use crate::config::SimConfig;
use crate::constraint::SpringConstraint;
use crate::controller_message::ControllerMessage;
use crate::error::SimError;
use crate::particle::Particle;
use crate::Vn;
use protocol::pr_model::{PrConstraint, PrModel};
use protocol::user_event::{UpdateInfo, UserEvent};

pub struct Simulation<const D: usize> {
	cfg: SimConfig<D>,
	particles: Vec<Particle<D>>,
	constraints: Vec<SpringConstraint>,

	// -1: always play
	// 0: pause
	// n: play n frames
	forward_frames: i32,
}

impl<const D: usize> Simulation<D> {
	pub fn new(cfg: SimConfig<D>) -> Self {
		let mut result = Self {
			cfg,
			particles: Vec::new(),
			constraints: Vec::new(),
			forward_frames: -1,
		};
		result.rebuild();
		result
	}

	pub fn with_paused(mut self) -> Self {
		self.forward_frames = 1; // provide first frame
		self
	}

	fn rebuild(&mut self) {
		let model = ChassisModel::new_box(
			self.cfg.half_extent,
			self.cfg.frame_stiffness,
			self.cfg.spoke_stiffness,
			self.cfg.yield_thresh,
			self.cfg.plas_k,
		);
		self.particles =
			model.particles.iter().map(|&p| Particle::new(p)).collect();
		self.constraints = model.constraints;
	}

	// the only way to undo plastic deformation
	pub fn reset(&mut self) {
		eprintln!("INFO: rebuild chassis");
		self.rebuild();
	}

	pub fn step(&mut self) {
		self.integrate();
		for _ in 0..self.cfg.iterations {
			for c in self.constraints.iter_mut() {
				c.solve(&mut self.particles);
			}
			collision::resolve_pairs(
				&mut self.particles,
				self.cfg.particle_radius,
			);
		}
	}

	#[cfg(not(debug_assertions))]
	fn integrate(&mut self) {
		use rayon::prelude::*;
		let cfg = &self.cfg;
		self.particles
			.par_iter_mut()
			.for_each(|p| p.integrate(cfg));
	}

	#[cfg(debug_assertions)]
	fn integrate(&mut self) {
		let cfg = &self.cfg;
		self.particles.iter_mut().for_each(|p| p.integrate(cfg));
	}

	pub fn particle_len(&self) -> usize {
		self.particles.len()
	}

	pub fn constraint_len(&self) -> usize {
		self.constraints.len()
	}

	fn check_particle(&self, index: usize) -> Result<(), SimError> {
		if index >= self.particles.len() {
			return Err(SimError::ParticleOutOfBounds {
				index,
				count: self.particles.len(),
			});
		}
		Ok(())
	}

	pub fn particle_pos(&self, index: usize) -> Result<Vn<D>, SimError> {
		self.check_particle(index)?;
		Ok(self.particles[index].get_pos())
	}

	pub fn constraint_ends(
		&self,
		index: usize,
	) -> Result<(Vn<D>, Vn<D>), SimError> {
		let c = self.constraints.get(index).ok_or(
			SimError::ConstraintOutOfBounds {
				index,
				count: self.constraints.len(),
			},
		)?;
		let [a, b] = c.endpoints();
		Ok((self.particles[a].get_pos(), self.particles[b].get_pos()))
	}

	pub fn constraint_rest_length(
		&self,
		index: usize,
	) -> Result<f32, SimError> {
		self.constraints
			.get(index)
			.map(|c| c.rest_length())
			.ok_or(SimError::ConstraintOutOfBounds {
				index,
				count: self.constraints.len(),
			})
	}

	// external control: the particle follows the target exactly and
	// drops all velocity, constraints still pull on its neighbors
	pub fn begin_drag(
		&mut self,
		index: usize,
		target: Vn<D>,
	) -> Result<(), SimError> {
		self.check_particle(index)?;
		let p = &mut self.particles[index];
		p.set_dragged(true);
		p.reset_pos(target);
		Ok(())
	}

	pub fn update_drag(
		&mut self,
		index: usize,
		target: Vn<D>,
	) -> Result<(), SimError> {
		self.check_particle(index)?;
		let p = &mut self.particles[index];
		if !p.is_dragged() {
			return Err(SimError::NotControlled(index));
		}
		p.reset_pos(target);
		Ok(())
	}

	pub fn end_drag(&mut self, index: usize) -> Result<(), SimError> {
		self.check_particle(index)?;
		self.particles[index].set_dragged(false);
		Ok(())
	}

	pub fn pr_model(&self) -> PrModel {
		let particles = self
			.particles
			.iter()
			.enumerate()
			.map(|(id, p)| (id, p.render()))
			.collect();
		let constraints = self
			.constraints
			.iter()
			.enumerate()
			.map(|(id, c)| PrConstraint {
				id,
				particles: c.endpoints().to_vec(),
			})
			.collect();
		PrModel {
			particles,
			constraints,
		}
	}

	fn handle_message(&mut self, msg: ControllerMessage<D>) {
		match msg {
			ControllerMessage::TogglePause => {
				if self.forward_frames == 0 {
					self.forward_frames = -1;
				} else {
					self.forward_frames = 0;
				}
			}
			ControllerMessage::FrameForward => {
				if self.forward_frames == 0 {
					self.forward_frames = 1;
				}
			}
			ControllerMessage::Reset => self.reset(),
			ControllerMessage::ControlParticle(index, pos) => {
				if let Err(e) = self.begin_drag(index, Vn::from(pos)) {
					eprintln!("WARN: {}", e);
				}
			}
			ControllerMessage::UncontrolParticle(index) => {
				if let Err(e) = self.end_drag(index) {
					eprintln!("WARN: {}", e);
				}
			}
		}
	}

	// paced frame loop, messages apply strictly between frames;
	// returns when the event receiver hangs up
	pub fn run_thread(
		&mut self,
		tx: Sender<UserEvent>,
		rx: Receiver<ControllerMessage<D>>,
	) {
		let frame_time = self.cfg.frame_micros;
		loop {
			let frame_start = SystemTime::now();
			while let Ok(msg) = rx.try_recv() {
				self.handle_message(msg);
			}
			if self.forward_frames != 0 {
				if self.forward_frames > 0 {
					self.forward_frames -= 1;
				}
				self.step();
				let busy = SystemTime::now()
					.duration_since(frame_start)
					.unwrap()
					.as_micros() as u64;
				let info = UpdateInfo {
					load: busy as f32 / frame_time as f32,
					particle_len: self.particle_len(),
					constraint_len: self.constraint_len(),
				};
				let event = UserEvent::Update(self.pr_model(), info);
				if tx.send(event).is_err() {
					return;
				}
			}
			let busy = SystemTime::now()
				.duration_since(frame_start)
				.unwrap()
				.as_micros() as u64;
			if busy < frame_time {
				std::thread::sleep(Duration::from_micros(frame_time - busy));
			}
		}
	}
}
