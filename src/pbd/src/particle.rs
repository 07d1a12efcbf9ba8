use crate::config::SimConfig;
use crate::Vn;
use protocol::pr_model::PrParticle;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle<const D: usize> {
	pos: Vn<D>,
	ppos: Vn<D>,
	dragged: bool,
}

impl<const D: usize> Particle<D> {
	pub fn new(pos: Vn<D>) -> Self {
		Self {
			pos,
			ppos: pos, // zero initial velocity
			dragged: false,
		}
	}

	pub fn get_pos(&self) -> Vn<D> {
		self.pos
	}

	pub fn add_pos(&mut self, dp: Vn<D>) {
		self.pos += dp
	}

	// moves without picking up velocity, used for external control
	pub fn reset_pos(&mut self, p: Vn<D>) {
		self.pos = p;
		self.ppos = p;
	}

	pub fn velocity(&self) -> Vn<D> {
		self.pos - self.ppos
	}

	pub fn set_dragged(&mut self, dragged: bool) {
		self.dragged = dragged;
	}

	pub fn is_dragged(&self) -> bool {
		self.dragged
	}

	pub fn integrate(&mut self, cfg: &SimConfig<D>) {
		if self.dragged {
			return;
		}
		let dp = (self.pos - self.ppos) * cfg.damping + cfg.gravity;
		self.ppos = self.pos;
		self.pos += dp;
		cfg.bounds
			.apply(&mut self.pos, &mut self.ppos, cfg.particle_radius);
	}

	pub fn render(&self) -> PrParticle {
		PrParticle {
			pos: self.pos.as_slice().to_vec(),
		}
	}
}
