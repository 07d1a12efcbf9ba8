use crate::Vn;

// axis-aligned extents, +-inf leaves an axis open
#[derive(Clone, Debug)]
pub struct BoundBox<const D: usize> {
	min: [f32; D],
	max: [f32; D],
	restitution: f32,
}

impl<const D: usize> Default for BoundBox<D> {
	fn default() -> Self {
		// floor only
		let mut min = [f32::NEG_INFINITY; D];
		min[1] = -2.0;
		Self {
			min,
			max: [f32::INFINITY; D],
			restitution: 0.5,
		}
	}
}

impl<const D: usize> BoundBox<D> {
	pub fn new(min: [f32; D], max: [f32; D]) -> Self {
		Self {
			min,
			max,
			restitution: 0.5,
		}
	}

	pub fn floor(height: f32) -> Self {
		let mut min = [f32::NEG_INFINITY; D];
		min[1] = height;
		Self {
			min,
			max: [f32::INFINITY; D],
			restitution: 0.5,
		}
	}

	pub fn with_restitution(mut self, restitution: f32) -> Self {
		self.restitution = restitution;
		self
	}

	// clamp to the permitted range, shrunk by radius, and reflect ppos
	// across the wall so the verlet velocity comes out damped and reversed
	pub fn apply(
		&self,
		pos: &mut Vn<D>,
		ppos: &mut Vn<D>,
		radius: f32,
	) -> bool {
		let mut flag = false;
		for axis in 0..D {
			let lo = self.min[axis] + radius;
			let hi = self.max[axis] - radius;
			if pos[axis] < lo {
				let v = pos[axis] - ppos[axis];
				pos[axis] = lo;
				ppos[axis] = pos[axis] + v * self.restitution;
				flag = true;
			} else if pos[axis] > hi {
				let v = pos[axis] - ppos[axis];
				pos[axis] = hi;
				ppos[axis] = pos[axis] + v * self.restitution;
				flag = true;
			}
		}
		flag
	}
}
