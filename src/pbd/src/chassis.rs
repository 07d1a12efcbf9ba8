use crate::constraint::SpringConstraint;
use crate::Vn;

// box skeleton: 2^D corners plus one center particle, stiff frame,
// soft spokes; the spokes are what dent
#[derive(Clone, Debug)]
pub struct ChassisModel<const D: usize> {
	pub particles: Vec<Vn<D>>,
	pub constraints: Vec<SpringConstraint>,
}

impl<const D: usize> ChassisModel<D> {
	pub fn new_box(
		half: Vn<D>,
		frame_stiffness: f32,
		spoke_stiffness: f32,
		yield_thresh: f32,
		plas_k: f32,
	) -> Self {
		let corners = 1usize << D;
		let mut particles = Vec::with_capacity(corners + 1);
		for i in 0..corners {
			let p = Vn::from_fn(|axis, _| {
				if i >> axis & 1 == 1 {
					half[axis]
				} else {
					-half[axis]
				}
			});
			particles.push(p);
		}
		let center = corners;
		particles.push(Vn::zeros());

		let mut constraints = Vec::new();
		for i in 0..corners {
			for j in (i + 1)..corners {
				// one differing axis is an edge, two a face diagonal;
				// body diagonals are left to the spokes
				if (i ^ j).count_ones() > 2 {
					continue;
				}
				constraints.push(
					SpringConstraint::new(i, j, &particles)
						.with_stiffness(frame_stiffness)
						.with_plasticity(yield_thresh, plas_k),
				);
			}
		}
		for i in 0..corners {
			constraints.push(
				SpringConstraint::new(i, center, &particles)
					.with_stiffness(spoke_stiffness)
					.with_plasticity(yield_thresh, plas_k),
			);
		}
		Self {
			particles,
			constraints,
		}
	}

	pub fn center_index(&self) -> usize {
		self.particles.len() - 1
	}
}
