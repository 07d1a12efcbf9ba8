use crate::bounds::BoundBox;
use crate::Vn;

// every knob of the kernel; gravity is a per-frame displacement and
// damping a per-frame factor, stepping faster speeds the world up
#[derive(Clone, Debug)]
pub struct SimConfig<const D: usize> {
	pub gravity: Vn<D>,
	pub damping: f32,
	pub bounds: BoundBox<D>,
	pub particle_radius: f32,
	pub iterations: usize,
	pub half_extent: Vn<D>,
	pub frame_stiffness: f32,
	pub spoke_stiffness: f32,
	pub yield_thresh: f32,
	pub plas_k: f32,
	pub frame_micros: u64,
}

impl<const D: usize> Default for SimConfig<D> {
	fn default() -> Self {
		// axis 1 is up, the chassis is longest along axis 0
		let mut gravity = Vn::zeros();
		gravity[1] = -0.004;
		let mut half_extent = Vn::from_element(0.8);
		half_extent[0] = 1.2;
		half_extent[1] = 0.6;
		Self {
			gravity,
			damping: 0.99,
			bounds: BoundBox::default(),
			particle_radius: 0.12,
			iterations: 5,
			half_extent,
			frame_stiffness: 0.9,
			spoke_stiffness: 0.3,
			yield_thresh: 0.08,
			plas_k: 0.25,
			frame_micros: 20000,
		}
	}
}

impl<const D: usize> SimConfig<D> {
	pub fn with_gravity(mut self, gravity: Vn<D>) -> Self {
		self.gravity = gravity;
		self
	}

	pub fn with_damping(mut self, damping: f32) -> Self {
		self.damping = damping;
		self
	}

	pub fn with_bounds(mut self, bounds: BoundBox<D>) -> Self {
		self.bounds = bounds;
		self
	}

	pub fn with_radius(mut self, particle_radius: f32) -> Self {
		self.particle_radius = particle_radius;
		self
	}

	pub fn with_iterations(mut self, iterations: usize) -> Self {
		self.iterations = iterations;
		self
	}

	pub fn with_half_extent(mut self, half_extent: Vn<D>) -> Self {
		self.half_extent = half_extent;
		self
	}

	pub fn with_stiffness(mut self, frame: f32, spoke: f32) -> Self {
		self.frame_stiffness = frame;
		self.spoke_stiffness = spoke;
		self
	}

	pub fn with_plasticity(mut self, yield_thresh: f32, plas_k: f32) -> Self {
		self.yield_thresh = yield_thresh;
		self.plas_k = plas_k;
		self
	}

	pub fn with_frame_micros(mut self, frame_micros: u64) -> Self {
		self.frame_micros = frame_micros;
		self
	}
}
