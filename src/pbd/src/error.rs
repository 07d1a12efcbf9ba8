use thiserror::Error;

// the interaction surface is the only fallible one, indices come from
// an external input layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
	#[error("particle index {index} out of bounds (count {count})")]
	ParticleOutOfBounds { index: usize, count: usize },
	#[error("constraint index {index} out of bounds (count {count})")]
	ConstraintOutOfBounds { index: usize, count: usize },
	#[error("particle {0} is not under external control")]
	NotControlled(usize),
}
