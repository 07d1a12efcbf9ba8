// pr_model: simulation snapshot handed to a renderer

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// pos length is the world dimension (2 or 3)
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PrParticle {
	pub pos: Vec<f32>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PrConstraint {
	pub id: usize,
	pub particles: Vec<usize>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PrModel {
	pub particles: HashMap<usize, PrParticle>,
	pub constraints: Vec<PrConstraint>,
}
