use std::time::{Duration, SystemTime};

use pbd::bounds::BoundBox;
use pbd::config::SimConfig;
use pbd::simulation::Simulation;
use protocol::sock::SockServer;
use protocol::Message;

// bounded-canvas 2d variant published over the renderer socket
fn main() {
	let mut sock = SockServer::bind("pbd.socket");
	let cfg = SimConfig::<2>::default()
		.with_bounds(BoundBox::new([-4., -2.], [4., 2.]));
	let frame_micros = cfg.frame_micros;
	let mut sim = Simulation::new(cfg);
	loop {
		let start_time = SystemTime::now();
		sim.step();
		let msg = Message::WorldUpdate(sim.pr_model()).to_bytes();
		sock.send_msg(&msg);
		let duration = SystemTime::now()
			.duration_since(start_time)
			.unwrap()
			.as_micros() as u64;
		if duration < frame_micros {
			std::thread::sleep(Duration::from_micros(
				frame_micros - duration,
			));
		}
	}
}
