use std::io::{Read, Write};
use std::os::unix::net::{UnixListener, UnixStream};

use crate::Message;

pub struct SockServer {
	listener: UnixListener,
	stream: Option<UnixStream>,
}

impl SockServer {
	pub fn bind(path: &str) -> Self {
		let _ = std::fs::remove_file(path);
		let listener = UnixListener::bind(path).unwrap();
		Self {
			listener,
			stream: None,
		}
	}

	fn listen(&mut self) {
		let stream = self.listener.incoming().next().unwrap().unwrap();
		self.stream = Some(stream);
	}

	pub fn send_msg(&mut self, msg: &[u8]) {
		loop {
			if let Some(stream) = self.stream.as_mut() {
				if stream.write_all(msg).is_ok() {
					return;
				}
			}
			eprintln!("INFO: waiting for renderer");
			self.listen();
			eprintln!("INFO: renderer connected");
		}
	}
}

pub struct SockClient {
	path: String,
	stream: Option<UnixStream>,
	buf: Vec<u8>,
}

impl SockClient {
	pub fn connect(path: &str) -> Self {
		Self {
			path: path.to_string(),
			stream: None,
			buf: vec![0u8; 1_000_000],
		}
	}

	pub fn read_msg(&mut self) -> Message {
		if let Some(stream) = self.stream.as_mut() {
			match stream.read(&mut self.buf) {
				Ok(buflen) => {
					if buflen > 0 {
						return Message::from_bytes(&self.buf[..buflen]);
					}
				}
				Err(e) => {
					if e.kind() == std::io::ErrorKind::WouldBlock {
						return Message::Nop;
					}
					panic!("{:?}", e);
				}
			}
		}
		std::thread::sleep(std::time::Duration::from_secs(1));
		match UnixStream::connect(&self.path) {
			Ok(s) => {
				s.set_nonblocking(true).unwrap();
				self.stream = Some(s);
			}
			Err(e) => {
				eprintln!("WARN: {:?}", e);
				eprintln!("INFO: waiting for simulation");
			}
		};
		Message::Nop
	}
}
