pub enum ControllerMessage<const D: usize> {
	TogglePause,
	FrameForward,
	Reset,
	ControlParticle(usize, [f32; D]),
	UncontrolParticle(usize),
}
