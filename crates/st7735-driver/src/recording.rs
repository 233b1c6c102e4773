use std::fmt;

use tracing::trace;

use crate::{
	error::{Error, Result},
	transport::Transport,
};

/// One call made on a [`Recorder`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Op {
	Command(u8),
	Data(Vec<u8>),
	Pixels { count: u32, pixel: [u8; 2] },
	Reset,
	Backlight(bool),
	Delay(u32),
}

impl fmt::Display for Op {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Op::Command(byte) => write!(f, "command {byte:#04X}"),
			Op::Data(bytes) => write!(f, "data {bytes:02X?}"),
			Op::Pixels { count, pixel } => write!(f, "pixels {count} x {pixel:02X?}"),
			Op::Reset => write!(f, "reset"),
			Op::Backlight(on) => write!(f, "backlight {}", if *on { "on" } else { "off" }),
			Op::Delay(ms) => write!(f, "delay {ms}ms"),
		}
	}
}

/// A transport that remembers what it was asked to do instead of talking to hardware.
///
/// Delays are recorded but not slept.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
	ops: Vec<Op>,
	backlight: bool,
	fail_after: Option<usize>,
}

impl Recorder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Report a backlight pin as available.
	pub fn with_backlight(mut self) -> Self {
		self.backlight = true;
		self
	}

	/// Fail every call after the first `n` successful ones.
	pub fn fail_after(mut self, n: usize) -> Self {
		self.fail_after = Some(n);
		self
	}

	pub fn ops(&self) -> &[Op] {
		&self.ops
	}

	/// Take the recorded calls, leaving the log empty.
	pub fn take(&mut self) -> Vec<Op> {
		std::mem::take(&mut self.ops)
	}

	/// Total pixel units written across all runs.
	pub fn pixel_count(&self) -> u64 {
		self.ops
			.iter()
			.map(|op| match op {
				Op::Pixels { count, .. } => u64::from(*count),
				_ => 0,
			})
			.sum()
	}

	fn push(&mut self, op: Op) -> Result<()> {
		if let Some(n) = self.fail_after {
			if self.ops.len() >= n {
				return Err(Error::Io(std::io::Error::new(
					std::io::ErrorKind::BrokenPipe,
					"recorder: injected failure",
				)));
			}
		}

		trace!(%op, "recorded");
		self.ops.push(op);
		Ok(())
	}
}

impl Transport for Recorder {
	fn write_command(&mut self, command: u8) -> Result<()> {
		self.push(Op::Command(command))
	}

	fn write_data(&mut self, bytes: &[u8]) -> Result<()> {
		self.push(Op::Data(bytes.to_vec()))
	}

	fn write_pixel_run(&mut self, count: u32, pixel: [u8; 2]) -> Result<()> {
		self.push(Op::Pixels { count, pixel })
	}

	fn reset(&mut self) -> Result<()> {
		self.push(Op::Reset)
	}

	fn has_backlight(&self) -> bool {
		self.backlight
	}

	fn set_backlight(&mut self, on: bool) -> Result<()> {
		self.push(Op::Backlight(on))
	}

	fn delay_ms(&mut self, ms: u32) {
		// delays can't fail, so they don't count towards fail_after
		self.ops.push(Op::Delay(ms));
	}
}
