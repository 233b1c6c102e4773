use miette::Result;
use st7735_driver::{Recorder, Transport};
#[cfg(target_os = "linux")]
use st7735_driver::{SpiArgs, SpiTransport};
use tracing::debug;

use crate::args::WiringArgs;

/// Where the traffic goes: real hardware, or a log printed at the end.
#[derive(Debug)]
pub enum Wire {
	#[cfg(target_os = "linux")]
	Spi(SpiTransport),
	DryRun(Recorder),
}

impl Wire {
	pub fn dry_run(wiring: &WiringArgs) -> Self {
		let recorder = Recorder::new();
		Self::DryRun(if wiring.backlight.is_some() {
			recorder.with_backlight()
		} else {
			recorder
		})
	}

	#[cfg(target_os = "linux")]
	pub fn connect(wiring: &WiringArgs) -> Result<Self> {
		let WiringArgs {
			spi,
			ce,
			dc,
			reset,
			backlight,
			frequency,
		} = *wiring;

		let mut transport = SpiTransport::new(SpiArgs {
			spi,
			ce,
			dc,
			reset,
			backlight,
			frequency,
		})?;
		let chunk = transport.probe_buffer_length()?;
		debug!(chunk, "connected to display");
		Ok(Self::Spi(transport))
	}

	#[cfg(not(target_os = "linux"))]
	pub fn connect(_wiring: &WiringArgs) -> Result<Self> {
		debug!("no hardware support on this platform");
		Err(miette::miette!(
			help = "use --dry-run to see what would be sent",
			"display hardware is only supported on Linux"
		))
	}

	/// Print the recorded traffic, if this is a dry run.
	pub fn finish(self) {
		match self {
			#[cfg(target_os = "linux")]
			Self::Spi(_) => {}
			Self::DryRun(recorder) => {
				for op in recorder.ops() {
					println!("{op}");
				}
			}
		}
	}
}

macro_rules! delegate {
	($self:ident, $t:ident => $call:expr) => {
		match $self {
			#[cfg(target_os = "linux")]
			Wire::Spi($t) => $call,
			Wire::DryRun($t) => $call,
		}
	};
}

impl Transport for Wire {
	fn write_command(&mut self, command: u8) -> st7735_driver::Result<()> {
		delegate!(self, t => t.write_command(command))
	}

	fn write_data(&mut self, bytes: &[u8]) -> st7735_driver::Result<()> {
		delegate!(self, t => t.write_data(bytes))
	}

	fn write_pixel_run(&mut self, count: u32, pixel: [u8; 2]) -> st7735_driver::Result<()> {
		delegate!(self, t => t.write_pixel_run(count, pixel))
	}

	fn reset(&mut self) -> st7735_driver::Result<()> {
		delegate!(self, t => t.reset())
	}

	fn has_backlight(&self) -> bool {
		delegate!(self, t => t.has_backlight())
	}

	fn set_backlight(&mut self, on: bool) -> st7735_driver::Result<()> {
		delegate!(self, t => t.set_backlight(on))
	}

	fn delay_ms(&mut self, ms: u32) {
		delegate!(self, t => t.delay_ms(ms))
	}
}
