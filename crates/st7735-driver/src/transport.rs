use std::{thread::sleep, time::Duration};

use crate::error::Result;

/// The wire between the driver and the controller.
///
/// Implementations own the SPI bus and the control pins. Each call must either complete fully or
/// return an error: the driver does not retry or roll back.
pub trait Transport {
	/// Send one command byte, with DC asserted to "command".
	fn write_command(&mut self, command: u8) -> Result<()>;

	/// Send a byte sequence, with DC asserted to "data".
	fn write_data(&mut self, bytes: &[u8]) -> Result<()>;

	/// Send `count` repetitions of a 2-byte pixel value, as data.
	fn write_pixel_run(&mut self, count: u32, pixel: [u8; 2]) -> Result<()>;

	/// Pulse the hardware reset line.
	fn reset(&mut self) -> Result<()>;

	/// Whether a backlight control pin is wired.
	fn has_backlight(&self) -> bool {
		false
	}

	/// Drive the backlight pin.
	///
	/// Only called when [`has_backlight()`](Self::has_backlight) is true.
	fn set_backlight(&mut self, _on: bool) -> Result<()> {
		Ok(())
	}

	/// Block for some milliseconds.
	fn delay_ms(&mut self, ms: u32) {
		sleep(Duration::from_millis(ms.into()));
	}
}

impl<T: Transport + ?Sized> Transport for &mut T {
	fn write_command(&mut self, command: u8) -> Result<()> {
		(**self).write_command(command)
	}

	fn write_data(&mut self, bytes: &[u8]) -> Result<()> {
		(**self).write_data(bytes)
	}

	fn write_pixel_run(&mut self, count: u32, pixel: [u8; 2]) -> Result<()> {
		(**self).write_pixel_run(count, pixel)
	}

	fn reset(&mut self) -> Result<()> {
		(**self).reset()
	}

	fn has_backlight(&self) -> bool {
		(**self).has_backlight()
	}

	fn set_backlight(&mut self, on: bool) -> Result<()> {
		(**self).set_backlight(on)
	}

	fn delay_ms(&mut self, ms: u32) {
		(**self).delay_ms(ms)
	}
}
