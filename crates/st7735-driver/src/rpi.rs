use std::{thread::sleep, time::Duration};

use itertools::Itertools;
use rppal::{
	gpio::{Gpio, Level, OutputPin},
	spi::{Bus, Mode, SlaveSelect, Spi},
};
use tracing::{debug, instrument, trace};

use crate::{
	buffer::{probe_length, Probe},
	commands::Command,
	error::{Error, Result},
	transport::Transport,
};

/// Transport over a Raspberry Pi's SPI bus, with GPIO control lines.
#[derive(Debug)]
pub struct SpiTransport {
	spi: Spi,
	dc: OutputPin,
	reset: OutputPin,
	backlight: Option<OutputPin>,
	chunk: usize,
}

/// How the display is wired.
///
/// It implements [`Default`] with the usual wiring for these modules on a Pi header: SPI0/CE0,
/// data/command on GPIO 24, reset on GPIO 25, and the backlight on GPIO 18.
#[derive(Debug, Clone)]
pub struct SpiArgs {
	/// SPI port to use.
	///
	/// Defaults to 0.
	pub spi: u8,

	/// SPI CE number for the display's chip select pin.
	///
	/// Defaults to 0.
	pub ce: u8,

	/// GPIO pin number for the display's data/command pin.
	///
	/// Defaults to 24.
	pub dc: u8,

	/// GPIO pin number for the display's reset pin.
	///
	/// Defaults to 25.
	pub reset: u8,

	/// GPIO pin number for the display's backlight control pin, if it's wired.
	///
	/// Defaults to 18.
	pub backlight: Option<u8>,

	/// SPI frequency in Hz.
	///
	/// Defaults to 8 MHz.
	pub frequency: u32,
}

impl Default for SpiArgs {
	fn default() -> Self {
		Self {
			spi: 0,
			ce: 0,
			dc: 24,
			reset: 25,
			backlight: Some(18),
			frequency: 8_000_000,
		}
	}
}

/// Default length of a single SPI write, as long as spidev's default `bufsiz`.
const DEFAULT_CHUNK: usize = 4096;

impl SpiTransport {
	/// Connect to the display's I/O.
	///
	/// This sets up the GPIO and SPI pins, but doesn't touch the display otherwise. Usually you'll
	/// want to call [`probe_buffer_length()`](Self::probe_buffer_length) right after.
	#[instrument(level = "debug")]
	pub fn new(args: SpiArgs) -> Result<Self> {
		let gpio = Gpio::new()?;
		let dc = gpio.get(args.dc)?.into_output();
		let reset = gpio.get(args.reset)?.into_output();
		let backlight = args
			.backlight
			.map(|pin| gpio.get(pin).map(|pin| pin.into_output()))
			.transpose()?;

		let spi = Spi::new(
			match args.spi {
				0 => Bus::Spi0,
				1 => Bus::Spi1,
				2 => Bus::Spi2,
				3 => Bus::Spi3,
				4 => Bus::Spi4,
				5 => Bus::Spi5,
				6 => Bus::Spi6,
				_ => return Err(invalid_input("SPI bus number out of range")),
			},
			match args.ce {
				0 => SlaveSelect::Ss0,
				1 => SlaveSelect::Ss1,
				2 => SlaveSelect::Ss2,
				_ => return Err(invalid_input("SPI CE number out of range")),
			},
			args.frequency,
			Mode::Mode0,
		)?;

		Ok(Self {
			spi,
			dc,
			reset,
			backlight,
			chunk: DEFAULT_CHUNK,
		})
	}

	/// Largest number of bytes sent in one SPI write.
	pub fn chunk_len(&self) -> usize {
		self.chunk
	}

	/// Probe how many bytes we can send at once.
	///
	/// The probe writes zeroed data without a preceding command, which the controller ignores.
	/// Each trial is a single unsplit SPI write, so spidev refuses the ones above its `bufsiz`.
	#[instrument(level = "debug", skip(self))]
	pub fn probe_buffer_length(&mut self) -> Result<usize> {
		let n = probe_length(|n| {
			self.set_dc(Level::High);
			let result = self.spi.write(&vec![0; n]);
			self.write_command(Command::Nop.into())?;
			match result {
				Ok(_) => Ok(Probe::Sent),
				Err(rppal::spi::Error::Io(_)) => Ok(Probe::TooLong),
				Err(e) => Err(e.into()),
			}
		})?;

		debug!(n, "probed max usable spi buffer length");
		self.chunk = n;
		Ok(n)
	}

	#[instrument(level = "trace", skip(self))]
	fn set_dc(&mut self, level: Level) {
		self.dc.write(level);
	}

	#[instrument(level = "trace", skip(self))]
	fn set_reset(&mut self, level: Level) {
		self.reset.write(level);
	}
}

impl Transport for SpiTransport {
	fn write_command(&mut self, command: u8) -> Result<()> {
		self.set_dc(Level::Low);
		trace!(byte=%format!("{command:02X?}"), "writing command byte to SPI");
		self.spi.write(&[command])?;
		Ok(())
	}

	fn write_data(&mut self, bytes: &[u8]) -> Result<()> {
		self.set_dc(Level::High);
		trace!(length = bytes.len(), "writing some bytes to SPI");
		for chunk in bytes.chunks(self.chunk) {
			self.spi.write(chunk)?;
		}
		Ok(())
	}

	#[instrument(level = "trace", skip(self))]
	fn write_pixel_run(&mut self, count: u32, pixel: [u8; 2]) -> Result<()> {
		self.set_dc(Level::High);

		// at most one chunk's worth of whole pixels, reused for every write
		let per_chunk = (self.chunk / 2).max(1);
		let full: Vec<u8> = pixel
			.iter()
			.copied()
			.cycle()
			.take(per_chunk.min(count as usize) * 2)
			.collect();

		for run in &(0..count as usize).chunks(per_chunk) {
			let len = run.count();
			trace!(pixels = len, "writing pixel chunk to SPI");
			self.spi.write(&full[..len * 2])?;
		}

		Ok(())
	}

	#[instrument(level = "debug", skip(self))]
	fn reset(&mut self) -> Result<()> {
		self.set_dc(Level::Low);
		self.set_reset(Level::High);
		sleep(Duration::from_millis(500));
		self.set_reset(Level::Low);
		sleep(Duration::from_millis(500));
		self.set_reset(Level::High);
		sleep(Duration::from_millis(500));
		Ok(())
	}

	fn has_backlight(&self) -> bool {
		self.backlight.is_some()
	}

	#[instrument(level = "trace", skip(self))]
	fn set_backlight(&mut self, on: bool) -> Result<()> {
		if let Some(pin) = &mut self.backlight {
			pin.write(if on { Level::High } else { Level::Low });
		}
		Ok(())
	}
}

fn invalid_input(message: &'static str) -> Error {
	Error::Io(std::io::Error::new(std::io::ErrorKind::InvalidInput, message))
}
