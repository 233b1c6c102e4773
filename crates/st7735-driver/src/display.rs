use tracing::{debug, instrument};

use crate::{
	commands::Command,
	error::Result,
	helpers::MemoryAccessControl,
	panel::{InitStep, Margins, Panel},
	transport::Transport,
};

/// Backlight state, as far as the driver knows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backlight {
	On,
	Off,

	/// No backlight control pin is wired.
	Unavailable,
}

/// How many pixel units `hline()` and `vline()` write.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LineCount {
	/// Exactly the (trimmed) length of the line.
	#[default]
	Exact,

	/// The trimmed end coordinate (`x + w - 1`), as older drivers for this controller sent.
	///
	/// This over- or under-fills the window by the line's start coordinate minus one. Only useful
	/// to reproduce existing output byte for byte.
	Legacy,
}

/// A display surface driven through some [`Transport`].
///
/// All drawing is clipped to `width` × `height`; coordinates are then offset by the panel's
/// margins before being sent to the controller.
#[derive(Debug)]
pub struct Display<T> {
	pub(crate) transport: T,
	pub(crate) width: u16,
	pub(crate) height: u16,
	pub(crate) margins: Margins,
	pub(crate) line_count: LineCount,
	power: bool,
	inverted: bool,
	backlight: Backlight,
	awake: bool,
}

impl<T: Transport> Display<T> {
	/// Wrap a transport for a display of the given size.
	///
	/// This doesn't talk to the display. Call [`init()`](Self::init) after power-up, or
	/// [`with_panel()`](Self::with_panel) if the controller is already initialised.
	pub fn new(transport: T, width: u16, height: u16) -> Self {
		let backlight = if transport.has_backlight() {
			Backlight::On
		} else {
			Backlight::Unavailable
		};

		Self {
			transport,
			width,
			height,
			margins: Margins::default(),
			line_count: LineCount::default(),
			power: true,
			inverted: false,
			backlight,
			awake: true,
		}
	}

	/// Adopt a panel's margins without running its init sequence.
	pub fn with_panel(mut self, panel: &dyn Panel) -> Self {
		self.margins = panel.margins();
		self
	}

	/// Select how many pixels the line fast paths write.
	pub fn set_line_count(&mut self, line_count: LineCount) {
		self.line_count = line_count;
	}

	/// Hard-reset the controller and run a panel's power-on sequence.
	#[instrument(level = "debug", skip(self))]
	pub fn init(&mut self, panel: &dyn Panel) -> Result<()> {
		self.margins = panel.margins();
		debug!(panel = panel.name(), margins = ?self.margins, "initialising display");

		self.transport.reset()?;
		for step in panel.sequence() {
			match *step {
				InitStep::Command(command) => self.transport.write_command(command.into())?,
				InitStep::Data(bytes) => self.transport.write_data(bytes)?,
				InitStep::Orientation => self.transport.write_data(&[panel.orientation().into()])?,
				InitStep::Delay(ms) => self.transport.delay_ms(ms),
			}
		}

		self.power = true;
		self.inverted = false;
		self.awake = true;
		self.set_backlight(true)?;
		Ok(())
	}

	/// Send a data-less command.
	#[instrument(level = "trace", skip(self))]
	pub fn command(&mut self, command: Command) -> Result<()> {
		self.transport.write_command(command.into())
	}

	/// Send a command followed by its data bytes.
	#[instrument(level = "trace", skip(self, data))]
	pub fn command_with_data(&mut self, command: Command, data: &[u8]) -> Result<()> {
		self.transport.write_command(command.into())?;
		self.transport.write_data(data)
	}

	/// Change the memory access order (MADCTL), e.g. to mirror or rotate the image.
	///
	/// Margins and size stay as they are; swapping rows and columns on a non-square panel is the
	/// caller's business.
	#[instrument(level = "trace", skip(self))]
	pub fn set_orientation(&mut self, madctl: MemoryAccessControl) -> Result<()> {
		self.command_with_data(Command::MemoryAccessControl, &[madctl.into()])
	}

	pub fn power(&self) -> bool {
		self.power
	}

	/// Turn the display on or off.
	#[instrument(level = "trace", skip(self))]
	pub fn set_power(&mut self, on: bool) -> Result<()> {
		self.command(if on {
			Command::DisplayOn
		} else {
			Command::DisplayOff
		})?;
		self.power = on;
		Ok(())
	}

	pub fn inversion(&self) -> bool {
		self.inverted
	}

	/// Turn colour inversion on or off.
	#[instrument(level = "trace", skip(self))]
	pub fn set_inversion(&mut self, on: bool) -> Result<()> {
		self.command(if on {
			Command::InversionOn
		} else {
			Command::InversionOff
		})?;
		self.inverted = on;
		Ok(())
	}

	pub fn backlight(&self) -> Backlight {
		self.backlight
	}

	/// Turn the backlight on or off.
	///
	/// Returns the new state, which is [`Backlight::Unavailable`] (and nothing is sent) if there is
	/// no backlight pin.
	#[instrument(level = "trace", skip(self))]
	pub fn set_backlight(&mut self, on: bool) -> Result<Backlight> {
		if !self.transport.has_backlight() {
			return Ok(Backlight::Unavailable);
		}

		self.transport.set_backlight(on)?;
		self.backlight = if on { Backlight::On } else { Backlight::Off };
		Ok(self.backlight)
	}

	/// Go to sleep.
	#[instrument(level = "trace", skip(self))]
	pub fn sleep(&mut self) -> Result<()> {
		if self.awake {
			self.command(Command::SleepIn)?;
			self.transport.delay_ms(5);
			self.awake = false;
		}

		Ok(())
	}

	/// Wake up from sleep.
	#[instrument(level = "trace", skip(self))]
	pub fn wake(&mut self) -> Result<()> {
		if !self.awake {
			self.command(Command::SleepOut)?;
			self.transport.delay_ms(120);
			self.awake = true;
		}

		Ok(())
	}

	pub fn width(&self) -> u16 {
		self.width
	}

	pub fn height(&self) -> u16 {
		self.height
	}

	pub fn margins(&self) -> Margins {
		self.margins
	}

	pub fn transport(&self) -> &T {
		&self.transport
	}

	pub fn transport_mut(&mut self) -> &mut T {
		&mut self.transport
	}

	pub fn into_inner(self) -> T {
		self.transport
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		panel::{GreenTab, RedTab},
		recording::{Op, Recorder},
		Error,
	};

	#[test]
	fn init_replays_the_panel_table_after_reset() {
		let mut lcd = Display::new(Recorder::new(), 128, 160);
		lcd.init(&GreenTab).unwrap();

		let ops = lcd.transport().ops();
		assert_eq!(ops[0], Op::Reset);

		let replayed: Vec<Op> = GreenTab
			.sequence()
			.iter()
			.map(|step| match *step {
				InitStep::Command(c) => Op::Command(c as u8),
				InitStep::Data(d) => Op::Data(d.to_vec()),
				InitStep::Orientation => Op::Data(vec![0x00]),
				InitStep::Delay(ms) => Op::Delay(ms),
			})
			.collect();
		assert_eq!(&ops[1..], &replayed[..]);
		assert_eq!(lcd.margins(), Margins { col: 2, row: 1 });
		assert!(lcd.power());
		assert!(!lcd.inversion());
	}

	#[test]
	fn init_sends_the_panel_orientation() {
		let mut lcd = Display::new(Recorder::new(), 128, 160);
		lcd.init(&RedTab).unwrap();

		let ops = lcd.transport().ops();
		let at = ops
			.iter()
			.position(|op| *op == Op::Command(0x36))
			.expect("MADCTL sent");
		assert_eq!(ops[at + 1], Op::Data(vec![0xC8]));
	}

	#[test]
	fn set_orientation_sends_madctl() {
		let mut lcd = Display::new(Recorder::new(), 128, 128);
		lcd.set_orientation(MemoryAccessControl::default().exchanged().bgr())
			.unwrap();
		assert_eq!(
			lcd.transport().ops(),
			&[Op::Command(0x36), Op::Data(vec![0b0010_1000])]
		);
	}

	#[test]
	fn init_turns_on_the_backlight_when_there_is_one() {
		let mut lcd = Display::new(Recorder::new().with_backlight(), 128, 160);
		lcd.init(&RedTab).unwrap();
		assert_eq!(lcd.transport().ops().last(), Some(&Op::Backlight(true)));
		assert_eq!(lcd.backlight(), Backlight::On);
	}

	#[test]
	fn with_panel_sends_nothing() {
		let lcd = Display::new(Recorder::new(), 128, 160).with_panel(&GreenTab);
		assert_eq!(lcd.margins(), Margins { col: 2, row: 1 });
		assert!(lcd.transport().ops().is_empty());
	}

	#[test]
	fn power_and_inversion() {
		let mut lcd = Display::new(Recorder::new(), 128, 160);
		lcd.set_power(false).unwrap();
		assert!(!lcd.power());
		lcd.set_inversion(true).unwrap();
		assert!(lcd.inversion());
		lcd.set_power(true).unwrap();
		lcd.set_inversion(false).unwrap();
		assert_eq!(
			lcd.transport().ops(),
			&[
				Op::Command(0x28),
				Op::Command(0x21),
				Op::Command(0x29),
				Op::Command(0x20),
			]
		);
	}

	#[test]
	fn backlight_sentinel() {
		let mut lcd = Display::new(Recorder::new(), 128, 160);
		assert_eq!(lcd.backlight(), Backlight::Unavailable);
		assert_eq!(lcd.set_backlight(true).unwrap(), Backlight::Unavailable);
		assert!(lcd.transport().ops().is_empty());

		let mut lcd = Display::new(Recorder::new().with_backlight(), 128, 160);
		assert_eq!(lcd.set_backlight(false).unwrap(), Backlight::Off);
		assert_eq!(lcd.backlight(), Backlight::Off);
		assert_eq!(lcd.transport().ops(), &[Op::Backlight(false)]);
	}

	#[test]
	fn sleep_and_wake_are_idempotent() {
		let mut lcd = Display::new(Recorder::new(), 128, 160);
		lcd.wake().unwrap();
		lcd.sleep().unwrap();
		lcd.sleep().unwrap();
		lcd.wake().unwrap();
		assert_eq!(
			lcd.transport().ops(),
			&[
				Op::Command(0x10),
				Op::Delay(5),
				Op::Command(0x11),
				Op::Delay(120),
			]
		);
	}

	#[test]
	fn failed_command_leaves_state_alone() {
		let mut lcd = Display::new(Recorder::new().fail_after(0), 128, 160);
		assert!(matches!(lcd.set_power(false), Err(Error::Io(_))));
		assert!(lcd.power());
	}
}
