use clap::{Parser, ValueEnum};
use lloggs::{LoggingArgs, PreArgs, WorkerGuard};
use miette::{miette, Result};
use st7735_driver::PanelKind;
use tracing::debug;

/// Drive an ST7735 TFT display.
///
/// The display is expected on a Raspberry Pi's SPI bus, with the data/command, reset, and
/// (optionally) backlight lines on GPIO pins. Use --dry-run to print what would be sent instead.
///
/// For large fills you'll want to raise the SPI buffer size by adding `spidev.bufsiz=65536` to
/// `/boot/firmware/cmdline.txt`, otherwise writes get split into small chunks.
#[derive(Debug, Clone, Parser)]
#[command(
	author,
	version,
	after_help = "Want more detail? Try the long '--help' flag!",
	after_long_help = "Didn't expect this much output? Use the short '-h' flag to get short help."
)]
pub struct Args {
	#[command(flatten)]
	pub logging: LoggingArgs,

	#[command(flatten)]
	pub wiring: WiringArgs,

	/// Panel variant.
	///
	/// This selects the power-on sequence used by `init` and the memory offset of the visible area.
	#[arg(long, value_enum, default_value_t = PanelArg::GreenTab, env = "TFT_PANEL")]
	pub panel: PanelArg,

	/// Override the panel's width in pixels.
	#[arg(long)]
	pub width: Option<u16>,

	/// Override the panel's height in pixels.
	#[arg(long)]
	pub height: Option<u16>,

	/// Print the command and data traffic instead of talking to hardware.
	#[arg(long)]
	pub dry_run: bool,

	/// Make horizontal and vertical lines write as many pixels as older drivers did.
	///
	/// Older drivers for this controller sent the line's end coordinate as the pixel count, which
	/// is only right for lines starting at 1. Use this to reproduce their output exactly.
	#[arg(long)]
	pub legacy_line_count: bool,

	/// What to do
	#[command(subcommand)]
	pub action: crate::actions::Action,
}

/// How the display is wired to the Pi.
#[derive(Debug, Clone, Parser)]
pub struct WiringArgs {
	/// SPI port to use.
	#[arg(long, default_value = "0", env = "TFT_SPI")]
	pub spi: u8,

	/// SPI CE number for the display's chip select pin.
	#[arg(long, default_value = "0", env = "TFT_CE")]
	pub ce: u8,

	/// GPIO pin number for the display's data/command pin.
	#[arg(long, default_value = "24", env = "TFT_DC")]
	pub dc: u8,

	/// GPIO pin number for the display's reset pin.
	#[arg(long, default_value = "25", env = "TFT_RESET")]
	pub reset: u8,

	/// GPIO pin number for the display's backlight control pin.
	///
	/// Leave unset if the backlight is hardwired on.
	#[arg(long, env = "TFT_BACKLIGHT")]
	pub backlight: Option<u8>,

	/// SPI frequency in Hz.
	#[arg(long, default_value = "8000000", env = "TFT_FREQUENCY")]
	pub frequency: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PanelArg {
	/// 1.8" 128x160, green tab
	GreenTab,

	/// 1.8" 128x160, red tab
	RedTab,

	/// 1.44" 128x128, green tab
	#[value(name = "green-tab-144")]
	GreenTab144,
}

impl From<PanelArg> for PanelKind {
	fn from(arg: PanelArg) -> Self {
		match arg {
			PanelArg::GreenTab => Self::GreenTab,
			PanelArg::RedTab => Self::RedTab,
			PanelArg::GreenTab144 => Self::GreenTab144,
		}
	}
}

/// An on/off switch argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Switch {
	On,
	Off,
}

impl From<Switch> for bool {
	fn from(switch: Switch) -> Self {
		switch == Switch::On
	}
}

pub fn get_args() -> Result<(Args, WorkerGuard)> {
	let log_guard = PreArgs::parse().setup().map_err(|err| miette!("{err}"))?;

	debug!("parsing arguments");
	let args = Args::parse();

	let log_guard = match log_guard {
		Some(g) => g,
		None => args
			.logging
			.setup(|v| match v {
				0 => "info",
				1 => "info,tftool=debug,st7735_driver=debug",
				2 => "debug",
				3 => "debug,tftool=trace,st7735_driver=trace",
				_ => "trace",
			})
			.map_err(|err| miette!("{err}"))?,
	};

	debug!(?args, "got arguments");
	Ok((args, log_guard))
}

#[test]
fn verify_cli() {
	use clap::CommandFactory;
	Args::command().debug_assert()
}
