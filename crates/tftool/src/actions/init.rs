use clap::Parser;
use miette::Result;
use tracing::info;

use super::Context;

/// Reset the display and run the panel's power-on sequence.
///
/// Do this once after the display is powered up. Afterwards the display is on, not inverted, and
/// the backlight (if wired) is lit.
#[derive(Debug, Clone, Parser)]
pub struct InitArgs {
	/// Also clear the screen to black.
	#[arg(long)]
	pub clear: bool,
}

pub fn run(ctx: &mut Context<InitArgs>) -> Result<()> {
	ctx.lcd.init(ctx.panel)?;
	if ctx.args_top.clear {
		ctx.lcd.clear(st7735_driver::colour::BLACK)?;
	}

	info!(panel = ctx.panel.name(), "display initialised");
	Ok(())
}
