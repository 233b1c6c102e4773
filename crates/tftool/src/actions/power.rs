use clap::Parser;
use miette::Result;

use super::Context;
use crate::args::Switch;

/// Turn the display output on or off.
///
/// This doesn't affect the backlight or the screen contents.
#[derive(Debug, Clone, Parser)]
pub struct PowerArgs {
	#[arg(value_enum)]
	pub state: Switch,
}

pub fn run(ctx: &mut Context<PowerArgs>) -> Result<()> {
	ctx.lcd.set_power(ctx.args_top.state.into())?;
	Ok(())
}
