use clap::Parser;
use miette::Result;
use st7735_driver::Backlight;
use tracing::warn;

use super::Context;
use crate::args::Switch;

/// Turn the backlight on or off.
///
/// Needs --backlight to say which pin it's on.
#[derive(Debug, Clone, Parser)]
pub struct BacklightArgs {
	#[arg(value_enum)]
	pub state: Switch,
}

pub fn run(ctx: &mut Context<BacklightArgs>) -> Result<()> {
	if ctx.lcd.set_backlight(ctx.args_top.state.into())? == Backlight::Unavailable {
		warn!("no backlight pin configured, nothing to do");
	}

	Ok(())
}
