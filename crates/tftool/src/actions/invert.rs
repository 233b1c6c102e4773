use clap::Parser;
use miette::Result;

use super::Context;
use crate::args::Switch;

/// Turn colour inversion on or off.
#[derive(Debug, Clone, Parser)]
pub struct InvertArgs {
	#[arg(value_enum)]
	pub state: Switch,
}

pub fn run(ctx: &mut Context<InvertArgs>) -> Result<()> {
	ctx.lcd.set_inversion(ctx.args_top.state.into())?;
	Ok(())
}
