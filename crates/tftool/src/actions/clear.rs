use clap::Parser;
use miette::Result;

use super::Context;
use crate::colour::Colour;

/// Fill the whole screen with one colour.
#[derive(Debug, Clone, Parser)]
pub struct ClearArgs {
	/// Colour, as #rrggbb, rrggbb, or r,g,b.
	#[arg(default_value = "#000000")]
	pub colour: Colour,
}

pub fn run(ctx: &mut Context<ClearArgs>) -> Result<()> {
	ctx.lcd.clear(ctx.args_top.colour.packed())?;
	Ok(())
}
