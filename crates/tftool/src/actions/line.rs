use clap::Parser;
use miette::Result;

use super::Context;
use crate::colour::Colour;

/// Draw a line between two points, both included.
#[derive(Debug, Clone, Parser)]
pub struct LineArgs {
	pub x0: u16,
	pub y0: u16,
	pub x1: u16,
	pub y1: u16,

	/// Colour, as #rrggbb, rrggbb, or r,g,b.
	pub colour: Colour,
}

pub fn run(ctx: &mut Context<LineArgs>) -> Result<()> {
	let LineArgs {
		x0,
		y0,
		x1,
		y1,
		colour,
	} = ctx.args_top;
	ctx.lcd.line(x0, y0, x1, y1, colour.packed())?;
	Ok(())
}
