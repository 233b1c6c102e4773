use clap::Parser;
use miette::Result;

use super::Context;
use crate::colour::Colour;

/// Fill a rectangle.
///
/// The rectangle is clipped to the screen on the right and bottom.
#[derive(Debug, Clone, Parser)]
pub struct RectArgs {
	pub x: u16,
	pub y: u16,
	pub width: u16,
	pub height: u16,

	/// Colour, as #rrggbb, rrggbb, or r,g,b.
	pub colour: Colour,
}

pub fn run(ctx: &mut Context<RectArgs>) -> Result<()> {
	let RectArgs {
		x,
		y,
		width,
		height,
		colour,
	} = ctx.args_top;
	ctx.lcd.rect(x, y, width, height, colour.packed())?;
	Ok(())
}
