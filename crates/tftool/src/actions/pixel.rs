use clap::Parser;
use miette::Result;

use super::Context;
use crate::colour::Colour;

/// Set a single pixel.
///
/// Pixels outside the screen are ignored.
#[derive(Debug, Clone, Parser)]
pub struct PixelArgs {
	pub x: u16,
	pub y: u16,

	/// Colour, as #rrggbb, rrggbb, or r,g,b.
	pub colour: Colour,
}

pub fn run(ctx: &mut Context<PixelArgs>) -> Result<()> {
	let PixelArgs { x, y, colour } = ctx.args_top;
	ctx.lcd.pixel(x, y, colour.packed())?;
	Ok(())
}
