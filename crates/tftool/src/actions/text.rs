use clap::Parser;
use miette::Result;
use st7735_driver::FONT_5X8;

use super::Context;
use crate::colour::Colour;

/// Write text in the built-in 5x8 font.
///
/// Lines wrap back to X when they run off the right edge. Characters outside printable ASCII
/// leave a blank cell.
#[derive(Debug, Clone, Parser)]
pub struct TextArgs {
	pub x: u16,
	pub y: u16,
	pub text: String,

	/// Colour, as #rrggbb, rrggbb, or r,g,b.
	#[arg(long, default_value = "#ffffff")]
	pub colour: Colour,

	/// Scale factor.
	#[arg(long, default_value = "1", value_parser = clap::value_parser!(u16).range(1..=16))]
	pub size: u16,
}

pub fn run(ctx: &mut Context<TextArgs>) -> Result<()> {
	let TextArgs {
		x,
		y,
		ref text,
		colour,
		size,
	} = ctx.args_top;
	ctx.lcd
		.draw_text(x, y, text, Some(&FONT_5X8), colour.packed(), size)?;
	Ok(())
}
