use std::io::Read;

use clap::Parser;
use embedded_graphics::Drawable;
use miette::{IntoDiagnostic, Result, WrapErr};
use tracing::trace;

use super::Context;
use crate::json::Screen;

/// Draw a screen described in JSON.
///
/// The file holds one of:
///
/// - `{"clear": [r, g, b]}` to fill the screen;
/// - `{"light": true}` or `{"light": false}` to wake the display or put it to sleep;
/// - `{"layout": [item, ...]}` where each item has `x` and `y`, and optionally `width`, `height`
///   and `fill` for a filled rectangle, `stroke` and `text` for a line of text, or `stroke` and
///   `to: [x, y]` for a line.
#[derive(Debug, Clone, Parser)]
pub struct DrawArgs {
	/// Path to the JSON file, or - to read from stdin.
	pub file: String,
}

pub fn run(ctx: &mut Context<DrawArgs>) -> Result<()> {
	let bytes = if ctx.args_top.file == "-" {
		let mut bytes = Vec::new();
		std::io::stdin()
			.read_to_end(&mut bytes)
			.into_diagnostic()
			.wrap_err("reading stdin")?;
		bytes
	} else {
		std::fs::read(&ctx.args_top.file)
			.into_diagnostic()
			.wrap_err_with(|| format!("reading {}", ctx.args_top.file))?
	};

	let screen: Screen = serde_json::from_slice(&bytes)
		.into_diagnostic()
		.wrap_err("parsing screen JSON")?;
	trace!(?screen, "screen control message");

	let lcd = &mut ctx.lcd;
	match screen {
		Screen::Light(true) => {
			lcd.wake()?;
			lcd.set_power(true)?;
			lcd.set_backlight(true)?;
		}
		Screen::Light(false) => {
			lcd.set_power(false)?;
			lcd.set_backlight(false)?;
			lcd.sleep()?;
		}
		screen => screen.draw(lcd)?,
	}

	Ok(())
}
