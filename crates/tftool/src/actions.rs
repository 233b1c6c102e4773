use clap::Subcommand;
use miette::Result;
use tracing::{debug, trace};

use crate::args::Args;

pub use context::Context;
pub mod context;

macro_rules! commands {
	(
		$(
			$modname:ident => $enumname:ident($argname:ident)
		),+
	) => {
		$(
			pub mod $modname;
		)*

		#[derive(Debug, Clone, Subcommand)]
		pub enum Action {
			$(
				$enumname($modname::$argname),
			)*
		}

		pub fn run(args: Args) -> Result<()> {
			let ctx = Context::new(&args)?;
			debug!(version=%env!("CARGO_PKG_VERSION"), "starting up");
			trace!(?ctx, "context");

			match args.action {
				$(
					Action::$enumname(sub) => {
						let mut ctx = ctx.with_top(sub);
						$modname::run(&mut ctx)?;
						ctx.finish();
					}
				)*
			}

			Ok(())
		}
	};
}

commands! {
	init => Init(InitArgs),
	clear => Clear(ClearArgs),
	pixel => Pixel(PixelArgs),
	rect => Rect(RectArgs),
	line => Line(LineArgs),
	text => Text(TextArgs),
	power => Power(PowerArgs),
	invert => Invert(InvertArgs),
	backlight => Backlight(BacklightArgs),
	draw => Draw(DrawArgs)
}
