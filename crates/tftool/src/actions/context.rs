use miette::Result;
use st7735_driver::{Display, LineCount, Panel, PanelKind};
use tracing::debug;

use crate::{args::Args, wire::Wire};

/// What every action gets: its own arguments, and the display.
#[derive(Debug)]
pub struct Context<A = ()> {
	pub args_top: A,
	pub lcd: Display<Wire>,
	pub panel: &'static dyn Panel,
}

impl Context {
	pub fn new(args: &Args) -> Result<Self> {
		let panel = PanelKind::from(args.panel).panel();
		let (width, height) = panel.size();
		let (width, height) = (args.width.unwrap_or(width), args.height.unwrap_or(height));
		debug!(panel = panel.name(), width, height, "selected panel");

		let wire = if args.dry_run {
			Wire::dry_run(&args.wiring)
		} else {
			Wire::connect(&args.wiring)?
		};

		let mut lcd = Display::new(wire, width, height).with_panel(panel);
		if args.legacy_line_count {
			lcd.set_line_count(LineCount::Legacy);
		}

		Ok(Self {
			args_top: (),
			lcd,
			panel,
		})
	}
}

impl<A> Context<A> {
	pub fn with_top<C>(self, args_top: C) -> Context<C> {
		Context::<C> {
			args_top,
			lcd: self.lcd,
			panel: self.panel,
		}
	}

	/// Release the display, printing the traffic if this was a dry run.
	pub fn finish(self) {
		self.lcd.into_inner().finish();
	}
}
