use tracing::{instrument, trace};

use crate::{commands::Command, display::Display, error::Result, transport::Transport};

impl<T: Transport> Display<T> {
	/// Set the area of controller memory the next pixel stream fills.
	///
	/// Coordinates are inclusive, in display space; the panel's margins are added here. This does
	/// no clipping: callers must have clipped already.
	#[instrument(level = "trace", skip(self))]
	pub(crate) fn set_window(&mut self, x0: u16, y0: u16, x1: u16, y1: u16) -> Result<()> {
		let margins = self.margins;
		let rows = window_bytes(
			y0.saturating_add(margins.row),
			y1.saturating_add(margins.row),
		);
		let cols = window_bytes(
			x0.saturating_add(margins.col),
			x1.saturating_add(margins.col),
		);
		trace!(rows=%format!("{rows:02X?}"), cols=%format!("{cols:02X?}"), "addressing window");

		self.command_with_data(Command::RowAddressSet, &rows)?;
		self.command_with_data(Command::ColumnAddressSet, &cols)?;
		self.command(Command::MemoryWrite)
	}
}

fn window_bytes(start: u16, end: u16) -> [u8; 4] {
	let [s0, s1] = start.to_be_bytes();
	let [e0, e1] = end.to_be_bytes();
	[s0, s1, e0, e1]
}
