use std::fmt;

use crate::{
	commands::Command,
	helpers::{MemoryAccessControl, COLMOD_16BPP},
};

/// One step of a panel's power-on sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InitStep {
	Command(Command),
	Data(&'static [u8]),

	/// The panel's [`orientation()`](Panel::orientation), sent as one data byte.
	Orientation,
	Delay(u32),
}

/// Offset of the visible area within the controller's memory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Margins {
	pub col: u16,
	pub row: u16,
}

/// A panel variant: the glass and the controller settings that go with it.
///
/// The drawing code only ever sees the margins; the sequence is replayed verbatim.
pub trait Panel: fmt::Debug + Sync {
	/// Short name of the variant.
	fn name(&self) -> &'static str;

	/// Native (width, height) in pixels.
	fn size(&self) -> (u16, u16);

	/// Column/row offset added to every addressed coordinate.
	fn margins(&self) -> Margins;

	/// MADCTL value the sequence sets up.
	fn orientation(&self) -> MemoryAccessControl;

	/// Power-on register sequence, run after a hardware reset.
	fn sequence(&self) -> &'static [InitStep];
}

/// ST7735R "green tab" 1.8" 128x160 panel.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreenTab;

impl Panel for GreenTab {
	fn name(&self) -> &'static str {
		"green-tab"
	}

	fn size(&self) -> (u16, u16) {
		(128, 160)
	}

	fn margins(&self) -> Margins {
		Margins { col: 2, row: 1 }
	}

	fn orientation(&self) -> MemoryAccessControl {
		// RGB, top-left origin
		MemoryAccessControl::default()
	}

	fn sequence(&self) -> &'static [InitStep] {
		&[
			InitStep::Command(Command::SoftwareReset),
			InitStep::Delay(150),
			InitStep::Command(Command::SleepOut),
			InitStep::Delay(255),
			InitStep::Command(Command::FrameRateNormal),
			InitStep::Data(&[0x01, 0x2C, 0x2D]),
			InitStep::Command(Command::FrameRateIdle),
			InitStep::Data(&[0x01, 0x2C, 0x2D, 0x01, 0x2C, 0x2D]),
			InitStep::Delay(10),
			InitStep::Command(Command::InversionControl),
			InitStep::Data(&[0x07]),
			InitStep::Command(Command::PowerControl1),
			InitStep::Data(&[0xA2, 0x02, 0x84]),
			InitStep::Command(Command::PowerControl2),
			InitStep::Data(&[0xC5]),
			InitStep::Command(Command::PowerControl3),
			InitStep::Data(&[0x8A, 0x00]),
			InitStep::Command(Command::PowerControl4),
			InitStep::Data(&[0x8A, 0x2A]),
			InitStep::Command(Command::PowerControl5),
			InitStep::Data(&[0x8A, 0xEE]),
			InitStep::Command(Command::VcomControl),
			InitStep::Data(&[0x0E]),
			InitStep::Command(Command::InversionOff),
			InitStep::Command(Command::MemoryAccessControl),
			InitStep::Orientation,
			InitStep::Command(Command::InterfacePixelFormat),
			InitStep::Data(&[COLMOD_16BPP]),
			InitStep::Command(Command::ColumnAddressSet),
			InitStep::Data(&[0x00, 0x01, 0x00, 127]),
			InitStep::Command(Command::RowAddressSet),
			InitStep::Data(&[0x00, 0x01, 0x00, 119]),
			InitStep::Command(Command::PositiveGammaControl),
			InitStep::Data(&[
				0x02, 0x1C, 0x07, 0x12, 0x37, 0x32, 0x29, 0x2D, 0x29, 0x25, 0x2B, 0x39, 0x00, 0x01,
				0x03, 0x10,
			]),
			InitStep::Command(Command::NegativeGammaControl),
			InitStep::Data(&[
				0x03, 0x1D, 0x07, 0x06, 0x2E, 0x2C, 0x29, 0x2D, 0x2E, 0x2E, 0x37, 0x3F, 0x00, 0x00,
				0x02, 0x10,
			]),
			InitStep::Command(Command::NormalOn),
			InitStep::Delay(10),
			InitStep::Command(Command::DisplayOn),
			InitStep::Delay(100),
		]
	}
}

/// Power-on table shared by the ST7735R panels that differ only in orientation and address
/// presets.
macro_rules! st7735r_sequence {
	(columns: $cols:expr, rows: $rows:expr) => {
		&[
			InitStep::Command(Command::SoftwareReset),
			InitStep::Delay(150),
			InitStep::Command(Command::SleepOut),
			InitStep::Delay(500),
			InitStep::Command(Command::FrameRateNormal),
			InitStep::Data(&[0x01, 0x2C, 0x2D]),
			InitStep::Command(Command::FrameRateIdle),
			InitStep::Data(&[0x01, 0x2C, 0x2D]),
			InitStep::Command(Command::FrameRatePartial),
			InitStep::Data(&[0x01, 0x2C, 0x2D, 0x01, 0x2C, 0x2D]),
			InitStep::Command(Command::InversionControl),
			InitStep::Data(&[0x07]),
			InitStep::Command(Command::PowerControl1),
			InitStep::Data(&[0xA2, 0x02, 0x84]),
			InitStep::Command(Command::PowerControl2),
			InitStep::Data(&[0xC5]),
			InitStep::Command(Command::PowerControl3),
			InitStep::Data(&[0x0A, 0x00]),
			InitStep::Command(Command::PowerControl4),
			InitStep::Data(&[0x8A, 0x2A]),
			InitStep::Command(Command::PowerControl5),
			InitStep::Data(&[0x8A, 0xEE]),
			InitStep::Command(Command::VcomControl),
			InitStep::Data(&[0x0E]),
			InitStep::Command(Command::InversionOff),
			InitStep::Command(Command::MemoryAccessControl),
			InitStep::Orientation,
			InitStep::Command(Command::InterfacePixelFormat),
			InitStep::Data(&[COLMOD_16BPP]),
			InitStep::Command(Command::ColumnAddressSet),
			InitStep::Data(&$cols),
			InitStep::Command(Command::RowAddressSet),
			InitStep::Data(&$rows),
			InitStep::Command(Command::PositiveGammaControl),
			InitStep::Data(&[
				0x02, 0x1C, 0x07, 0x12, 0x37, 0x32, 0x29, 0x2D, 0x29, 0x25, 0x2B, 0x39, 0x00, 0x01,
				0x03, 0x10,
			]),
			InitStep::Command(Command::NegativeGammaControl),
			InitStep::Data(&[
				0x03, 0x1D, 0x07, 0x06, 0x2E, 0x2C, 0x29, 0x2D, 0x2E, 0x2E, 0x37, 0x3F, 0x00, 0x00,
				0x02, 0x10,
			]),
			InitStep::Command(Command::NormalOn),
			InitStep::Delay(10),
			InitStep::Command(Command::DisplayOn),
			InitStep::Delay(100),
		]
	};
}

/// ST7735R "red tab" 1.8" 128x160 panel.
#[derive(Debug, Clone, Copy, Default)]
pub struct RedTab;

impl Panel for RedTab {
	fn name(&self) -> &'static str {
		"red-tab"
	}

	fn size(&self) -> (u16, u16) {
		(128, 160)
	}

	fn margins(&self) -> Margins {
		Margins::default()
	}

	fn orientation(&self) -> MemoryAccessControl {
		MemoryAccessControl::flipped_bgr()
	}

	fn sequence(&self) -> &'static [InitStep] {
		st7735r_sequence!(
			columns: [0x00, 0x00, 0x00, 0x7F],
			rows: [0x00, 0x00, 0x00, 0x9F]
		)
	}
}

/// ST7735R 1.44" 128x128 "green tab" panel, windowed into the 132x162 controller memory.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreenTab144;

impl Panel for GreenTab144 {
	fn name(&self) -> &'static str {
		"green-tab-144"
	}

	fn size(&self) -> (u16, u16) {
		(128, 128)
	}

	fn margins(&self) -> Margins {
		Margins { col: 2, row: 3 }
	}

	fn orientation(&self) -> MemoryAccessControl {
		MemoryAccessControl::flipped_bgr()
	}

	fn sequence(&self) -> &'static [InitStep] {
		st7735r_sequence!(
			columns: [0x00, 0x00, 0x00, 0x7F],
			rows: [0x00, 0x00, 0x00, 0x7F]
		)
	}
}

/// Known panel variants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PanelKind {
	#[default]
	GreenTab,
	RedTab,
	GreenTab144,
}

impl PanelKind {
	pub const ALL: [PanelKind; 3] = [Self::GreenTab, Self::RedTab, Self::GreenTab144];

	pub fn panel(self) -> &'static dyn Panel {
		match self {
			Self::GreenTab => &GreenTab,
			Self::RedTab => &RedTab,
			Self::GreenTab144 => &GreenTab144,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn orientation_follows_madctl() {
		for kind in PanelKind::ALL {
			let seq = kind.panel().sequence();
			let at = seq
				.iter()
				.position(|s| *s == InitStep::Command(Command::MemoryAccessControl))
				.expect("sequence sets MADCTL");
			assert_eq!(seq[at + 1], InitStep::Orientation, "{kind:?}");
		}
	}

	#[test]
	fn orientation_bytes() {
		assert_eq!(u8::from(GreenTab.orientation()), 0x00);
		assert_eq!(u8::from(RedTab.orientation()), 0xC8);
		assert_eq!(u8::from(GreenTab144.orientation()), 0xC8);
	}

	#[test]
	fn sequences_start_with_reset_and_end_with_display_on() {
		for kind in PanelKind::ALL {
			let seq = kind.panel().sequence();
			assert_eq!(seq[0], InitStep::Command(Command::SoftwareReset), "{kind:?}");
			assert_eq!(seq[seq.len() - 2], InitStep::Command(Command::DisplayOn), "{kind:?}");
		}
	}

	#[test]
	fn data_always_follows_a_command_or_data() {
		for kind in PanelKind::ALL {
			let seq = kind.panel().sequence();
			for pair in seq.windows(2) {
				if let InitStep::Data(_) | InitStep::Orientation = pair[1] {
					assert!(
						matches!(
							pair[0],
							InitStep::Command(_) | InitStep::Data(_) | InitStep::Orientation
						),
						"{kind:?}: data after {:?}",
						pair[0]
					);
				}
			}
		}
	}

	#[test]
	fn table() {
		assert_eq!(PanelKind::GreenTab.panel().name(), "green-tab");
		assert_eq!(PanelKind::RedTab.panel().margins(), Margins::default());
		assert_eq!(
			PanelKind::GreenTab144.panel().margins(),
			Margins { col: 2, row: 3 }
		);
		assert_eq!(PanelKind::GreenTab.panel().size(), (128, 160));
	}
}
