use bitvec::{order::Msb0, BitArr};

/// Memory data access control (MADCTL) value builder.
///
/// Bits, most significant first: MY, MX, MV, ML, RGB, MH, then two unused bits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MemoryAccessControl(BitArr!(for 8, in u8, Msb0));

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Vertical {
	TopToBottom,
	BottomToTop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Horizontal {
	LeftToRight,
	RightToLeft,
}

impl MemoryAccessControl {
	/// Both address orders reversed, BGR subpixels: the ST7735R panels' usual mounting.
	pub fn flipped_bgr() -> Self {
		Self::default()
			.row_order(Vertical::BottomToTop)
			.col_order(Horizontal::RightToLeft)
			.bgr()
	}

	/// Row address order (MY).
	pub fn row_order(mut self, direction: Vertical) -> Self {
		self.0.set(
			0,
			match direction {
				Vertical::TopToBottom => false,
				Vertical::BottomToTop => true,
			},
		);
		self
	}

	/// Column address order (MX).
	pub fn col_order(mut self, direction: Horizontal) -> Self {
		self.0.set(
			1,
			match direction {
				Horizontal::LeftToRight => false,
				Horizontal::RightToLeft => true,
			},
		);
		self
	}

	/// Row/column exchange (MV) off.
	pub fn normal(mut self) -> Self {
		self.0.set(2, false);
		self
	}

	/// Row/column exchange (MV) on.
	pub fn exchanged(mut self) -> Self {
		self.0.set(2, true);
		self
	}

	/// Vertical refresh order (ML, aka Line Address Order).
	pub fn v_refresh(mut self, direction: Vertical) -> Self {
		self.0.set(
			3,
			match direction {
				Vertical::TopToBottom => false,
				Vertical::BottomToTop => true,
			},
		);
		self
	}

	pub fn rgb(mut self) -> Self {
		self.0.set(4, false);
		self
	}

	pub fn bgr(mut self) -> Self {
		self.0.set(4, true);
		self
	}

	/// Horizontal refresh order (MH, aka Data Latch Order).
	pub fn h_refresh(mut self, direction: Horizontal) -> Self {
		self.0.set(
			5,
			match direction {
				Horizontal::LeftToRight => false,
				Horizontal::RightToLeft => true,
			},
		);
		self
	}
}

impl From<MemoryAccessControl> for u8 {
	fn from(control: MemoryAccessControl) -> u8 {
		let arr: [u8; 1] = control.0.into_inner();
		arr[0]
	}
}

/// Interface pixel format (COLMOD) for RGB565, the only format the drawing code produces.
pub const COLMOD_16BPP: u8 = 0b101;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_is_zero() {
		assert_eq!(u8::from(MemoryAccessControl::default()), 0x00);
	}

	#[test]
	fn flipped_bgr_is_c8() {
		assert_eq!(u8::from(MemoryAccessControl::flipped_bgr()), 0xC8);
	}

	#[test]
	fn bit_positions() {
		let base = MemoryAccessControl::default();
		assert_eq!(u8::from(base.exchanged()), 0b0010_0000);
		assert_eq!(u8::from(base.v_refresh(Vertical::BottomToTop)), 0b0001_0000);
		assert_eq!(u8::from(base.h_refresh(Horizontal::RightToLeft)), 0b0000_0100);
		assert_eq!(u8::from(base.exchanged().normal()), 0);
		assert_eq!(u8::from(base.bgr().rgb()), 0);
	}
}
