use embedded_graphics::pixelcolor::{
	raw::{RawData, RawU16},
	Rgb565,
};

pub const BLACK: u16 = 0x0000;
pub const BLUE: u16 = 0x001F;
pub const RED: u16 = 0xF800;
pub const GREEN: u16 = 0x07E0;
pub const CYAN: u16 = 0x07FF;
pub const MAGENTA: u16 = 0xF81F;
pub const YELLOW: u16 = 0xFFE0;
pub const WHITE: u16 = 0xFFFF;

/// Pack 24-bit RGB into the controller's 16-bit (RGB565) pixel format.
///
/// The low bits of each channel are dropped; every input is valid.
pub const fn pack_colour(r: u8, g: u8, b: u8) -> u16 {
	(((r as u16) & 0xF8) << 8) | (((g as u16) & 0xFC) << 3) | ((b as u16) >> 3)
}

/// The two bytes of a pixel as sent on the wire, high byte first.
pub(crate) const fn pixel_bytes(colour: u16) -> [u8; 2] {
	colour.to_be_bytes()
}

/// Packed value of an [`embedded_graphics`] colour.
pub fn from_rgb565(colour: Rgb565) -> u16 {
	RawU16::from(colour).into_inner()
}
