/// TFT controller commands
///
/// This is the subset of the ST7735 command set used to drive the display.
/// Descriptions are derived from usage and [the datasheet for the ST7735 chip][ST7735].
///
/// Read commands are left out: the 4-wire interface is used write-only.
///
/// [ST7735]: https://www.displayfuture.com/Display/datasheet/controller/ST7735.pdf
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Command {
	/// No-op (NOP).
	///
	/// Can be used to terminate a memory write early.
	Nop = 0x00,

	/// Software reset (SWRESET).
	///
	/// This must be followed by a delay of at least 120ms.
	SoftwareReset = 0x01,

	/// Sleep in and booster off (SLPIN).
	///
	/// This must be followed by a delay of at least 5ms.
	SleepIn = 0x10,

	/// Sleep out and booster on (SLPOUT).
	///
	/// This must be followed by a delay of at least 120ms.
	SleepOut = 0x11,

	/// Partial mode on (PTLON).
	PartialOn = 0x12,

	/// Partial mode off, back to normal display (NORON).
	NormalOn = 0x13,

	/// Switch off display inversion (INVOFF).
	InversionOff = 0x20,

	/// Switch on display inversion (INVON).
	InversionOn = 0x21,

	/// Turn display off (DISPOFF).
	DisplayOff = 0x28,

	/// Turn display on (DISPON).
	DisplayOn = 0x29,

	/// Set column addresses (CASET).
	///
	/// 2 u16s, big-endian:
	/// - start column
	/// - end column
	ColumnAddressSet = 0x2A,

	/// Set row addresses (RASET).
	///
	/// 2 u16s, big-endian:
	/// - start row
	/// - end row
	RowAddressSet = 0x2B,

	/// Memory write (RAMWR).
	///
	/// The following data bytes are pixel data for the current window, scanned row-major.
	MemoryWrite = 0x2C,

	/// Partial area (PTLAR).
	///
	/// 2 u16s: start and end rows of the partial area.
	PartialArea = 0x30,

	/// Memory data access control (MADCTL).
	///
	/// 1 byte, see [`MemoryAccessControl`](super::MemoryAccessControl).
	MemoryAccessControl = 0x36,

	/// Interface pixel format (COLMOD).
	///
	/// 1 byte, low 3 bits select the format:
	/// - 0b011: 12 bit/pixel
	/// - 0b101: 16 bit/pixel
	/// - 0b110: 18 bit/pixel
	InterfacePixelFormat = 0x3A,

	/// Frame rate control in normal mode, full colours (FRMCTR1).
	///
	/// 3 bytes: RTNA, front porch, back porch.
	FrameRateNormal = 0xB1,

	/// Frame rate control in idle mode, 8 colours (FRMCTR2).
	FrameRateIdle = 0xB2,

	/// Frame rate control in partial mode, full colours (FRMCTR3).
	///
	/// 6 bytes: dot inversion mode values, then line inversion mode values.
	FrameRatePartial = 0xB3,

	/// Display inversion control (INVCTR).
	InversionControl = 0xB4,

	/// Power control 1 (PWCTR1): AVDD and GVDD.
	PowerControl1 = 0xC0,

	/// Power control 2 (PWCTR2): VGH and VGL.
	PowerControl2 = 0xC1,

	/// Power control 3 (PWCTR3), in normal mode.
	PowerControl3 = 0xC2,

	/// Power control 4 (PWCTR4), in idle mode.
	PowerControl4 = 0xC3,

	/// Power control 5 (PWCTR5), in partial mode.
	PowerControl5 = 0xC4,

	/// VCOM control 1 (VMCTR1).
	VcomControl = 0xC5,

	/// Positive gamma correction (GMCTRP1).
	///
	/// 16 bytes. Refer to the datasheet.
	PositiveGammaControl = 0xE0,

	/// Negative gamma correction (GMCTRN1).
	///
	/// 16 bytes. Refer to the datasheet.
	NegativeGammaControl = 0xE1,
}

impl From<Command> for u8 {
	fn from(command: Command) -> u8 {
		command as u8
	}
}
