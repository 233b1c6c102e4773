//! A driver for ST7735-based SPI TFT displays.
//!
//! This crate turns drawing operations (pixels, rectangles, lines, bitmap text) into the
//! controller's command/data protocol, and knows the power-on sequences of the common 1.8" and
//! 1.44" panels.
//!
//! The wire is abstracted behind the [`Transport`] trait. On Linux, [`SpiTransport`] drives a
//! display connected to a Raspberry Pi's SPI bus and GPIO pins; [`Recorder`] captures the traffic
//! instead, for tests and dry runs.
//!
//! It implements both a simple immediate-mode interface and [`embedded_graphics`]' traits.
//!
//! # Example
//!
//! ```no_run
//! # use st7735_driver::{colour, Display, PanelKind, Result, FONT_5X8};
//! # #[cfg(target_os = "linux")]
//! # fn main() -> Result<()> {
//! use st7735_driver::{SpiArgs, SpiTransport};
//!
//! let panel = PanelKind::GreenTab.panel();
//! let (width, height) = panel.size();
//!
//! let mut spi = SpiTransport::new(SpiArgs::default())?;
//! spi.probe_buffer_length()?;
//!
//! let mut lcd = Display::new(spi, width, height);
//! lcd.init(panel)?;
//! lcd.clear(colour::BLACK)?;
//! lcd.draw_text(0, 0, "Hello", Some(&FONT_5X8), colour::pack_colour(255, 0, 255), 2)?;
//! # Ok(()) }
//! # #[cfg(not(target_os = "linux"))]
//! # fn main() {}
//! ```

#[doc(inline)]
pub use commands::Command;

#[doc(inline)]
pub use display::{Backlight, Display, LineCount};

#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use fonts::FONT_5X8;

#[doc(inline)]
pub use glyph::Font;

#[doc(inline)]
pub use helpers::*;

#[doc(inline)]
pub use panel::{GreenTab, GreenTab144, InitStep, Margins, Panel, PanelKind, RedTab};

#[doc(inline)]
pub use recording::{Op, Recorder};

#[cfg(target_os = "linux")]
#[doc(inline)]
pub use rpi::{SpiArgs, SpiTransport};

#[doc(inline)]
pub use transport::Transport;

pub mod colour;
pub mod commands;

#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
mod buffer;
mod display;
mod error;
mod fonts;
mod glyph;
mod graphics;
mod helpers;
mod panel;
mod primitives;
mod recording;
#[cfg(target_os = "linux")]
mod rpi;
mod transport;
mod window;
