/// Error type for driver operations.
///
/// Only transport failures are errors: geometry outside the display is clipped or dropped, and a
/// missing capability is reported through a sentinel value instead.
#[derive(Debug, thiserror::Error)]
#[cfg_attr(feature = "miette", derive(miette::Diagnostic))]
pub enum Error {
	#[cfg(target_os = "linux")]
	#[error("GPIO error")]
	#[cfg_attr(
		feature = "miette",
		diagnostic(help("GPIO error, check the pin numbers"))
	)]
	Gpio(#[from] rppal::gpio::Error),

	#[cfg(target_os = "linux")]
	#[error("SPI error")]
	#[cfg_attr(
		feature = "miette",
		diagnostic(help("SPI error, check settings or increase spidev.bufsiz"))
	)]
	Spi(#[from] rppal::spi::Error),

	#[error("I/O error")]
	#[cfg_attr(feature = "miette", diagnostic(help("local (non-SPI/GPIO) I/O error")))]
	Io(#[from] std::io::Error),
}

/// Convenience type for Results in this crate.
pub type Result<T> = std::result::Result<T, Error>;
