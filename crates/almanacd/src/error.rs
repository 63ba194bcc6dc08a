//! Error types for the almanac command line.

use almanac::error::AlmanacError;
use thiserror::Error;

/// Error type alias used for the almanacd crate.
pub type Result<T> = core::result::Result<T, AlmanacdError>;

/// Errors that can end a command.
///
/// Query failures never show up here: they are reported as the panel's error banner and the
/// command still succeeds.
#[derive(Error, Debug)]
pub enum AlmanacdError {
  /// Configuration, URL, or file errors from the library.
  #[error(transparent)]
  Almanac(#[from] AlmanacError),

  /// A terminal prompt failed.
  #[error(transparent)]
  Dialog(#[from] dialoguer::Error),

  /// Writing output failed.
  #[error(transparent)]
  Io(#[from] std::io::Error),
}
