//! Filesystem utilities.
//!
//! # Logging
//!
//! The `logger` submodule installs a [`log`] backend that writes to the
//! console and to `log.txt`, so a match can be reviewed after the fact.
//!
//! # Example
//!
//! ```ignore
//! use log::{LevelFilter, info};
//! use powercell::fs::logger;
//!
//! logger::init(LevelFilter::Debug).ok();
//! info!("Robot initialized");
//! ```

/// Console and file logging.
pub mod logger;
