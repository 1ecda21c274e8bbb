//! Application constants.

use std::time::Duration;

/// Application name, used for config and log directories.
pub const APP_NAME: &str = "txlens";

/// Explorer API used when neither the config nor the CLI names one.
pub const DEFAULT_API_URL: &str = "https://xsnexplorer.io/api";

/// Default log file name inside the data directory.
pub const LOG_FILE: &str = "txlens.log";

/// Interval between redraws when no input arrives.
pub const TICK_RATE: Duration = Duration::from_millis(100);

/// Decimal places shown for amounts.
pub const AMOUNT_DECIMALS: usize = 8;

/// Height of the summary block (borders included).
pub const SUMMARY_HEIGHT: u16 = 10;

/// Height of the header bar.
pub const HEADER_HEIGHT: u16 = 1;

/// Height of the footer with key hints.
pub const FOOTER_HEIGHT: u16 = 1;
