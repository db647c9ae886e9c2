//! Lidarr Want-List CLI Library
//!
//! This library provides functionality for importing a CSV want list of
//! albums into a running Lidarr instance. It includes modules for API
//! communication, CLI operations, configuration management, and the
//! matching heuristic that reconciles list entries against Lidarr
//! search results.
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `lidarr` - Lidarr HTTP API client implementation
//! - `matching` - Album/artist matching heuristic
//! - `types` - Data structures and type definitions
//! - `utils` - List parsing and utility functions
//!
//! # Example
//!
//! ```
//! use lidlist::{config, cli};
//!
//! #[tokio::main]
//! async fn main() -> lidlist::Res<()> {
//!     config::load_env().await?;
//!     // Use CLI functions...
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod lidarr;
pub mod matching;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Uses a boxed dynamic error trait object with Send + Sync bounds so
/// the same alias works across async boundaries.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// Used for general progress and status lines throughout the import
/// loop.
///
/// # Example
///
/// ```
/// info!("Loaded {} albums", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Monitoring {}", album_title);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the
/// program with code 1.
///
/// Network, I/O, and parse faults are unrecoverable for a batch import
/// run, so they all funnel through this macro.
///
/// # Example
///
/// ```
/// error!("Cannot reach Lidarr: {}", e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Business-level misses (no artist found, no album match) are
/// warnings: the entry is reported and the loop moves on.
///
/// # Example
///
/// ```
/// warning!("No artist match: {}", artist_name);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
