//! Mock trail and profile data for demonstration purposes.
//!
//! This crate reproduces the hard-coded data from the original client
//! screens — four hiking spots and one user profile — and adds a
//! deterministic generator for padding a catalogue with believable extra
//! trails. The same seed always produces identical output.
//!
//! # Example
//!
//! ```
//! use sample_data::{generate_trails, sample_catalogue};
//!
//! let mut catalogue = sample_catalogue()?;
//! assert_eq!(catalogue.len(), 4);
//! assert_eq!(catalogue.search("venezuela").len(), 1);
//!
//! let extra = generate_trails(42, 5)?;
//! assert_eq!(extra.len(), 5);
//! assert_eq!(extra, generate_trails(42, 5)?);
//! # Ok::<(), sample_data::SampleDataError>(())
//! ```

mod error;
mod generator;
mod profile;
mod trails;

pub use error::SampleDataError;
pub use generator::generate_trails;
pub use profile::sample_profile;
pub use trails::{sample_catalogue, sample_trails};
