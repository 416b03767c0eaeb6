//! # drills
//!
//! Small, independent algorithm drills: a Fahrenheit-backed thermostat with
//! a Celsius view, string truncation, first-match search, URL slugs, and
//! copy-then-modify list helpers.
//!
//! ## Modules
//!
//! - [`temperature`] - [`Thermostat`](temperature::Thermostat) with read/write Celsius
//! - [`utils`] - Truncation, search, slugs, list helpers and config
//! - [`predicate`] - Number predicates used by `drills find`
//! - [`output`] - Result formatting (colored text or JSON lines)
//! - [`logging`] - Logger setup
//!
//! ## Quick Start
//!
//! ```
//! use drills::temperature::Thermostat;
//! use drills::utils::{add, remove};
//!
//! let mut thermos = Thermostat::new(76.0);
//! assert!((thermos.celsius() - 24.44).abs() < 0.01);
//! thermos.set_celsius(26.0);
//! assert!((thermos.celsius() - 26.0).abs() < 1e-9);
//!
//! let books = vec!["A", "B"];
//! assert_eq!(add(&books, "C"), vec!["A", "B", "C"]);
//! assert_eq!(remove(&books, &"A"), Some(vec!["B"]));
//! assert_eq!(books, vec!["A", "B"]);
//! ```

pub mod logging;
pub mod output;
pub mod predicate;
pub mod temperature;
pub mod utils;
