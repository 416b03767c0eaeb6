//! The drills themselves, plus shared config.
//!
//! ## Modules
//!
//! - [`truncate`] - Bound text to a character limit with an ellipsis marker
//! - [`finders`] - First element matching a predicate
//! - [`slug`] - Title to URL slug conversion
//! - [`list`] - Non-mutating `add` / `remove` list helpers
//! - [`config`] - CLI defaults stored in the user's config directory
//!
//! ## Key Functions
//!
//! ```
//! use drills::utils::{find_element, truncate_string, url_slug};
//!
//! assert_eq!(truncate_string("A-tisket a-tasket", 8), "A-tisket...");
//! assert_eq!(find_element(&[1, 3, 5, 8], |n| n % 2 == 0), Some(&8));
//! assert_eq!(url_slug("Winter Is Coming"), "winter-is-coming");
//! ```

pub mod config;
pub mod finders;
pub mod list;
pub mod slug;
pub mod truncate;

pub use config::*;
pub use finders::*;
pub use list::*;
pub use slug::*;
pub use truncate::*;
