//! Page-level views wired to the router.
//!
//! - [`HomePage`] - landing page: hero, tool grid, features, FAQ, newsletter
//! - [`ToolPage`] - one tool, resolved from the `:slug` route parameter
//! - [`NotFoundPage`] - fallback for unknown routes and unknown slugs

mod home;
mod tool;
mod not_found;

pub use home::*;
pub use tool::*;
pub use not_found::*;
