//! # sms-router
//!
//! Client-side navigation for the SMS client:
//!
//! - [`RouteRecord`] / [`RouteTable`]: the static route tree with per-route
//!   authorization metadata, and resolution of a path into its matched
//!   chain of records.
//! - [`RouteGuard`]: the per-navigation policy check (authenticated? right
//!   role?) against the session.
//! - [`Navigation`]: follows record redirects and guard redirects until a
//!   view is reached.

pub mod guard;
pub mod navigation;
pub mod route;
pub mod table;

pub use guard::{GuardDecision, RouteGuard};
pub use navigation::Navigation;
pub use route::{MatchedRecord, ResolvedRoute, RouteMeta, RouteRecord};
pub use table::RouteTable;
