//! Policy Form UI
//!
//! Browser-side behaviors for the policy forms rendered by the backend:
//! digit-only phone/number inputs, auto-closing alert banners, and the
//! TypeBien -> SousTypeBien dependent dropdown.
//!
//! The behaviors themselves (`sanitize`, `alerts`, `dropdown`) only talk to
//! small capability traits; `dom` and `api` implement those with web-sys.

pub mod alerts;
pub mod api;
pub mod app;
pub mod config;
pub mod dom;
pub mod dropdown;
pub mod error;
pub mod models;
pub mod sanitize;

pub use config::FormConfig;
pub use error::FormError;
