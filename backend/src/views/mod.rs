//! Browser-facing views: the route table, the role-gated composer and the
//! page renderer that combines them with the current session.

pub mod composer;
pub mod handlers;
pub mod render;
pub mod routes;

pub use composer::{compose, Composition, DefaultView, NavEntry, Navigation};
pub use render::{render, Content, Page};
pub use routes::{resolve, ViewRoute};
