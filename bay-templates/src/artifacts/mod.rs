//! Templates for artifacts generated into an existing project.

mod component;
mod page;
mod service;

pub use component::{ComponentCss, ComponentJs};
pub use page::PageJs;
pub use service::{DEFAULT_BASE_URL, ServiceJs};
