#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]

pub mod classify;
pub mod config;
pub mod deploy;
pub mod frontmatter;
pub mod site;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
