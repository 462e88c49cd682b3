pub mod collection;
pub mod config;
pub mod detail;
pub mod error;
pub mod identity;
pub mod navigation;
pub mod screen;
pub mod status;

#[cfg(test)]
pub(crate) mod testing;
