//! reposcout library exports for testing

pub mod core;
pub mod github;
pub mod link;
pub mod tui;

#[cfg(test)]
pub mod test_support;
