//! naiken — record and compare rental apartment viewings from the terminal.

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;
