pub mod config;
pub mod controls;
pub mod field;
pub mod fieldmap;
pub mod macros;
pub mod seed;
pub mod space;
pub mod trace;

#[cfg(test)]
mod tests;
