pub mod menu;
pub mod scroll;

#[cfg(feature = "web")]
pub mod header;
#[cfg(feature = "web")]
pub mod outside;

#[cfg(feature = "web")]
pub use header::Header;
