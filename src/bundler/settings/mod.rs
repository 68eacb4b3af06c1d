//! Configuration structures for disk image window layouts.

mod macos;

pub use macos::{DmgBackground, DmgLayout, ItemPosition, WindowBounds};
