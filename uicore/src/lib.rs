//! uicore: look and feel shared by the browser's windows

pub mod dither;
pub mod safety;
pub mod theme;
pub mod widgets;

pub use theme::{BrowserTheme, Palette};
