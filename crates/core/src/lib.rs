//! Core library for the starfield demo.
//!
//! Each module owns one piece of the picture (stars, raster bar, scroller)
//! or one collaborator (window, font, audio). [`FrameLoop`] ties them
//! together and drives a [`Presenter`] once per frame.

pub mod assets;
pub mod audio;
pub mod config;
pub mod error;
pub mod frame;
pub mod raster;
pub mod render;
pub mod scroller;
pub mod starfield;
pub mod timeline;
pub mod window;

pub use assets::FontAsset;
pub use audio::{Music, MusicPlayer};
pub use config::{AudioConfig, DemoConfig, Viewport};
pub use error::{DemoError, Result};
pub use frame::{FrameLoop, LoopState};
pub use raster::RasterBar;
pub use render::{Canvas, Presenter};
pub use scroller::Scroller;
pub use starfield::StarField;
pub use timeline::{AnimationClock, FramePacer};
pub use window::DesktopWindow;
