pub mod handle;
pub mod image;
pub mod item;
mod macros;
pub mod model;
pub mod motion;
pub mod params;
pub mod theme;
pub mod view;
pub mod widget;

pub use handle::{ReelHandle, SpinTarget};
pub use item::{ImageUri, ItemId, ItemName, SlotItem};
pub use params::{Orientation, OverlayGradient, ReelParams};
pub use widget::{ReelInput, ReelOutput, SlotMachine};
