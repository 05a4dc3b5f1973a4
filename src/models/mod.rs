pub mod app;
pub mod dlc;
pub mod package;
pub mod price;

pub use app::*;
pub use dlc::*;
pub use package::*;
pub use price::*;
