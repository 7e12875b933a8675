pub mod error;
pub mod filesystem;
pub mod notification;
pub mod sources;

pub use error::*;
pub use filesystem::*;
pub use notification::*;
pub use sources::*;
