pub mod export;
pub mod import;
pub mod init;
pub mod preview;
pub mod projects;
pub mod publish;
pub mod serve;

pub use export::{export, ExportArgs};
pub use import::{import, ImportArgs};
pub use init::{init, InitArgs};
pub use preview::{preview, PreviewArgs};
pub use projects::{delete, list, new, open, save, DeleteArgs, NewArgs, OpenArgs};
pub use publish::publish;
pub use serve::{serve, ServeArgs};
