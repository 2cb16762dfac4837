pub mod delete;
pub mod key;
pub mod read;
pub mod write;

pub use delete::delete_handler;
pub use key::KeyPath;
pub use read::read_handler;
pub use write::write_handler;
