pub mod note_io;
pub mod vault;

pub use vault::Vault;
