pub mod config;
pub mod error;
pub mod identity;
pub mod layout;
pub mod requests;

pub use config::*;
pub use error::*;
pub use identity::*;
pub use layout::*;
pub use requests::*;
