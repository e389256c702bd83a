pub mod alert;
pub mod config;
pub mod error;
pub mod order;
pub mod search;

pub use alert::*;
pub use config::*;
pub use error::*;
pub use order::*;
pub use search::*;
