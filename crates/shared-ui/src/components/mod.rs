pub mod alert;
pub mod button;
pub mod download_link;
pub mod form_select;
pub mod input;
pub mod tooltip;

// Re-exports for convenience
pub use alert::*;
pub use button::*;
pub use download_link::*;
pub use form_select::*;
pub use input::*;
pub use tooltip::*;
