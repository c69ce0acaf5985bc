pub mod get_example;
pub mod open_section;
pub mod search;
pub mod set_theme;

pub use get_example::*;
pub use open_section::*;
pub use search::*;
pub use set_theme::*;
