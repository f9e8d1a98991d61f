//! HTML views rendered with maud

pub mod books;
pub mod errors;
pub mod layout;

pub use layout::layout;
