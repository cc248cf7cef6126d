pub mod table;

pub use table::{Alignment, Column, TextTable};
