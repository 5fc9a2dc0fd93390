pub mod code;
pub mod code_grid;

pub use code::PlusCode;
pub use code_grid::{CodeGrid, CodeGridBuilder};
