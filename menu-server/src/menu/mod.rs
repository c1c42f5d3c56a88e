//! Menu assembly
//!
//! - [`CategoryOrder`] - configurable section order
//! - [`MenuAssembler`] - products + promotions → menu grouped by category

mod assembler;
mod category_order;

pub use assembler::MenuAssembler;
pub use category_order::CategoryOrder;
