//! Column commands

mod add;
mod delete;
mod list;
mod rename;
mod reorder;

pub use add::AddColumn;
pub use delete::{DeleteColumn, DeletedColumn};
pub use list::ListColumns;
pub use rename::RenameColumn;
pub use reorder::ReorderColumns;
