pub mod code_fence;
pub mod heading;
pub mod list_item;
pub mod table;
pub mod thematic_break;

pub use code_fence::CodeFence;
pub use heading::Heading;
pub use list_item::ListItem;
pub use table::Table;
pub use thematic_break::ThematicBreak;
