pub mod product_view;
pub mod search_box;
pub mod text_edit;

pub use product_view::draw_product_page;
pub use search_box::{DrawOutput, SearchBox};
pub use text_edit::TextEdit;
