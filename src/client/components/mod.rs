pub mod cart_sheet;
pub mod cart_table;
pub mod catalog_controls;
pub mod course_card;
pub mod navbar;
pub mod page;
pub mod title;

pub use cart_sheet::CartSheet;
pub use cart_table::CartTable;
pub use catalog_controls::CatalogControls;
pub use course_card::CourseCard;
pub use navbar::Navbar;
pub use page::Page;
pub use title::StorefrontTitleButton;
