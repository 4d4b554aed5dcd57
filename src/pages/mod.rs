//! Page components for Cat Info.

mod cat_info;

pub use cat_info::CatInfoPage;
