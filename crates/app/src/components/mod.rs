pub mod header;
pub mod icon;
pub mod side_nav;
pub mod toast;
