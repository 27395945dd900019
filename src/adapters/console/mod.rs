pub mod input;
pub mod main_menu;
pub mod project_menu;

pub use main_menu::MainMenu;
