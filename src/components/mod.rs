mod app;
mod loader;
mod navbar;
mod people_page;

pub use app::App;
pub use loader::Loader;
pub use navbar::Navbar;
pub use people_page::PeoplePage;
