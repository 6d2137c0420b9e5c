mod cleaning;
mod detail;
mod disk_usage;
mod menu;
mod results;
mod scanning;

pub use cleaning::render_cleaning;
pub use detail::render_detail;
pub use disk_usage::render_disk_usage;
pub use menu::render_menu;
pub use results::render_results;
pub use scanning::render_scanning;
