mod loading;
mod nav;
mod resource_page;
mod resource_table;
mod stat_card;
mod status_badge;

pub use loading::Loading;
pub use nav::Nav;
pub use resource_page::ResourcePage;
pub use resource_table::ResourceTable;
pub use stat_card::StatCard;
pub use status_badge::StatusBadge;
