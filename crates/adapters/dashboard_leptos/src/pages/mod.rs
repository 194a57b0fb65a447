mod home;
mod leases;
mod not_found;
mod properties;
mod tenants;

pub use home::Home;
pub use leases::LeasesPage;
pub use not_found::NotFound;
pub use properties::PropertiesPage;
pub use tenants::TenantsPage;
