pub mod attributes;
pub mod auth;
pub mod categories;
pub mod dicts;
pub mod options;
pub mod products;
pub mod roles;
pub mod tenants;
pub mod upload;
pub mod users;
