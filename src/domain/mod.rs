pub mod assignment;
pub mod customer;
pub mod resource;
