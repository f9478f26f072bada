pub mod mailersend;
pub mod stripe;
