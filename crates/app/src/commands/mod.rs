pub mod list;
pub mod sample;
pub mod take;
pub mod validate;
