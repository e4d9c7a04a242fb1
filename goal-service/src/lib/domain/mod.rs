pub mod goal;
pub mod user;
