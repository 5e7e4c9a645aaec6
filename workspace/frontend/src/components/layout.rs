pub mod hero;
pub mod layout;
