pub mod directory;
pub mod person;
