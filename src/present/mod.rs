pub(crate) mod config;
pub(crate) mod cursor;
pub(crate) mod driver;
