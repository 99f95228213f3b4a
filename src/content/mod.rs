pub(crate) mod element;
pub(crate) mod place;
pub(crate) mod shape;
