pub(crate) mod allocate;
pub(crate) mod assemble;
pub(crate) mod section;
