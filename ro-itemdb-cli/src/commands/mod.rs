pub(crate) mod index;
pub(crate) mod process;
