pub(crate) mod page;
pub(crate) mod ticker;
