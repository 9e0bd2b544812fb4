pub(crate) mod animator;
pub(crate) mod effects;
pub(crate) mod logo;
pub(crate) mod pin;
