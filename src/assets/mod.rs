pub(crate) mod decode;
pub(crate) mod layers;
pub(crate) mod store;
