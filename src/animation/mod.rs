pub(crate) mod angry;
pub(crate) mod cache;
pub(crate) mod idle;
pub(crate) mod laugh;
pub(crate) mod machine;
pub(crate) mod rig;
pub(crate) mod timer;
