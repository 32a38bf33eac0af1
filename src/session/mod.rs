pub(crate) mod controls;
pub(crate) mod frame_generator;
