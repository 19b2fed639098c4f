pub(crate) mod orientation;
pub(crate) mod presets;
