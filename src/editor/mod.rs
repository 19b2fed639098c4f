pub(crate) mod drag;
pub(crate) mod layers;
pub(crate) mod options;
pub(crate) mod workspace;
