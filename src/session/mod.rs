pub(crate) mod edit;
pub(crate) mod publish;
pub(crate) mod script;
