pub(crate) mod atoms;
pub(crate) mod form;
pub(crate) mod not_found;
pub(crate) mod shell;
pub(crate) mod toast;
