pub(crate) mod diag;
