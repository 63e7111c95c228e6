pub(crate) mod backend;
pub(crate) mod canvas;
pub(crate) mod cpu;
