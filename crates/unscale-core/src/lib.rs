pub mod boundary;
pub mod compare;
pub mod consts;
pub mod contrast;
pub mod dimension;
pub mod error;
pub mod io;
pub mod report;
pub mod unscale;
