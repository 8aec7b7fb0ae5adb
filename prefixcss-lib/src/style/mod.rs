pub mod cleaner;
pub mod lines;
pub mod prefixer;
pub mod vendor;
