//! Parsing ports (interfaces)

mod front_end;

pub use front_end::FrontEnd;
