pub mod prelude;

pub mod notes;
