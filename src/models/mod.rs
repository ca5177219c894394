pub mod _entities;
pub mod notes;
