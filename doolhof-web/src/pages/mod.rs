pub mod gate;
pub mod logbook;
pub mod maze;
pub mod not_found;
pub mod won;
