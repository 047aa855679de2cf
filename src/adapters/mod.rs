// Adapters layer: concrete sources for the domain ports.

pub mod csv_people;
