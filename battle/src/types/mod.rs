//! Domain types shared across the simulator

mod pokemon_type;
mod record;
mod status;

pub use pokemon_type::Type;
pub use record::PokemonRecord;
pub use status::Status;
