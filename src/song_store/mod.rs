mod errors;
pub mod lyrics;
mod models;
pub mod query;
mod schema;
mod store;
mod trait_def;

pub use errors::{SongError, SongResult};
pub use models::*;
pub use schema::SONGS_VERSIONED_SCHEMAS;
pub use store::{SqliteSongStore, DEFAULT_READ_POOL_SIZE};
pub use trait_def::SongStore;
