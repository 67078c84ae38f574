pub mod errors;
pub mod models;

pub use errors::ChistometroError;
pub use models::{ FacetLevel, FacetSelection, FilterSelection, JokeRecord, StopwordConfig };
