pub mod cleaning;
pub mod core;
pub mod corpus;
pub mod export;
pub mod frequency;
pub mod persistence;
pub mod render;
pub mod session;

pub use crate::{
    core::{
        ChistometroError,
        FacetLevel,
        FacetSelection,
        FilterSelection,
        JokeRecord,
        StopwordConfig,
    },
    corpus::Corpus,
    frequency::FrequencyTable,
    session::{
        DisclosureStage,
        Session,
        StageOutcome,
    },
};
