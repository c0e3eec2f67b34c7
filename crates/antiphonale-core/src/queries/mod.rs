//! Relationship navigation over the catalog

pub mod relations;

pub use relations::{
    antiphonae_of_missa, assignments_of_antiphona, assignments_of_missa, members_of,
    missae_of_antiphona, missae_of_type, ordered_antiphona_types, suggestions_of,
};
