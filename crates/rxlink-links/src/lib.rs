//! Citation-source link generation for drug product tables.
//!
//! This crate turns the free-text fields of a drug record into URLs for five
//! external references:
//!
//! - **PubChem**: compound page for the active ingredient slug
//! - **WHO ATC/DDD**: index entry for the ATC code
//! - **TİTCK**: registry search on the drug name
//! - **PubMed Central**: literature search on drug name and ingredient
//! - **FarmaLOG**: drug-information search on the drug name
//!
//! All builders are pure. The generated URLs are never fetched or validated.

mod config;
mod encode;
mod error;
mod links;
mod normalize;
mod sources;

pub use config::load_source_bases;
pub use encode::encode_component;
pub use error::{LinkError, Result};
pub use links::SourceLinks;
pub use normalize::{collapse_whitespace, compound_slug};
pub use sources::{
    FARMALOG_BASE, PUBCHEM_BASE, PUBMED_CENTRAL_BASE, SourceBases, TITCK_BASE, WHO_ATC_BASE,
};
