//! URL builders for the five citation sources.
//!
//! Every builder is total: blank required input gives `""`, never an error.

use serde::{Deserialize, Serialize};

use crate::encode::encode_component;
use crate::normalize::{collapse_whitespace, compound_slug};

pub const PUBCHEM_BASE: &str = "https://pubchem.ncbi.nlm.nih.gov";
pub const WHO_ATC_BASE: &str = "https://www.whocc.no/atc_ddd_index/";
pub const TITCK_BASE: &str = "https://www.titck.gov.tr/ilac";
pub const PUBMED_CENTRAL_BASE: &str = "https://www.ncbi.nlm.nih.gov/pmc";
pub const FARMALOG_BASE: &str = "https://farmalog.info";

/// Base URLs of the external reference sources.
///
/// Path-style bases are joined with a single `/`; the ATC base is used
/// verbatim in front of its `?code=` query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SourceBases {
    /// PubChem compound database.
    pub pubchem: String,
    /// WHO Collaborating Centre ATC/DDD index.
    pub who_atc: String,
    /// TİTCK product registry search.
    pub titck: String,
    /// PubMed Central literature search.
    pub pubmed_central: String,
    /// FarmaLOG drug-information portal.
    pub farmalog: String,
}

impl Default for SourceBases {
    fn default() -> Self {
        Self {
            pubchem: PUBCHEM_BASE.to_string(),
            who_atc: WHO_ATC_BASE.to_string(),
            titck: TITCK_BASE.to_string(),
            pubmed_central: PUBMED_CENTRAL_BASE.to_string(),
            farmalog: FARMALOG_BASE.to_string(),
        }
    }
}

impl SourceBases {
    /// PubChem compound page for the first component of the active ingredient.
    pub fn active_ingredient_url(&self, active_ingredient: &str) -> String {
        let slug = compound_slug(active_ingredient);
        if slug.is_empty() {
            return String::new();
        }
        format!("{}/compound/{slug}", trim_base(&self.pubchem))
    }

    /// WHO ATC/DDD index entry. The code is upper-cased and inserted literally.
    pub fn atc_code_url(&self, atc_code: &str) -> String {
        let code = atc_code.trim().to_uppercase();
        if code.is_empty() {
            return String::new();
        }
        format!("{}?code={code}", self.who_atc)
    }

    /// TİTCK registry search on the whitespace-collapsed drug name.
    pub fn company_url(&self, drug_name: &str) -> String {
        let normalized = collapse_whitespace(drug_name);
        if normalized.is_empty() {
            return String::new();
        }
        format!(
            "{}/arama?q={}",
            trim_base(&self.titck),
            encode_component(&normalized)
        )
    }

    /// PubMed Central search on the drug name plus the first word of the
    /// active ingredient, joined by a literal `+`.
    pub fn usage_info_url(&self, drug_name: &str, active_ingredient: &str) -> String {
        let drug_name = drug_name.trim();
        if drug_name.is_empty() {
            return String::new();
        }
        let mut terms = vec![encode_component(drug_name)];
        if let Some(first_word) = active_ingredient.split_whitespace().next() {
            terms.push(encode_component(first_word));
        }
        format!(
            "{}/?term={}",
            trim_base(&self.pubmed_central),
            terms.join("+")
        )
    }

    /// FarmaLOG search on the trimmed drug name. Inner whitespace is kept.
    pub fn drug_info_url(&self, drug_name: &str) -> String {
        let drug_name = drug_name.trim();
        if drug_name.is_empty() {
            return String::new();
        }
        format!(
            "{}/arama?q={}",
            trim_base(&self.farmalog),
            encode_component(drug_name)
        )
    }
}

fn trim_base(base: &str) -> &str {
    base.trim_end_matches('/')
}
