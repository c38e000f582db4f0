// SPDX-License-Identifier: BSD-3-Clause
//
// See LICENSE at the project root for full text.

use crate::query::QueryParams;
use serde::{Deserialize, Serialize};

/// Element matching mode for species search: require all listed elements or
/// any of them. The server defaults to `All`, so only `Any` is emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElemMode {
    #[default]
    All,
    Any,
}

/// Search filter for the species list endpoint.
///
/// An immutable request object: build one per search instead of mutating
/// shared UI state, then lower it with [`SpeciesFilter::to_query`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesFilter {
    /// Free-text query: formula, SMILES, InChIKey or name fragment.
    pub q: Option<String>,
    /// Element symbols the species must contain.
    pub elements: Vec<String>,
    pub elem_mode: ElemMode,
    pub max_heavy_atoms: Option<u32>,
    pub ts_only: Option<bool>,
    pub include_ts: Option<bool>,
    pub require_imag: Option<bool>,
    /// TS energy window, kcal/mol.
    pub de_min_kcal: Option<f64>,
    pub de_max_kcal: Option<f64>,
    pub limit: u32,
    pub offset: u32,
}

impl Default for SpeciesFilter {
    fn default() -> Self {
        Self {
            q: None,
            elements: vec![],
            elem_mode: ElemMode::All,
            max_heavy_atoms: None,
            ts_only: None,
            include_ts: None,
            require_imag: None,
            de_min_kcal: None,
            de_max_kcal: None,
            // server-side defaults of the species search endpoint
            limit: 100,
            offset: 0,
        }
    }
}

impl SpeciesFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn to_query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.append_opt("q", self.q.clone());
        params.append("elements", self.elements.join(","));
        if self.elem_mode == ElemMode::Any {
            params.append("elem_mode", "any");
        }
        params.append_opt("max_heavy_atoms", self.max_heavy_atoms);
        params.append_opt("ts_only", self.ts_only);
        params.append_opt("include_ts", self.include_ts);
        params.append_opt("require_imag", self.require_imag);
        params.append_opt("de_min_kcal", self.de_min_kcal);
        params.append_opt("de_max_kcal", self.de_max_kcal);
        params.append("limit", self.limit);
        params.append("offset", self.offset);
        params
    }
}

/// Filter for listing a species' conformers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConformerFilter {
    /// Restrict to one level of theory.
    pub lot_id: Option<i64>,
    pub is_ts: Option<bool>,
    /// One conformer per well (the well representatives).
    pub representative_only: bool,
    pub well_rank: Option<u32>,
    pub limit: u32,
    pub offset: u32,
}

impl Default for ConformerFilter {
    fn default() -> Self {
        Self {
            lot_id: None,
            is_ts: None,
            representative_only: false,
            well_rank: None,
            // server-side defaults of the conformer list endpoint
            limit: 50,
            offset: 0,
        }
    }
}

impl ConformerFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn to_query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.append_opt("lot_id", self.lot_id);
        params.append_opt("is_ts", self.is_ts);
        params.append("representative_only", self.representative_only);
        params.append_opt("well_rank", self.well_rank);
        params.append("limit", self.limit);
        params.append("offset", self.offset);
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn species_defaults() {
        let filter = SpeciesFilter::new();
        assert_eq!(filter.to_query().to_query_string(), "limit=100&offset=0");
    }

    #[test]
    fn default_lowers_like_the_endpoints() {
        // both constructors must agree with the server-side defaults
        assert_eq!(
            SpeciesFilter::default().to_query().to_query_string(),
            "limit=100&offset=0"
        );
        assert_eq!(
            ConformerFilter::default().to_query().to_query_string(),
            "limit=50&offset=0"
        );
        assert_eq!(SpeciesFilter::default(), SpeciesFilter::new());
        assert_eq!(ConformerFilter::default(), ConformerFilter::new());
    }

    #[test]
    fn struct_update_from_default_keeps_limits() {
        let filter = SpeciesFilter {
            q: Some("CCO".to_string()),
            ..Default::default()
        };
        assert_eq!(
            filter.to_query().to_query_string(),
            "q=CCO&limit=100&offset=0"
        );
    }

    #[test]
    fn species_full_filter() {
        let filter = SpeciesFilter {
            q: Some("C2H6O".to_string()),
            elements: vec!["C".to_string(), "O".to_string()],
            elem_mode: ElemMode::Any,
            max_heavy_atoms: Some(10),
            ts_only: Some(true),
            de_min_kcal: Some(2.5),
            limit: 25,
            offset: 50,
            ..SpeciesFilter::new()
        };
        assert_eq!(
            filter.to_query().to_query_string(),
            "q=C2H6O&elements=C%2CO&elem_mode=any&max_heavy_atoms=10&ts_only=true&de_min_kcal=2.5&limit=25&offset=50"
        );
    }

    #[test]
    fn false_flags_are_not_sent() {
        let filter = SpeciesFilter {
            include_ts: Some(false),
            ..SpeciesFilter::new()
        };
        // the query builder cannot express `include_ts=false`; the flag is
        // simply absent, like in the browser it was lifted from
        assert_eq!(filter.to_query().to_query_string(), "limit=100&offset=0");
    }

    #[test]
    fn conformer_filter() {
        let filter = ConformerFilter {
            lot_id: Some(3),
            representative_only: true,
            ..ConformerFilter::new()
        };
        assert_eq!(
            filter.to_query().to_query_string(),
            "lot_id=3&representative_only=true&limit=50&offset=0"
        );
    }

    #[test]
    fn new_sets_endpoint_default_limits() {
        assert_eq!(SpeciesFilter::new().limit, 100);
        assert_eq!(ConformerFilter::new().limit, 50);
        assert_eq!(SpeciesFilter::new().elem_mode, ElemMode::All);
    }
}
