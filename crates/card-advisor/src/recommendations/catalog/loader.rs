use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use super::{CardCatalog, CardRecord, CatalogError, PointValuationTable};

/// On-disk layout of a catalog document.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogDocument {
    #[serde(default)]
    point_valuation: PointValuationTable,
    cards: Vec<CardRecord>,
}

impl CardCatalog {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let catalog = Self::from_reader(BufReader::new(file))?;
        info!(
            path = %path.display(),
            cards = catalog.cards().len(),
            "loaded card catalog"
        );
        Ok(catalog)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_reader(reader)?;
        Self::new(document.cards, document.point_valuation)
    }
}
