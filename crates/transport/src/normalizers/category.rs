use model::category::FavouritePlaceCategory;
use utility::id::Id;

use crate::{records::CategoryRecord, Normalizer, Result, SourceFormat};

/// Maps a category to and from its `{id, label}` record. Both fields are
/// required whenever a category record is present; there is no defaulting
/// here.
#[derive(Debug, Clone, Copy, Default)]
pub struct FavouritePlaceCategoryNormalizer;

impl Normalizer for FavouritePlaceCategoryNormalizer {
    type Entity = FavouritePlaceCategory;
    type Record = CategoryRecord;

    fn normalize(&self, category: &FavouritePlaceCategory) -> CategoryRecord {
        CategoryRecord {
            id: category.id.raw(),
            label: category.label.clone(),
        }
    }

    fn denormalize(
        &self,
        record: CategoryRecord,
        _format: SourceFormat,
    ) -> Result<FavouritePlaceCategory> {
        Ok(FavouritePlaceCategory {
            id: Id::new(record.id),
            label: record.label,
        })
    }
}
