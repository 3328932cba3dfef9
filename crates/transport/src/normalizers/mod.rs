use crate::{Result, SourceFormat};

pub mod atco_code;
pub mod category;
pub mod favourite_place;
pub mod geolocation;

pub use self::atco_code::AtcoCodeNormalizer;
pub use self::category::FavouritePlaceCategoryNormalizer;
pub use self::favourite_place::FavouritePlaceNormalizer;
pub use self::geolocation::GeolocationNormalizer;

/// A bidirectional mapping between one entity type and its plain wire
/// record. Normalizers are stateless; a single instance may be shared
/// freely.
pub trait Normalizer {
    type Entity;
    type Record;

    /// Entity to plain record. Absent optional fields degrade to
    /// `null`/empty in the record, never to an error.
    fn normalize(&self, entity: &Self::Entity) -> Self::Record;

    /// Plain record back to the entity. `format` names the origin of the
    /// record; see [`SourceFormat`](crate::SourceFormat).
    fn denormalize(
        &self,
        record: Self::Record,
        format: SourceFormat,
    ) -> Result<Self::Entity>;
}
