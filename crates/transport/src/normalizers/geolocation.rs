use model::geolocation::Geolocation;

use crate::{
    records::{Geometry, POINT_TYPE},
    DenormalizeError, Normalizer, Result, SourceFormat,
};

/// Maps a coordinate pair to and from a GeoJSON `Point` geometry.
///
/// The coordinates are written as `[latitude, longitude]`, deviating from
/// the GeoJSON standard order on purpose; existing stored documents and
/// clients expect it that way.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeolocationNormalizer;

impl Normalizer for GeolocationNormalizer {
    type Entity = Geolocation;
    type Record = Geometry;

    fn normalize(&self, geolocation: &Geolocation) -> Geometry {
        Geometry {
            kind: Some(POINT_TYPE.to_owned()),
            coordinates: vec![geolocation.latitude, geolocation.longitude],
        }
    }

    fn denormalize(
        &self,
        geometry: Geometry,
        _format: SourceFormat,
    ) -> Result<Geolocation> {
        match geometry.coordinates.as_slice() {
            [latitude, longitude, ..] => {
                Ok(Geolocation::new(*latitude, *longitude))
            }
            _ => Err(DenormalizeError::malformed(
                "point geometry with fewer than two coordinates",
            )),
        }
    }
}
