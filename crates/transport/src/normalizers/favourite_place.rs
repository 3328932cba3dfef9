use model::favourite_place::FavouritePlace;
use utility::id::{Id, IdWrapper};

use crate::{
    records::{Feature, FeatureProperties, PlaceRecord, FEATURE_TYPE},
    DenormalizeError, Normalizer, Result, SourceFormat,
};

use super::{
    AtcoCodeNormalizer, FavouritePlaceCategoryNormalizer, GeolocationNormalizer,
};

/// Maps a favourite place as a whole, delegating the geometry, the stop
/// list and the category to their own normalizers.
#[derive(Debug, Clone, Copy, Default)]
pub struct FavouritePlaceNormalizer {
    geolocation: GeolocationNormalizer,
    stops: AtcoCodeNormalizer,
    category: FavouritePlaceCategoryNormalizer,
}

impl FavouritePlaceNormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The human readable name written into the feature properties.
    /// The free text location takes priority over the label; the last
    /// resort is an empty string, never null.
    fn feature_name(place: &FavouritePlace) -> String {
        place
            .location
            .clone()
            .or_else(|| place.label.clone())
            .unwrap_or_default()
    }
}

impl Normalizer for FavouritePlaceNormalizer {
    type Entity = FavouritePlace;
    type Record = PlaceRecord;

    fn normalize(&self, place: &FavouritePlace) -> PlaceRecord {
        let feature = place.geolocation.as_ref().map(|geolocation| Feature {
            kind: Some(FEATURE_TYPE.to_owned()),
            geometry: Some(self.geolocation.normalize(geolocation)),
            properties: Some(FeatureProperties {
                name: Some(Self::feature_name(place)),
            }),
        });

        PlaceRecord {
            id: place.id.clone().raw(),
            label: place.label.clone(),
            feature,
            stops: self.stops.normalize_all(&place.stops),
            category: place
                .category
                .as_ref()
                .map(|category| self.category.normalize(category)),
        }
    }

    fn denormalize(
        &self,
        record: PlaceRecord,
        format: SourceFormat,
    ) -> Result<FavouritePlace> {
        // A null feature means the place never had a location, so the
        // location stays absent here instead of falling back to an empty
        // string as normalize does.
        let (location, geolocation) = match record.feature {
            None => (None, None),
            Some(feature) => {
                let geometry = feature.geometry.ok_or_else(|| {
                    DenormalizeError::malformed("feature without a geometry")
                })?;
                let geolocation = if geometry.coordinates.is_empty() {
                    // Client submissions may carry a feature whose
                    // coordinates have not been picked yet.
                    log::debug!(
                        "feature without coordinates in {:?} record, \
                         leaving geolocation unset",
                        format
                    );
                    None
                } else {
                    Some(self.geolocation.denormalize(geometry, format)?)
                };
                let location =
                    feature.properties.and_then(|properties| properties.name);
                (location, geolocation)
            }
        };

        Ok(FavouritePlace {
            id: record.id.map(Id::new),
            label: record.label,
            location,
            geolocation,
            stops: self.stops.denormalize_all(record.stops, format)?,
            category: record
                .category
                .map(|category| self.category.denormalize(category, format))
                .transpose()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use model::{
        category::FavouritePlaceCategory, geolocation::Geolocation, ExampleData,
    };
    use serde_json::json;

    use super::*;

    fn normalizer() -> FavouritePlaceNormalizer {
        FavouritePlaceNormalizer::new()
    }

    fn stored_record() -> PlaceRecord {
        serde_json::from_value(json!({
            "id": null,
            "label": "City Centre",
            "feature": {
                "type": "Feature",
                "geometry": {
                    "type": "Point",
                    "coordinates": [52.9549135, -1.1582327],
                },
                "properties": {
                    "name": "NG1 5AW",
                },
            },
            "stops": ["3390Y4", "3390Y3", "3390Y2"],
            "category": {
                "id": "id",
                "label": "Label",
            },
        }))
        .unwrap()
    }

    #[test]
    fn normalizes_a_fully_populated_place() {
        let record = normalizer().normalize(&FavouritePlace::example_data());

        assert_eq!(
            serde_json::to_value(record).unwrap(),
            json!({
                "id": null,
                "label": "City Centre",
                "feature": {
                    "type": "Feature",
                    "geometry": {
                        "type": "Point",
                        "coordinates": [52.9549135, -1.1582327],
                    },
                    "properties": {
                        "name": "NG1 5AW",
                    },
                },
                "stops": ["3390Y4", "3390Y3", "3390Y2"],
                "category": {
                    "id": "id",
                    "label": "Label",
                },
            })
        );
    }

    #[test]
    fn normalizes_without_geolocation_to_a_null_feature() {
        let place = FavouritePlace {
            label: Some("City Centre".to_owned()),
            ..Default::default()
        };

        let record = normalizer().normalize(&place);

        assert_eq!(record.feature, None);
    }

    #[test]
    fn feature_name_is_empty_without_location_or_label() {
        let place = FavouritePlace {
            geolocation: Some(Geolocation::new(52.9549135, -1.1582327)),
            ..Default::default()
        };

        let record = normalizer().normalize(&place);

        let feature = record.feature.unwrap();
        let geometry = feature.geometry.unwrap();
        assert_eq!(geometry.kind.as_deref(), Some("Point"));
        assert_eq!(geometry.coordinates, vec![52.9549135, -1.1582327]);
        assert_eq!(feature.properties.unwrap().name.as_deref(), Some(""));
    }

    #[test]
    fn feature_name_falls_back_to_the_label() {
        let label = "the feature name comes from the label by default";
        let place = FavouritePlace {
            label: Some(label.to_owned()),
            geolocation: Some(Geolocation::new(52.9549135, -1.1582327)),
            ..Default::default()
        };

        let record = normalizer().normalize(&place);

        let feature = record.feature.unwrap();
        assert_eq!(feature.properties.unwrap().name.as_deref(), Some(label));
    }

    #[test]
    fn location_takes_priority_over_the_label() {
        let record = normalizer().normalize(&FavouritePlace::example_data());

        let feature = record.feature.unwrap();
        assert_eq!(
            feature.properties.unwrap().name.as_deref(),
            Some("NG1 5AW")
        );
    }

    #[test]
    fn denormalizes_a_stored_record() {
        let place = normalizer()
            .denormalize(stored_record(), SourceFormat::Mongo)
            .unwrap();

        assert_eq!(place.label.as_deref(), Some("City Centre"));
        assert_eq!(place.location.as_deref(), Some("NG1 5AW"));
        assert_eq!(
            place.geolocation,
            Some(Geolocation::new(52.9549135, -1.1582327))
        );
        assert_eq!(place.stop_codes(), vec!["3390Y4", "3390Y3", "3390Y2"]);
        assert_eq!(place.category, Some(FavouritePlaceCategory::example_data()));
    }

    #[test]
    fn round_trips_a_fully_populated_place() {
        let place = FavouritePlace::example_data();

        let record = normalizer().normalize(&place);
        let roundtripped = normalizer()
            .denormalize(record, SourceFormat::Mongo)
            .unwrap();

        assert_eq!(roundtripped, place);
    }

    #[test]
    fn null_feature_denormalizes_to_an_absent_location() {
        let mut record = stored_record();
        record.feature = None;

        let place = normalizer()
            .denormalize(record, SourceFormat::Mongo)
            .unwrap();

        assert_eq!(place.location, None);
        assert_eq!(place.geolocation, None);
    }

    #[test]
    fn tolerates_a_partially_populated_client_submission() {
        let record: PlaceRecord = serde_json::from_value(json!({
            "id": "fp-542ac6f94a632",
            "label": "New Favourite Place",
            "stops": [],
            "feature": {
                "properties": {},
                "geometry": {
                    "coordinates": [],
                },
            },
        }))
        .unwrap();

        let place = normalizer()
            .denormalize(record, SourceFormat::Json)
            .unwrap();

        assert_eq!(place.id.raw_ref(), Some("fp-542ac6f94a632"));
        assert_eq!(place.label.as_deref(), Some("New Favourite Place"));
        assert_eq!(place.geolocation, None);
        assert_eq!(place.location, None);
        assert!(place.stops.is_empty());
        assert_eq!(place.category, None);
    }

    #[test]
    fn rejects_a_feature_without_a_geometry() {
        let mut record = stored_record();
        let mut feature = record.feature.take().unwrap();
        feature.geometry = None;
        record.feature = Some(feature);

        let result = normalizer().denormalize(record, SourceFormat::Mongo);

        assert!(matches!(
            result,
            Err(DenormalizeError::MalformedRecord { .. })
        ));
    }
}
