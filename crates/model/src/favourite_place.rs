use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utility::id::{HasId, Id};

use crate::{
    atco_code::AtcoCode, category::FavouritePlaceCategory,
    geolocation::Geolocation, ExampleData,
};

/// A place a user has saved, together with the stops to depart from when
/// travelling there.
///
/// `location` is a free text description (usually a postcode) while
/// `geolocation` is the exact coordinate; either, both or neither may be
/// set.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FavouritePlace {
    #[serde(skip)]
    pub id: Option<Id<FavouritePlace>>,
    pub label: Option<String>,
    pub location: Option<String>,
    pub geolocation: Option<Geolocation>,
    #[serde(default)]
    pub stops: Vec<AtcoCode>,
    pub category: Option<FavouritePlaceCategory>,
}

impl FavouritePlace {
    pub fn latitude(&self) -> Option<f64> {
        self.geolocation.map(|geolocation| geolocation.latitude)
    }

    pub fn longitude(&self) -> Option<f64> {
        self.geolocation.map(|geolocation| geolocation.longitude)
    }

    pub fn stop_codes(&self) -> Vec<&str> {
        self.stops.iter().map(|stop| stop.as_str()).collect()
    }
}

impl HasId for FavouritePlace {
    type IdType = String;
}

impl ExampleData for FavouritePlace {
    fn example_data() -> Self {
        FavouritePlace {
            id: None,
            label: Some("City Centre".to_owned()),
            location: Some("NG1 5AW".to_owned()),
            geolocation: Some(Geolocation::new(52.9549135, -1.1582327)),
            stops: vec![
                AtcoCode::new("3390Y4"),
                AtcoCode::new("3390Y3"),
                AtcoCode::new("3390Y2"),
            ],
            category: Some(FavouritePlaceCategory::example_data()),
        }
    }
}
