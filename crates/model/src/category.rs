use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utility::id::{HasId, Id};

use crate::ExampleData;

/// A user defined grouping for favourite places, e.g. "Home" or "Work".
/// Categories are managed on their own; a favourite place only references
/// one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FavouritePlaceCategory {
    pub id: Id<FavouritePlaceCategory>,
    pub label: String,
}

impl FavouritePlaceCategory {
    pub fn new<I, L>(id: I, label: L) -> Self
    where
        I: Into<String>,
        L: Into<String>,
    {
        Self {
            id: Id::new(id.into()),
            label: label.into(),
        }
    }
}

impl HasId for FavouritePlaceCategory {
    type IdType = String;
}

impl ExampleData for FavouritePlaceCategory {
    fn example_data() -> Self {
        FavouritePlaceCategory::new("id", "Label")
    }
}
