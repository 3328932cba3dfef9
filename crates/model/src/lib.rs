pub use serde_with;

pub mod atco_code;
pub mod category;
pub mod favourite_place;
pub mod geolocation;

/// Provides a fully populated instance of an entity for tests and generated
/// API examples.
pub trait ExampleData {
    fn example_data() -> Self;
}
