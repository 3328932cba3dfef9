use model::atco_code::AtcoCode;

use crate::{Normalizer, Result, SourceFormat};

/// Maps a stop identifier to and from its plain code string. Stop lists
/// keep their order exactly; the sequence of boarding points is meaningful.
#[derive(Debug, Clone, Copy, Default)]
pub struct AtcoCodeNormalizer;

impl AtcoCodeNormalizer {
    pub fn normalize_all(&self, stops: &[AtcoCode]) -> Vec<String> {
        stops.iter().map(|stop| self.normalize(stop)).collect()
    }

    pub fn denormalize_all(
        &self,
        codes: Vec<String>,
        format: SourceFormat,
    ) -> Result<Vec<AtcoCode>> {
        codes
            .into_iter()
            .map(|code| self.denormalize(code, format))
            .collect()
    }
}

impl Normalizer for AtcoCodeNormalizer {
    type Entity = AtcoCode;
    type Record = String;

    fn normalize(&self, stop: &AtcoCode) -> String {
        stop.as_str().to_owned()
    }

    fn denormalize(&self, code: String, _format: SourceFormat) -> Result<AtcoCode> {
        Ok(AtcoCode::new(code))
    }
}
