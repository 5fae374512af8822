pub mod dns;

pub use dns::{AnswerSource, GeoQueryOutcome, HandleGeoQueryUseCase};
