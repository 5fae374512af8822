pub mod proximity_resolver;
pub mod query_classifier;
pub mod response_builder;

pub use proximity_resolver::ProximityResolver;
pub use query_classifier::{QueryClassifier, QueryDisposition};
pub use response_builder::ResponseBuilder;
