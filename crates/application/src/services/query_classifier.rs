use ferrous_geodns_domain::config::ZoneConfig;
use ferrous_geodns_domain::{DnsQuestion, RecordType};

/// Outcome of classifying a single query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryDisposition {
    /// Not an A query, or outside the served zone
    Refuse,
    /// Exactly the origin host: answer with the configured origin IP
    AnswerOrigin,
    /// Any other A query in the zone: answer with the nearest edge
    Delegate,
}

/// Stateless zone policy. Name comparisons are ASCII case-insensitive.
#[derive(Debug, Clone)]
pub struct QueryClassifier {
    apex: String,
    origin_name: String,
}

impl QueryClassifier {
    pub fn new(apex: &str, origin_name: &str) -> Self {
        Self {
            apex: normalize(apex),
            origin_name: normalize(origin_name),
        }
    }

    pub fn from_zone(zone: &ZoneConfig) -> Self {
        Self::new(zone.apex_name(), &zone.origin_name())
    }

    pub fn classify(&self, question: &DnsQuestion) -> QueryDisposition {
        if question.record_type != RecordType::A || !self.in_zone(&question.name) {
            return QueryDisposition::Refuse;
        }

        if normalize(&question.name) == self.origin_name {
            QueryDisposition::AnswerOrigin
        } else {
            QueryDisposition::Delegate
        }
    }

    /// The apex itself or any name under it, matched on label boundaries.
    pub fn in_zone(&self, name: &str) -> bool {
        let name = normalize(name);
        if name == self.apex {
            return true;
        }
        name.strip_suffix(self.apex.as_str())
            .is_some_and(|prefix| prefix.ends_with('.'))
    }
}

fn normalize(name: &str) -> String {
    name.trim_end_matches('.').to_ascii_lowercase()
}
