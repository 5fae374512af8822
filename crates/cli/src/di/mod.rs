mod geodns;

pub use geodns::GeoDnsServices;
