mod document;
mod ids;
mod name;
mod statistic;

pub use document::{Candidate, Document};
pub use ids::DocumentId;
pub use name::NormalizedName;
pub use statistic::{SongStatistic, StatisticsReport};
