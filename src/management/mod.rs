mod cache;
mod collection;
mod dataset;

pub use cache::EntityCache;
pub use collection::PlaylistSource;
pub use collection::TrackIdCollection;
pub use collection::accumulate;
pub use collection::collect_to_file;
pub use dataset::DatasetBuilder;
