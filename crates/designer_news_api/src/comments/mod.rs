//! Comment lookups against the Designer News API.

mod remote_data_source;

pub use remote_data_source::CommentsRemoteDataSource;
