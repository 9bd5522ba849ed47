pub mod execute;

pub mod msg;

pub mod query;

pub use execute::SplitVotaClient;
pub use query::SplitVotaQueryClient;
