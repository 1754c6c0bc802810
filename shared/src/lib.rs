mod contribution;
mod leaderboard;
mod level;

#[cfg(feature = "github")]
pub mod github;

pub use contribution::*;
pub use leaderboard::*;
pub use level::*;

pub type GithubHandle = String;
