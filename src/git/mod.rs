//! Git operations via the system `git` binary.

pub mod commit;
pub mod process;
pub mod repository;

pub use commit::commit;
pub use process::{GitExecutor, ProcessOutput, SystemGit};
pub use repository::{Diff, get_staged_diff, is_repository};
