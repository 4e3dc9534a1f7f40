pub mod issue;
pub mod issue_type;
pub mod project;
pub mod search;
pub mod server_info;
pub mod status;
pub mod user;
pub mod worklog;

pub use issue::*;
pub use issue_type::*;
pub use project::*;
pub use search::*;
pub use server_info::*;
pub use status::*;
pub use user::*;
pub use worklog::*;
