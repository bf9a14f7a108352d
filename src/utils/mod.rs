/// `~` expansion for user-supplied paths
pub mod path;

pub use path::expand_user_path;
