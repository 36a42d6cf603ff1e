mod get_profile;
mod update_profile;

pub use get_profile::get_profile_handler;
pub use update_profile::update_profile_handler;
pub use update_profile::UpdateProfileRequest;
