mod login;
mod logout;
mod session;

pub use login::login_handler;
pub use login::__path_login_handler;
pub use login::{LoginRequestDto, LoginResponse, SessionUserDto};
pub use logout::logout_handler;
pub use session::get_session_handler;
