mod send_message;

pub use send_message::send_contact_message_handler;
pub use send_message::__path_send_contact_message_handler;
pub use send_message::ContactRequestDto;
