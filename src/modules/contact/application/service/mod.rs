pub mod send_contact_message_service;
