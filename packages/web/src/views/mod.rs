mod home;
pub use home::Home;

mod contact;
pub use contact::Contact;
