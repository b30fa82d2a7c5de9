pub mod contacts;

pub use contacts::{ContactNew, ContactsRepo};
