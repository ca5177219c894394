pub use super::notes::Entity as Notes;
