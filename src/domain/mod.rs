//! Domain layer - In-memory notebook and mailing list

pub mod id_allocator;
pub mod mailing_list;
pub mod note;
pub mod notebook;

pub use id_allocator::IdAllocator;
pub use mailing_list::MailingList;
pub use note::{Note, NoteId};
pub use notebook::Notebook;
