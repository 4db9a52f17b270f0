pub mod ui;

mod note_form;
mod note_list;
mod pagination;
mod search_box;
mod toaster;

pub use note_form::NoteForm;
pub use note_list::NoteList;
pub use pagination::Pagination;
pub use search_box::SearchBox;
pub(crate) use toaster::{use_toasts, Toaster, Toasts};
