//! ID type wrappers for type safety.

mod id_macro;

pub mod entry_id;

pub use entry_id::EntryId;
