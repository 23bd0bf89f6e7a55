//! Pipeline orchestration for the vtlower translator.
//!
//! A [`Translator`] pulls source units, the class hierarchy and the lowered
//! units out of a [`Frontend`], synthesizes the object layout, and prints the
//! header, implementation and entry-point files.

mod frontend;
mod translator;

pub use frontend::{BundleFrontend, Frontend, TranslationBundle};
pub use translator::Translator;
