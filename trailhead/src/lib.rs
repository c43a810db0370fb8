//! Domain core for a hiking-trail discovery app.
//!
//! The UI layer owns rendering and navigation; this crate owns the logic
//! behind the screens: an in-memory [`domain::TrailCatalogue`] answering
//! search/featured/lookup queries, and a [`domain::TrailSubmissionForm`]
//! that validates user drafts into publishable [`domain::TrailRecord`]s.
//! All operations are synchronous and perform no I/O.
//!
//! # Example
//!
//! ```
//! use trailhead::domain::{FieldEdit, TrailCatalogue, TrailSubmissionForm};
//!
//! let mut catalogue = TrailCatalogue::empty();
//! let mut form = TrailSubmissionForm::new();
//!
//! form.set_field(FieldEdit::Name("Antelope Canyon".to_owned()));
//! form.set_field(FieldEdit::Location("Arizona, USA".to_owned()));
//!
//! let id = form.submit_into(&mut catalogue)?;
//! assert_eq!(catalogue.by_id(&id)?.name(), "Antelope Canyon");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod domain;
