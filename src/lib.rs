//! Tag extraction: word frequencies with stop-word filtering.
//!
//! Reads a text file, drops words found in a user-supplied stop-word list,
//! counts the remaining normalized words ("tags"), and renders them in
//! ascending alphabetical order. The crate is a pure library; the bundled
//! `tag-extractor` binary is a thin CLI over [`Session`].
//!
//! # Quick start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use tag_extractor::Session;
//!
//! # fn main() -> tag_extractor::Result<()> {
//! let mut session = Session::new();
//! session.extract(Path::new("notes.txt"), Path::new("stopwords.txt"))?;
//! println!("{}", session.render()?);
//! session.save(Path::new("tags.txt"))?;
//! # Ok(())
//! # }
//! ```
//!
//! The pure core is also usable without any file I/O:
//!
//! ```rust
//! use tag_extractor::{FrequencyMap, StopWordSet};
//!
//! let stop = StopWordSet::from_list(&["the"]);
//! let map = FrequencyMap::extract("The Quick fox; the LAZY fox!", &stop);
//! assert_eq!(map.get("fox"), 2);
//! ```

pub mod error;
pub mod freq;
pub mod observer;
pub mod report;
pub mod session;
pub mod stopwords;
pub mod tokenize;

pub use error::{Error, Result};
pub use freq::FrequencyMap;
pub use session::{Extraction, Session};
pub use stopwords::StopWordSet;
