//! Ingestion adapters: reference corpora, Brenton TeX sources, and
//! reviewer override tables, all canonicalized into the model types.

pub mod books;
pub mod error;
pub mod overrides;
pub mod reference;
pub mod source;

pub use books::{brenton_books, canonicalize_primary, canonicalize_rahlfs, canonicalize_swete};
pub use error::{IngestError, Result};
pub use overrides::{load_accepted_words, load_corrections};
pub use reference::{ReferenceCorpus, load_reference_corpus};
pub use source::{SourceScan, SourceToken, scan_source, scan_text};
