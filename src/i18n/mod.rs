//! Locale consistency checking.
//!
//! # Architecture
//!
//! - `registry`: The languages whose locale files are checked, and which one is the reference
//! - `table`: Ordered in-memory representation of a locale file
//! - `loader`: Reading and parsing locale files
//! - `checker`: Side-by-side comparison of a reference locale with two targets
//! - `validator`: Per-translation quality checks (placeholders, nesting, blanks)
//! - `metrics`: Counters and the summary of a completed scan
//!
//! # Example
//!
//! ```rust,ignore
//! use locale_check::i18n::{check, load_language_table};
//!
//! let fi = load_language_table(Path::new("fi.json"))?;
//! let en = load_language_table(Path::new("en.json"))?;
//! let sv = load_language_table(Path::new("sv.json"))?;
//!
//! let metrics = check(&fi, &en, &sv, &mut std::io::stdout().lock())?;
//! ```

mod checker;
mod loader;
mod metrics;
mod registry;
mod table;
mod validator;

pub use checker::{
    check, format_row, CheckError, CheckOptions, ConsistencyChecker, Target, COLUMN_WIDTHS,
};
pub use loader::{load_language_table, parse_language_table, to_json_string, LoadError};
pub use metrics::{CheckMetrics, MetricsReport};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use table::{LanguageTable, WordTable};
pub use validator::{TranslationValidator, ValidationReport};
