//! Reliability Viewer - browse, filter, sort and compare vehicles by their
//! reliability index.
//!
//! The library holds everything the desktop front-end derives its views from:
//!
//! ```
//! use reliability_viewer::data::filter::{filter_records, FilterCriteria};
//! use reliability_viewer::data::loader;
//! use reliability_viewer::data::sort::{sort_records, SortSpec};
//!
//! let dataset = loader::bundled()?;
//! let mut criteria = FilterCriteria::default();
//! criteria.set_body_type("SUV");
//!
//! let visible = filter_records(dataset.cars(), &criteria);
//! let ranked = sort_records(&visible, SortSpec::default());
//! assert!(ranked.windows(2).all(|w| w[0].reliability >= w[1].reliability));
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod data;
pub mod error;

pub use config::BrowserConfig;
pub use error::{DatasetError, Result};
