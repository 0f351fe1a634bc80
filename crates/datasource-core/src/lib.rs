//! DataSource Core: error family marker and its handling site
//!
//! Concrete DataSource errors declare membership with [`DataSourceError`]
//! (or [`datasource_error!`]). Callers then handle every member through
//! [`AnyDataSourceError`] without enumerating concrete types.

pub mod error;
pub mod family;
pub mod report;

pub use error::DataSourceError;
pub use family::{find_in_chain, AnyDataSourceError, DataSourceResultExt};
pub use report::ErrorReport;
