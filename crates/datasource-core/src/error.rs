//! DataSource error marker
use std::error::Error;

/// General marker for errors raised by DataSource related problems.
///
/// Carries no members. A concrete error joins the family by declaring an
/// empty impl, after which it converts into [`crate::AnyDataSourceError`]
/// and can be handled alongside every other member.
///
/// ```rust
/// use datasource_core::DataSourceError;
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("field {0} not found")]
/// struct FieldNotFound(String);
///
/// impl DataSourceError for FieldNotFound {}
/// ```
pub trait DataSourceError: Error + Send + Sync + 'static {}

/// Declares each listed type a member of the DataSource error family.
///
/// ```rust
/// use datasource_core::datasource_error;
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("driver not registered")]
/// struct UnknownDriver;
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("page {0} out of range")]
/// struct PageOutOfRange(u32);
///
/// datasource_error!(UnknownDriver, PageOutOfRange);
/// ```
#[macro_export]
macro_rules! datasource_error {
    ($($ty:ty),+ $(,)?) => {
        $(impl $crate::DataSourceError for $ty {})+
    };
}
