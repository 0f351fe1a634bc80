//! Family handling: one type for every DataSource error
use crate::error::DataSourceError;
use crate::report::ErrorReport;
use std::error::Error;
use std::fmt;

/// Any error belonging to the DataSource family.
///
/// Only types implementing [`DataSourceError`] convert into it, so holding one
/// proves membership. The concrete value is kept intact and can be recovered
/// with [`downcast`](Self::downcast) and friends. `Display` and `source()` are
/// forwarded to the concrete error.
pub struct AnyDataSourceError {
    inner: Box<dyn Error + Send + Sync + 'static>,
    type_name: &'static str,
}

impl AnyDataSourceError {
    /// Fully qualified name of the concrete error type.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn is<T: DataSourceError>(&self) -> bool {
        self.inner.is::<T>()
    }

    pub fn downcast_ref<T: DataSourceError>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    pub fn downcast_mut<T: DataSourceError>(&mut self) -> Option<&mut T> {
        self.inner.downcast_mut::<T>()
    }

    /// Take the concrete error back out. On a type mismatch the family error
    /// is returned unchanged.
    pub fn downcast<T: DataSourceError>(self) -> Result<T, Self> {
        let type_name = self.type_name;
        match self.inner.downcast::<T>() {
            Ok(concrete) => Ok(*concrete),
            Err(inner) => Err(Self { inner, type_name }),
        }
    }

    /// Serializable snapshot of this error and its causes.
    pub fn report(&self) -> ErrorReport {
        let mut causes = Vec::new();
        let mut next = self.inner.source();
        while let Some(cause) = next {
            causes.push(cause.to_string());
            next = cause.source();
        }

        ErrorReport {
            error_type: self.type_name.to_string(),
            message: self.inner.to_string(),
            causes,
        }
    }
}

impl<E: DataSourceError> From<E> for AnyDataSourceError {
    fn from(err: E) -> Self {
        let type_name = std::any::type_name::<E>();
        tracing::debug!(error_type = type_name, error = %err, "datasource error raised");
        Self {
            inner: Box::new(err),
            type_name,
        }
    }
}

impl fmt::Display for AnyDataSourceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl fmt::Debug for AnyDataSourceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("AnyDataSourceError")
            .field("type", &self.type_name)
            .field("error", &self.inner)
            .finish()
    }
}

impl Error for AnyDataSourceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.inner.source()
    }
}

/// Family handling on results whose error is a DataSource error.
pub trait DataSourceResultExt<T> {
    /// Lift the error into [`AnyDataSourceError`].
    fn into_family(self) -> Result<T, AnyDataSourceError>;

    /// Route the error through a handler written against the family.
    fn handle_family<F>(self, handler: F) -> T
    where
        F: FnOnce(AnyDataSourceError) -> T;
}

impl<T, E: DataSourceError> DataSourceResultExt<T> for Result<T, E> {
    fn into_family(self) -> Result<T, AnyDataSourceError> {
        self.map_err(AnyDataSourceError::from)
    }

    fn handle_family<F>(self, handler: F) -> T
    where
        F: FnOnce(AnyDataSourceError) -> T,
    {
        match self {
            Ok(value) => value,
            Err(err) => {
                let err = AnyDataSourceError::from(err);
                tracing::trace!(error_type = err.type_name(), "datasource error handled");
                handler(err)
            }
        }
    }
}

/// First [`AnyDataSourceError`] in `err`'s source chain, `err` itself included.
///
/// Concrete members are only found once lifted into the family; a bare
/// member sitting in a foreign error's `source()` is not recognized.
pub fn find_in_chain<'a>(err: &'a (dyn Error + 'static)) -> Option<&'a AnyDataSourceError> {
    let mut current = Some(err);
    while let Some(e) = current {
        if let Some(found) = e.downcast_ref::<AnyDataSourceError>() {
            return Some(found);
        }
        current = e.source();
    }
    None
}
