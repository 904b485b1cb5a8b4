use serde::Serialize;
use std::fmt;

/// Which dataset answered a request.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    Remote,
    Local,
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Remote => write!(f, "remote catalog"),
            DataSource::Local => write!(f, "bundled snapshot"),
        }
    }
}

/// A response normalized to one shape regardless of which path produced it.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Served<T> {
    pub source: DataSource,
    pub data: T,
}

impl<T> Served<T> {
    pub fn remote(data: T) -> Self {
        Served { source: DataSource::Remote, data }
    }

    pub fn local(data: T) -> Self {
        Served { source: DataSource::Local, data }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Served<U> {
        Served { source: self.source, data: f(self.data) }
    }
}
