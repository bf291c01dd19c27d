//! [`Source`] of catalog [`Apartment`]s.

use std::{io, path::PathBuf};

use common::operations::{By, Fetch};
use derive_more::{Display, Error as StdError, From};
use tracerr::Traced;
use tracing as log;

use crate::domain::Apartment;

/// Source of catalog [`Apartment`]s.
pub use common::Handler as Source;

/// Operation [`Fetch`]ing all the [`Apartment`]s of a catalog.
pub type FetchAll = Fetch<By<Vec<Apartment>, ()>>;

/// [`FetchAll`] operation value.
pub const FETCH_ALL: FetchAll = Fetch(By::new(()));

/// [`Source`] error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// HTTP request failed.
    #[cfg(feature = "http")]
    #[display("HTTP request failed: {_0}")]
    Http(reqwest::Error),

    /// HTTP server responded with a non-success status.
    #[cfg(feature = "http")]
    #[display("HTTP server responded with `{_0}` status")]
    #[from(ignore)]
    Status(#[error(not(source))] reqwest::StatusCode),

    /// Failed to read a catalog file.
    #[display("Failed to read catalog file: {_0}")]
    Io(io::Error),

    /// Catalog is not a valid JSON array of [`Apartment`]s.
    #[display("Malformed catalog JSON: {_0}")]
    Json(serde_json::Error),
}

/// [`Source`] fetching [`Apartment`]s via HTTP `GET` request returning a
/// JSON array.
#[cfg(feature = "http")]
#[derive(Clone, Debug)]
pub struct Http {
    /// HTTP client to perform requests with.
    client: reqwest::Client,

    /// URL of the catalog.
    url: String,
}

#[cfg(feature = "http")]
impl Http {
    /// Creates a new [`Http`] [`Source`] fetching the provided `url`.
    ///
    /// Malformed `url` is reported on fetching.
    ///
    /// # Errors
    ///
    /// If the HTTP client cannot be initialized.
    pub fn new(url: impl Into<String>) -> Result<Self, Traced<Error>> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("catalog/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(tracerr::from_and_wrap!())?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[cfg(feature = "http")]
impl Source<FetchAll> for Http {
    type Ok = Vec<Apartment>;
    type Err = Traced<Error>;

    async fn execute(&self, _: FetchAll) -> Result<Self::Ok, Self::Err> {
        log::debug!("fetching catalog from `{}`", self.url);

        let response = self
            .client
            .get(self.url.as_str())
            .send()
            .await
            .map_err(tracerr::from_and_wrap!())?;
        if !response.status().is_success() {
            return Err(tracerr::new!(Error::Status(response.status())));
        }

        let body = response.bytes().await.map_err(tracerr::from_and_wrap!())?;
        serde_json::from_slice(&body).map_err(tracerr::from_and_wrap!())
    }
}

/// [`Source`] reading [`Apartment`]s from a local JSON file.
#[derive(Clone, Debug)]
pub struct File {
    /// Path to the catalog file.
    path: PathBuf,
}

impl File {
    /// Creates a new [`File`] [`Source`] reading the provided `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Source<FetchAll> for File {
    type Ok = Vec<Apartment>;
    type Err = Traced<Error>;

    async fn execute(&self, _: FetchAll) -> Result<Self::Ok, Self::Err> {
        log::debug!("reading catalog from `{}`", self.path.display());

        let body = tokio::fs::read(&self.path)
            .await
            .map_err(tracerr::from_and_wrap!())?;
        serde_json::from_slice(&body).map_err(tracerr::from_and_wrap!())
    }
}

/// In-memory [`Source`] always returning the same [`Apartment`]s.
#[derive(Clone, Debug, Default)]
pub struct Memory(pub Vec<Apartment>);

impl Source<FetchAll> for Memory {
    type Ok = Vec<Apartment>;
    type Err = Traced<Error>;

    async fn execute(&self, _: FetchAll) -> Result<Self::Ok, Self::Err> {
        Ok(self.0.clone())
    }
}

/// [`Source`] chosen by the location of the catalog.
#[derive(Clone, Debug)]
pub enum Any {
    /// [`Http`] [`Source`].
    #[cfg(feature = "http")]
    Http(Http),

    /// [`File`] [`Source`].
    File(File),
}

impl Any {
    /// Creates a new [`Any`] [`Source`] for the provided `location`.
    ///
    /// Locations starting with `http://` or `https://` are fetched over
    /// HTTP, any other location is read as a file path.
    ///
    /// # Errors
    ///
    /// If the HTTP client cannot be initialized.
    pub fn new(location: &str) -> Result<Self, Traced<Error>> {
        #[cfg(feature = "http")]
        if location.starts_with("http://") || location.starts_with("https://")
        {
            return Http::new(location)
                .map(Self::Http)
                .map_err(tracerr::wrap!());
        }

        Ok(Self::File(File::new(location)))
    }
}

impl Source<FetchAll> for Any {
    type Ok = Vec<Apartment>;
    type Err = Traced<Error>;

    async fn execute(&self, op: FetchAll) -> Result<Self::Ok, Self::Err> {
        match self {
            #[cfg(feature = "http")]
            Self::Http(http) => http.execute(op).await,
            Self::File(file) => file.execute(op).await,
        }
        .map_err(tracerr::wrap!())
    }
}

#[cfg(test)]
mod spec {
    use std::io::Write as _;

    use super::{Any, Error, File, Source as _, FETCH_ALL};

    const CATALOG: &str = r#"[
        {
            "id": 1,
            "rooms": "1",
            "number": "101",
            "area": 32.5,
            "floor": 1,
            "totalFloors": 9,
            "price": 4200000,
            "planImage": "/plans/1.svg"
        },
        {
            "id": 2,
            "rooms": 2,
            "number": "102",
            "area": 48,
            "floor": 1,
            "totalFloors": 9,
            "price": 6100000,
            "planImage": "/plans/2.svg"
        }
    ]"#;

    #[tokio::test]
    async fn reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CATALOG.as_bytes()).unwrap();

        let apartments =
            File::new(file.path()).execute(FETCH_ALL).await.unwrap();

        assert_eq!(apartments.len(), 2);
        assert_eq!(apartments[1].price, 6_100_000);
    }

    #[tokio::test]
    async fn reports_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{\"not\": \"an array\"}").unwrap();

        let err =
            File::new(file.path()).execute(FETCH_ALL).await.unwrap_err();

        assert!(matches!(err.as_ref(), Error::Json(_)), "{err}");
    }

    #[tokio::test]
    async fn reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();

        let err = File::new(dir.path().join("missing.json"))
            .execute(FETCH_ALL)
            .await
            .unwrap_err();

        assert!(matches!(err.as_ref(), Error::Io(_)), "{err}");
    }

    #[test]
    fn chooses_by_location() {
        assert!(matches!(
            Any::new("data/apartments.json").unwrap(),
            Any::File(_),
        ));
        #[cfg(feature = "http")]
        assert!(matches!(
            Any::new("http://localhost:3000/data/apartments.json").unwrap(),
            Any::Http(_),
        ));
    }
}
