//! Best-effort [`Cache`] of user choices.

use std::{cell::RefCell, collections::HashMap, io, path::PathBuf};

use common::{
    define_kind,
    operations::{By, Select, Store},
};
use derive_more::{Display, Error as StdError, From};
use tracerr::Traced;

/// String-keyed storage of serialized values.
pub use common::Handler as Cache;

define_kind! {
    #[doc = "Key of a [`Cache`] entry."]
    enum Key {
        #[doc = "Entry holding the last used filter criteria."]
        Filters = "apartmentFilters",

        #[doc = "Entry holding the last used sort criteria."]
        Sort = "apartmentSort",
    }
}

/// Operation [`Select`]ing an entry by its [`Key`].
pub type Get = Select<By<Option<String>, Key>>;

/// Operation [`Store`]ing an entry under its [`Key`].
pub type Put = Store<(Key, String)>;

/// [`Cache`] error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// Failed to access a [`Cache`] entry.
    #[display("Failed to access cache entry: {_0}")]
    Io(io::Error),
}

/// In-memory [`Cache`], living as long as the process does.
#[derive(Debug, Default)]
pub struct Memory(RefCell<HashMap<Key, String>>);

impl Memory {
    /// Creates a new [`Memory`] [`Cache`] prefilled with the provided
    /// entries.
    #[must_use]
    pub fn with_entries(
        entries: impl IntoIterator<Item = (Key, String)>,
    ) -> Self {
        Self(RefCell::new(entries.into_iter().collect()))
    }
}

impl Cache<Get> for Memory {
    type Ok = Option<String>;
    type Err = Traced<Error>;

    async fn execute(&self, Select(by): Get) -> Result<Self::Ok, Self::Err> {
        Ok(self.0.borrow().get(by.inner()).cloned())
    }
}

impl Cache<Put> for Memory {
    type Ok = ();
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Store((key, value)): Put,
    ) -> Result<Self::Ok, Self::Err> {
        drop(self.0.borrow_mut().insert(key, value));
        Ok(())
    }
}

/// Filesystem [`Cache`], keeping every entry in a `<key>.json` file of a
/// directory.
#[derive(Clone, Debug)]
pub struct Fs {
    /// Directory to keep entries in.
    dir: PathBuf,
}

impl Fs {
    /// Creates a new [`Fs`] [`Cache`] keeping entries in the provided
    /// directory.
    ///
    /// The directory is created on the first write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns path of the file holding the provided [`Key`].
    fn path(&self, key: Key) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Cache<Get> for Fs {
    type Ok = Option<String>;
    type Err = Traced<Error>;

    async fn execute(&self, Select(by): Get) -> Result<Self::Ok, Self::Err> {
        match tokio::fs::read_to_string(self.path(*by.inner())).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(tracerr::new!(Error::Io(e))),
        }
    }
}

impl Cache<Put> for Fs {
    type Ok = ();
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Store((key, value)): Put,
    ) -> Result<Self::Ok, Self::Err> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(tracerr::from_and_wrap!())?;
        tokio::fs::write(self.path(key), value)
            .await
            .map_err(tracerr::from_and_wrap!())
    }
}

#[cfg(test)]
mod spec {
    use common::operations::{By, Select, Store};

    use super::{Cache as _, Fs, Key, Memory};

    #[tokio::test]
    async fn memory_round_trip() {
        let cache = Memory::default();

        assert_eq!(cache.execute(Select(By::new(Key::Sort))).await.unwrap(), None);

        cache
            .execute(Store((Key::Sort, r#"{"field":null}"#.to_owned())))
            .await
            .unwrap();

        assert_eq!(
            cache.execute(Select(By::new(Key::Sort))).await.unwrap().as_deref(),
            Some(r#"{"field":null}"#),
        );
        assert_eq!(
            cache.execute(Select(By::new(Key::Filters))).await.unwrap(),
            None,
        );
    }

    #[tokio::test]
    async fn fs_creates_directory_and_files() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("nested").join("cache");
        let cache = Fs::new(&dir);

        assert_eq!(
            cache.execute(Select(By::new(Key::Filters))).await.unwrap(),
            None,
        );

        cache
            .execute(Store((Key::Filters, "{}".to_owned())))
            .await
            .unwrap();

        assert!(dir.join("apartmentFilters.json").is_file());
        assert_eq!(
            cache
                .execute(Select(By::new(Key::Filters)))
                .await
                .unwrap()
                .as_deref(),
            Some("{}"),
        );
    }
}
