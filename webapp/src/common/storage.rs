use gloo_console::error as console_error;
use gloo_storage::{LocalStorage, Storage, errors::StorageError};
use serde::{Deserialize, Serialize};

use common::theme::Theme;

pub fn set_local_storage<T>(key: &str, value: T)
where
    T: Serialize,
{
    let key = format!("portfolio_{}", key);

    LocalStorage::set(key.clone(), value)
        .unwrap_or_else(|err| console_error!(format!("Failed to set local storage {key}: {err}")))
}

// a key that was never written is not an error, just an absent preference
pub fn get_local_storage<T>(key: &str) -> anyhow::Result<Option<T>>
where
    T: for<'a> Deserialize<'a>,
{
    let key = format!("portfolio_{}", key);

    match LocalStorage::get(key.clone()) {
        Ok(value) => Ok(Some(value)),
        Err(StorageError::KeyNotFound(_)) => Ok(None),
        Err(err) => {
            console_error!(format!("Failed to fetch local storage {key}: {err}"));
            Err(anyhow::Error::msg("Local storage failure, see console log"))
        }
    }
}

pub trait LocalPreference
where
    Self: Serialize,
    Self: for<'a> Deserialize<'a>,
{
    const KEY: &'static str;

    fn store(&self)
    where
        Self: Sized,
    {
        set_local_storage(Self::KEY, self)
    }

    // unreadable values count as unset
    fn fetch() -> Option<Self>
    where
        Self: Sized,
    {
        get_local_storage(Self::KEY).ok().flatten()
    }
}

impl LocalPreference for Theme {
    const KEY: &'static str = "theme";
}
