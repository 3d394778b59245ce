use std::fs;
use std::path::{Path, PathBuf};

use reqwest::Url;
use serde::Deserialize;

use crate::passes::dotfile::{read_properties, Properties};
use crate::passes::error::FetchError;

pub const DEFAULT_API_BASE: &str = "https://api.n2yo.com/rest/v1/satellite";

/// Locations of the dotfiles read before every live request
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DotfilePaths {
    pub credentials: PathBuf,
    pub location: PathBuf,
    pub preferences: PathBuf,
}

impl Default for DotfilePaths {
    fn default() -> Self {
        Self {
            credentials: PathBuf::from(".env"),
            location: PathBuf::from(".location"),
            preferences: PathBuf::from(".preferences"),
        }
    }
}

/// Where raw visual passes JSON comes from
pub enum DataSource {
    Fixture(FixtureSource),
    Live(LiveSource),
}

impl DataSource {
    pub async fn fetch_raw(&self, satellite_id: u32) -> Result<Vec<u8>, FetchError> {
        match self {
            DataSource::Fixture(source) => source.read(satellite_id),
            DataSource::Live(source) => source.fetch(satellite_id).await,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            DataSource::Fixture(source) => format!("fixtures in {}", source.dir.display()),
            DataSource::Live(source) => format!("live API at {}", source.api_base),
        }
    }
}

/// Offline source reading `visualpasses-<id>.json` files from a directory
pub struct FixtureSource {
    dir: PathBuf,
}

impl FixtureSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, satellite_id: u32) -> PathBuf {
        self.dir.join(format!("visualpasses-{}.json", satellite_id))
    }

    fn read(&self, satellite_id: u32) -> Result<Vec<u8>, FetchError> {
        let path = self.path_for(satellite_id);
        fs::read(&path).map_err(|source| FetchError::File { path, source })
    }
}

pub struct LiveSource {
    api_base: String,
    dotfiles: DotfilePaths,
    client: reqwest::Client,
}

impl LiveSource {
    pub fn new(api_base: impl Into<String>, dotfiles: DotfilePaths) -> Self {
        Self {
            api_base: api_base.into(),
            dotfiles,
            client: reqwest::Client::new(),
        }
    }

    async fn fetch(&self, satellite_id: u32) -> Result<Vec<u8>, FetchError> {
        let credentials = load_dotfile("header information", &self.dotfiles.credentials)?;
        let location = load_dotfile("location detail", &self.dotfiles.location)?;
        let preferences = load_dotfile("preferences", &self.dotfiles.preferences)?;

        let path = request_path(satellite_id, &location, &preferences)?;
        let url = self.request_url(&path, &credentials)?;

        log::debug!("Fetching visual passes for {} from {}", satellite_id, path);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(FetchError::Request)?;
        let body = response.bytes().await.map_err(FetchError::Response)?;

        Ok(body.to_vec())
    }

    fn request_url(&self, path: &str, credentials: &Properties) -> Result<Url, FetchError> {
        let mut url = Url::parse(&format!("{}{}", self.api_base, path))
            .map_err(|e| FetchError::InvalidUrl(e.to_string()))?;
        if !credentials.is_empty() {
            url.query_pairs_mut().extend_pairs(credentials.iter());
        }
        Ok(url)
    }
}

fn load_dotfile(what: &'static str, path: &Path) -> Result<Properties, FetchError> {
    read_properties(path).map_err(|source| FetchError::Dotfile { what, source })
}

/// Build `/visualpasses/{id}/{lat}/{lon}/{alt}/{days}/{min_visibility}`.
///
/// A missing location or preference value leaves an empty segment, which is
/// rejected rather than sent.
pub fn request_path(
    satellite_id: u32,
    location: &Properties,
    preferences: &Properties,
) -> Result<String, FetchError> {
    let value = |props: &Properties, key: &str| props.get(key).cloned().unwrap_or_default();

    let path = format!(
        "/visualpasses/{}/{}/{}/{}/{}/{}",
        satellite_id,
        value(location, "latitude"),
        value(location, "longitude"),
        value(location, "altitude"),
        value(preferences, "days"),
        value(preferences, "minimum_visibility"),
    );

    if path.contains("//") || path.ends_with('/') {
        return Err(FetchError::MissingValue(path));
    }

    Ok(path)
}
