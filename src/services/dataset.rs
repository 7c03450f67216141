use crate::models::{Person, PersonId};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading a people dataset
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unsupported dataset format: {0}")]
    UnsupportedFormat(String),

    #[error("Duplicate person id: {0}")]
    DuplicateId(PersonId),
}

/// On-disk encodings accepted for a dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    Json,
    Toml,
}

impl DatasetFormat {
    /// Pick the format from the file extension
    pub fn from_path(path: &Path) -> Result<Self, DatasetError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("json") => Ok(DatasetFormat::Json),
            Some("toml") => Ok(DatasetFormat::Toml),
            _ => Err(DatasetError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// JSON datasets may be a bare array or wrapped in `{"people": [...]}`
#[derive(Deserialize)]
#[serde(untagged)]
enum JsonDocument {
    List(Vec<Person>),
    Wrapped { people: Vec<Person> },
}

/// TOML datasets use `[[people]]` tables
#[derive(Deserialize)]
struct TomlDocument {
    #[serde(default)]
    people: Vec<Person>,
}

/// Ordered collection of people supplied to the matcher from outside
///
/// Identifiers are unique within a dataset.
#[derive(Debug, Clone, Default)]
pub struct PeopleDataset {
    people: Vec<Person>,
}

impl PeopleDataset {
    pub fn from_people(people: Vec<Person>) -> Result<Self, DatasetError> {
        let mut seen = HashSet::with_capacity(people.len());
        for person in &people {
            if !seen.insert(person.id) {
                return Err(DatasetError::DuplicateId(person.id));
            }
        }

        Ok(Self { people })
    }

    /// Load a dataset from a `.json` or `.toml` file
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let format = DatasetFormat::from_path(path)?;

        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| DatasetError::Io {
                path: path.display().to_string(),
                source,
            })?;

        let dataset = Self::parse(&contents, format)?;
        tracing::info!("Loaded {} people from {}", dataset.len(), path.display());

        Ok(dataset)
    }

    pub fn parse(contents: &str, format: DatasetFormat) -> Result<Self, DatasetError> {
        let people = match format {
            DatasetFormat::Json => match serde_json::from_str::<JsonDocument>(contents)? {
                JsonDocument::List(people) => people,
                JsonDocument::Wrapped { people } => people,
            },
            DatasetFormat::Toml => toml::from_str::<TomlDocument>(contents)?.people,
        };

        Self::from_people(people)
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn find(&self, id: PersonId) -> Option<&Person> {
        self.people.iter().find(|person| person.id == id)
    }

    /// Everyone except the person with `id`, in dataset order
    pub fn pool_excluding(&self, id: PersonId) -> impl Iterator<Item = &Person> + '_ {
        self.people.iter().filter(move |person| person.id != id)
    }
}
