//! Data source configuration: which cities exist and where their files live.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::selection::SelectionError;

/// Environment variable consulted when no `--data-dir` flag is given.
pub const DATA_DIR_ENV: &str = "BIKESHARE_DATA_DIR";

/// The closed set of cities with trip data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Lowercase name as typed at the prompt.
    pub fn name(self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    fn default_file(self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for City {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        City::ALL
            .into_iter()
            .find(|c| c.name() == wanted)
            .ok_or_else(|| SelectionError::UnknownCity(s.trim().to_string()))
    }
}

/// Where each city's trip file is found.
#[derive(Debug, Clone)]
pub struct DataConfig {
    pub data_dir: PathBuf,
    pub files: BTreeMap<City, String>,
}

impl DataConfig {
    /// Standard file names rooted at `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        let files = City::ALL
            .into_iter()
            .map(|c| (c, c.default_file().to_string()))
            .collect();
        Self {
            data_dir: data_dir.into(),
            files,
        }
    }

    /// Resolves the data directory from an explicit flag, then
    /// [`DATA_DIR_ENV`], then the working directory.
    pub fn resolve(flag: Option<PathBuf>) -> Self {
        let dir = flag
            .or_else(|| std::env::var(DATA_DIR_ENV).ok().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(dir)
    }

    /// Full path of the trip file for `city`.
    pub fn path_for(&self, city: City) -> PathBuf {
        let file = self
            .files
            .get(&city)
            .map(String::as_str)
            .unwrap_or_else(|| city.default_file());
        self.data_dir.join(file)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self::new(".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_parse_is_case_insensitive() {
        assert_eq!("Chicago".parse::<City>().unwrap(), City::Chicago);
        assert_eq!(" NEW YORK CITY ".parse::<City>().unwrap(), City::NewYorkCity);
        assert_eq!("washington".parse::<City>().unwrap(), City::Washington);
    }

    #[test]
    fn test_city_parse_rejects_unknown() {
        let err = "boston".parse::<City>().unwrap_err();
        assert_eq!(err, SelectionError::UnknownCity("boston".to_string()));
        assert!("new york".parse::<City>().is_err());
    }

    #[test]
    fn test_path_for_uses_file_table() {
        let config = DataConfig::new("/data");
        assert_eq!(
            config.path_for(City::NewYorkCity),
            PathBuf::from("/data/new_york_city.csv")
        );
        assert_eq!(config.path_for(City::Chicago), PathBuf::from("/data/chicago.csv"));
    }

    #[test]
    fn test_path_for_honours_overrides() {
        let mut config = DataConfig::new("data");
        config
            .files
            .insert(City::Washington, "dc_2017.csv".to_string());
        assert_eq!(
            config.path_for(City::Washington),
            PathBuf::from("data/dc_2017.csv")
        );
    }

    #[test]
    fn test_resolve_prefers_flag() {
        let config = DataConfig::resolve(Some(PathBuf::from("flagged")));
        assert_eq!(config.data_dir(), Path::new("flagged"));
    }
}
