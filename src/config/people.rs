use crate::core::parser::parse_date_text;
use crate::domain::model::{CalendarDate, PersonRecord};
use crate::utils::error::{CandleError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use std::sync::LazyLock;

pub const SUPPORTED_EXTENSIONS: &[&str] = &["toml", "csv"];

static ENV_VAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("static pattern compiles"));

/// People list loaded from a TOML or CSV file.
///
/// ```toml
/// today = "2024-06-15"
///
/// [[people]]
/// name = "Ron"
/// birthday = "1981-01-14"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PeopleConfig {
    pub today: Option<String>,
    #[serde(default)]
    pub people: Vec<PersonEntry>,
}

/// Birthdays stay as raw text so that format errors surface from the
/// date parser, not from the file decoder.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PersonEntry {
    pub name: String,
    pub birthday: String,
}

impl PeopleConfig {
    /// 依副檔名載入 TOML 或 CSV
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let path_str = path.to_string_lossy();
        validation::validate_file_extension("file", &path_str, SUPPORTED_EXTENSIONS)?;

        tracing::debug!("Loading people from {}", path.display());

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("csv") => {
                let file = std::fs::File::open(path)?;
                Self::from_csv_reader(file)
            }
            _ => {
                let content = std::fs::read_to_string(path)?;
                Self::from_toml_str(&content)
            }
        }
    }

    /// 從 TOML 字串解析
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| CandleError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 從 CSV 讀取，需有 `name,birthday` 標題列
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let people = csv_reader
            .deserialize::<PersonEntry>()
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self { today: None, people })
    }

    /// 替換環境變數 (例如 ${BIRTHDAY})，未定義的保留原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_PATTERN
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// Reference date pinned in the file, if any.
    pub fn today(&self) -> Result<Option<CalendarDate>> {
        self.today.as_deref().map(parse_date_text).transpose()
    }

    pub fn records(&self) -> Vec<PersonRecord> {
        self.people
            .iter()
            .map(|p| PersonRecord::new(p.name.clone(), p.birthday.clone()))
            .collect()
    }
}

impl Validate for PeopleConfig {
    fn validate(&self) -> Result<()> {
        for (i, person) in self.people.iter().enumerate() {
            validation::validate_non_empty_string(&format!("people[{}].name", i), &person.name)?;
        }
        Ok(())
    }
}
