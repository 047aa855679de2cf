use crate::utils::error::{Result, SieveError};
use crate::utils::validation::{validate_positive_number, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("env var pattern is valid")
});

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub filter: FilterConfig,
    #[serde(default)]
    pub validation: ValidationConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterConfig {
    pub numbers: Option<Vec<i64>>,
    pub less_than: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationConfig {
    pub max_age: Option<u32>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        tracing::debug!("Loaded config from {}", path.as_ref().display());
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${MAX_AGE})，未設定的變數視為錯誤。註解中的 ${...} 保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let mut out = String::with_capacity(content.len());

        for line in content.split_inclusive('\n') {
            let (value, comment) = line.split_at(comment_start(line));

            for caps in ENV_VAR_RE.captures_iter(value) {
                let name = &caps[1];
                if std::env::var(name).is_err() {
                    return Err(SieveError::MissingEnvVarError {
                        name: name.to_string(),
                    });
                }
            }

            let replaced = ENV_VAR_RE.replace_all(value, |caps: &regex::Captures| {
                std::env::var(&caps[1]).unwrap_or_default()
            });
            out.push_str(&replaced);
            out.push_str(comment);
        }

        Ok(out)
    }
}

/// Byte offset of the first `#` outside a string on this line, or the line length.
fn comment_start(line: &str) -> usize {
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for (i, c) in line.char_indices() {
        match quote {
            Some('"') if escaped => escaped = false,
            Some('"') if c == '\\' => escaped = true,
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None if c == '"' || c == '\'' => quote = Some(c),
            None if c == '#' => return i,
            None => {}
        }
    }
    line.len()
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(max_age) = self.validation.max_age {
            validate_positive_number("validation.max_age", max_age, 1)?;
        }
        Ok(())
    }
}
