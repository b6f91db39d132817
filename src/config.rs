use serde::Deserialize;
use crate::Result;

#[derive(Debug, Deserialize)]
pub struct Config {
    // stdin when unset
    pub input: Option<String>,
    #[serde(default)]
    pub pretty: bool,
}

impl Config {
    pub fn from_envvar() -> Result<Config> {
        Config::from_vars(std::env::vars())
    }

    // An empty EDGELB_INPUT means stdin, same as unset
    pub fn input_path(&self) -> Option<&str> {
        self.input.as_deref().filter(|path| !path.is_empty())
    }

    pub(crate) fn from_vars<I>(vars: I) -> Result<Config>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::prefixed("EDGELB_").from_iter(vars)?)
    }
}
