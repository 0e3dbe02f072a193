use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_ASSETS_ROOT_DIR: &str = "./target/site";
pub const DEFAULT_INDEX_PATH: &str = "./flavor-http/index.html";
pub const DEFAULT_SITE_ADDR: &str = "0.0.0.0:3000";

#[derive(Clone, PartialEq, Debug)]
pub struct Config {
    pub assets_root_dir: PathBuf,
    pub index_path: PathBuf,
    pub site_addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigErr> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigErr> {
        let assets_root_dir = var("ASSETS_ROOT_DIR").unwrap_or(DEFAULT_ASSETS_ROOT_DIR.to_string());
        let index_path = var("INDEX_PATH").unwrap_or(DEFAULT_INDEX_PATH.to_string());
        let site_addr = var("SITE_ADDR").unwrap_or(DEFAULT_SITE_ADDR.to_string());
        let site_addr = site_addr
            .parse::<SocketAddr>()
            .map_err(|err| ConfigErr::SiteAddr(site_addr.clone(), err))?;

        Ok(Self {
            assets_root_dir: PathBuf::from(assets_root_dir),
            index_path: PathBuf::from(index_path),
            site_addr,
        })
    }
}

#[derive(Error, Debug)]
pub enum ConfigErr {
    #[error("invalid SITE_ADDR {0}: {1}")]
    SiteAddr(String, std::net::AddrParseError),
}
