//! Service configuration from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
  /// `BIND_ADDR`, default 127.0.0.1.
  pub bind_addr: IpAddr,
  /// `PORT`, default 5000.
  pub port: u16,
  /// `CATALOG_PATH`, default `data/catalog.json`.
  pub catalog_path: PathBuf,
}

impl Default for ServiceConfig {
  fn default() -> Self {
    Self {
      bind_addr: IpAddr::V4(Ipv4Addr::LOCALHOST),
      port: 5000,
      catalog_path: PathBuf::from("data/catalog.json"),
    }
  }
}

impl ServiceConfig {
  pub fn from_env() -> Result<Self, ConfigError> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Build from an arbitrary variable source. Absent values fall back to defaults;
  /// present but unparseable values are errors.
  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
    let defaults = Self::default();

    let bind_addr = match lookup("BIND_ADDR") {
      Some(v) => v
        .parse()
        .map_err(|_| ConfigError::Invalid { var: "BIND_ADDR", value: v })?,
      None => defaults.bind_addr,
    };
    let port = match lookup("PORT") {
      Some(v) => v
        .parse()
        .map_err(|_| ConfigError::Invalid { var: "PORT", value: v })?,
      None => defaults.port,
    };
    let catalog_path = lookup("CATALOG_PATH")
      .map(PathBuf::from)
      .unwrap_or(defaults.catalog_path);

    Ok(Self {
      bind_addr,
      port,
      catalog_path,
    })
  }

  pub fn socket_addr(&self) -> SocketAddr {
    SocketAddr::new(self.bind_addr, self.port)
  }
}
