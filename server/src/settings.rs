//! Listener settings parsed from environment variables.

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;

use std::net::{Ipv4Addr, SocketAddr};

use crate::error::ServerError;

pub const DEFAULT_PORT: u16 = 3000;

/// Build the listen address from an optional `PORT` value.
///
/// Unset or blank means `DEFAULT_PORT`. Binds all interfaces.
pub fn listen_addr(port: Option<&str>) -> Result<SocketAddr, ServerError> {
    let port = match port.map(str::trim).filter(|p| !p.is_empty()) {
        None => DEFAULT_PORT,
        Some(raw) => raw.parse::<u16>().map_err(|_| ServerError::InvalidPort(raw.to_owned()))?,
    };
    Ok(SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)))
}
