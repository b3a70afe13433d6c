use serde::Deserialize;
use std::net::{AddrParseError, SocketAddr};

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ServerConfig {
    pub addr: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn get_socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        format!("{}:{}", self.addr, self.port).parse()
    }

    pub fn get_http_addr(&self) -> String {
        format!("http://{}:{}", self.addr, self.port)
    }
}
