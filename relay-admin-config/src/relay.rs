//! Relay configuration payload.
//!
//! This is the document the admin fetches from and saves to the store. Every
//! section defaults so partial documents load.

use serde::{Deserialize, Serialize};

/// The full relay configuration document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
    pub inbound: InboundSettings,
    pub dns: DnsSettings,
    pub routes: Vec<OutboundRoute>,
}

/// Local listener settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InboundSettings {
    pub listen: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    pub sniffing: bool,
    pub allowed_ports: Vec<u16>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DnsSettings {
    pub servers: Vec<String>,
    pub rules: Vec<DnsRule>,
}

/// Send queries for `domains` to `server`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DnsRule {
    pub domains: Vec<String>,
    pub server: String,
    pub disabled: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    #[default]
    Direct,
    Socks,
    Http,
    Shadowsocks,
}

impl Protocol {
    pub const ALL: [Protocol; 4] = [
        Protocol::Direct,
        Protocol::Socks,
        Protocol::Http,
        Protocol::Shadowsocks,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Direct => "direct",
            Protocol::Socks => "socks",
            Protocol::Http => "http",
            Protocol::Shadowsocks => "shadowsocks",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Protocol::Direct => "Direct",
            Protocol::Socks => "SOCKS5",
            Protocol::Http => "HTTP",
            Protocol::Shadowsocks => "Shadowsocks",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == s)
    }

    /// Whether the protocol forwards to a remote server.
    pub fn is_proxy(&self) -> bool {
        !matches!(self, Protocol::Direct)
    }
}

/// One outbound route: traffic matching the CIDRs or ports leaves through it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutboundRoute {
    pub tag: String,
    pub protocol: Protocol,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub password: String,
    pub ip_cidrs: Vec<String>,
    pub ports: Vec<u16>,
    pub enabled: bool,
}
