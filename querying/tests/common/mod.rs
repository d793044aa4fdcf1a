//! In-memory DNS zone used in place of a real resolver.

#![allow(dead_code)]

use async_trait::async_trait;
use querying::resolver::{Lookup, ResolveError};
use std::collections::{HashMap, HashSet};
use std::io;
use std::net::IpAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

#[derive(Default)]
pub struct Zone {
    addresses: HashMap<String, Vec<IpAddr>>,
    aliases: HashMap<String, String>,
    broken_cname: HashSet<String>,
    delays: HashMap<String, Duration>,
    pub cname_queries: AtomicUsize,
}

fn key(host: &str) -> String {
    host.strip_suffix('.').unwrap_or(host).to_lowercase()
}

impl Zone {
    pub fn new() -> Zone {
        Zone::default()
    }

    pub fn a(mut self, host: &str, ips: &[&str]) -> Zone {
        self.addresses.entry(key(host)).or_default()
            .extend(ips.iter().map(|ip| ip.parse::<IpAddr>().unwrap()));
        self
    }

    /// Records `host CNAME target`; the target is stored verbatim, trailing dot included.
    pub fn cname(mut self, host: &str, target: &str) -> Zone {
        self.aliases.insert(key(host), target.to_string());
        self
    }

    /// CNAME queries for `host` fail with a server error.
    pub fn broken_cname(mut self, host: &str) -> Zone {
        self.broken_cname.insert(key(host));
        self
    }

    pub fn delay(mut self, host: &str, millis: u64) -> Zone {
        self.delays.insert(key(host), Duration::from_millis(millis));
        self
    }
}

#[async_trait]
impl Lookup for Zone {
    async fn lookup_ips(&self, host: &str) -> Result<Vec<IpAddr>, ResolveError> {
        if let Some(delay) = self.delays.get(&key(host)) {
            tokio::time::sleep(*delay).await;
        }
        self.addresses.get(&key(host)).cloned().ok_or(ResolveError::NxDomain)
    }

    async fn lookup_cname(&self, host: &str) -> Result<Option<String>, ResolveError> {
        self.cname_queries.fetch_add(1, Ordering::SeqCst);
        if self.broken_cname.contains(&key(host)) {
            return Err(ResolveError::Other(io::Error::new(io::ErrorKind::Other, "SERVFAIL")));
        }
        Ok(self.aliases.get(&key(host)).cloned())
    }
}

/// A chain `hop0.<domain> -> hop1.<domain> -> ... -> hop<hops>.<domain>`.
pub fn chain(mut zone: Zone, domain: &str, hops: usize) -> Zone {
    for i in 0..hops {
        zone = zone.cname(&format!("hop{}.{}", i, domain), &format!("hop{}.{}.", i + 1, domain));
    }
    zone
}

pub fn hosts(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}
