use std::collections::HashMap;
use std::net::Ipv4Addr;

/// Unique IPv4 addresses, each attributed to one hostname.
///
/// When several hostnames produce the same address the one that came first in
/// the input keeps the attribution, whatever order the lookups finished in.
#[derive(Debug, Default)]
pub struct ResultSet {
    entries: HashMap<Ipv4Addr, Attribution>,
}

#[derive(Debug)]
struct Attribution {
    position: usize,
    hostname: String,
}

impl ResultSet {
    pub fn new() -> ResultSet {
        ResultSet::default()
    }

    /// Adds the addresses of the hostname found at `position` in the input.
    pub fn insert(&mut self, position: usize, hostname: &str, addresses: &[Ipv4Addr]) {
        for ip in addresses {
            match self.entries.get_mut(ip) {
                Some(existing) if existing.position <= position => {}
                Some(existing) => {
                    existing.position = position;
                    existing.hostname = hostname.to_string();
                }
                None => {
                    self.entries.insert(*ip, Attribution { position, hostname: hostname.to_string() });
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hostname(&self, ip: &Ipv4Addr) -> Option<&str> {
        self.entries.get(ip).map(|a| a.hostname.as_str())
    }

    /// One line per address, `ip` or `ip [hostname]`, sorted as strings.
    pub fn render(&self, annotate: bool) -> Vec<String> {
        let mut lines: Vec<String> = self.entries.iter()
            .map(|(ip, a)| if annotate {
                format!("{} [{}]", ip, a.hostname)
            } else {
                ip.to_string()
            })
            .collect();
        lines.sort();
        lines
    }
}
