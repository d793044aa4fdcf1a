use crate::resolver::{Lookup, ResolveError};
use std::net::{IpAddr, Ipv4Addr};

/// Forward lookup of `host`, keeping only IPv4 results.
pub async fn lookup_ipv4<L: Lookup + ?Sized>(lookup: &L, host: &str) -> Result<Vec<Ipv4Addr>, ResolveError> {
    Ok(lookup.lookup_ips(host).await?
        .into_iter()
        .filter_map(|ip| match ip {
            IpAddr::V4(v4) => Some(v4),
            IpAddr::V6(_) => None,
        })
        .collect())
}
