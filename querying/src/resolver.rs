use async_trait::async_trait;
use hickory_resolver::config::{LookupIpStrategy, ResolverConfig, ResolverOpts};
use hickory_resolver::name_server::TokioConnectionProvider;
use hickory_resolver::proto::rr::{RData, RecordType};
use hickory_resolver::TokioResolver;
use log::{debug, warn};
use std::io::{Error, ErrorKind};
use std::net::IpAddr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("domain not found")]
    NxDomain,
    #[error("resolver error: {0}")]
    Other(#[from] Error),
}

/// The two DNS questions the resolution engine asks.
#[async_trait]
pub trait Lookup: Send + Sync {
    /// All addresses of `host`, any family.
    async fn lookup_ips(&self, host: &str) -> Result<Vec<IpAddr>, ResolveError>;

    /// The CNAME target of `host`, one hop only. `Ok(None)` when the name has no alias.
    async fn lookup_cname(&self, host: &str) -> Result<Option<String>, ResolveError>;
}

pub struct Resolver {
    resolver: TokioResolver,
}

impl Resolver {
    /// Builds a resolver from the platform configuration (`/etc/resolv.conf` and friends).
    pub fn new() -> Resolver {
        let mut opts = ResolverOpts::default();
        opts.ip_strategy = LookupIpStrategy::Ipv4AndIpv6;
        let builder = match TokioResolver::builder_tokio() {
            Ok(builder) => builder,
            Err(e) => {
                warn!("Failed to read system DNS configuration, using defaults: {}", e);
                TokioResolver::builder_with_config(ResolverConfig::default(), TokioConnectionProvider::default())
            }
        };
        Resolver { resolver: builder.with_options(opts).build() }
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Resolver::new()
    }
}

fn map_error(e: hickory_resolver::ResolveError) -> ResolveError {
    if e.is_no_records_found() {
        ResolveError::NxDomain
    } else {
        ResolveError::Other(Error::new(ErrorKind::Other, e))
    }
}

#[async_trait]
impl Lookup for Resolver {
    async fn lookup_ips(&self, host: &str) -> Result<Vec<IpAddr>, ResolveError> {
        Ok(self.resolver.lookup_ip(host).await
            .map_err(map_error)?
            .into_iter().collect())
    }

    async fn lookup_cname(&self, host: &str) -> Result<Option<String>, ResolveError> {
        let lookup = match self.resolver.lookup(host, RecordType::CNAME).await {
            Ok(lookup) => lookup,
            Err(e) if e.is_no_records_found() => {
                debug!("{} has no CNAME record", host);
                return Ok(None);
            }
            Err(e) => return Err(map_error(e)),
        };
        Ok(lookup.iter()
            .find_map(|rdata| match rdata {
                RData::CNAME(cname) => Some(cname.0.to_utf8()),
                _ => None,
            }))
    }
}
