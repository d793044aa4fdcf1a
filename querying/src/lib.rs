use crate::address::lookup_ipv4;
use crate::chain::resolve_final_alias;
use crate::domain::{same_registrable_domain, trim_root};
use crate::progress::{NoProgress, Progress};
use crate::resolver::{Lookup, ResolveError};
use crate::results::ResultSet;
use futures::stream::FuturesUnordered;
use futures::StreamExt;
use log::{debug, error, info};
use std::net::Ipv4Addr;
use std::sync::Arc;
use tokio::sync::Semaphore;

pub mod address;
pub mod chain;
pub mod domain;
pub mod progress;
pub mod resolver;
pub mod results;

pub const DEFAULT_CONCURRENCY: usize = 100;

#[derive(Debug, Clone)]
pub struct ResolveOptions {
    /// Append ` [hostname]` to every rendered address.
    pub annotate: bool,
    /// Upper bound on hostnames being resolved at the same time.
    pub concurrency: usize,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        ResolveOptions { annotate: false, concurrency: DEFAULT_CONCURRENCY }
    }
}

#[derive(Debug)]
pub enum HostOutcome {
    Accepted(Vec<Ipv4Addr>),
    LookupFailed(ResolveError),
    /// The CNAME chain ends in another registrable domain.
    AliasElsewhere(String),
}

/// Resolves a single hostname: its IPv4 addresses, unless it is an alias for
/// a name in another registrable domain.
pub async fn resolve_host<L: Lookup + ?Sized>(lookup: &L, host: &str) -> HostOutcome {
    let ips = match lookup_ipv4(lookup, host).await {
        Ok(ips) => ips,
        Err(e) => return HostOutcome::LookupFailed(e),
    };

    match resolve_final_alias(lookup, host).await {
        Ok(alias) if alias.eq_ignore_ascii_case(trim_root(host)) => {}
        Ok(alias) if !same_registrable_domain(host, &alias) => {
            return HostOutcome::AliasElsewhere(alias);
        }
        Ok(_) => {}
        Err(e) => debug!("{}: {}, treating as not aliased", host, e),
    }
    HostOutcome::Accepted(ips)
}

pub struct Coordinator<L> {
    lookup: Arc<L>,
    options: ResolveOptions,
    progress: Arc<dyn Progress>,
}

impl<L: Lookup + 'static> Coordinator<L> {
    pub fn new(lookup: L, options: ResolveOptions) -> Coordinator<L> {
        Coordinator {
            lookup: Arc::new(lookup),
            options,
            progress: Arc::new(NoProgress),
        }
    }

    pub fn with_progress(mut self, progress: Arc<dyn Progress>) -> Coordinator<L> {
        self.progress = progress;
        self
    }

    pub fn options(&self) -> &ResolveOptions {
        &self.options
    }

    /// Resolves every hostname and returns the rendered, sorted address list.
    pub async fn resolve_all(&self, hostnames: &[String]) -> Vec<String> {
        self.resolve(hostnames).await.render(self.options.annotate)
    }

    /// Resolves every hostname with at most `concurrency` in flight. Failures
    /// only drop the hostname they belong to.
    pub async fn resolve(&self, hostnames: &[String]) -> ResultSet {
        self.progress.start(hostnames.len() as u64);
        let sem = Arc::new(Semaphore::new(self.options.concurrency.max(1)));
        let mut futs = FuturesUnordered::new();
        for (position, host) in hostnames.iter().enumerate() {
            let Ok(permit) = sem.clone().acquire_owned().await else {
                break;
            };
            let lookup = self.lookup.clone();
            let progress = self.progress.clone();
            let host = host.clone();
            futs.push(tokio::spawn(async move {
                let outcome = resolve_host(lookup.as_ref(), &host).await;
                drop(permit);
                progress.advance();
                (position, host, outcome)
            }));
        }

        let mut results = ResultSet::new();
        while let Some(res) = futs.next().await {
            match res {
                Ok((position, host, HostOutcome::Accepted(ips))) => {
                    debug!("{} resolved to {} IPv4 address(es)", host, ips.len());
                    results.insert(position, &host, &ips);
                }
                Ok((_, host, HostOutcome::LookupFailed(e))) => {
                    debug!("Error resolving {}: {}", host, e);
                }
                Ok((_, host, HostOutcome::AliasElsewhere(alias))) => {
                    debug!("{} is an alias for {}, skipping", host, alias);
                }
                Err(join_err) => {
                    error!("Task join error: {}", join_err);
                }
            }
        }
        self.progress.finish();
        info!("Resolved {} hostnames to {} unique IPv4 addresses", hostnames.len(), results.len());
        results
    }
}
