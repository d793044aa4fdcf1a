use crate::domain::trim_root;
use crate::resolver::{Lookup, ResolveError};
use log::trace;
use thiserror::Error;

pub const MAX_CHAIN_DEPTH: usize = 10;

#[derive(Error, Debug)]
pub enum ChainError {
    #[error("CNAME lookup failed: {0}")]
    Lookup(#[from] ResolveError),
    #[error("maximum CNAME chain depth ({0}) exceeded")]
    TooLong(usize),
}

/// Follows the CNAME chain of `host` and returns the last name in it, without
/// a trailing root dot. A name without an alias is its own final name.
pub async fn resolve_final_alias<L: Lookup + ?Sized>(lookup: &L, host: &str) -> Result<String, ChainError> {
    let mut current = trim_root(host).to_string();
    for depth in 0..MAX_CHAIN_DEPTH {
        let alias = match lookup.lookup_cname(&current).await? {
            Some(alias) => trim_root(&alias).to_string(),
            None => return Ok(current),
        };
        if alias.is_empty() || alias.eq_ignore_ascii_case(&current) {
            return Ok(current);
        }
        trace!("{} -> {} (depth {})", current, alias, depth + 1);
        current = alias;
    }
    Err(ChainError::TooLong(MAX_CHAIN_DEPTH))
}
