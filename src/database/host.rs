//! Query string to IPv4 address
//!
//! Dotted-quad input is parsed directly. Anything else is treated as a host
//! name and handed to a `HostResolver`.

use std::net::{IpAddr, Ipv4Addr, ToSocketAddrs};
use std::sync::Arc;

/// Resolves host names to an IPv4 address
pub trait HostResolver: Send + Sync {
    /// First IPv4 address of `host`, `None` when it does not resolve
    fn resolve(&self, host: &str) -> Option<Ipv4Addr>;
}

impl<T> HostResolver for &T
where
    T: HostResolver + ?Sized,
{
    fn resolve(&self, host: &str) -> Option<Ipv4Addr> {
        (**self).resolve(host)
    }
}

impl<T> HostResolver for Arc<T>
where
    T: HostResolver + ?Sized,
{
    fn resolve(&self, host: &str) -> Option<Ipv4Addr> {
        (**self).resolve(host)
    }
}

/// Resolver backed by the operating system
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemResolver;

impl HostResolver for SystemResolver {
    fn resolve(&self, host: &str) -> Option<Ipv4Addr> {
        let addrs = match (host, 0).to_socket_addrs() {
            Ok(addrs) => addrs,
            Err(e) => {
                log::debug!("failed to resolve {}: {}", host, e);
                return None;
            }
        };

        addrs.into_iter().find_map(|addr| match addr.ip() {
            IpAddr::V4(ip) => Some(ip),
            IpAddr::V6(_) => None,
        })
    }
}

/// Turn a query into the address to look up
///
/// IPv6 literals and empty input yield `None` since every decodable edition
/// is IPv4 only.
pub fn resolve_query(query: &str, resolver: &dyn HostResolver) -> Option<Ipv4Addr> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }

    match query.parse::<IpAddr>() {
        Ok(IpAddr::V4(ip)) => Some(ip),
        Ok(IpAddr::V6(_)) => {
            log::debug!("{} is an IPv6 address, skipping", query);
            None
        }
        Err(_) => {
            let resolved = resolver.resolve(query);
            log::debug!("resolved {} to {:?}", query, resolved);
            resolved
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::testing::StaticResolver;

    fn resolver() -> StaticResolver {
        StaticResolver::new(&[("www.google.com", Ipv4Addr::new(74, 125, 67, 100))])
    }

    #[test]
    fn test_literal_addresses() {
        let r = resolver();
        assert_eq!(resolve_query("8.8.8.8", &r), Some(Ipv4Addr::new(8, 8, 8, 8)));
        assert_eq!(resolve_query("  10.0.0.1\n", &r), Some(Ipv4Addr::new(10, 0, 0, 1)));
        assert_eq!(resolve_query("::1", &r), None);
        assert_eq!(resolve_query("2001:db8::1", &r), None);
        assert_eq!(resolve_query("", &r), None);
    }

    #[test]
    fn test_host_names_use_resolver() {
        let r = resolver();
        assert_eq!(resolve_query("www.google.com", &r), Some(Ipv4Addr::new(74, 125, 67, 100)));
        assert_eq!(resolve_query("no.such.host.invalid", &r), None);

        let shared: Arc<dyn HostResolver> = Arc::new(resolver());
        assert_eq!(resolve_query("www.google.com", &shared), Some(Ipv4Addr::new(74, 125, 67, 100)));
    }

    #[test]
    fn test_system_resolver_localhost() {
        if let Some(ip) = SystemResolver.resolve("localhost") {
            assert!(ip.is_loopback());
        }
    }
}
