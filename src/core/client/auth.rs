//! Per-request credential attachment policy.
//!
//! Absolute URLs can route a call to auxiliary providers (CSIndex, Danjuan,
//! Eastmoney); the cookie must never travel to those hosts. The policy is
//! evaluated per request, not cached, because each call may target a
//! different host.

use url::Url;

use super::constants::{PRIMARY_DOMAIN_SUFFIX, PRIMARY_ROOT_DOMAIN};

/// Whether the credential may be attached to a request for `url`.
///
/// Host-less (relative) references resolve against the base URL and are
/// trusted; otherwise the host must be the configured base host or belong to
/// the `xueqiu.com` domain family.
pub(crate) fn should_send_auth(url: &Url, base_host: Option<&str>) -> bool {
    let Some(host) = url.host_str() else {
        return true;
    };
    let host = host.trim().to_ascii_lowercase();
    if base_host.is_some_and(|base| base.eq_ignore_ascii_case(&host)) {
        return true;
    }
    is_primary_host(&host)
}

pub(crate) fn is_primary_host(host: &str) -> bool {
    host == PRIMARY_ROOT_DOMAIN || host.ends_with(PRIMARY_DOMAIN_SUFFIX)
}
