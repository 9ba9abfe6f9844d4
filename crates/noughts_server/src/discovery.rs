//! Best-effort discovery of an address other machines can reach us on.
//!
//! Runs after the listener is bound and never holds up serving. Candidates that
//! fail to answer are skipped without logging an error.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument};

/// Public address used only to pick the outbound interface; nothing is sent to it.
const ROUTE_PROBE: (Ipv4Addr, u16) = (Ipv4Addr::new(8, 8, 8, 8), 80);

/// Local IPv4 address the OS would route outbound traffic from.
#[instrument]
pub async fn outbound_address() -> Option<IpAddr> {
    let socket = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0)).await.ok()?;
    socket.connect(ROUTE_PROBE).await.ok()?;
    let ip = socket.local_addr().ok()?.ip();
    debug!(%ip, "Outbound interface address");
    Some(ip)
}

/// Addresses worth probing: the bound host if it is concrete, then the outbound
/// interface. Loopback, unspecified and IPv6 addresses are dropped.
pub async fn candidates(host: &str) -> Vec<IpAddr> {
    let mut found = Vec::new();
    if let Ok(ip) = host.parse::<IpAddr>() {
        found.push(ip);
    }
    if let Some(ip) = outbound_address().await {
        found.push(ip);
    }
    found.retain(|ip| ip.is_ipv4() && !ip.is_loopback() && !ip.is_unspecified());
    found.dedup();
    found
}

/// Returns true if `GET http://addr/` answers with a success status in time.
#[instrument(skip(client))]
pub async fn probe(client: &reqwest::Client, addr: SocketAddr) -> bool {
    match client.get(format!("http://{}/", addr)).send().await {
        Ok(response) => response.status().is_success(),
        Err(e) => {
            debug!(error = %e, "Probe failed");
            false
        }
    }
}

/// Probes `ips` in order and returns the first one serving on `port`.
#[instrument(skip(ips))]
pub async fn first_reachable(ips: &[IpAddr], port: u16, timeout: Duration) -> Option<SocketAddr> {
    let client = reqwest::Client::builder().timeout(timeout).build().ok()?;
    for &ip in ips {
        let addr = SocketAddr::new(ip, port);
        if probe(&client, addr).await {
            return Some(addr);
        }
    }
    None
}

/// Spawns the discovery task and logs what it finds.
pub fn announce(host: String, port: u16, timeout: Duration) -> JoinHandle<Option<SocketAddr>> {
    tokio::spawn(async move {
        let ips = candidates(&host).await;
        let found = first_reachable(&ips, port, timeout).await;
        match found {
            Some(addr) => info!("listening at {}", addr),
            None => info!(candidates = ips.len(), "No reachable network address found"),
        }
        found
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_candidates_skip_loopback_and_unspecified() {
        for host in ["127.0.0.1", "0.0.0.0", "localhost"] {
            let ips = candidates(host).await;
            assert!(ips.iter().all(|ip| !ip.is_loopback() && !ip.is_unspecified()));
        }
    }

    #[tokio::test]
    async fn test_concrete_host_is_first_candidate() {
        let ips = candidates("192.0.2.7").await;
        assert_eq!(ips.first(), Some(&"192.0.2.7".parse::<IpAddr>().unwrap()));
    }

    #[tokio::test]
    async fn test_closed_port_is_unreachable() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let ips = [IpAddr::V4(Ipv4Addr::LOCALHOST)];
        assert_eq!(first_reachable(&ips, port, Duration::from_millis(200)).await, None);
    }
}
