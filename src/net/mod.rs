//! Placeholder transport boundary for a future network client.
//!
//! Nothing in the rules core depends on a live transport; the engines are
//! fully usable with [`NullTransport`].

/// Broadcast/input channel a future networked client would implement.
/// Payloads are serialized outcome records; the core never formats text.
pub trait Transport {
    fn broadcast(&mut self, payload: &str);

    /// Next pending input payload, if any.
    fn poll_input(&mut self) -> Option<String>;
}

/// The zero-transport default: discards broadcasts, never has input.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullTransport;

impl Transport for NullTransport {
    fn broadcast(&mut self, _payload: &str) {}

    fn poll_input(&mut self) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_transport_discards_and_stays_silent() {
        let mut transport = NullTransport;
        transport.broadcast("{\"damage\":3}");
        assert!(transport.poll_input().is_none());
    }
}
