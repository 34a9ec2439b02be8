use rand::Rng;
use std::time::Duration;

/// Simulated network round-trip applied before every store operation.
///
/// The jitter profile mirrors what the hosted demo used (roughly 250-600 ms
/// per call). Tests use [`Latency::None`] so the suspend contract is kept
/// without slowing anything down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Latency {
    None,
    Fixed(u64),
    Jitter { min_ms: u64, max_ms: u64 },
}

impl Default for Latency {
    fn default() -> Self {
        Latency::Jitter {
            min_ms: 250,
            max_ms: 600,
        }
    }
}

impl Latency {
    /// Suspend the caller for the configured interval.
    pub async fn simulate(&self) {
        let ms = match self {
            Latency::None => return,
            Latency::Fixed(ms) => *ms,
            Latency::Jitter { min_ms, max_ms } => {
                if min_ms >= max_ms {
                    *min_ms
                } else {
                    rand::thread_rng().gen_range(*min_ms..=*max_ms)
                }
            }
        };
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }
}
