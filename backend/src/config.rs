use crate::latency::Latency;
use std::env;

/// Demo signing secret used when `ZPAY_JWT_SECRET` is not set. There is
/// nothing to protect in a mock backend, so a baked-in default is fine here.
const DEMO_JWT_SECRET: &str = "zpay-demo-secret-key-do-not-use-in-production";

#[derive(Clone, Debug)]
pub struct Config {
    pub jwt_secret: String,
    pub jwt_expiration_hours: i64,
    pub latency: Latency,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let jwt_secret =
            env::var("ZPAY_JWT_SECRET").unwrap_or_else(|_| DEMO_JWT_SECRET.to_string());

        let jwt_expiration_hours = env::var("ZPAY_JWT_EXPIRATION_HOURS")
            .unwrap_or_else(|_| "24".to_string())
            .parse()
            .map_err(|_| "ZPAY_JWT_EXPIRATION_HOURS must be a valid number")?;

        // ZPAY_LATENCY_MS=0 disables the simulated delay entirely; a positive
        // value pins it; unset keeps the default jitter profile.
        let latency = match env::var("ZPAY_LATENCY_MS") {
            Ok(raw) => {
                let ms: u64 = raw
                    .parse()
                    .map_err(|_| "ZPAY_LATENCY_MS must be a valid number of milliseconds")?;
                if ms == 0 {
                    Latency::None
                } else {
                    Latency::Fixed(ms)
                }
            }
            Err(_) => Latency::default(),
        };

        Ok(Self {
            jwt_secret,
            jwt_expiration_hours,
            latency,
        })
    }

    /// Config for tests and examples: demo secret, no simulated latency.
    pub fn demo() -> Self {
        Self {
            jwt_secret: DEMO_JWT_SECRET.to_string(),
            jwt_expiration_hours: 24,
            latency: Latency::None,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.jwt_secret.len() < 32 {
            return Err("ZPAY_JWT_SECRET must be at least 32 characters long".to_string());
        }

        if self.jwt_expiration_hours < 1 || self.jwt_expiration_hours > 720 {
            return Err(
                "ZPAY_JWT_EXPIRATION_HOURS must be between 1 and 720 (30 days)".to_string(),
            );
        }

        Ok(())
    }
}
