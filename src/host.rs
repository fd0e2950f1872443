use std::time::Duration;

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEnv {
    /// Launched inside a mini-app host.
    Embedded,
    Standalone,
}

impl HostEnv {
    pub fn label(&self) -> &'static str {
        match self {
            HostEnv::Embedded => "Mini App",
            HostEnv::Standalone => "Standalone",
        }
    }
}

/// Signal from an optional embedding host.
#[async_trait::async_trait]
pub trait HostProbe: Send + Sync {
    async fn is_embedded(&self) -> bool;
}

/// Reports embedded when the host exports `INKWELL_HOST`.
pub struct EnvProbe;

#[async_trait::async_trait]
impl HostProbe for EnvProbe {
    async fn is_embedded(&self) -> bool {
        std::env::var("INKWELL_HOST").map(|v| !v.trim().is_empty()).unwrap_or(false)
    }
}

/// Queries the probe, giving up after `timeout`. No probe, a negative
/// answer or a timeout all mean standalone.
pub async fn detect(probe: Option<&dyn HostProbe>, timeout: Duration) -> HostEnv {
    let Some(probe) = probe else {
        return HostEnv::Standalone;
    };
    match tokio::time::timeout(timeout, probe.is_embedded()).await {
        Ok(true) => HostEnv::Embedded,
        Ok(false) => HostEnv::Standalone,
        Err(_) => {
            debug!(?timeout, "host detection timed out");
            HostEnv::Standalone
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(bool);

    #[async_trait::async_trait]
    impl HostProbe for Fixed {
        async fn is_embedded(&self) -> bool {
            self.0
        }
    }

    struct Hangs;

    #[async_trait::async_trait]
    impl HostProbe for Hangs {
        async fn is_embedded(&self) -> bool {
            futures::future::pending::<()>().await;
            true
        }
    }

    const LIMIT: Duration = Duration::from_millis(800);

    #[tokio::test]
    async fn no_probe_is_standalone() {
        assert_eq!(detect(None, LIMIT).await, HostEnv::Standalone);
    }

    #[tokio::test]
    async fn probe_answer_is_used() {
        assert_eq!(detect(Some(&Fixed(true)), LIMIT).await, HostEnv::Embedded);
        assert_eq!(detect(Some(&Fixed(false)), LIMIT).await, HostEnv::Standalone);
    }

    #[tokio::test(start_paused = true)]
    async fn hanging_probe_times_out() {
        assert_eq!(detect(Some(&Hangs), LIMIT).await, HostEnv::Standalone);
    }
}
