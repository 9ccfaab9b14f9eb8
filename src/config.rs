/// Where contact requests go. `None` keeps the simulated submitter.
pub fn contact_endpoint() -> Option<String> {
    endpoint_for(option_env!("SITE_BACKEND_URL"))
}

fn endpoint_for(backend_url: Option<&str>) -> Option<String> {
    let base = backend_url?.trim().trim_end_matches('/');
    if base.is_empty() {
        return None;
    }
    Some(format!("{}/api/contact", base))
}

pub const SCROLL_THROTTLE_MS: f64 = 100.0;
pub const NAVBAR_SCROLL_THRESHOLD_PX: f64 = 100.0;
pub const NAV_COOLDOWN_MS: u32 = 1_000;

pub const REVEAL_THRESHOLD: f64 = 0.3;
pub const REVEAL_ROOT_MARGIN: &str = "-50px";
pub const CARD_STAGGER_MS: u32 = 100;
pub const STAT_STAGGER_MS: u32 = 200;

pub const COUNT_UP_DURATION_MS: u32 = 2_000;
pub const COUNT_UP_TICK_MS: u32 = 16;

pub const SIMULATED_LATENCY_MS: u32 = 2_000;
pub const NOTIFICATION_LIFETIME_MS: u32 = 5_000;
pub const EASTER_EGG_DURATION_MS: u32 = 2_000;

pub const SERVICE_WORKER_PATH: &str = "/sw.js";
pub const GLOBAL_NAVIGATE_FN: &str = "scrollToSection";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_uses_configured_backend() {
        assert_eq!(
            endpoint_for(Some("https://api.example.com")).as_deref(),
            Some("https://api.example.com/api/contact")
        );
        assert_eq!(
            endpoint_for(Some("https://api.example.com/")).as_deref(),
            Some("https://api.example.com/api/contact")
        );
    }

    #[test]
    fn unset_or_blank_backend_keeps_simulation() {
        assert_eq!(endpoint_for(None), None);
        assert_eq!(endpoint_for(Some("")), None);
        assert_eq!(endpoint_for(Some("  ")), None);
    }

    #[test]
    fn endpoint_matches_build_environment() {
        assert_eq!(contact_endpoint(), endpoint_for(option_env!("SITE_BACKEND_URL")));
    }
}
