//! User-Agent header sent by clients built without a custom `reqwest::Client`.

use std::sync::OnceLock;

const CRATE_NAME: &str = env!("CARGO_PKG_NAME");

const CRATE_VERSION: &str = env!("CARGO_PKG_VERSION");

static USER_AGENT: OnceLock<String> = OnceLock::new();

/// Returns the User-Agent string for admin requests.
///
/// Format: `keycloak-admin/0.1.0 (rust/1.92; linux/x86_64)`
pub fn user_agent() -> &'static str {
    USER_AGENT.get_or_init(|| {
        format!(
            "{}/{} ({}; {}/{})",
            CRATE_NAME,
            CRATE_VERSION,
            rust_version(),
            os_name(),
            std::env::consts::ARCH,
        )
    })
}

fn rust_version() -> &'static str {
    concat!("rust/", env!("CARGO_PKG_RUST_VERSION"))
}

fn os_name() -> &'static str {
    match std::env::consts::OS {
        "macos" => "darwin",
        os => os,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_agent_format() {
        let ua = user_agent();

        assert!(ua.starts_with("keycloak-admin/"));
        assert!(ua.contains("rust/"));
        assert!(ua.contains(std::env::consts::ARCH));
        assert!(ua.ends_with(')'));
    }

    #[test]
    fn test_user_agent_cached() {
        let ua1 = user_agent();
        let ua2 = user_agent();
        assert!(std::ptr::eq(ua1, ua2));
    }
}
