//! Logging setup for the Agora binaries.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build the default `EnvFilter` directive for the given crates.
///
/// Crate names are normalised to their module form (`agora-server` → `agora_server`).
fn default_directive(crate_names: &[&str], default_log_level: &str) -> String {
    crate_names
        .iter()
        .map(|name| format!("{}={}", name.replace('-', "_"), default_log_level))
        .collect::<Vec<_>>()
        .join(",")
}

/// Initialize the tracing subscriber.
///
/// Every crate in `crate_names` logs at `default_log_level` unless `RUST_LOG` is set,
/// in which case `RUST_LOG` wins.
///
/// # Examples
///
/// ```no_run
/// use agora_shared::logger::setup_logger;
///
/// setup_logger(&["agora-server", "tower_http"], "debug");
/// ```
pub fn setup_logger(crate_names: &[&str], default_log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_directive(crate_names, default_log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_normalises_crate_names() {
        // テスト項目: クレート名のハイフンがアンダースコアに変換される
        // given (前提条件):
        let crates = ["agora-server", "tower_http"];

        // when (操作):
        let directive = default_directive(&crates, "debug");

        // then (期待する結果):
        assert_eq!(directive, "agora_server=debug,tower_http=debug");
    }

    #[test]
    fn test_default_directive_with_no_crates() {
        // テスト項目: クレートが空の場合、空のディレクティブになる
        // given (前提条件):
        let crates: [&str; 0] = [];

        // when (操作):
        let directive = default_directive(&crates, "info");

        // then (期待する結果):
        assert!(directive.is_empty());
    }
}
