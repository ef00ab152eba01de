//! Derivation of a [`BundleConfig`] from command-line mode tokens.

use crate::config::{BundleConfig, Environment, PluginDirective, RunMode};

/// Result of a selection: the assembled config plus the run mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub config: BundleConfig,
    pub mode: RunMode,
}

/// Derive a bundle configuration from raw argument tokens.
///
/// Recognized tokens are `m`/`minify` and `w`/`watch`; both forms are
/// equivalent, order does not matter, and repeating a token has no further
/// effect. Every other token is ignored, so any argument list is accepted.
///
/// Minify builds get a minification directive and a `production` environment
/// declaration; everything else gets a source-map directive and a
/// `development` declaration.
///
/// This is a pure derivation: same tokens in, structurally identical
/// selection out.
pub fn select<S: AsRef<str>>(args: &[S]) -> Selection {
    let minify = args
        .iter()
        .any(|arg| matches!(arg.as_ref(), "m" | "minify"));
    let watch = args
        .iter()
        .any(|arg| matches!(arg.as_ref(), "w" | "watch"));

    let config = BundleConfig {
        plugins: if minify {
            vec![
                PluginDirective::Minify,
                PluginDirective::DefineEnv {
                    env: Environment::Production,
                },
            ]
        } else {
            vec![
                PluginDirective::SourceMap,
                PluginDirective::DefineEnv {
                    env: Environment::Development,
                },
            ]
        },
        watch,
        ..BundleConfig::base()
    };

    let mode = if watch {
        RunMode::Watch {
            debounce_ms: config.debounce_ms,
        }
    } else {
        RunMode::Once
    };

    Selection { config, mode }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WATCH_DEBOUNCE_MS;

    fn select_strs(args: &[&str]) -> Selection {
        select(args)
    }

    #[test]
    fn empty_args_select_development_run_once() {
        let selection = select_strs(&[]);
        assert_eq!(selection.mode, RunMode::Once);
        assert!(!selection.config.watch);
        assert!(!selection.config.wants_minify());
        assert!(selection.config.wants_source_map());
        assert_eq!(
            selection.config.environment(),
            Some(Environment::Development)
        );
    }

    #[test]
    fn short_minify_token_selects_production() {
        let selection = select_strs(&["m"]);
        assert_eq!(selection.mode, RunMode::Once);
        assert!(selection.config.wants_minify());
        assert!(!selection.config.wants_source_map());
        assert_eq!(selection.config.environment(), Some(Environment::Production));
    }

    #[test]
    fn long_tokens_select_watch_and_production() {
        let selection = select_strs(&["watch", "minify"]);
        assert_eq!(
            selection.mode,
            RunMode::Watch {
                debounce_ms: WATCH_DEBOUNCE_MS
            }
        );
        assert!(selection.config.watch);
        assert_eq!(selection.config.environment(), Some(Environment::Production));
    }

    #[test]
    fn unrecognized_tokens_are_ignored() {
        let selection = select_strs(&["foo", "w"]);
        assert!(selection.mode.is_watch());
        assert!(!selection.config.wants_minify());
        assert_eq!(
            selection.config.environment(),
            Some(Environment::Development)
        );
    }

    #[test]
    fn token_position_does_not_matter() {
        let front = select_strs(&["minify", "a", "b"]);
        let back = select_strs(&["a", "b", "minify"]);
        assert_eq!(front, back);
        assert_eq!(front.config.environment(), Some(Environment::Production));
    }

    #[test]
    fn repeated_tokens_are_idempotent() {
        let once = select_strs(&["w", "m"]);
        let twice = select_strs(&["w", "watch", "m", "minify", "m"]);
        assert_eq!(once, twice);
    }

    #[test]
    fn same_args_yield_structurally_identical_selections() {
        let args = ["watch", "stray", "minify"];
        assert_eq!(select(&args), select(&args));
    }

    #[test]
    fn mode_directives_follow_the_base_rule_set() {
        let selection = select_strs(&["m"]);
        let plugins = &selection.config.plugins;
        assert_eq!(
            plugins,
            &vec![
                PluginDirective::Minify,
                PluginDirective::DefineEnv {
                    env: Environment::Production
                }
            ]
        );
    }

    #[test]
    fn development_directives_keep_listed_order() {
        let selection = select_strs(&[]);
        let plugins = &selection.config.plugins;
        assert_eq!(
            plugins,
            &vec![
                PluginDirective::SourceMap,
                PluginDirective::DefineEnv {
                    env: Environment::Development
                }
            ]
        );
    }
}
