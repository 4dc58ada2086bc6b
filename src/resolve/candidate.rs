//! Deciding whether a token may name a sub-command.

use crate::config::ResolverConfig;

/// Check if `token` is a bare word that resolution may try to match.
///
/// The terminator (when non-empty) and anything starting with the option
/// prefix are not candidates, except a token that is exactly the prefix
/// (`-` is conventionally a positional value). An empty prefix means no
/// token is an option.
pub fn is_candidate(token: &str, config: &ResolverConfig) -> bool {
    if !config.terminator.is_empty() && token == config.terminator {
        return false;
    }

    let prefix = config.option_prefix.as_str();
    prefix.is_empty() || !token.starts_with(prefix) || token == prefix
}
