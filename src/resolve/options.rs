//! Stepping over options declared by commands already on the active path.
//!
//! Long options use the prefix twice (`--port`, `--port=80`), short options
//! once (`-p 80`, `-p80`, `-vp 80`). Values are skipped, never interpreted.

use crate::config::ResolverConfig;
use crate::group::{Arity, OptionDef};

/// Number of tokens taken by the option starting at `args[at]`, or `None`
/// if that token is not an option declared in `scope`.
///
/// `scope` holds the options of every command on the active path so far;
/// later entries shadow earlier ones. The width may run past the end of
/// `args` when a required value is missing.
pub(crate) fn declared_option_width(
    args: &[String],
    at: usize,
    scope: &[OptionDef],
    config: &ResolverConfig,
) -> Option<usize> {
    let prefix = config.option_prefix.as_str();
    if prefix.is_empty() {
        return None;
    }

    let token = args.get(at)?;
    if !config.terminator.is_empty() && *token == config.terminator {
        return None;
    }

    let long_prefix = prefix.repeat(2);

    if let Some(body) = token.strip_prefix(long_prefix.as_str()) {
        let (name, inline) = match body.split_once('=') {
            Some((name, _)) => (name, true),
            None => (body, false),
        };
        if name.is_empty() {
            return None;
        }

        let def = scope.iter().rev().find(|d| d.matches_long(name))?;
        let takes_next = !inline && def.arity == Arity::RequiresValue;
        return Some(if takes_next { 2 } else { 1 });
    }

    let body = token.strip_prefix(prefix)?;
    if body.is_empty() {
        return None;
    }

    for (i, short) in body.char_indices() {
        let def = scope.iter().rev().find(|d| d.matches_short(short))?;
        if def.arity == Arity::NoValue {
            continue;
        }

        // The rest of the token, if any, is the value.
        let rest = &body[i + short.len_utf8()..];
        let takes_next = rest.is_empty() && def.arity == Arity::RequiresValue;
        return Some(if takes_next { 2 } else { 1 });
    }

    Some(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scope() -> Vec<OptionDef> {
        vec![
            OptionDef::long("verbose").short('v'),
            OptionDef::long("port").short('p').value(),
            OptionDef::long("color").short('c').optional_value(),
        ]
    }

    fn width(tokens: &[&str]) -> Option<usize> {
        let args: Vec<String> = tokens.iter().map(|s| s.to_string()).collect();
        declared_option_width(&args, 0, &scope(), &ResolverConfig::default())
    }

    #[test]
    fn long_forms() {
        assert_eq!(width(&["--verbose", "x"]), Some(1));
        assert_eq!(width(&["--port", "80"]), Some(2));
        assert_eq!(width(&["--port=80", "x"]), Some(1));
        assert_eq!(width(&["--color", "x"]), Some(1));
        assert_eq!(width(&["--unknown"]), None);
        assert_eq!(width(&["--"]), None);
        assert_eq!(width(&["--=x"]), None);
    }

    #[test]
    fn short_forms() {
        assert_eq!(width(&["-v", "x"]), Some(1));
        assert_eq!(width(&["-p", "80"]), Some(2));
        assert_eq!(width(&["-p80"]), Some(1));
        assert_eq!(width(&["-vp", "80"]), Some(2));
        assert_eq!(width(&["-vx"]), None);
        assert_eq!(width(&["-"]), None);
    }

    #[test]
    fn missing_value_runs_past_end() {
        assert_eq!(width(&["--port"]), Some(2));
    }

    #[test]
    fn empty_prefix_declares_nothing() {
        let config = ResolverConfig {
            terminator: String::new(),
            option_prefix: String::new(),
        };
        let args = vec!["verbose".to_string()];
        assert_eq!(declared_option_width(&args, 0, &scope(), &config), None);
    }

    #[test]
    fn terminator_is_never_an_option() {
        let config = ResolverConfig {
            terminator: "--verbose".to_string(),
            option_prefix: "-".to_string(),
        };
        let args = vec!["--verbose".to_string()];
        assert_eq!(declared_option_width(&args, 0, &scope(), &config), None);
    }

    #[test]
    fn later_scope_entries_shadow_earlier() {
        let mut scope = scope();
        scope.push(OptionDef::short_only('p'));
        let args = vec!["-p".to_string(), "80".to_string()];
        assert_eq!(
            declared_option_width(&args, 0, &scope, &ResolverConfig::default()),
            Some(1)
        );
    }
}
