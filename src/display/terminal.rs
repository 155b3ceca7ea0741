//! TTY detection and color support logic

use std::io::IsTerminal;

/// Determine if colors should be used based on environment and TTY status
pub fn should_use_colors() -> bool {
    colors_enabled(|name| std::env::var(name).ok(), std::io::stdout().is_terminal())
}

/// Color decision from an environment lookup and the stdout TTY status.
///
/// Priority order: `NO_COLOR` (https://no-color.org/), then
/// `CLICOLOR_FORCE` other than "0", then `CLICOLOR=0`, then the TTY.
fn colors_enabled<F>(var: F, is_tty: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    if var("NO_COLOR").is_some() {
        return false;
    }

    if var("CLICOLOR_FORCE").is_some_and(|val| val != "0") {
        return true;
    }

    if var("CLICOLOR").is_some_and(|val| val == "0") {
        return false;
    }

    is_tty
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn env<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |name| {
            pairs
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.to_string())
        }
    }

    #[test]
    fn test_tty_without_variables() {
        assert!(colors_enabled(env(&[]), true));
        assert!(!colors_enabled(env(&[]), false));
    }

    #[test]
    fn test_no_color_disables() {
        assert!(!colors_enabled(env(&[("NO_COLOR", "1")]), true));
    }

    #[test]
    fn test_clicolor_force_enables_when_piped() {
        assert!(colors_enabled(env(&[("CLICOLOR_FORCE", "1")]), false));
        assert!(!colors_enabled(env(&[("CLICOLOR_FORCE", "0")]), false));
    }

    #[test]
    fn test_no_color_overrides_force() {
        let vars = [("NO_COLOR", "1"), ("CLICOLOR_FORCE", "1")];
        assert!(!colors_enabled(env(&vars), true));
    }

    #[test]
    fn test_clicolor_zero_disables() {
        assert!(!colors_enabled(env(&[("CLICOLOR", "0")]), true));
    }

    #[test]
    #[serial]
    fn test_should_use_colors_reads_no_color() {
        std::env::set_var("NO_COLOR", "1");
        assert!(!should_use_colors());
        std::env::remove_var("NO_COLOR");
    }
}
