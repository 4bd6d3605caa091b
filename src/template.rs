//! Template neutralizer: rewrites `{{.VAR}}` placeholders to `$VAR`.
//!
//! The task runner's template syntax is opaque to shellcheck and would be
//! flagged as a syntax error at every occurrence. Rewriting placeholders
//! into ordinary (if undefined) shell variable references keeps the text
//! valid shell without touching any other character, so linter line
//! numbers stay valid against the original script.

use regex::Regex;
use std::sync::OnceLock;

fn placeholder_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{\{\.([A-Z_][A-Z0-9_]*)\}\}").unwrap())
}

/// Replace every `{{.IDENTIFIER}}` with `$IDENTIFIER`. Pure text
/// transform; line structure is preserved exactly.
pub fn neutralize(script: &str) -> String {
    placeholder_re().replace_all(script, "$$${1}").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replaces_placeholders() {
        assert_eq!(neutralize("echo {{.IMAGE_TAG}}"), "echo $IMAGE_TAG");
        assert_eq!(
            neutralize("docker push {{.REGISTRY}}/{{.NAME}}"),
            "docker push $REGISTRY/$NAME"
        );
    }

    #[test]
    fn test_leaves_non_matching_text_alone() {
        // Lowercase identifiers and bare braces are not placeholders.
        assert_eq!(neutralize("echo {{.foo}}"), "echo {{.foo}}");
        assert_eq!(neutralize("echo {{ .X }}"), "echo {{ .X }}");
        assert_eq!(neutralize("echo {}"), "echo {}");
    }

    #[test]
    fn test_line_count_preserved() {
        let input = "a {{.X}}\nb\nc {{.LONG_NAME}} d\n\ne";
        let out = neutralize(input);
        assert_eq!(
            input.matches('\n').count(),
            out.matches('\n').count()
        );
        assert_eq!(out, "a $X\nb\nc $LONG_NAME d\n\ne");
    }

    #[test]
    fn test_idempotent_without_placeholders() {
        let once = neutralize("echo $ALREADY_SHELL\nif [ -z \"$X\" ]; then :; fi");
        let twice = neutralize(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_identifier_must_start_with_letter_or_underscore() {
        assert_eq!(neutralize("{{.1BAD}}"), "{{.1BAD}}");
        assert_eq!(neutralize("{{._OK}}"), "$_OK");
        assert_eq!(neutralize("{{.A1_B2}}"), "$A1_B2");
    }
}
