//! Generator configuration.
//!
//! Options arrive either programmatically through the chained setters or as
//! the plugin parameter string `protoc` forwards from `--objc_opt=...`:
//!
//! ```text
//! prefix=com.example.trading=TR,prefix=com.example.*=EX
//! ```

use crate::error::CodegenError;

/// Options controlling generated names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorOptions {
    prefixes: Vec<PackagePrefix>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PackagePrefix {
    package: String,
    wildcard: bool,
    prefix: String,
}

impl PackagePrefix {
    fn matches(&self, java_package: &str) -> bool {
        if !self.wildcard {
            return self.package == java_package;
        }
        java_package == self.package
            || java_package
                .strip_prefix(self.package.as_str())
                .is_some_and(|rest| rest.starts_with('.'))
    }
}

impl GeneratorOptions {
    /// Creates options with no prefix mappings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps a Java package to an Objective-C class prefix.
    ///
    /// A package ending in `.*` also covers its subpackages.
    #[must_use]
    pub fn with_prefix(mut self, package: impl Into<String>, prefix: impl Into<String>) -> Self {
        let package = package.into();
        let (package, wildcard) = match package.strip_suffix(".*") {
            Some(base) => (base.to_string(), true),
            None => (package, false),
        };
        self.prefixes.push(PackagePrefix {
            package,
            wildcard,
            prefix: prefix.into(),
        });
        self
    }

    /// Parses a plugin parameter string.
    ///
    /// # Arguments
    /// * `parameter` - Comma separated `key=value` entries
    ///
    /// # Errors
    /// Returns `CodegenError::InvalidOption` for unknown keys, malformed
    /// entries and prefixes that are not valid Objective-C identifiers.
    pub fn parse(parameter: &str) -> Result<Self, CodegenError> {
        let mut options = Self::new();

        for entry in parameter.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (key, value) = entry
                .split_once('=')
                .ok_or_else(|| CodegenError::invalid_option(entry, "expected key=value"))?;

            match key {
                "prefix" => {
                    let (package, prefix) = value.split_once('=').ok_or_else(|| {
                        CodegenError::invalid_option(entry, "expected prefix=<package>=<prefix>")
                    })?;
                    if package.is_empty() || package == ".*" {
                        return Err(CodegenError::invalid_option(entry, "empty package"));
                    }
                    if !is_identifier(prefix) {
                        return Err(CodegenError::invalid_option(
                            entry,
                            "prefix is not a valid Objective-C identifier",
                        ));
                    }
                    options = options.with_prefix(package, prefix);
                }
                _ => return Err(CodegenError::invalid_option(entry, "unknown option")),
            }
        }

        tracing::debug!("Parsed generator options: {} prefixes", options.prefixes.len());
        Ok(options)
    }

    /// Returns the configured prefix for a Java package, if any.
    ///
    /// Exact mappings win over wildcards; among wildcards the most specific
    /// package wins.
    #[must_use]
    pub fn prefix_for(&self, java_package: &str) -> Option<&str> {
        self.prefixes
            .iter()
            .filter(|p| p.matches(java_package))
            .max_by_key(|p| (!p.wildcard, p.package.len()))
            .map(|p| p.prefix.as_str())
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_default_has_no_prefix() {
        let options = GeneratorOptions::new();
        assert_eq!(options.prefix_for("com.example"), None);
    }

    #[test]
    fn test_options_exact_prefix() {
        let options = GeneratorOptions::new().with_prefix("com.example", "EX");
        assert_eq!(options.prefix_for("com.example"), Some("EX"));
        assert_eq!(options.prefix_for("com.example.sub"), None);
        assert_eq!(options.prefix_for("com.examples"), None);
    }

    #[test]
    fn test_options_wildcard_prefix() {
        let options = GeneratorOptions::new()
            .with_prefix("com.example.*", "EX")
            .with_prefix("com.example.trading.*", "TR")
            .with_prefix("com.example.trading.fix", "FIX");

        assert_eq!(options.prefix_for("com.example"), Some("EX"));
        assert_eq!(options.prefix_for("com.example.md"), Some("EX"));
        assert_eq!(options.prefix_for("com.example.trading.orders"), Some("TR"));
        assert_eq!(options.prefix_for("com.example.trading.fix"), Some("FIX"));
        assert_eq!(options.prefix_for("com.examplex"), None);
    }

    #[test]
    fn test_options_parse() {
        let options =
            GeneratorOptions::parse("prefix=com.example=EX, prefix=org.acme.*=AC").expect("parse");
        assert_eq!(options.prefix_for("com.example"), Some("EX"));
        assert_eq!(options.prefix_for("org.acme.widgets"), Some("AC"));

        assert_eq!(GeneratorOptions::parse("").expect("parse"), GeneratorOptions::new());
    }

    #[test]
    fn test_options_parse_errors() {
        assert!(GeneratorOptions::parse("prefix").is_err());
        assert!(GeneratorOptions::parse("prefix=com.example").is_err());
        assert!(GeneratorOptions::parse("prefix==EX").is_err());
        assert!(GeneratorOptions::parse("prefix=com.example=1X").is_err());
        assert!(GeneratorOptions::parse("verbose=true").is_err());

        let err = GeneratorOptions::parse("prefix=com.example=E-X").unwrap_err();
        assert!(err.to_string().contains("Objective-C identifier"));
    }
}
