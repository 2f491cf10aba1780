//! Configuration options for content extraction.
//!
//! The `Options` struct controls which passes run and the thresholds they use.
//! The three pass switches are handed to the stages as a [`Flags`] value so
//! each stage only sees the switch it honours.

/// Configuration options for content extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use rs_readscrub::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     clean_conditionally: false,
///     max_elements_to_parse: 10_000,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct Options {
    /// Remove nodes whose class/id looks like boilerplate during the scoring walk.
    ///
    /// Default: `true`
    pub strip_unlikelys: bool,

    /// Apply the ±25 class/id weight when initializing candidates and cleaning.
    ///
    /// Default: `true`
    pub weight_classes: bool,

    /// Run the heuristic removal of forms, tables, lists and divs on the
    /// selected content.
    ///
    /// Default: `true`
    pub clean_conditionally: bool,

    /// Minimum trimmed text length for a recorded node to contribute score.
    ///
    /// Default: `25`
    pub paragraph_char_threshold: usize,

    /// Maximum number of elements accepted before extraction starts.
    ///
    /// `0` disables the check.
    ///
    /// Default: `0`
    pub max_elements_to_parse: usize,

    /// Number of top candidates retained for ancestor promotion.
    ///
    /// Default: `5`
    pub n_top_candidates: usize,

    /// Keep every `class` attribute on the extracted content.
    ///
    /// Default: `false`
    pub keep_classes: bool,

    /// Classes kept on the extracted content in addition to `page` and
    /// `readability-styled`.
    ///
    /// Default: empty
    pub classes_to_preserve: Vec<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            strip_unlikelys: true,
            weight_classes: true,
            clean_conditionally: true,
            paragraph_char_threshold: 25,
            max_elements_to_parse: 0,
            n_top_candidates: 5,
            keep_classes: false,
            classes_to_preserve: Vec::new(),
        }
    }
}

impl Options {
    /// The pass switches of these options.
    #[must_use]
    pub fn flags(&self) -> Flags {
        Flags {
            strip_unlikelys: self.strip_unlikelys,
            weight_classes: self.weight_classes,
            clean_conditionally: self.clean_conditionally,
        }
    }
}

/// The three independent pass switches.
///
/// `strip_unlikelys` is read by the scoring walk, `weight_classes` by the
/// class weight helper and `clean_conditionally` by the cleaner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct Flags {
    pub strip_unlikelys: bool,
    pub weight_classes: bool,
    pub clean_conditionally: bool,
}

impl Default for Flags {
    fn default() -> Self {
        Options::default().flags()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = Options::default();
        assert!(opts.strip_unlikelys);
        assert!(opts.weight_classes);
        assert!(opts.clean_conditionally);
        assert_eq!(opts.paragraph_char_threshold, 25);
        assert_eq!(opts.max_elements_to_parse, 0);
        assert_eq!(opts.n_top_candidates, 5);
        assert!(!opts.keep_classes);
        assert!(opts.classes_to_preserve.is_empty());
    }

    #[test]
    fn test_flags_follow_options() {
        let opts = Options {
            weight_classes: false,
            ..Options::default()
        };
        let flags = opts.flags();
        assert!(flags.strip_unlikelys);
        assert!(!flags.weight_classes);
        assert!(flags.clean_conditionally);
    }

    #[test]
    fn test_default_flags_all_on() {
        let flags = Flags::default();
        assert_eq!(
            flags,
            Flags {
                strip_unlikelys: true,
                weight_classes: true,
                clean_conditionally: true,
            }
        );
    }
}
