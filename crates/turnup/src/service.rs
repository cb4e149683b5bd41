//! TurnupService - the main entry point for converting markup to HTML.

use turnup_core::{render, Node};

use crate::parser;

/// Options for TurnupService
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Maximum construct nesting depth; spans nested deeper stay literal
    /// text instead of recursing further
    pub max_nesting: usize,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self { max_nesting: 64 }
    }
}

/// The main service for converting the markup dialect to HTML
pub struct TurnupService {
    options: ConvertOptions,
}

impl TurnupService {
    /// Create a new TurnupService with default options
    pub fn new() -> Self {
        Self {
            options: ConvertOptions::default(),
        }
    }

    /// Create a TurnupService with custom options
    pub fn with_options(options: ConvertOptions) -> Self {
        Self { options }
    }

    /// Get the current options
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut ConvertOptions {
        &mut self.options
    }

    /// Parse markup into an ordered sequence of top-level nodes.
    ///
    /// Total over all inputs: malformed constructs degrade to literal text.
    pub fn parse(&self, text: &str) -> Vec<Node> {
        parser::parse(text, &self.options)
    }

    /// Convert markup to HTML
    pub fn convert(&self, text: &str) -> String {
        render(&self.parse(text))
    }
}

impl Default for TurnupService {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse markup with default options
pub fn parse(text: &str) -> Vec<Node> {
    TurnupService::new().parse(text)
}

/// Convert markup to HTML with default options
pub fn convert(text: &str) -> String {
    TurnupService::new().convert(text)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_simple_constructs() {
        assert_eq!(convert("__Bold token__"), "<strong>Bold token</strong>");
        assert_eq!(convert("_Italic token_"), "<em>Italic token</em>");
        assert_eq!(convert("# Header token"), "<h1>Header token</h1>");
        assert_eq!(convert("Text token"), "Text token");
    }

    #[test]
    fn test_header_with_mixed_body() {
        assert_eq!(
            convert("# _Set_ __of__ tokens"),
            "<h1><em>Set</em> <strong>of</strong> tokens</h1>"
        );
    }

    #[test]
    fn test_two_headers() {
        assert_eq!(
            convert("# Header token 1\n# Header token 2"),
            "<h1>Header token 1</h1><h1>Header token 2</h1>"
        );
    }

    #[test]
    fn test_identity_on_plain_text() {
        let plain = "Just a plain sentence, with (parens), digits 123 and a\nline break.";
        assert_eq!(convert(plain), plain);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(convert(""), "");
    }

    #[test]
    fn test_escaped_markers_round_trip() {
        assert_eq!(convert("\\_Hello world\\_"), "_Hello world_");
        assert_eq!(convert("\\_\\_Text token\\_\\_"), "__Text token__");
        assert_eq!(convert("\\# Text token"), "# Text token");
        assert_eq!(convert("\\[name](url)"), "[name](url)");
    }

    #[test]
    fn test_escaping_nothing_keeps_backslash() {
        assert_eq!(convert("Ste\\gosaur\\us"), "Ste\\gosaur\\us");
        assert_eq!(convert("\\"), "\\");
        assert_eq!(convert("_Italic \\token_"), "<em>Italic \\token</em>");
    }

    #[test]
    fn test_escaped_escape() {
        assert_eq!(convert("\\\\a"), "\\a");
        assert_eq!(convert("\\\\_Italic token\\\\_"), "\\<em>Italic token\\</em>");
    }

    #[test]
    fn test_italic_inside_bold_renders() {
        assert_eq!(
            convert("__Outer bold _Inner italic part_ outer bold__"),
            "<strong>Outer bold <em>Inner italic part</em> outer bold</strong>"
        );
    }

    #[test]
    fn test_bold_inside_italic_stays_literal() {
        assert_eq!(
            convert("_Outer italic __Inner Bold part__ outer Italic_"),
            "<em>Outer italic __Inner Bold part__ outer Italic</em>"
        );
    }

    #[test]
    fn test_digits_block_emphasis() {
        assert_eq!(convert("Digits_12_3"), "Digits_12_3");
        assert_eq!(convert("Digits__12__3"), "Digits__12__3");
        assert_eq!(convert("_Digits 12 3_"), "<em>Digits 12 3</em>");
    }

    #[test]
    fn test_word_internal_emphasis() {
        assert_eq!(convert("__Sta__rt"), "<strong>Sta</strong>rt");
        assert_eq!(convert("S__tar__t"), "S<strong>tar</strong>t");
        assert_eq!(convert("St__art__"), "St<strong>art</strong>");
        assert_eq!(convert("_Sta_rt"), "<em>Sta</em>rt");
        assert_eq!(convert("S_tar_t"), "S<em>tar</em>t");
        assert_eq!(convert("St_art_"), "St<em>art</em>");
    }

    #[test]
    fn test_markers_inside_different_words_stay_literal() {
        assert_eq!(convert("Hel_lo, Wor_ld"), "Hel_lo, Wor_ld");
        assert_eq!(convert("Hel__lo, Wor__ld"), "Hel__lo, Wor__ld");
    }

    #[test]
    fn test_unpaired_markers_stay_literal() {
        assert_eq!(convert("_Hello world__"), "_Hello world__");
        assert_eq!(convert("__Hello world_"), "__Hello world_");
    }

    #[test]
    fn test_space_adjacent_markers_stay_literal() {
        assert_eq!(convert("_ Hello world_"), "_ Hello world_");
        assert_eq!(convert("_ Hello world _"), "_ Hello world _");
        assert_eq!(convert("_Hello world _"), "_Hello world _");
        assert_eq!(convert("__ Hello world__"), "__ Hello world__");
        assert_eq!(convert("__Hello world __"), "__Hello world __");
    }

    #[test]
    fn test_intersecting_markers_stay_literal() {
        assert_eq!(convert("_Hello__ _world__"), "_Hello__ _world__");
        assert_eq!(convert("__Hello_ __world_"), "__Hello_ __world_");
    }

    #[test]
    fn test_empty_emphasis_stays_literal() {
        assert_eq!(convert("__"), "__");
        assert_eq!(convert("____"), "____");
    }

    #[test]
    fn test_link_happy_path() {
        assert_eq!(
            convert("[Url name](Url link)"),
            "<a href=\"Url link\">Url name</a>"
        );
    }

    #[test]
    fn test_link_inside_header() {
        assert_eq!(
            convert("# See [docs](https://example.com) first"),
            "<h1>See <a href=\"https://example.com\">docs</a> first</h1>"
        );
    }

    #[test]
    fn test_malformed_links_stay_literal() {
        assert_eq!(convert("[NotAUrl"), "[NotAUrl");
        assert_eq!(convert("[NotAUrl]"), "[NotAUrl]");
        assert_eq!(convert("[NotAUrl](NotAUrl"), "[NotAUrl](NotAUrl");
    }

    #[test]
    fn test_unicode_emphasis() {
        assert_eq!(convert("__жирный__ текст"), "<strong>жирный</strong> текст");
    }

    #[test]
    fn test_nesting_limit_keeps_conversion_total() {
        let service = TurnupService::with_options(ConvertOptions { max_nesting: 2 });
        assert_eq!(service.convert("# # # x"), "<h1><h1># x</h1></h1>");

        let deep = "# ".repeat(500) + "x";
        let html = TurnupService::new().convert(&deep);
        assert!(html.starts_with("<h1>"));
        assert!(html.ends_with("</h1>"));
    }

    #[test]
    fn test_options_accessors() {
        let mut service = TurnupService::new();
        assert_eq!(service.options().max_nesting, 64);
        service.options_mut().max_nesting = 8;
        assert_eq!(service.options().max_nesting, 8);
    }

    #[test]
    fn test_convert_scales_linearly() {
        use std::time::Instant;

        let pattern = "__This _is_ a__ simple text \\_for\\_ crea\\ting complex _test_ __text__. ";
        let small = pattern.repeat(200);
        let large = pattern.repeat(4000);

        // Warm up allocator and caches before measuring.
        convert(&large);

        let timed = |input: &str| {
            let started = Instant::now();
            for _ in 0..5 {
                convert(input);
            }
            started.elapsed().as_secs_f64()
        };

        let t_small = timed(&small).max(1e-6);
        let t_large = timed(&large);

        // 20x the input should cost roughly 20x; quadratic behavior would
        // be closer to 400x. The bound is loose to absorb timer noise.
        assert!(
            t_large / t_small < 150.0,
            "conversion time grew superlinearly: {t_small}s -> {t_large}s"
        );
    }
}
