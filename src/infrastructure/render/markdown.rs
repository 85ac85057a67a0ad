use crate::application::ports::render::MarkdownRenderer;
use pulldown_cmark::{Options, Parser, html};

/// CommonMark plus the GitHub extensions the seed articles use.
#[derive(Debug, Clone)]
pub struct PulldownMarkdownRenderer {
    options: Options,
}

impl Default for PulldownMarkdownRenderer {
    fn default() -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TASKLISTS);
        options.insert(Options::ENABLE_FOOTNOTES);
        Self { options }
    }
}

impl MarkdownRenderer for PulldownMarkdownRenderer {
    fn to_html(&self, source: &str) -> String {
        let parser = Parser::new_ext(source, self.options);
        let mut output = String::with_capacity(source.len() * 3 / 2);
        html::push_html(&mut output, parser);
        output
    }
}
