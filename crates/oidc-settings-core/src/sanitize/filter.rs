//! Text filters: safe plain text for stored values, a small tag allow-list for
//! rich-text descriptions

use regex::{Captures, Regex};

use crate::prelude::*;
use crate::render::escape_html;

/// Tags kept by the rich-text filter
const RICH_TEXT_TAGS: &[&str] = &["a", "b", "br", "code", "em", "i", "p", "span", "strong"];

pub struct TextFilter {
	blocks: Regex,
	tags: Regex,
	controls: Regex,
	whitespace: Regex,
	markup: Regex,
	href: Regex,
}

impl TextFilter {
	pub fn new() -> ClResult<Self> {
		Ok(Self {
			blocks: Regex::new(r"(?is)<(script|style)\b[^>]*>.*?</(script|style)\s*>")?,
			tags: Regex::new(r"<[^>]*>")?,
			// C0/C1 controls except tab, newline and CR, plus bidi embeddings and overrides
			controls: Regex::new(
				r"[\p{Cc}\x{200E}\x{200F}\x{202A}-\x{202E}\x{2066}-\x{2069}&&[^\t\n\r]]",
			)?,
			whitespace: Regex::new(r"[\r\n\t ]+")?,
			markup: Regex::new(r"(?s)<(/?)([a-zA-Z][a-zA-Z0-9]*)([^>]*)>")?,
			href: Regex::new(r#"(?i)\bhref\s*=\s*(?:"([^"]*)"|'([^']*)')"#)?,
		})
	}

	/// Reduce input to safe plain text: no markup, no control characters,
	/// whitespace runs collapsed, trimmed. A `<` that does not open a tag is
	/// kept as `&lt;`.
	pub fn plain_text(&self, input: &str) -> String {
		let text = self.controls.replace_all(input, "");
		let text = self.blocks.replace_all(&text, "");
		let text = self.tags.replace_all(&text, "");
		let text = text.replace('<', "&lt;");
		let text = self.whitespace.replace_all(&text, " ");
		text.trim().to_string()
	}

	/// Keep a small set of inline formatting tags and drop everything else.
	/// Links keep only an http(s), mailto or relative `href`.
	pub fn rich_text(&self, input: &str) -> String {
		let text = self.blocks.replace_all(input, "");
		let text = self.markup.replace_all(&text, |caps: &Captures| {
			let closing = !caps[1].is_empty();
			let tag = caps[2].to_ascii_lowercase();
			if !RICH_TEXT_TAGS.contains(&tag.as_str()) {
				return String::new();
			}
			if closing {
				return format!("</{}>", tag);
			}
			if tag == "a" {
				return match self.link_target(&caps[3]) {
					Some(href) => format!("<a href=\"{}\">", escape_html(&href)),
					None => "<a>".to_string(),
				};
			}
			format!("<{}>", tag)
		});
		escape_stray_less_than(&text)
	}

	fn link_target(&self, attrs: &str) -> Option<String> {
		let caps = self.href.captures(attrs)?;
		let href = caps.get(1).or_else(|| caps.get(2))?.as_str().trim();
		let lower = href.to_ascii_lowercase();
		let allowed = lower.starts_with("https://")
			|| lower.starts_with("http://")
			|| lower.starts_with("mailto:")
			|| lower.starts_with('/')
			|| lower.starts_with('#');
		allowed.then(|| href.to_string())
	}
}

/// Escape every `<` that does not start one of the rebuilt tags
fn escape_stray_less_than(text: &str) -> String {
	let mut out = String::with_capacity(text.len());
	let mut rest = text;
	while let Some(pos) = rest.find('<') {
		out.push_str(&rest[..pos]);
		let tail = &rest[pos..];
		let is_tag = tail.find('>').is_some_and(|end| {
			let inner = tail[1..end].trim_start_matches('/');
			let name = inner.split([' ', '=']).next().unwrap_or("");
			RICH_TEXT_TAGS.contains(&name)
		});
		if is_tag {
			out.push('<');
		} else {
			out.push_str("&lt;");
		}
		rest = &tail[1..];
	}
	out.push_str(rest);
	out
}

#[cfg(test)]
mod tests {
	use super::*;

	fn filter() -> TextFilter {
		TextFilter::new().unwrap()
	}

	#[test]
	fn test_plain_text_trims_and_collapses() {
		assert_eq!(filter().plain_text("  my-client  "), "my-client");
		assert_eq!(filter().plain_text("a\n\tb   c"), "a b c");
	}

	#[test]
	fn test_plain_text_strips_markup() {
		let f = filter();
		assert_eq!(f.plain_text("<b>bold</b> text"), "bold text");
		assert_eq!(f.plain_text("x<script>alert(1)</script>y"), "xy");
		assert_eq!(f.plain_text("a < b"), "a &lt; b");
		assert_eq!(f.plain_text("nul\u{0}byte\u{7f}"), "nulbyte");
	}

	#[test]
	fn test_plain_text_strips_c1_and_bidi_controls() {
		let f = filter();
		assert_eq!(f.plain_text("a\u{85}b\u{9b}c"), "abc");
		assert_eq!(f.plain_text("admin\u{202e}txt.exe"), "admintxt.exe");
		assert_eq!(f.plain_text("\u{2066}x\u{2069}"), "x");
		assert_eq!(f.plain_text("caf\u{e9}"), "caf\u{e9}");
	}

	#[test]
	fn test_plain_text_keeps_urls_and_placeholders() {
		let f = filter();
		assert_eq!(
			f.plain_text("https://example.com/oauth2/authorize?a=1&b=%20"),
			"https://example.com/oauth2/authorize?a=1&b=%20"
		);
		assert_eq!(f.plain_text("{given_name} {family_name}"), "{given_name} {family_name}");
	}

	#[test]
	fn test_rich_text_keeps_allowed_tags() {
		let f = filter();
		assert_eq!(
			f.rich_text("Not<br><strong>recommended</strong>"),
			"Not<br><strong>recommended</strong>"
		);
		assert_eq!(f.rich_text("<div onclick=\"x()\">hi</div>"), "hi");
		assert_eq!(f.rich_text("a<script>bad()</script>b"), "ab");
	}

	#[test]
	fn test_rich_text_filters_links() {
		let f = filter();
		assert_eq!(
			f.rich_text(r#"<a href="https://example.com" onclick="x()">docs</a>"#),
			r#"<a href="https://example.com">docs</a>"#
		);
		assert_eq!(f.rich_text(r#"<a href="javascript:alert(1)">x</a>"#), "<a>x</a>");
	}

	#[test]
	fn test_rich_text_escapes_stray_angle() {
		assert_eq!(filter().rich_text("1 < 2 and <em>3</em>"), "1 &lt; 2 and <em>3</em>");
	}

	mod props {
		use super::*;
		use proptest::prelude::*;

		proptest! {
			#[test]
			fn plain_text_is_idempotent(input in "(\\PC|\\p{Cc}){0,80}") {
				let f = filter();
				let once = f.plain_text(&input);
				prop_assert_eq!(f.plain_text(&once), once);
			}

			#[test]
			fn plain_text_has_no_markup_or_controls(
				input in "(\\PC|\\p{Cc}|[<>\\x{202a}-\\x{202e}]){0,80}"
			) {
				let out = filter().plain_text(&input);
				prop_assert!(!out.contains('<'));
				prop_assert!(!out.chars().any(|c| c.is_control()));
				prop_assert!(!out.chars().any(|c| ('\u{202a}'..='\u{202e}').contains(&c)), "output contains bidi override chars");
				prop_assert_eq!(out.trim(), out.as_str());
			}
		}
	}
}

// vim: ts=4
