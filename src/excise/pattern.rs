//! # 移除模式
//!
//! 封装编译后的正则表达式。`.` 可以匹配换行符，
//! 贪婪性完全由表达式本身决定。
//!
//! ## 依赖关系
//! - 被 `excise/rewrite.rs` 和 `commands/` 使用
//! - 使用 `regex` crate

use crate::error::{ExciseError, Result};

use regex::{Regex, RegexBuilder};
use std::borrow::Cow;

/// 编译后的移除模式（启动时构造一次，之后只读）
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
}

/// 单次切除结果
#[derive(Debug)]
pub struct Excision<'t> {
    /// 切除后的文本（未命中时借用原文）
    pub text: Cow<'t, str>,
    /// 被移除的片段数
    pub removed: usize,
}

impl Excision<'_> {
    /// 文本是否发生变化
    pub fn changed(&self) -> bool {
        self.removed > 0
    }
}

impl Pattern {
    /// 从正则表达式编译（dot-all 模式）
    pub fn new(expr: &str) -> Result<Self> {
        let regex = RegexBuilder::new(expr)
            .dot_matches_new_line(true)
            .build()
            .map_err(|e| ExciseError::PatternError {
                pattern: expr.to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self { regex })
    }

    /// 由起止两个字面锚点构造：`open .*? close`
    pub fn between(open: &str, close: &str) -> Result<Self> {
        if open.is_empty() {
            return Err(ExciseError::PatternError {
                pattern: format!("{}...{}", open, close),
                reason: "opening anchor must not be empty".to_string(),
            });
        }
        Self::new(&format!(
            "{}.*?{}",
            regex::escape(open),
            regex::escape(close)
        ))
    }

    /// 原始表达式
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// 将所有不重叠的匹配替换为空串
    pub fn excise<'t>(&self, text: &'t str) -> Excision<'t> {
        let mut out = String::new();
        let mut last = 0;
        let mut removed = 0;

        for m in self.regex.find_iter(text) {
            // 空匹配不移除任何内容
            if m.is_empty() {
                continue;
            }
            if removed == 0 {
                out.reserve(text.len());
            }
            out.push_str(&text[last..m.start()]);
            last = m.end();
            removed += 1;
        }

        if removed == 0 {
            return Excision {
                text: Cow::Borrowed(text),
                removed,
            };
        }

        out.push_str(&text[last..]);
        Excision {
            text: Cow::Owned(out),
            removed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAV: &str = r#"<div class="nav-dropdown">.*?</div>"#;

    #[test]
    fn test_concrete_nav_dropdown() {
        let block = "<div class=\"nav-dropdown\">\n<a href=\"X\"><img src=\"Y\"></a>\n<i class=\"fa fa-chevron-down\"></i>\n</div>";
        let text = format!("<body>\n{}\n<p>after</p>\n</body>", block);

        let pattern = Pattern::new(NAV).unwrap();
        let result = pattern.excise(&text);

        assert_eq!(result.removed, 1);
        assert_eq!(result.text, "<body>\n\n<p>after</p>\n</body>");
    }

    #[test]
    fn test_non_greedy_span() {
        let text = r#"A<div class="nav-dropdown">one</div>MIDDLE<div class="nav-dropdown">two</div>TAIL</div>"#;
        let pattern = Pattern::between(r#"<div class="nav-dropdown">"#, "</div>").unwrap();
        let result = pattern.excise(text);

        assert_eq!(result.removed, 2);
        assert_eq!(result.text, "AMIDDLETAIL</div>");
    }

    #[test]
    fn test_greedy_expression_is_kept_greedy() {
        let text = "<x>1</x>mid<x>2</x>end";
        let pattern = Pattern::new("<x>.*</x>").unwrap();
        assert_eq!(pattern.excise(text).text, "end");
    }

    #[test]
    fn test_footer_whitespace_between_closers() {
        let text = "head<div class=\"site-footer full-width\">\n<div>x</div>\n  </div>\n</div>rest";
        let pattern =
            Pattern::new(r#"<div class="site-footer full-width">.*?</div>\s*</div>"#).unwrap();
        let result = pattern.excise(text);

        assert_eq!(result.removed, 1);
        assert_eq!(result.text, "head\n</div>rest");
    }

    #[test]
    fn test_no_match_borrows_input() {
        let pattern = Pattern::new(NAV).unwrap();
        let result = pattern.excise("<p>nothing here</p>");

        assert!(!result.changed());
        assert!(matches!(result.text, Cow::Borrowed(_)));
    }

    #[test]
    fn test_idempotent() {
        let pattern = Pattern::new(NAV).unwrap();
        let text = "a<div class=\"nav-dropdown\">\nx\n</div>b<div class=\"nav-dropdown\">y</div>c";

        let once = pattern.excise(text).text.into_owned();
        let twice = pattern.excise(&once);

        assert!(!twice.changed());
        assert_eq!(twice.text, once);
    }

    #[test]
    fn test_empty_matches_are_ignored() {
        let pattern = Pattern::new("z*").unwrap();
        let result = pattern.excise("abc");

        assert_eq!(result.removed, 0);
        assert_eq!(result.text, "abc");
    }

    #[test]
    fn test_invalid_pattern() {
        let err = Pattern::new("<div(").unwrap_err();
        assert!(matches!(err, ExciseError::PatternError { .. }));
    }

    #[test]
    fn test_between_escapes_anchors() {
        let pattern = Pattern::between("[a]", "(b)").unwrap();
        assert_eq!(pattern.excise("x[a]\n..(b)y").text, "xy");
        assert!(!pattern.excise("xa..by").changed());
        assert!(Pattern::between("", "</div>").is_err());
    }
}
