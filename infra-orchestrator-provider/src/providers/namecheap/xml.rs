//! XML 响应的正则提取原语
//!
//! 该 API 的响应结构扁平而稳定，用三个小原语就能覆盖全部读取需求，
//! 不需要引入完整的 XML 解析器。

use std::collections::HashMap;

use regex::Regex;

/// 提取 `<tag>text</tag>` 的文本内容
pub(crate) fn tag_text(xml: &str, tag: &str) -> Option<String> {
    let pattern = format!(r"(?is)<{0}\b[^>]*>(.*?)</{0}>", regex::escape(tag));
    let re = Regex::new(&pattern).ok()?;
    re.captures(xml)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}

/// 提取 `<tag ... attr="value" ...>` 中指定属性的值
pub(crate) fn tag_attribute(xml: &str, tag: &str, attr: &str) -> Option<String> {
    let tag_pattern = format!(r"(?is)<{}\b([^>]*)>", regex::escape(tag));
    let tag_re = Regex::new(&tag_pattern).ok()?;
    let attrs = tag_re.captures(xml)?.get(1)?.as_str();

    let attr_pattern = format!(r#"(?i)\b{}\s*=\s*"([^"]*)""#, regex::escape(attr));
    let attr_re = Regex::new(&attr_pattern).ok()?;
    attr_re
        .captures(attrs)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// 提取所有 `<tag ...>` 元素的完整属性映射，按出现顺序返回
pub(crate) fn all_tag_attributes(xml: &str, tag: &str) -> Vec<HashMap<String, String>> {
    let tag_pattern = format!(r"(?is)<{}\b([^>]*?)/?>", regex::escape(tag));
    let Ok(tag_re) = Regex::new(&tag_pattern) else {
        return Vec::new();
    };
    let Ok(attr_re) = Regex::new(r#"([\w-]+)\s*=\s*"([^"]*)""#) else {
        return Vec::new();
    };

    tag_re
        .captures_iter(xml)
        .map(|caps| {
            let attrs = caps.get(1).map_or("", |m| m.as_str());
            attr_re
                .captures_iter(attrs)
                .map(|a| (a[1].to_string(), a[2].to_string()))
                .collect()
        })
        .collect()
}
