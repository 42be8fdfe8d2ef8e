pub const DEFAULT_SYSTEM_PROMPT: &str = "你是一位知识渊博的百科助手。请以简洁清晰的方式回答用户的问题，确保：

1. 信息准确且来源可靠
2. 回答简明扼要
3. 适当使用举例说明
4. 避免技术术语，使用通俗易懂的语言
5. 在必要时提供进一步学习的建议";

/// Pick the system prompt sent with a request: the stored override when it
/// is set to something non-empty, the built-in persona otherwise.
pub fn resolve_system_prompt(custom: Option<&str>) -> &str {
    match custom {
        Some(value) if !value.is_empty() => value,
        _ => DEFAULT_SYSTEM_PROMPT,
    }
}

/// Whether a stored override replaces the built-in persona.
pub fn is_custom_system_prompt(custom: Option<&str>) -> bool {
    custom.is_some_and(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_SYSTEM_PROMPT, is_custom_system_prompt, resolve_system_prompt};

    #[test]
    fn unset_and_empty_fall_back_to_default() {
        assert_eq!(resolve_system_prompt(None), DEFAULT_SYSTEM_PROMPT);
        assert_eq!(resolve_system_prompt(Some("")), DEFAULT_SYSTEM_PROMPT);
        assert!(!is_custom_system_prompt(None));
        assert!(!is_custom_system_prompt(Some("")));
    }

    #[test]
    fn override_is_used_verbatim() {
        assert_eq!(resolve_system_prompt(Some("be terse")), "be terse");
        assert_eq!(resolve_system_prompt(Some("  padded\n")), "  padded\n");
        assert!(is_custom_system_prompt(Some("be terse")));
    }

    #[test]
    fn default_prompt_lists_five_guidelines() {
        assert!(DEFAULT_SYSTEM_PROMPT.starts_with("你是一位知识渊博的百科助手"));
        for n in 1..=5 {
            assert!(DEFAULT_SYSTEM_PROMPT.contains(&format!("\n{n}. ")));
        }
    }
}
