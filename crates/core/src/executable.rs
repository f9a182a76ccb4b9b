//! 命令可执行字符串的拆分与拼接
//!
//! 在线转换和离线迁移共用 [`split`]，两者对同一字符串必须得到完全相同的参数序列。

/// 按连续空白拆分，丢弃空片段，保持从左到右的顺序
pub fn split(executable: &str) -> Vec<String> {
    executable.split_whitespace().map(str::to_string).collect()
}

/// 用单个空格拼接参数
///
/// `join(&split(s))` 只在 `s` 本身以单个空格分隔且首尾无空白时等于 `s`。
pub fn join<S: AsRef<str>>(args: &[S]) -> String {
    args.iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(" ")
}

/// 按空白拆分作业参数字符串，单引号或双引号内的内容作为一个参数，引号本身被去掉
///
/// 未闭合的引号一直延续到字符串末尾。
pub fn split_arguments(args: &str) -> Vec<String> {
    let mut arguments = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote: Option<char> = None;

    for ch in args.chars() {
        match quote {
            Some(open) if ch == open => quote = None,
            Some(_) => current.push(ch),
            None if ch == '"' || ch == '\'' => {
                quote = Some(ch);
                in_token = true;
            }
            None if ch.is_whitespace() => {
                if in_token {
                    arguments.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            None => {
                current.push(ch);
                in_token = true;
            }
        }
    }
    if in_token {
        arguments.push(current);
    }
    arguments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_collapses_whitespace() {
        assert_eq!(
            split("/bin/sh  -c  'run'"),
            vec!["/bin/sh", "-c", "'run'"]
        );
        assert_eq!(split("\tspark-submit \n --master\tyarn  "), vec!["spark-submit", "--master", "yarn"]);
        assert!(split("").is_empty());
        assert!(split("   \t ").is_empty());
    }

    #[test]
    fn test_join_single_space() {
        assert_eq!(join(&["/bin/sh", "-c", "'run'"]), "/bin/sh -c 'run'");
        assert_eq!(join::<&str>(&[]), "");
    }

    #[test]
    fn test_join_normalizes_irregular_input() {
        let s = "  hadoop   fs  -ls ";
        assert_ne!(join(&split(s)), s);
        assert_eq!(join(&split(s)), "hadoop fs -ls");
    }

    #[test]
    fn test_split_arguments_respects_quotes() {
        assert_eq!(
            split_arguments(r#"-e "select * from t" --conf 'a b'"#),
            vec!["-e", "select * from t", "--conf", "a b"]
        );
        assert_eq!(split_arguments(r#"say "it's""#), vec!["say", "it's"]);
        assert_eq!(split_arguments(r#"--name="x y""#), vec!["--name=x y"]);
        assert_eq!(split_arguments("a ''"), vec!["a", ""]);
        assert!(split_arguments("   ").is_empty());
    }

    #[test]
    fn test_split_arguments_unterminated_quote() {
        assert_eq!(split_arguments("a 'b c"), vec!["a", "b c"]);
    }
}

#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use super::*;

    /// 参数之间和首尾混入空格、制表符和换行
    fn arb_messy_executable() -> impl Strategy<Value = String> {
        (
            prop::collection::vec(("[ \t\n]{0,4}", "\\S{1,10}"), 0..8),
            "[ \t\n]{0,4}",
        )
            .prop_map(|(parts, tail)| {
                let mut executable = String::new();
                for (gap, token) in parts {
                    executable.push_str(&gap);
                    // 相邻参数之间至少有一个空白
                    if gap.is_empty() && !executable.is_empty() {
                        executable.push_str("  ");
                    }
                    executable.push_str(&token);
                }
                executable.push_str(&tail);
                executable
            })
    }

    proptest! {
        #[test]
        fn split_is_stable_under_join(s in arb_messy_executable()) {
            let once = split(&s);
            prop_assert_eq!(split(&join(&once)), once);
        }

        #[test]
        fn split_of_arbitrary_text_is_stable_under_join(s in "\\PC{0,40}") {
            let once = split(&s);
            prop_assert_eq!(split(&join(&once)), once);
        }

        #[test]
        fn split_yields_non_empty_tokens_without_whitespace(s in arb_messy_executable()) {
            for token in split(&s) {
                prop_assert!(!token.is_empty());
                prop_assert!(!token.chars().any(char::is_whitespace));
            }
        }

        #[test]
        fn join_inverts_split_for_single_spaced_input(
            tokens in prop::collection::vec("\\S{1,10}", 0..8),
        ) {
            let normalized = tokens.join(" ");
            prop_assert_eq!(split(&normalized), tokens.clone());
            prop_assert_eq!(join(&split(&normalized)), normalized);
        }
    }
}
