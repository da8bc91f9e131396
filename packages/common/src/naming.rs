/// Case conversions shared by the generators. Input names come from JSON
/// definitions, so every function tolerates mixed camelCase, kebab-case,
/// snake_case and spaces.

/// "user-card" / "user_card" / "user card" -> "UserCard"
pub fn pascal_case(name: &str) -> String {
    name.split(|c: char| c == '-' || c == '_' || c == ' ')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

/// "user-card" -> "userCard"
pub fn camel_case(name: &str) -> String {
    let pascal = pascal_case(name);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// "UserCard" / "userCard" -> "user-card"
pub fn kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                out.push('-');
            }
            out.extend(c.to_lowercase());
        } else if c == '_' || c == ' ' {
            out.push('-');
        } else {
            out.push(c);
        }
    }
    out
}

/// Event name -> handler name: "click" -> "handleClick",
/// "input-change" -> "handleInputChange".
pub fn handler_name(event: &str) -> String {
    format!("handle{}", pascal_case(event))
}

/// camelCase CSS property -> kebab-case: "backgroundColor" -> "background-color".
pub fn css_property(name: &str) -> String {
    kebab_case(name)
}

/// Escape a string for inclusion inside a double-quoted JS/TS/HTML
/// attribute literal.
pub fn escape_double_quoted(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pascal_case() {
        assert_eq!(pascal_case("user-card"), "UserCard");
        assert_eq!(pascal_case("user_card"), "UserCard");
        assert_eq!(pascal_case("button"), "Button");
        assert_eq!(pascal_case("UserCard"), "UserCard");
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(camel_case("user-card"), "userCard");
        assert_eq!(camel_case("Button"), "button");
    }

    #[test]
    fn test_kebab_case() {
        assert_eq!(kebab_case("UserCard"), "user-card");
        assert_eq!(kebab_case("backgroundColor"), "background-color");
        assert_eq!(kebab_case("color"), "color");
    }

    #[test]
    fn test_handler_name() {
        assert_eq!(handler_name("click"), "handleClick");
        assert_eq!(handler_name("input-change"), "handleInputChange");
    }

    #[test]
    fn test_escape_double_quoted() {
        assert_eq!(escape_double_quoted(r#"say "hi""#), r#"say \"hi\""#);
    }
}
