//! Checks a front-end runs before it lets a key press change the expression.

const OPERATORS: [char; 4] = ['+', '-', '*', '/'];

/// Whether `character` may appear in an expression at all.
pub fn is_valid_input(character: char) -> bool {
    character.is_ascii_digit() || "+-*/().".contains(character)
}

/// Whether `expression` is worth handing to the evaluator: not blank, only valid characters,
/// and not a lone operator.
pub fn is_valid_expression(expression: &str) -> bool {
    let trimmed = expression.trim();
    if trimmed.is_empty() {
        return false;
    }
    if !expression
        .chars()
        .filter(|c| !c.is_whitespace())
        .all(is_valid_input)
    {
        return false;
    }

    let mut characters = trimmed.chars();
    !matches!(
        (characters.next(), characters.next()),
        (Some(only), None) if OPERATORS.contains(&only)
    )
}

/// An operator may not follow another operator, a decimal point or an open parenthesis,
/// and may not start an expression.
pub fn can_add_operator(expression: &str, _operator: char) -> bool {
    match expression.trim().chars().last() {
        None => false,
        Some(last) => !(OPERATORS.contains(&last) || last == '.' || last == '('),
    }
}

/// Whether the number currently being typed can still take a decimal point.
pub fn can_add_decimal(expression: &str) -> bool {
    let current_number = expression
        .trim()
        .rsplit(|c: char| OPERATORS.contains(&c) || c == '(' || c == ')')
        .next()
        .unwrap_or_default();
    !current_number.contains('.')
}

/// An open parenthesis can always be added, a closing one only if there is one left to close.
pub fn can_add_parenthesis(expression: &str, parenthesis: char) -> bool {
    if parenthesis == '(' {
        return true;
    }
    let open = expression.matches('(').count();
    let close = expression.matches(')').count();
    open > close
}

/// Every closing parenthesis has a matching open one before it, and none are left open.
pub fn has_balanced_parentheses(expression: &str) -> bool {
    let mut depth: i64 = 0;
    for character in expression.chars() {
        match character {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth < 0 {
                    return false;
                }
            }
            _ => {}
        }
    }
    depth == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized_macro::parameterized;

    #[test]
    fn valid_inputs_are_digits_operators_parentheses_and_point() {
        for character in "0123456789+-*/().".chars() {
            assert!(is_valid_input(character), "{} should be valid", character);
        }
        for character in "a^=% ".chars() {
            assert!(!is_valid_input(character), "{} should be invalid", character);
        }
    }

    #[parameterized(
    expression = {
    "2 + 3", "(1.5 * 2)", "", "   ", "2 ^ 3", "+", " - ", "--",
    },
    expected = {
    true, true, false, false, false, false, false, true,
    }
    )]
    fn is_valid_expression_cases(expression: &str, expected: bool) {
        assert_eq!(is_valid_expression(expression), expected);
    }

    #[parameterized(
    expression = {
    "", "  ", "12", "12 + ", "12.", "(", "(3)",
    },
    expected = {
    false, false, true, false, false, false, true,
    }
    )]
    fn can_add_operator_cases(expression: &str, expected: bool) {
        assert_eq!(can_add_operator(expression, '+'), expected);
    }

    #[parameterized(
    expression = {
    "", "12", "12.5", "12.5 + 3", "12.5 + 3.1", "(1.5)",
    },
    expected = {
    true, true, false, true, false, true,
    }
    )]
    fn can_add_decimal_cases(expression: &str, expected: bool) {
        assert_eq!(can_add_decimal(expression), expected);
    }

    #[test]
    fn open_parenthesis_can_always_be_added() {
        assert!(can_add_parenthesis("", '('));
        assert!(can_add_parenthesis("(()", '('));
    }

    #[test]
    fn closing_parenthesis_needs_an_open_one() {
        assert!(!can_add_parenthesis("", ')'));
        assert!(can_add_parenthesis("(1 + 2", ')'));
        assert!(!can_add_parenthesis("(1 + 2)", ')'));
    }

    #[parameterized(
    expression = {
    "", "(1 + 2)", "((1) * (2))", "(1 + 2", ")1 + 2(", "(1))(",
    },
    expected = {
    true, true, true, false, false, false,
    }
    )]
    fn has_balanced_parentheses_cases(expression: &str, expected: bool) {
        assert_eq!(has_balanced_parentheses(expression), expected);
    }
}
