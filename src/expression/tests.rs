use crate::expression::{LexError, ParseError, Token, Value, evaluate, tokenize};

#[test]
fn test_precedence_and_associativity() {
    assert_eq!(evaluate("3+4+5"), Ok(Value::Exact(12)));
    assert_eq!(evaluate("3-4+5"), Ok(Value::Exact(4)));
    assert_eq!(evaluate("5*8"), Ok(Value::Exact(40)));
    assert_eq!(evaluate("3+8/2"), Ok(Value::Exact(7)));
    assert_eq!(evaluate("9*998/9"), Ok(Value::Exact(998)));
}

#[test]
fn test_parenthesized_grouping() {
    assert_eq!(evaluate("(3+5)*2"), Ok(Value::Exact(16)));
    assert_eq!(evaluate("2*(3+5)"), Ok(Value::Exact(16)));
    assert_eq!(evaluate("(12)"), Ok(Value::Exact(12)));
}

#[test]
fn test_exact_vs_approximate_division() {
    assert_eq!(evaluate("8/2"), Ok(Value::Exact(4)));
    assert_eq!(evaluate("7/2"), Ok(Value::Approx(3.5)));
    // Exact division survives a negative computed divisor
    assert_eq!(evaluate("8/(2-4)"), Ok(Value::Exact(-4)));
    // The approximate branch is what the solver's tolerance absorbs
    let value = evaluate("10/3").expect("valid expression");
    assert!(matches!(value, Value::Approx(_)));
    assert!(value.approx_eq(10.0 / 3.0, 1e-9));
}

#[test]
fn test_division_by_zero() {
    assert_eq!(evaluate("5/0"), Err(ParseError::DivisionByZero));
    assert_eq!(evaluate("5/(3-3)"), Err(ParseError::DivisionByZero));
}

#[test]
fn test_malformed_expressions_fail() {
    assert!(evaluate("83-3(/38").is_err());
    assert!(evaluate("(99()*98").is_err());
    assert!(evaluate("(9))*898").is_err());
}

#[test]
fn test_unbalanced_parens_rejected_before_parse() {
    assert_eq!(evaluate("(3+4"), Err(ParseError::UnbalancedParens));
    assert_eq!(evaluate("3+4)"), Err(ParseError::UnbalancedParens));
}

#[test]
fn test_balanced_but_malformed() {
    assert_eq!(evaluate("3++4"), Err(ParseError::ExpectedFactor));
    assert_eq!(evaluate(")3("), Err(ParseError::ExpectedFactor));
    assert_eq!(evaluate(""), Err(ParseError::ExpectedFactor));
    assert_eq!(evaluate("(3)4"), Err(ParseError::TrailingTokens));
    assert_eq!(evaluate("9 9"), Err(ParseError::TrailingTokens));
}

#[test]
fn test_lexer_skips_whitespace() {
    assert_eq!(
        tokenize("1 3 45"),
        Ok(vec![Token::Number(1), Token::Number(3), Token::Number(45)])
    );
    assert_eq!(
        tokenize("1 +- )3 4"),
        Ok(vec![
            Token::Number(1),
            Token::Plus,
            Token::Minus,
            Token::RParen,
            Token::Number(3),
            Token::Number(4),
        ])
    );
}

#[test]
fn test_lexer_rejects_leading_zero() {
    assert_eq!(tokenize("05"), Err(LexError::LeadingZero(0)));
    assert_eq!(tokenize("1+023"), Err(LexError::LeadingZero(2)));
    // A lone zero is fine
    assert_eq!(tokenize("0"), Ok(vec![Token::Number(0)]));
    assert_eq!(evaluate("10+5"), Ok(Value::Exact(15)));
}

#[test]
fn test_lexer_rejects_oversized_literals() {
    assert_eq!(
        tokenize("99999999999999999999"),
        Err(LexError::NumberTooLarge(0))
    );
    assert_eq!(
        tokenize("1+99999999999999999999"),
        Err(LexError::NumberTooLarge(2))
    );
    // the largest representable literal still lexes
    assert_eq!(
        tokenize("9223372036854775807"),
        Ok(vec![Token::Number(i64::MAX)])
    );
}

#[test]
fn test_overflowing_arithmetic_degrades_to_approximate() {
    let product = evaluate("999999999999*999999999999").expect("valid expression");
    assert!(matches!(product, Value::Approx(_)));
    assert!(product.approx_eq(999_999_999_999.0_f64 * 999_999_999_999.0_f64, 1.0));

    let difference =
        evaluate("0-9223372036854775807-9223372036854775807").expect("valid expression");
    assert!(matches!(difference, Value::Approx(_)));
}

#[test]
fn test_lexer_rejects_unknown_characters() {
    assert_eq!(
        tokenize("12a3"),
        Err(LexError::UnrecognizedCharacter('a', 2))
    );
    assert!(matches!(
        evaluate("1%2"),
        Err(ParseError::Lex(LexError::UnrecognizedCharacter('%', 1)))
    ));
}
