//! Builtin operator precedence table. Lower precedence binds tighter.

use specgen_core::record::OperatorKind;

pub struct OperatorSpec {
    pub name: &'static str,
    pub precedence: u32,
    pub left_to_right: bool,
    pub kind: OperatorKind,
}

const fn op(name: &'static str, precedence: u32, left_to_right: bool, kind: OperatorKind) -> OperatorSpec {
    OperatorSpec {
        name,
        precedence,
        left_to_right,
        kind,
    }
}

use OperatorKind::{Infix, Postfix, Prefix};

pub const OPERATORS: &[OperatorSpec] = &[
    // Postfix / primary
    op("()", 1, true, Postfix), // function call
    op("[]", 1, true, Postfix), // indexing
    op(".", 1, true, Infix),    // member/swizzle
    op("++", 1, true, Postfix),
    op("--", 1, true, Postfix),
    // Prefix / unary
    op("++", 2, false, Prefix),
    op("--", 2, false, Prefix),
    op("+", 2, false, Prefix), // unary plus
    op("-", 2, false, Prefix), // unary minus
    op("!", 2, false, Prefix), // logical NOT
    op("~", 2, false, Prefix), // bitwise NOT
    op("(type)", 2, false, Prefix), // cast
    // Multiplicative
    op("*", 3, true, Infix),
    op("/", 3, true, Infix),
    op("%", 3, true, Infix),
    // Additive
    op("+", 4, true, Infix),
    op("-", 4, true, Infix),
    // Shift
    op("<<", 5, true, Infix),
    op(">>", 5, true, Infix),
    // Relational
    op("<", 6, true, Infix),
    op("<=", 6, true, Infix),
    op(">", 6, true, Infix),
    op(">=", 6, true, Infix),
    // Equality
    op("==", 7, true, Infix),
    op("!=", 7, true, Infix),
    // Bitwise
    op("&", 8, true, Infix),
    op("^", 9, true, Infix),
    op("|", 10, true, Infix),
    // Logical
    op("&&", 11, true, Infix),
    op("||", 12, true, Infix),
    // Ternary conditional
    op("?", 13, false, Infix),
    op(":", 13, false, Infix),
    // Assignment
    op("=", 14, false, Infix),
    op("+=", 14, false, Infix),
    op("-=", 14, false, Infix),
    op("*=", 14, false, Infix),
    op("/=", 14, false, Infix),
    op("%=", 14, false, Infix),
    op("<<=", 14, false, Infix),
    op(">>=", 14, false, Infix),
    op("&=", 14, false, Infix),
    op("^=", 14, false, Infix),
    op("|=", 14, false, Infix),
    // Comma
    op(",", 15, true, Infix),
];
