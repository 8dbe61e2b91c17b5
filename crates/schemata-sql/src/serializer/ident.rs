use super::{Formatter, ToSql};

/// A double-quoted identifier. Embedded quotes are doubled.
pub(super) struct Ident<S>(pub(super) S);

/// A single-quoted string literal. Embedded quotes are doubled.
pub(super) struct Literal<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        quote(self.0.as_ref(), '"', f.dst);
    }
}

impl<S: AsRef<str>> ToSql for Literal<S> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        quote(self.0.as_ref(), '\'', f.dst);
    }
}

fn quote(s: &str, quote: char, dst: &mut String) {
    dst.push(quote);
    for ch in s.chars() {
        if ch == quote {
            dst.push(quote);
        }
        dst.push(ch);
    }
    dst.push(quote);
}
