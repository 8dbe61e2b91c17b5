use super::{Formatter, ToSql};

/// Period delimited
pub(super) struct Period<L>(pub(super) L);

impl<L, I> ToSql for Period<L>
where
    L: IntoIterator<Item = I>,
    I: ToSql,
{
    fn to_sql(self, f: &mut Formatter<'_>) {
        let mut s = "";
        for i in self.0.into_iter() {
            fmt!(f, s i);
            s = ".";
        }
    }
}
