use super::{Arg, Class, Flag, Formatter, ToScript};
use crate::stmt::AddField;

impl ToScript for &AddField {
    fn to_script(self, f: &mut Formatter<'_>) {
        let ty = self.ty.kind.as_str();
        let c = &self.clauses;

        fmt!(
            f,
            "field ",
            ty,
            Arg("type", self.ty.java_type),
            " --fieldName ",
            &self.name,
            " --class ",
            Class(&self.class),
        );
        fmt!(
            f,
            Flag("unique", c.unique),
            Flag("notNull", c.not_null),
            Flag("nullRequired", c.null_required),
            Arg("regexp", c.regexp.as_ref()),
            Arg("sizeMin", c.size_min),
            Arg("sizeMax", c.size_max),
            Arg("min", c.min),
            Arg("max", c.max),
            Arg("decimalMin", c.decimal_min.as_ref()),
            Arg("decimalMax", c.decimal_max.as_ref()),
            Flag("transient", c.transient),
            Arg("value", c.value.as_ref()),
            Flag("lob", c.lob),
        );
    }
}
