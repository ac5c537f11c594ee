use crate::objects::sphere::Sphere;
use std::io::{self, Write};

pub const DEFAULT_ARRAY_NAME: &str = "initialScene";

/// Writes `spheres` as a `static const Sphere <name>[] = { ... };` initializer list,
/// one comma-terminated entry per line. Returns the number of entries written.
pub fn write_scene(
    out: &mut impl Write,
    name: &str,
    spheres: impl IntoIterator<Item = Sphere>,
) -> io::Result<usize> {
    writeln!(out, "static const Sphere {}[] = {{", name)?;

    let mut count = 0;
    for sphere in spheres {
        writeln!(out, "  {},", sphere)?;
        count += 1;
    }

    writeln!(out, "}};")?;
    Ok(count)
}
