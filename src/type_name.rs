use alloc::string::String;

/// Returns the name of `T` without module paths or generic arguments.
///
/// `core::any::type_name` returns fully qualified names whose exact form is not guaranteed.
/// This shortens every path in it to its last segment and drops generic argument lists, which
/// is stable enough for log messages and error texts. Tuples, arrays, slices, references and
/// pointers keep their shape, with each component shortened the same way.
///
/// ```
/// use platform_bytes::{simple_type_name, ByteArrayBuilder};
///
/// assert_eq!(simple_type_name::<ByteArrayBuilder>(), "ByteArrayBuilder");
/// assert_eq!(simple_type_name::<Vec<u8>>(), "Vec");
/// assert_eq!(simple_type_name::<(u8, String)>(), "(u8, String)");
/// assert_eq!(simple_type_name::<&[Option<u8>]>(), "&[Option]");
/// ```
pub fn simple_type_name<T: ?Sized>() -> String {
    shorten(core::any::type_name::<T>())
}

fn shorten(full: &str) -> String {
    let mut out = String::with_capacity(full.len());
    // Start of the path segment being copied, as an offset into `out`.
    let mut segment = 0;
    let mut generics = 0usize;
    let mut prev = '\0';
    for c in full.chars() {
        match c {
            '<' => generics += 1,
            // `->` in a fn pointer is not a closing bracket.
            '>' if prev != '-' && generics > 0 => generics -= 1,
            _ if generics > 0 => {}
            ':' => out.truncate(segment),
            c if c.is_alphanumeric() || c == '_' => out.push(c),
            c => {
                out.push(c);
                segment = out.len();
            }
        }
        prev = c;
    }
    out
}
