/// Common interface of the closed enumerations in this crate ([`Os`](crate::Os),
/// [`Arch`](crate::Arch), [`Runtime`](crate::Runtime), [`BuildVariant`](crate::BuildVariant)
/// and [`Endian`](crate::Endian)).
pub trait EnumLike: Copy + Eq + 'static {
    /// Every value, in declaration order.
    const VALUES: &'static [Self];

    /// Lower-case name of this value.
    fn name(self) -> &'static str;

    /// Finds the value whose [`name`](EnumLike::name) matches `name`, ignoring ASCII case and
    /// surrounding whitespace.
    fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::VALUES
            .iter()
            .copied()
            .find(|value| value.name().eq_ignore_ascii_case(name))
    }
}

/// Implements [`EnumLike`], `Display` and `FromStr` for a fieldless enum.
macro_rules! enum_like {
    ($ty:ident { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $crate::EnumLike for $ty {
            const VALUES: &'static [Self] = &[$($ty::$variant),+];

            fn name(self) -> &'static str {
                match self {
                    $($ty::$variant => $name),+
                }
            }
        }

        impl core::fmt::Display for $ty {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str($crate::EnumLike::name(*self))
            }
        }

        impl core::str::FromStr for $ty {
            type Err = $crate::Error;

            fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
                <Self as $crate::EnumLike>::from_name(s).ok_or_else(|| {
                    $crate::Error::with_message(
                        $crate::ErrorKind::InvalidArgument,
                        alloc::format!("unknown {} name: {:?}", stringify!($ty), s),
                    )
                })
            }
        }
    };
}

pub(crate) use enum_like;
