//! Enumerations the charting library encodes as integers.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

macro_rules! int_encoded_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident { $($variant:ident = $value:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            #[must_use]
            pub const fn code(self) -> u8 {
                match self {
                    $(Self::$variant => $value),+
                }
            }

            #[must_use]
            pub const fn from_code(code: u8) -> Option<Self> {
                match code {
                    $($value => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_u8(self.code())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let code = u8::deserialize(deserializer)?;
                Self::from_code(code).ok_or_else(|| {
                    serde::de::Error::custom(format!(
                        concat!("unknown ", stringify!($name), " code {}"),
                        code
                    ))
                })
            }
        }
    };
}

int_encoded_enum! {
    pub enum LineStyle {
        Solid = 0,
        Dotted = 1,
        Dashed = 2,
        LargeDashed = 3,
        SparseDotted = 4,
    }
}

int_encoded_enum! {
    pub enum LineType {
        Simple = 0,
        WithSteps = 1,
        Curved = 2,
    }
}

int_encoded_enum! {
    pub enum CrosshairMode {
        Normal = 0,
        Magnet = 1,
        Hidden = 2,
    }
}

int_encoded_enum! {
    pub enum PriceScaleMode {
        Normal = 0,
        Logarithmic = 1,
        Percentage = 2,
        IndexedTo100 = 3,
    }
}
